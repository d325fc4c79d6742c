//! # Data Transfer Objects (DTOs)
//!
//! Payloads exchanged with an EIP-1193 wallet provider (`window.ethereum`).
//!
//! ## Module Organization
//!
//! - [`rpc`] - Transactions, read-only calls, receipts and provider errors
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase, as the JSON-RPC API expects
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Quantities**: `0x`-prefixed hex strings
//!
//! ## Example JSON Communication
//!
//! ```text
//! ethereum.request({ method: "eth_sendTransaction", params: [
//!   {
//!     "from": "0x5b38da6a701c568545dcfcb03fcb875f56beddc4",
//!     "to": "0x3cf7d69f4b53cf97410df79810ef1f0b5b388889",
//!     "value": "0x3e8",
//!     "data": "0xe97dcb62"
//!   }
//! ]})
//! ```

pub mod rpc;

pub use rpc::*;
