//! # Shared Chain Primitives
//!
//! This library defines the contract between the lottery frontend and the chain:
//! the lottery contract's ABI, the JSON-RPC payloads exchanged with the wallet
//! provider, and the formatting helpers used to display on-chain values.
//!
//! ## Structure
//!
//! - **[`abi`]**: Lottery contract interface description and call codec
//! - **[`dto`]**: JSON-RPC request/response payloads
//!   - **[`dto::rpc`]**: Transactions, calls, receipts and provider errors
//! - **[`units`]**: Wei/ether conversion and JSON-RPC hex quantities
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! DTOs serialize to the JSON shapes expected by EIP-1193 providers:
//! - Field names use **camelCase** (`transactionHash`, `blockNumber`)
//! - Optional fields are omitted when `None`
//! - Quantities are `0x`-prefixed hex strings (see [`units::to_quantity`])
//!
//! ## Usage
//!
//! ```rust
//! use shared::abi::ContractInterface;
//! use shared::units::format_ether;
//! use alloy_primitives::U256;
//!
//! let lottery = ContractInterface::lottery();
//! let call = lottery.function("getParticipants").unwrap().encode_call().unwrap();
//! assert_eq!(call.len(), 4);
//!
//! assert_eq!(format_ether(U256::from(1000u64)), "0.000000000000001");
//! ```

pub mod abi;
pub mod dto;
pub mod units;
pub mod utils;

pub use dto::*;
pub use utils::*;
