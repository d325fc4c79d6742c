//! # Lottery Error Types
//!
//! A single error type for everything that can fail between the page and the
//! chain. Every failure is terminal for the invocation that produced it; the
//! controller logs it and decides whether the user sees an alert.
//!
//! ## Error Categories
//!
//! - **WalletMissing / NoAccounts / NotConnected**: no usable wallet session
//! - **UserRejected / Rpc**: the provider rejected a request
//! - **Reverted**: a transaction was mined but failed on-chain
//! - **Decode / Abi / Units**: the provider answered with data we cannot read

use shared::abi::AbiError;
use shared::dto::rpc::RpcErrorPayload;
use shared::units::UnitsError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LotteryError {
    /// No injected `window.ethereum` provider.
    #[error("No Ethereum wallet detected")]
    WalletMissing,

    /// The wallet authorized zero accounts.
    #[error("Wallet returned no accounts")]
    NoAccounts,

    /// An action was attempted before a contract handle was bound.
    #[error("Wallet not connected")]
    NotConnected,

    /// EIP-1193 code 4001.
    #[error("Request rejected by user")]
    UserRejected,

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Transaction mined with status `0x0`.
    #[error("Transaction {0} reverted")]
    Reverted(String),

    #[error("Malformed provider response: {0}")]
    Decode(String),

    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error(transparent)]
    Units(#[from] UnitsError),
}

impl LotteryError {
    pub fn from_rpc(code: i64, message: impl Into<String>) -> Self {
        RpcErrorPayload {
            code,
            message: message.into(),
        }
        .into()
    }
}

impl From<RpcErrorPayload> for LotteryError {
    fn from(payload: RpcErrorPayload) -> Self {
        if payload.is_user_rejection() {
            return LotteryError::UserRejected;
        }
        LotteryError::Rpc {
            code: payload.code,
            message: payload.message,
        }
    }
}
