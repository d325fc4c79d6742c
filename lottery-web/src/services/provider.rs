//! # Wallet Provider Seam
//!
//! The wallet provider (EIP-1193, `window.ethereum` in the browser) is injected
//! into the controller as a capability instead of being read from a global.
//! [`crate::services::ethereum::BrowserProvider`] is the production
//! implementation; tests substitute an in-memory one.
//!
//! Listener identity matters: `unsubscribe` must be handed the same
//! [`AccountsHandler`] (same `Rc` allocation) that was passed to `subscribe`.

use std::rc::Rc;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use shared::dto::rpc::{CallRequest, TransactionReceipt, TransactionRequest};

use crate::error::LotteryError;

/// Provider events the lottery listens to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderEvent {
    AccountsChanged,
}

impl ProviderEvent {
    /// EIP-1193 event name
    pub fn name(&self) -> &'static str {
        match self {
            ProviderEvent::AccountsChanged => "accountsChanged",
        }
    }
}

/// Callback receiving the new account list (may be empty when the wallet locks).
pub type AccountsHandler = Rc<dyn Fn(Vec<String>)>;

#[async_trait(?Send)]
pub trait Eip1193Provider {
    /// `eth_requestAccounts`: prompts the user when not yet authorized.
    async fn request_accounts(&self) -> Result<Vec<String>, LotteryError>;

    fn subscribe(&self, event: ProviderEvent, handler: &AccountsHandler);

    fn unsubscribe(&self, event: ProviderEvent, handler: &AccountsHandler);

    /// `eth_getBalance` at the latest block, in wei.
    async fn get_balance(&self, address: Address) -> Result<U256, LotteryError>;

    /// `eth_call` at the latest block; returns the raw return data.
    async fn call(&self, request: CallRequest) -> Result<Vec<u8>, LotteryError>;

    /// `eth_sendTransaction`; resolves to the transaction hash once signed and broadcast.
    async fn send_transaction(&self, request: TransactionRequest) -> Result<String, LotteryError>;

    /// `eth_getTransactionReceipt`; `None` while the transaction is pending.
    async fn transaction_receipt(&self, hash: &str) -> Result<Option<TransactionReceipt>, LotteryError>;
}
