//! # Lottery Contract Binder
//!
//! [`LotteryContract`] pairs the deployed contract's address and interface with
//! a provider and the signing account. Binding does not touch the chain: a
//! wrong address or ABI only shows up as errors from later calls.
//!
//! Writes return a [`PendingTransaction`]; confirmation is awaited separately
//! with [`PendingTransaction::wait`], which polls for the receipt and has no
//! timeout.

use std::rc::Rc;

use alloy_primitives::{hex, Address, U256};
use shared::abi::ContractInterface;
use shared::dto::rpc::{CallRequest, TransactionReceipt, TransactionRequest};
use shared::units::to_quantity;

use crate::error::LotteryError;
use crate::services::provider::Eip1193Provider;
use crate::services::runtime::Runtime;

pub struct LotteryContract<P> {
    address: Address,
    interface: ContractInterface,
    provider: Rc<P>,
    signer: String,
}

impl<P: Eip1193Provider> LotteryContract<P> {
    pub fn bind(address: Address, interface: ContractInterface, provider: Rc<P>, signer: String) -> Self {
        Self {
            address,
            interface,
            provider,
            signer,
        }
    }

    /// `getParticipants()`, in entry order.
    pub async fn get_participants(&self) -> Result<Vec<Address>, LotteryError> {
        let function = self.interface.function("getParticipants")?;
        let request = CallRequest {
            to: self.address.to_string(),
            data: hex::encode_prefixed(function.encode_call()?),
        };

        let output = self.provider.call(request).await?;
        Ok(function.decode_addresses(&output)?)
    }

    /// Native-currency balance held by the contract, in wei.
    pub async fn balance(&self) -> Result<U256, LotteryError> {
        self.provider.get_balance(self.address).await
    }

    /// `enter()` paying `value` wei.
    pub async fn enter(&self, value: U256) -> Result<PendingTransaction<P>, LotteryError> {
        self.transact("enter", Some(value)).await
    }

    /// `pickWinner()`; the contract restricts who may call it.
    pub async fn pick_winner(&self) -> Result<PendingTransaction<P>, LotteryError> {
        self.transact("pickWinner", None).await
    }

    async fn transact(&self, name: &str, value: Option<U256>) -> Result<PendingTransaction<P>, LotteryError> {
        let function = self.interface.function(name)?;
        let request = TransactionRequest {
            from: self.signer.clone(),
            to: self.address.to_string(),
            value: value.map(to_quantity),
            data: Some(hex::encode_prefixed(function.encode_call()?)),
        };

        let hash = self.provider.send_transaction(request).await?;
        log::info!("[TX] {} submitted: {}", function.signature(), hash);

        Ok(PendingTransaction {
            hash,
            provider: Rc::clone(&self.provider),
        })
    }
}

/// A broadcast transaction that may not be mined yet.
pub struct PendingTransaction<P> {
    hash: String,
    provider: Rc<P>,
}

impl<P: Eip1193Provider> PendingTransaction<P> {
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Poll every `poll_ms` until the receipt appears. A reverted receipt is an error.
    pub async fn wait<R: Runtime + ?Sized>(
        self,
        runtime: &R,
        poll_ms: u32,
    ) -> Result<TransactionReceipt, LotteryError> {
        loop {
            match self.provider.transaction_receipt(&self.hash).await? {
                Some(receipt) if receipt.succeeded() => {
                    log::info!(
                        "[TX] {} confirmed in block {}",
                        self.hash,
                        receipt.block_number.as_deref().unwrap_or("?")
                    );
                    return Ok(receipt);
                }
                Some(_) => return Err(LotteryError::Reverted(self.hash)),
                None => {
                    log::debug!("[TX] {} pending, next poll in {}ms", self.hash, poll_ms);
                    runtime.sleep(poll_ms).await;
                }
            }
        }
    }
}
