//! In-memory wallet provider and manual-clock runtime for unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::LocalSpawner;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use futures::FutureExt;
use shared::dto::rpc::{CallRequest, TransactionReceipt, TransactionRequest};

use crate::error::LotteryError;
use crate::services::provider::{AccountsHandler, Eip1193Provider, ProviderEvent};
use crate::services::runtime::Runtime;

pub use futures::executor::block_on;

/// ABI encoding of a single `address[]` return value.
pub fn encode_addresses(addresses: &[Address]) -> Vec<u8> {
    fn word(value: u64) -> [u8; 32] {
        let mut w = [0u8; 32];
        w[24..].copy_from_slice(&value.to_be_bytes());
        w
    }

    let mut data = word(32).to_vec();
    data.extend_from_slice(&word(addresses.len() as u64));
    for address in addresses {
        data.extend_from_slice(&[0u8; 12]);
        data.extend_from_slice(address.as_slice());
    }
    data
}

pub struct MockProvider {
    pub accounts: RefCell<Result<Vec<String>, LotteryError>>,
    pub participants: RefCell<Vec<Address>>,
    pub balance: Cell<U256>,
    pub read_error: RefCell<Option<LotteryError>>,
    pub send_error: RefCell<Option<LotteryError>>,
    pub receipt_status: RefCell<Option<String>>,
    /// Receipt lookups answering "still pending" before the receipt shows up.
    pub pending_polls: Cell<u32>,
    /// Park every `send_transaction` until [`MockProvider::release_sends`].
    pub hold_sends: Cell<bool>,
    gates: RefCell<Vec<oneshot::Sender<()>>>,
    /// Park every `get_balance` until [`MockProvider::release_reads`].
    pub hold_reads: Cell<bool>,
    read_gates: RefCell<Vec<oneshot::Sender<()>>>,

    pub calls: RefCell<Vec<CallRequest>>,
    pub sent: RefCell<Vec<TransactionRequest>>,
    pub balance_queries: Cell<u32>,
    pub account_requests: Cell<u32>,
    pub receipt_polls: Cell<u32>,
    pub subscribed: RefCell<Vec<AccountsHandler>>,
    pub unsubscribed: RefCell<Vec<AccountsHandler>>,
}

impl MockProvider {
    pub fn connected(accounts: &[&str]) -> Self {
        Self {
            accounts: RefCell::new(Ok(accounts.iter().map(|a| a.to_string()).collect())),
            participants: RefCell::new(Vec::new()),
            balance: Cell::new(U256::ZERO),
            read_error: RefCell::new(None),
            send_error: RefCell::new(None),
            receipt_status: RefCell::new(Some("0x1".to_string())),
            pending_polls: Cell::new(0),
            hold_sends: Cell::new(false),
            gates: RefCell::new(Vec::new()),
            hold_reads: Cell::new(false),
            read_gates: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
            sent: RefCell::new(Vec::new()),
            balance_queries: Cell::new(0),
            account_requests: Cell::new(0),
            receipt_polls: Cell::new(0),
            subscribed: RefCell::new(Vec::new()),
            unsubscribed: RefCell::new(Vec::new()),
        }
    }

    pub fn with_participants(self, participants: &[Address]) -> Self {
        *self.participants.borrow_mut() = participants.to_vec();
        self
    }

    pub fn with_balance(self, wei: u128) -> Self {
        self.balance.set(U256::from(wei));
        self
    }

    pub fn release_sends(&self) {
        for gate in self.gates.borrow_mut().drain(..) {
            let _ = gate.send(());
        }
    }

    pub fn release_reads(&self) {
        for gate in self.read_gates.borrow_mut().drain(..) {
            let _ = gate.send(());
        }
    }

    /// Fire `accountsChanged` on every live subscription.
    pub fn emit_accounts_changed(&self, accounts: &[&str]) {
        let handlers: Vec<AccountsHandler> = self.subscribed.borrow().clone();
        for handler in handlers {
            if self.unsubscribed.borrow().iter().any(|h| Rc::ptr_eq(h, &handler)) {
                continue;
            }
            handler(accounts.iter().map(|a| a.to_string()).collect());
        }
    }

    pub fn live_subscriptions(&self) -> usize {
        self.subscribed.borrow().len() - self.unsubscribed.borrow().len()
    }
}

#[async_trait(?Send)]
impl Eip1193Provider for MockProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, LotteryError> {
        self.account_requests.set(self.account_requests.get() + 1);
        self.accounts.borrow().clone()
    }

    fn subscribe(&self, event: ProviderEvent, handler: &AccountsHandler) {
        assert_eq!(event, ProviderEvent::AccountsChanged);
        self.subscribed.borrow_mut().push(Rc::clone(handler));
    }

    fn unsubscribe(&self, event: ProviderEvent, handler: &AccountsHandler) {
        assert_eq!(event, ProviderEvent::AccountsChanged);
        self.unsubscribed.borrow_mut().push(Rc::clone(handler));
    }

    async fn get_balance(&self, _address: Address) -> Result<U256, LotteryError> {
        self.balance_queries.set(self.balance_queries.get() + 1);
        if self.hold_reads.get() {
            let (tx, rx) = oneshot::channel();
            self.read_gates.borrow_mut().push(tx);
            let _ = rx.await;
        }
        if let Some(err) = self.read_error.borrow().clone() {
            return Err(err);
        }
        Ok(self.balance.get())
    }

    async fn call(&self, request: CallRequest) -> Result<Vec<u8>, LotteryError> {
        self.calls.borrow_mut().push(request);
        if let Some(err) = self.read_error.borrow().clone() {
            return Err(err);
        }
        Ok(encode_addresses(&self.participants.borrow()))
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<String, LotteryError> {
        self.sent.borrow_mut().push(request);
        let hash = format!("0xtx{}", self.sent.borrow().len());

        if self.hold_sends.get() {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().push(tx);
            let _ = rx.await;
        }

        match self.send_error.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(hash),
        }
    }

    async fn transaction_receipt(&self, hash: &str) -> Result<Option<TransactionReceipt>, LotteryError> {
        self.receipt_polls.set(self.receipt_polls.get() + 1);
        if self.pending_polls.get() > 0 {
            self.pending_polls.set(self.pending_polls.get() - 1);
            return Ok(None);
        }
        Ok(Some(TransactionReceipt {
            transaction_hash: hash.to_string(),
            block_number: Some("0x1".to_string()),
            status: self.receipt_status.borrow().clone(),
        }))
    }
}

/// Runtime whose clock only moves when the test calls [`TestRuntime::advance`].
pub struct TestRuntime {
    spawner: LocalSpawner,
    now: Cell<u64>,
    timers: RefCell<Vec<(u64, oneshot::Sender<()>)>>,
}

impl TestRuntime {
    pub fn new(spawner: LocalSpawner) -> Self {
        Self {
            spawner,
            now: Cell::new(0),
            timers: RefCell::new(Vec::new()),
        }
    }

    /// Move the clock forward and wake every sleeper whose deadline passed.
    pub fn advance(&self, ms: u64) {
        let now = self.now.get() + ms;
        self.now.set(now);

        let mut timers = self.timers.borrow_mut();
        let (due, pending): (Vec<_>, Vec<_>) = timers.drain(..).partition(|(deadline, _)| *deadline <= now);
        *timers = pending;
        drop(timers);

        for (_, wake) in due {
            let _ = wake.send(());
        }
    }
}

impl Runtime for TestRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawner.spawn_local(task).expect("test executor shut down");
    }

    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel();
        self.timers
            .borrow_mut()
            .push((self.now.get() + u64::from(ms), tx));
        async move {
            let _ = rx.await;
        }
        .boxed_local()
    }
}
