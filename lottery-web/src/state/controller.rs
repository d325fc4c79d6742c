//! # Lottery Controller
//!
//! Drives the page: connects the wallet, binds the contract, reads chain state
//! and dispatches the two lottery transactions. All results land in
//! [`LotteryContext`] signals; the page only renders them.
//!
//! ## Flow
//!
//! ```text
//! mount ─▶ connect ─▶ bind contract ─▶ fetch
//!            ▲                          ▲
//!   accountsChanged         enter / pick_winner (after confirmation)
//! ```
//!
//! ## Re-entrancy
//!
//! `enter` and `pick_winner` each check and set their own pending flag before
//! the first suspension point, so a second trigger of the same action while
//! one is in flight returns without submitting. The two flags are
//! independent.
//!
//! ## Celebration window
//!
//! A successful draw announces the winner and raises `celebrating` for
//! `celebration_ms`. The timer task compares its epoch with the current one
//! before lowering the flag, so a newer winner or an unmount cancels it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use alloy_primitives::Address;
use futures::FutureExt;
use leptos::prelude::*;
use shared::abi::ContractInterface;
use shared::units::format_ether;

use crate::config::LotteryConfig;
use crate::error::LotteryError;
use crate::services::contract::LotteryContract;
use crate::services::provider::{AccountsHandler, Eip1193Provider, ProviderEvent};
use crate::services::runtime::Runtime;
use crate::state::lottery::LotteryContext;
use crate::utils::constants::{
    ENTERED_MSG, ENTER_FAILED_MSG, INSTALL_WALLET_MSG, NOT_OWNER_MSG, WINNER_PICKED_MSG,
};

/// Everything bound to one authorized account. Replaced wholesale on account change.
pub struct WalletSession<P> {
    pub provider: Rc<P>,
    pub contract: Rc<LotteryContract<P>>,
    pub account: String,
}

pub struct LotteryController<P, R> {
    ctx: LotteryContext,
    provider: Option<Rc<P>>,
    runtime: Rc<R>,
    config: LotteryConfig,
    interface: ContractInterface,
    session: RefCell<Option<WalletSession<P>>>,
    listener: RefCell<Option<AccountsHandler>>,
    mounted: Cell<bool>,
    /// Fetches started and not yet settled; `loading` is up while non-zero.
    fetches_in_flight: Cell<u32>,
    celebration_epoch: Rc<Cell<u64>>,
    disposed: Rc<Cell<bool>>,
}

impl<P, R> LotteryController<P, R>
where
    P: Eip1193Provider + 'static,
    R: Runtime + 'static,
{
    /// `provider` is `None` when no wallet is installed.
    pub fn new(ctx: LotteryContext, provider: Option<Rc<P>>, runtime: Rc<R>, config: LotteryConfig) -> Rc<Self> {
        Rc::new(Self {
            ctx,
            provider,
            runtime,
            config,
            interface: ContractInterface::lottery(),
            session: RefCell::new(None),
            listener: RefCell::new(None),
            mounted: Cell::new(false),
            fetches_in_flight: Cell::new(0),
            celebration_epoch: Rc::new(Cell::new(0)),
            disposed: Rc::new(Cell::new(false)),
        })
    }

    /// Start connecting and register the single `accountsChanged` listener.
    /// Later calls are no-ops.
    pub fn mount(self: &Rc<Self>) {
        if self.mounted.replace(true) {
            log::debug!("[CONNECT] Already mounted");
            return;
        }
        self.spawn_connect();

        let Some(provider) = &self.provider else {
            return;
        };

        let weak = Rc::downgrade(self);
        let handler: AccountsHandler = Rc::new(move |accounts: Vec<String>| {
            if let Some(this) = weak.upgrade() {
                this.on_accounts_changed(accounts);
            }
        });
        provider.subscribe(ProviderEvent::AccountsChanged, &handler);
        *self.listener.borrow_mut() = Some(handler);
    }

    /// Remove the listener (same handler that was registered), cancel the
    /// celebration timer and drop the session.
    pub fn unmount(&self) {
        self.disposed.set(true);
        self.celebration_epoch.set(self.celebration_epoch.get() + 1);

        let handler = self.listener.borrow_mut().take();
        if let (Some(provider), Some(handler)) = (&self.provider, handler) {
            provider.unsubscribe(ProviderEvent::AccountsChanged, &handler);
        }
        self.session.borrow_mut().take();
        log::info!("[CONNECT] Lottery view torn down");
    }

    pub fn is_connected(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn on_accounts_changed(self: &Rc<Self>, accounts: Vec<String>) {
        if self.disposed.get() {
            return;
        }

        match accounts.into_iter().next() {
            Some(account) => {
                // Old signer is unusable from here, even if reconnecting fails
                log::info!("[CONNECT] Account changed to {}, reconnecting", account);
                self.session.borrow_mut().take();
                self.spawn_connect();
            }
            None => {
                log::warn!("[CONNECT] Wallet exposed no accounts, dropping session");
                self.session.borrow_mut().take();
                self.ctx.account.set(String::new());
            }
        }
    }

    /// Authorize, bind the contract to the first account, then fetch.
    pub async fn connect(&self) {
        let Some(provider) = self.provider.clone() else {
            log::error!("[CONNECT] {}", LotteryError::WalletMissing);
            self.ctx.notify(INSTALL_WALLET_MSG);
            self.ctx.loading.set(false);
            return;
        };

        let session = self.open_session(provider).await;
        if self.disposed.get() {
            return;
        }

        match session {
            Ok(session) => {
                log::info!("[CONNECT] Connected as {}", session.account);
                self.ctx.account.set(session.account.clone());
                *self.session.borrow_mut() = Some(session);
                self.fetch().await;
            }
            Err(err) => {
                log::error!("[CONNECT] Error connecting wallet: {}", err);
                if self.session.borrow().is_none() {
                    self.ctx.account.set(String::new());
                }
                self.ctx.loading.set(false);
            }
        }
    }

    async fn open_session(&self, provider: Rc<P>) -> Result<WalletSession<P>, LotteryError> {
        let accounts = provider.request_accounts().await?;
        let account = accounts.into_iter().next().ok_or(LotteryError::NoAccounts)?;

        let contract = LotteryContract::bind(
            self.config.contract_address,
            self.interface.clone(),
            Rc::clone(&provider),
            account.clone(),
        );

        Ok(WalletSession {
            provider,
            contract: Rc::new(contract),
            account,
        })
    }

    fn contract(&self) -> Option<Rc<LotteryContract<P>>> {
        self.session
            .borrow()
            .as_ref()
            .map(|session| Rc::clone(&session.contract))
    }

    /// Read participants and balance together. Prior state survives a failure.
    pub async fn fetch(&self) {
        let Some(contract) = self.contract() else {
            log::warn!("[FETCH] {}", LotteryError::NotConnected);
            return;
        };

        self.fetches_in_flight.set(self.fetches_in_flight.get() + 1);
        self.ctx.loading.set(true);
        let result = futures::try_join!(contract.get_participants(), contract.balance());

        let remaining = self.fetches_in_flight.get().saturating_sub(1);
        self.fetches_in_flight.set(remaining);
        if self.disposed.get() {
            return;
        }

        match result {
            Ok((participants, balance)) => {
                log::debug!("[FETCH] {} participants, balance {} wei", participants.len(), balance);
                self.ctx.set_snapshot(
                    participants.iter().map(Address::to_string).collect(),
                    format_ether(balance),
                );
            }
            Err(err) => log::error!("[FETCH] Error fetching data: {}", err),
        }
        if remaining == 0 {
            self.ctx.loading.set(false);
        }
    }

    /// Pay the entry fee and wait for confirmation.
    pub async fn enter(self: &Rc<Self>) {
        let Some(contract) = self.contract() else {
            return;
        };
        if self.ctx.entering.get_untracked() {
            log::debug!("[ENTER] Entry already in flight");
            return;
        }

        self.ctx.entering.set(true);
        let result = self.submit_entry(&contract).await;
        if self.disposed.get() {
            return;
        }

        match result {
            Ok(()) => {
                self.ctx.notify(ENTERED_MSG);
                self.spawn_fetch();
            }
            Err(err) => {
                log::error!("[ENTER] Error entering lottery: {}", err);
                self.ctx.notify(ENTER_FAILED_MSG);
            }
        }
        self.ctx.entering.set(false);
    }

    async fn submit_entry(&self, contract: &LotteryContract<P>) -> Result<(), LotteryError> {
        let pending = contract.enter(self.config.entry_fee).await?;
        pending
            .wait(&*self.runtime, self.config.receipt_poll_ms)
            .await?;
        Ok(())
    }

    /// Ask the contract to draw, then announce the last participant.
    pub async fn pick_winner(self: &Rc<Self>) {
        let Some(contract) = self.contract() else {
            return;
        };
        if self.ctx.picking_winner.get_untracked() {
            log::debug!("[PICK] Draw already in flight");
            return;
        }

        self.ctx.picking_winner.set(true);
        let result = self.draw(&contract).await;
        if self.disposed.get() {
            return;
        }

        match result {
            Ok(latest) => {
                match latest.last() {
                    Some(winner) => self.celebrate(winner.to_string()),
                    None => log::info!("[PICK] No participants after draw, nothing to announce"),
                }
                self.spawn_fetch();
            }
            Err(err) => {
                log::error!("[PICK] Error picking winner: {}", err);
                self.ctx.notify(NOT_OWNER_MSG);
            }
        }
        self.ctx.picking_winner.set(false);
    }

    async fn draw(&self, contract: &LotteryContract<P>) -> Result<Vec<Address>, LotteryError> {
        let pending = contract.pick_winner().await?;
        pending
            .wait(&*self.runtime, self.config.receipt_poll_ms)
            .await?;
        self.ctx.notify(WINNER_PICKED_MSG);

        contract.get_participants().await
    }

    fn celebrate(&self, winner: String) {
        let epoch = self.celebration_epoch.get() + 1;
        self.celebration_epoch.set(epoch);

        log::info!("[PICK] Winner: {}", winner);
        self.ctx.winner.set(Some(winner));
        self.ctx.celebrating.set(true);

        let ctx = self.ctx;
        let current = Rc::clone(&self.celebration_epoch);
        let disposed = Rc::clone(&self.disposed);
        let window = self.runtime.sleep(self.config.celebration_ms);
        self.runtime.spawn(
            async move {
                window.await;
                if !disposed.get() && current.get() == epoch {
                    ctx.celebrating.set(false);
                }
            }
            .boxed_local(),
        );
    }

    fn spawn_connect(self: &Rc<Self>) {
        let this = Rc::clone(self);
        self.runtime
            .spawn(async move { this.connect().await }.boxed_local());
    }

    fn spawn_fetch(self: &Rc<Self>) {
        let this = Rc::clone(self);
        self.runtime
            .spawn(async move { this.fetch().await }.boxed_local());
    }
}
