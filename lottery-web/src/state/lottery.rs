//! Lottery state management
//!
//! Every field is a projection of remote contract state or a UI flag; nothing
//! here is authoritative.

use leptos::prelude::*;

/// Lottery page context
#[derive(Clone, Copy)]
pub struct LotteryContext {
    /// Active account, empty when not connected
    pub account: RwSignal<String>,
    pub participants: RwSignal<Vec<String>>,
    /// Contract balance in ether
    pub balance: RwSignal<String>,
    pub winner: RwSignal<Option<String>>,
    pub celebrating: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub entering: RwSignal<bool>,
    pub picking_winner: RwSignal<bool>,
    /// Messages waiting to be shown with `window.alert`, oldest first
    pub alerts: RwSignal<Vec<String>>,
}

impl LotteryContext {
    pub fn new() -> Self {
        Self {
            account: RwSignal::new(String::new()),
            participants: RwSignal::new(Vec::new()),
            balance: RwSignal::new("0".to_string()),
            winner: RwSignal::new(None),
            celebrating: RwSignal::new(false),
            loading: RwSignal::new(true),
            entering: RwSignal::new(false),
            picking_winner: RwSignal::new(false),
            alerts: RwSignal::new(Vec::new()),
        }
    }

    /// Replace participants and balance with a fresh read.
    pub fn set_snapshot(&self, participants: Vec<String>, balance: String) {
        self.participants.set(participants);
        self.balance.set(balance);
    }

    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        self.alerts.update(|alerts| alerts.push(message));
    }

    /// Drain queued alerts.
    pub fn take_alerts(&self) -> Vec<String> {
        let mut taken = Vec::new();
        self.alerts.update(|alerts| std::mem::swap(alerts, &mut taken));
        taken
    }
}

impl Default for LotteryContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_lottery_context() -> LotteryContext {
    let context = LotteryContext::new();
    provide_context(context);
    context
}

pub fn use_lottery_context() -> LotteryContext {
    expect_context::<LotteryContext>()
}
