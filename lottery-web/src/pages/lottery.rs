//! Lottery page
//!
//! Connects to the injected wallet on mount, shows the pot and the entrants,
//! and exposes the two contract actions. Rendering reads [`LotteryContext`]
//! only; all chain traffic goes through [`LotteryController`].

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::Confetti;
use crate::config::LotteryConfig;
use crate::services::ethereum::BrowserProvider;
use crate::services::runtime::BrowserRuntime;
use crate::state::controller::LotteryController;
use crate::state::lottery::{use_lottery_context, LotteryContext};
use crate::utils::format::{enter_label, format_account, format_balance};

#[component]
pub fn LotteryPage() -> impl IntoView {
    let ctx = use_lottery_context();
    let config = LotteryConfig::from_location();
    let entry_fee = config.entry_fee;

    let provider = BrowserProvider::detect().map(Rc::new);
    let controller = LotteryController::new(ctx, provider, Rc::new(BrowserRuntime), config);
    controller.mount();

    let controller = StoredValue::new_local(controller);
    on_cleanup(move || {
        controller.try_with_value(|c| c.unmount());
    });

    show_alerts(ctx);

    let on_enter = move |_| {
        if let Some(c) = controller.try_get_value() {
            leptos::task::spawn_local(async move { c.enter().await });
        }
    };
    let on_pick = move |_| {
        if let Some(c) = controller.try_get_value() {
            leptos::task::spawn_local(async move { c.pick_winner().await });
        }
    };

    view! {
        <div class="container">
            <div class="card">
                <h1 style="color: #ffffff; font-size: 32px; margin-bottom: 12px; font-weight: 700;">
                    "Lottery DApp"
                </h1>

                {move || if ctx.loading.get() {
                    view! {
                        <div class="spinner-wrapper">
                            <div class="spinner"></div>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div>
                            <div class="info">
                                <p>"Contract Balance: " {move || format_balance(&ctx.balance.get())}</p>
                                <p>"Your Wallet: " {move || ctx.account.with(|a| format_account(a))}</p>
                            </div>

                            <button
                                class="btn"
                                disabled=move || ctx.entering.get()
                                on:click=on_enter
                            >
                                {move || if ctx.entering.get() {
                                    "Entering...".to_string()
                                } else {
                                    enter_label(entry_fee)
                                }}
                            </button>

                            <h2 style="color: #ffffff; margin: 24px 0 12px;">"Participants"</h2>
                            <ParticipantList ctx=ctx/>

                            <button
                                class="btn btn-secondary"
                                disabled=move || ctx.picking_winner.get()
                                on:click=on_pick
                            >
                                {move || if ctx.picking_winner.get() {
                                    "Picking Winner..."
                                } else {
                                    "Pick Winner (Owner Only)"
                                }}
                            </button>

                            {move || ctx.winner.get().map(|winner| view! {
                                <div class="success winner-banner">
                                    <p style="text-align: center; font-weight: bold; font-size: 1.2em;">
                                        {format!("🎉 Winner: {} 🎉", winner)}
                                    </p>
                                </div>
                            })}
                        </div>
                    }.into_any()
                }}
            </div>

            {move || ctx.celebrating.get().then(|| view! { <Confetti/> })}
        </div>
    }
}

#[component]
fn ParticipantList(ctx: LotteryContext) -> impl IntoView {
    move || {
        let participants = ctx.participants.get();
        if participants.is_empty() {
            view! { <p class="subtitle">"No participants yet."</p> }.into_any()
        } else {
            view! {
                <ul class="participants">
                    {participants
                        .into_iter()
                        .map(|address| view! { <li class="wallet-address">{address}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            }
            .into_any()
        }
    }
}

/// Surface queued alerts through `window.alert`, oldest first.
fn show_alerts(ctx: LotteryContext) {
    Effect::new(move |_| {
        if ctx.alerts.with(|alerts| alerts.is_empty()) {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        for message in ctx.take_alerts() {
            if let Err(err) = window.alert_with_message(&message) {
                log::error!("[ALERT] window.alert failed: {:?}", err);
            }
        }
    });
}
