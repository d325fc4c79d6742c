//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::truncate_address;

use crate::state::lottery::use_lottery_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_lottery_context();

    let account_badge = move || {
        ctx.account.with(|account| {
            (!account.is_empty()).then(|| {
                view! { <span class="wallet-badge" title=account.clone()>{truncate_address(account)}</span> }
            })
        })
    };

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/">
                    <span class="nav-link-clean nav-title">
                        <span class="xf-red">"Lottery"</span><span class="terminal-white">"DApp"</span>
                    </span>
                </A>
                {account_badge}
            </div>
        </nav>
    }
}
