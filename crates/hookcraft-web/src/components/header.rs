//! Header with navigation and the caller's plan

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::use_app;

#[component]
pub fn Header() -> impl IntoView {
    let app = use_app();

    let is_admin = move || app.current_session().map(|s| s.is_admin).unwrap_or(false);
    let display_name = move || {
        app.current_session()
            .map(|s| s.display_name().to_string())
            .unwrap_or_default()
    };
    let tier_badge = move || {
        app.current_tier().map(|tier| {
            view! { <span class=format!("tier-badge tier-{}", tier.as_str())>{tier.label()}</span> }
        })
    };

    view! {
        <header class="header">
            <div class="header-content">
                <A href="/" attr:class="logo">"hookcraft"</A>
                <p class="subtitle">"Viral content, tier by tier"</p>
            </div>
            <nav class="nav">
                <A href="/dashboard" attr:class="nav-link">"Dashboard"</A>
                <A href="/generate" attr:class="nav-link">"Generate"</A>
                <A href="/pricing" attr:class="nav-link">"Pricing"</A>
                <A href="/subscription" attr:class="nav-link">"Subscription"</A>
                <Show when=is_admin>
                    <A href="/stripe-setup" attr:class="nav-link">"Payments"</A>
                </Show>
            </nav>
            <div class="header-account">
                <span class="header-name">{display_name}</span>
                {tier_badge}
            </div>
        </header>
    }
}
