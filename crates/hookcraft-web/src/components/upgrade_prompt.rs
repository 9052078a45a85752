//! Locked-section card pointing at the pricing page

use hookcraft_core::gating::UpgradePrompt as Prompt;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn UpgradePrompt(prompt: Prompt) -> impl IntoView {
    view! {
        <div class="card upgrade-prompt">
            <div class="upgrade-prompt-icon">"🔒"</div>
            <h3 class="upgrade-prompt-title">{prompt.headline()}</h3>
            <p class="upgrade-prompt-detail">{prompt.detail()}</p>
            <p class="upgrade-prompt-cta">{prompt.call_to_action()}</p>
            <A href="/pricing" attr:class="btn btn-primary">"View Pricing"</A>
        </div>
    }
}
