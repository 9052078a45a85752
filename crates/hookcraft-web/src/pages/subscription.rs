//! Subscription management page

use hookcraft_core::models::UserSubscription;
use hookcraft_core::plans::{plan_for, upgrades_from};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::use_app;
use crate::components::{ErrorFallback, PlanFeatures};

#[component]
pub fn Subscription() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="page subscription-page">
            <div class="page-header centered">
                <h1 class="page-title">"Subscription Management"</h1>
                <p class="page-subtitle">"Manage your plan and billing settings"</p>
            </div>

            <Suspense fallback=|| view! { <div class="loading">"Loading subscription..."</div> }>
                {move || {
                    app.subscription.get().map(|result| match result.as_ref() {
                        Ok(subscription) => view! { <CurrentPlan subscription=subscription.clone() /> }.into_any(),
                        Err(e) => view! {
                            <ErrorFallback
                                error=format!("Could not load your subscription: {}", e)
                                on_retry=Callback::new(move |_| app.invalidate_billing())
                            />
                        }
                        .into_any(),
                    })
                }}
            </Suspense>

            <Suspense fallback=|| ()>
                {move || app.current_features().map(|features| view! { <PlanFeatures features /> })}
            </Suspense>
        </div>
    }
}

#[component]
fn CurrentPlan(subscription: Option<UserSubscription>) -> impl IntoView {
    let tier = UserSubscription::effective_tier(subscription.as_ref());
    let status = subscription
        .as_ref()
        .map(|s| s.status.label())
        .unwrap_or("Active");
    let plan = plan_for(tier);

    view! {
        <div class="card current-plan">
            <div class="card-header">
                <div>
                    <h3 class="card-title">"Current Plan"</h3>
                    <p class="card-description">"Your active subscription tier"</p>
                </div>
                <span class=format!("tier-badge tier-{}", tier.as_str())>{tier.label()}</span>
            </div>
            <div class="plan-facts">
                <div>
                    <p class="fact-label">"Status"</p>
                    <p class="fact-value">{status}</p>
                </div>
                <div>
                    <p class="fact-label">"Price"</p>
                    <p class="fact-value">{plan.price_label()}</p>
                </div>
                <div>
                    <p class="fact-label">"Billing Cycle"</p>
                    <p class="fact-value">"Monthly"</p>
                </div>
            </div>
        </div>

        <div class="upgrade-options">
            {upgrades_from(tier)
                .map(|plan| view! {
                    <div class="card upgrade-option">
                        <h3 class="card-title">{format!("Upgrade to {}", plan.name())}</h3>
                        <p class="card-description">{plan.description}</p>
                        <p class="plan-price">{plan.price_label()}</p>
                    </div>
                })
                .collect_view()}
            {(tier.is_paid() && subscription.as_ref().is_some_and(|s| !s.can_upgrade()))
                .then(|| view! { <p class="hint">"You are on the top plan."</p> })}
            <A href="/pricing" attr:class="btn btn-primary">"View Upgrade Options"</A>
        </div>
    }
}
