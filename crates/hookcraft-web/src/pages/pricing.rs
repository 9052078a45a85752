//! Pricing page - plan cards and Stripe checkout redirect

use hookcraft_core::checkout::create_checkout;
use hookcraft_core::models::TierLevel;
use hookcraft_core::plans::{Plan, PLANS};
use hookcraft_core::CheckoutError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::app::use_app;
use crate::components::use_toast;

#[component]
pub fn Pricing() -> impl IntoView {
    let app = use_app();
    let toast = use_toast();
    let pending = RwSignal::new(None::<TierLevel>);

    let select = move |tier: TierLevel| {
        let signed_in = app
            .current_session()
            .map(|s| s.authenticated)
            .unwrap_or(false);
        if !signed_in {
            toast.warning("Please sign in to choose a plan");
            return;
        }
        let origin = match api::origin() {
            Ok(origin) => origin,
            Err(e) => {
                toast.error(e);
                return;
            }
        };

        pending.set(Some(tier));
        spawn_local(async move {
            match create_checkout(&api::client(), tier, &origin).await {
                Ok(session) => {
                    if let Err(e) = api::redirect(&session.url) {
                        toast.error(e);
                    }
                }
                Err(CheckoutError::MissingUrl) => {
                    toast.error("Checkout could not be started. Please try again later.")
                }
                Err(e) => toast.error(format!("Failed to start checkout: {}", e)),
            }
            pending.set(None);
        });
    };

    view! {
        <div class="page pricing-page">
            <div class="page-header centered">
                <span class="badge">"Flexible Pricing"</span>
                <h1 class="page-title">"Choose Your Growth Plan"</h1>
                <p class="page-subtitle">
                    "Start free and upgrade as you scale. All plans include original, copyright-safe content."
                </p>
            </div>

            <div class="plan-grid">
                {PLANS
                    .iter()
                    .map(|plan| {
                        let tier = plan.tier;
                        view! {
                            <PlanCard
                                plan=plan.clone()
                                current=Signal::derive(move || app.current_tier() == Some(tier))
                                busy=Signal::derive(move || pending.get() == Some(tier))
                                on_select=Callback::new(select)
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="pricing-footer">
                <p>"All plans include 100% original content generation with strict copyright compliance."</p>
                <p>"Cancel anytime. No hidden fees."</p>
            </div>
        </div>
    }
}

#[component]
fn PlanCard(
    plan: Plan,
    #[prop(into)] current: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    on_select: Callback<TierLevel>,
) -> impl IntoView {
    let tier = plan.tier;
    let call_to_action = plan.call_to_action;
    let class = if plan.badge.is_some() {
        "card plan-card plan-card-featured"
    } else {
        "card plan-card"
    };

    view! {
        <div class=class>
            {plan.badge.map(|badge| view! { <span class="badge plan-badge">{badge}</span> })}
            <h2 class="plan-name">{plan.name()}</h2>
            <p class="plan-description">{plan.description}</p>
            <p class="plan-price">
                <span class="plan-amount">{format!("${}", plan.price_usd)}</span>
                <span class="plan-period">"/month"</span>
            </p>
            <ul class="plan-lines">
                {plan.included.iter().map(|line| view! { <li class="plan-line">{*line}</li> }).collect_view()}
                {plan
                    .locked
                    .iter()
                    .map(|line| view! { <li class="plan-line plan-line-locked">{*line}</li> })
                    .collect_view()}
            </ul>
            {if tier.is_paid() {
                view! {
                    <button
                        class="btn btn-primary"
                        disabled=move || busy.get() || current.get()
                        on:click=move |_| on_select.run(tier)
                    >
                        {move || {
                            if current.get() {
                                "Current Plan"
                            } else if busy.get() {
                                "Redirecting..."
                            } else {
                                call_to_action
                            }
                        }}
                    </button>
                }
                .into_any()
            } else {
                // Free needs no checkout
                view! { <A href="/dashboard" attr:class="btn btn-outline">{call_to_action}</A> }.into_any()
            }}
        </div>
    }
}
