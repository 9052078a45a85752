//! Stripe return pages

use hookcraft_core::checkout::{confirm_payment, PaymentOutcome};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::api;
use crate::app::use_app;

/// Landing page after checkout. Confirms the session when Stripe passed
/// its id back, then refetches the caller's plan.
#[component]
pub fn PaymentSuccess() -> impl IntoView {
    let app = use_app();
    let query = use_query_map();
    let session_id = query.with_untracked(|q| q.get("session_id").map(|s| s.to_string()));

    let outcome = LocalResource::new(move || {
        let session_id = session_id.clone();
        async move {
            match session_id {
                Some(id) => confirm_payment(&api::client(), &id)
                    .await
                    .map(Some)
                    .map_err(|e| e.to_string()),
                None => Ok(None),
            }
        }
    });

    Effect::new(move |_| {
        if outcome.get().is_some() {
            app.invalidate_billing();
        }
    });

    view! {
        <div class="page payment-page">
            <Suspense fallback=|| view! { <div class="loading">"Confirming your payment..."</div> }>
                {move || {
                    outcome.get().map(|result| match result.as_ref() {
                        Ok(Some(PaymentOutcome::Failed { reason })) => {
                            view! { <FailureCard reason=reason.clone() /> }.into_any()
                        }
                        Ok(_) => view! { <SuccessCard /> }.into_any(),
                        Err(e) => view! {
                            <div class="card payment-card">
                                <h2>"We could not confirm your payment"</h2>
                                <p>{e.clone()}</p>
                                <A href="/subscription" attr:class="btn btn-outline">"Check Subscription"</A>
                            </div>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn SuccessCard() -> impl IntoView {
    view! {
        <div class="card payment-card payment-success">
            <div class="payment-icon">"✓"</div>
            <h2>"Payment Successful!"</h2>
            <p class="card-description">
                "Your subscription has been activated and features are now unlocked"
            </p>
            <p>
                "Thank you for upgrading! You now have immediate access to all the features of your new plan."
            </p>
            <div class="payment-actions">
                <A href="/dashboard" attr:class="btn btn-primary">"Go to Dashboard"</A>
                <A href="/generate" attr:class="btn btn-outline">"Start Creating Content"</A>
            </div>
        </div>
    }
}

#[component]
fn FailureCard(#[prop(optional, into)] reason: Option<String>) -> impl IntoView {
    view! {
        <div class="card payment-card payment-failure">
            <div class="payment-icon">"✕"</div>
            <h2>"Payment Cancelled"</h2>
            <p class="card-description">"Your subscription was not activated"</p>
            {reason.map(|r| view! { <p class="payment-reason">{r}</p> })}
            <p>
                "No charges were made to your account. You can try again or return to pricing to review the plans."
            </p>
            <div class="payment-actions">
                <A href="/pricing" attr:class="btn btn-primary">"View Pricing"</A>
                <A href="/dashboard" attr:class="btn btn-outline">"Return to Dashboard"</A>
            </div>
        </div>
    }
}

#[component]
pub fn PaymentFailure() -> impl IntoView {
    view! {
        <div class="page payment-page">
            <FailureCard />
        </div>
    }
}
