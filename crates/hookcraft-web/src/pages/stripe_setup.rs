//! Stripe configuration page (administrators only)

use hookcraft_core::admin::{save_stripe_configuration, StripeConfigForm, DEFAULT_COUNTRIES};
use hookcraft_core::{AdminError, Session};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::app::use_app;
use crate::components::{use_toast, EmptyState};

#[component]
pub fn StripeSetup() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="page stripe-setup-page">
            <Suspense fallback=|| view! { <div class="loading">"Checking permissions..."</div> }>
                {move || {
                    app.current_session().map(|session| {
                        if session.is_admin {
                            view! { <StripeForm session /> }.into_any()
                        } else {
                            view! {
                                <EmptyState
                                    title="Access Denied"
                                    description="Only administrators can access Stripe configuration."
                                    action=("/dashboard", "Go to Dashboard")
                                />
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn StripeForm(session: Session) -> impl IntoView {
    let toast = use_toast();
    let secret_key = RwSignal::new(String::new());
    let countries = RwSignal::new(DEFAULT_COUNTRIES.to_string());
    let saving = RwSignal::new(false);
    let session = StoredValue::new(session);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = StripeConfigForm {
            secret_key: secret_key.get_untracked(),
            allowed_countries: countries.get_untracked(),
        };

        // Client-side checks first, so bad input never reaches the actor
        if let Err(e) = form.validate() {
            toast.error(e.to_string());
            return;
        }

        let session = session.get_value();
        saving.set(true);
        spawn_local(async move {
            match save_stripe_configuration(&api::client(), &session, &form).await {
                Ok(_) => {
                    toast.success("Stripe configuration saved successfully!");
                    secret_key.set(String::new());
                }
                Err(AdminError::Actor(e)) => {
                    toast.error(format!("Failed to save configuration: {}", e.message))
                }
                Err(e) => toast.error(e.to_string()),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="page-header">
            <h1 class="page-title">"Stripe Setup"</h1>
            <p class="page-subtitle">"Configure payments for subscription checkout"</p>
        </div>
        <form class="card stripe-form" on:submit=submit>
            <label class="field">
                <span class="field-label">"Stripe Secret Key"</span>
                <input
                    type="password"
                    placeholder="sk_live_..."
                    prop:value=move || secret_key.get()
                    on:input=move |ev| secret_key.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field-label">"Allowed Countries"</span>
                <input
                    type="text"
                    placeholder="US,CA,GB"
                    prop:value=move || countries.get()
                    on:input=move |ev| countries.set(event_target_value(&ev))
                />
                <span class="field-hint">"Comma-separated two-letter country codes"</span>
            </label>
            <button class="btn btn-primary" type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save Configuration" }}
            </button>
        </form>
    }
}
