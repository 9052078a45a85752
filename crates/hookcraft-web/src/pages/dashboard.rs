//! Dashboard page - profile, plan, and recent requests

use hookcraft_core::actor::AccountActor;
use hookcraft_core::admin::payment_setup_status;
use hookcraft_core::models::ContentGenerationRequest;
use hookcraft_core::Session;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::api;
use crate::app::use_app;
use crate::components::{EmptyState, ErrorFallback, ProfileSetup};

const RECENT_LIMIT: usize = 5;

#[component]
pub fn Dashboard() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="page dashboard-page">
            <Suspense fallback=|| view! { <div class="loading">"Loading your account..."</div> }>
                {move || {
                    app.session
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(session) if !session.authenticated => view! {
                                <EmptyState
                                    title="Welcome to hookcraft"
                                    description="Sign in to start generating scroll-stopping content."
                                    action=("/pricing", "View Plans")
                                />
                            }
                            .into_any(),
                            Ok(session) => view! { <AccountOverview session=session.clone() /> }.into_any(),
                            Err(e) => view! {
                                <ErrorFallback
                                    error=format!("Could not load your account: {}", e)
                                    on_retry=Callback::new(move |_| app.session.refetch())
                                />
                            }
                            .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn AccountOverview(session: Session) -> impl IntoView {
    let app = use_app();
    let greeting = format!("Welcome back, {}", session.display_name());
    let needs_profile = session.needs_profile();
    let is_admin = session.is_admin;

    let requests = LocalResource::new(move || async move {
        api::client()
            .get_content_requests()
            .await
            .map_err(|e| e.to_string())
    });

    view! {
        <div class="page-header">
            <h1 class="page-title">{greeting}</h1>
        </div>

        {needs_profile.then(|| view! {
            <ProfileSetup on_saved=Callback::new(move |_| app.session.refetch()) />
        })}

        <div class="dashboard-grid">
            <div class="card plan-card">
                <h3 class="card-title">"Current Plan"</h3>
                <Suspense fallback=|| view! { <span>"Loading..."</span> }>
                    {move || {
                        app.subscription.get().map(|result| match result.as_ref() {
                            Ok(subscription) => {
                                let tier = app.current_tier().unwrap_or_default();
                                let status = subscription
                                    .as_ref()
                                    .map(|s| s.status.label())
                                    .unwrap_or("Active");
                                view! {
                                    <p class="plan-name">{tier.label()}</p>
                                    <p class="plan-status">{status}</p>
                                }
                                .into_any()
                            }
                            Err(e) => view! { <p class="error-state">{e.clone()}</p> }.into_any(),
                        })
                    }}
                </Suspense>
                <A href="/subscription" attr:class="btn btn-outline">"Manage Subscription"</A>
            </div>

            <div class="card quick-start">
                <h3 class="card-title">"Create Content"</h3>
                <p>"Turn a niche and an audience into hooks, scripts, and captions."</p>
                <A href="/generate" attr:class="btn btn-primary">"Open Generator"</A>
            </div>

            {is_admin.then(|| view! { <PaymentSetupCard session=session.clone() /> })}
        </div>

        <section class="card recent-requests">
            <h3 class="card-title">"Recent Requests"</h3>
            <Suspense fallback=|| view! { <span>"Loading history..."</span> }>
                {move || {
                    requests.get().map(|result| match result.as_ref() {
                        Ok(list) if list.is_empty() => view! {
                            <EmptyState
                                title="No requests yet"
                                description="Your generated content requests will show up here."
                                action=("/generate", "Generate your first batch")
                            />
                        }
                        .into_any(),
                        Ok(list) => view! { <RequestList requests=recent(list) /> }.into_any(),
                        Err(e) => view! { <p class="error-state">"Error loading history: " {e.clone()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}

/// Newest first
fn recent(requests: &[ContentGenerationRequest]) -> Vec<ContentGenerationRequest> {
    requests.iter().rev().take(RECENT_LIMIT).cloned().collect()
}

#[component]
fn RequestList(requests: Vec<ContentGenerationRequest>) -> impl IntoView {
    view! {
        <table class="request-table">
            <thead>
                <tr>
                    <th>"Niche"</th>
                    <th>"Platform"</th>
                    <th>"Tone"</th>
                    <th>"Audience"</th>
                    <th>"Goal"</th>
                </tr>
            </thead>
            <tbody>
                {requests
                    .into_iter()
                    .map(|r| view! {
                        <tr>
                            <td>{r.niche}</td>
                            <td>{r.platform}</td>
                            <td>{r.tone}</td>
                            <td>{r.audience}</td>
                            <td>{r.goal}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn PaymentSetupCard(session: Session) -> impl IntoView {
    let status = LocalResource::new(move || {
        let session = session.clone();
        async move {
            payment_setup_status(&api::client(), &session)
                .await
                .map_err(|e| e.to_string())
        }
    });

    view! {
        <div class="card admin-card">
            <h3 class="card-title">"Payments"</h3>
            <Suspense fallback=|| view! { <span>"Checking..."</span> }>
                {move || {
                    status.get().map(|result| match result.as_ref() {
                        Ok(true) => view! { <span class="badge badge-success">"Stripe configured"</span> }.into_any(),
                        Ok(false) => view! { <span class="badge badge-warning">"Stripe not configured"</span> }.into_any(),
                        Err(e) => view! { <span class="error-state">{e.clone()}</span> }.into_any(),
                    })
                }}
            </Suspense>
            <A href="/stripe-setup" attr:class="btn btn-outline">"Payment Settings"</A>
        </div>
    }
}
