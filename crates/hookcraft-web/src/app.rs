//! Main Leptos App component with SPA router and shared account state

use hookcraft_core::actor::{BillingActor, GenerationActor};
use hookcraft_core::models::{FeatureSet, TierLevel, UserSubscription};
use hookcraft_core::{resolve_session, Session};
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::api;
use crate::components::{EmptyState, Header, ToastProvider};
use crate::pages::{
    Dashboard, Generator, PaymentFailure, PaymentSuccess, Pricing, StripeSetup, Subscription,
};

/// State of an account lookup, as seen by code that needs its value now
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T: Clone> Lookup<T> {
    /// `value` is what a `LocalResource<Result<T, String>>` currently holds
    pub fn from_resource(value: Option<&Result<T, String>>) -> Self {
        match value {
            None => Lookup::Loading,
            Some(Ok(value)) => Lookup::Ready(value.clone()),
            Some(Err(e)) => Lookup::Failed(e.clone()),
        }
    }
}

/// Account state shared by every page.
///
/// The session is resolved once. Subscription and feature set are refetched
/// whenever [`AppContext::invalidate_billing`] is called.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: LocalResource<Result<Session, String>>,
    pub features: LocalResource<Result<FeatureSet, String>>,
    pub subscription: LocalResource<Result<Option<UserSubscription>, String>>,
    billing_version: RwSignal<u32>,
}

impl AppContext {
    fn new() -> Self {
        let billing_version = RwSignal::new(0u32);

        let session = LocalResource::new(move || async move {
            resolve_session(&api::client())
                .await
                .map_err(|e| e.to_string())
        });

        let features = LocalResource::new(move || {
            let _ = billing_version.get();
            async move {
                api::client()
                    .check_user_tier()
                    .await
                    .map_err(|e| e.to_string())
            }
        });

        let subscription = LocalResource::new(move || {
            let _ = billing_version.get();
            async move {
                api::client()
                    .get_my_subscription()
                    .await
                    .map_err(|e| e.to_string())
            }
        });

        Self {
            session,
            features,
            subscription,
            billing_version,
        }
    }

    /// Refetch subscription and feature set
    pub fn invalidate_billing(&self) {
        self.billing_version.update(|v| *v += 1);
    }

    /// Loaded session, `None` while loading or on error
    pub fn current_session(&self) -> Option<Session> {
        self.session
            .get()
            .and_then(|result| result.as_ref().ok().cloned())
    }

    /// Feature set with loading and failure kept apart (tracked)
    pub fn features_lookup(&self) -> Lookup<FeatureSet> {
        Lookup::from_resource(self.features.get().as_deref())
    }

    /// Same as [`AppContext::features_lookup`], for event handlers
    pub fn features_lookup_untracked(&self) -> Lookup<FeatureSet> {
        Lookup::from_resource(self.features.get_untracked().as_deref())
    }

    pub fn current_features(&self) -> Option<FeatureSet> {
        self.features
            .get()
            .and_then(|result| result.as_ref().ok().cloned())
    }

    pub fn current_tier(&self) -> Option<TierLevel> {
        self.subscription.get().and_then(|result| {
            result
                .as_ref()
                .ok()
                .map(|sub| UserSubscription::effective_tier(sub.as_ref()))
        })
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

    view! {
        <ToastProvider>
            <Router>
                <div class="app">
                    <Header />
                    <main class="content">
                        <Routes fallback=|| view! {
                            <EmptyState
                                title="Page not found"
                                description="The page you are looking for does not exist."
                                action=("/", "Back to Dashboard")
                            />
                        }>
                            <Route path=path!("/") view=Dashboard />
                            <Route path=path!("/dashboard") view=Dashboard />
                            <Route path=path!("/generate") view=Generator />
                            <Route path=path!("/pricing") view=Pricing />
                            <Route path=path!("/subscription") view=Subscription />
                            <Route path=path!("/payment-success") view=PaymentSuccess />
                            <Route path=path!("/payment-failure") view=PaymentFailure />
                            <Route path=path!("/stripe-setup") view=StripeSetup />
                        </Routes>
                    </main>
                </div>
            </Router>
        </ToastProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_keeps_failure_apart_from_loading() {
        assert_eq!(Lookup::<FeatureSet>::from_resource(None), Lookup::Loading);

        let failed: Result<FeatureSet, String> = Err("Caller is not signed in".to_string());
        assert_eq!(
            Lookup::from_resource(Some(&failed)),
            Lookup::Failed("Caller is not signed in".to_string())
        );

        let ready: Result<FeatureSet, String> = Ok(TierLevel::Pro.features());
        assert_eq!(
            Lookup::from_resource(Some(&ready)),
            Lookup::Ready(TierLevel::Pro.features())
        );
    }
}
