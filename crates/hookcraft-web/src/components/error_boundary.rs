//! Fallback shown when a resource the page depends on failed to load

use leptos::prelude::*;

/// Error card with a retry action
#[component]
pub fn ErrorFallback(
    #[prop(into)] error: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-boundary">
            <div class="error-boundary-content">
                <div class="error-boundary-icon">"⚠️"</div>
                <h2 class="error-boundary-title">"Something went wrong"</h2>
                <p class="error-boundary-message">{error}</p>
                <button class="btn btn-outline" on:click=move |_| on_retry.run(())>
                    "Try again"
                </button>
            </div>
        </div>
    }
}
