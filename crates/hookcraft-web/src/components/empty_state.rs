//! Empty state card

use leptos::prelude::*;
use leptos_router::components::A;

/// Shown when a list has nothing in it yet, or a route does not exist
#[component]
pub fn EmptyState(
    title: &'static str,
    description: &'static str,
    /// Link target and label for the primary action
    #[prop(optional)]
    action: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="48"
                    height="48"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    // lucide-sparkles
                    <path d="M9.94 14.06 4 20"/>
                    <path d="m12 2 1.9 5.8L20 10l-6.1 2.2L12 18l-1.9-5.8L4 10l6.1-2.2z"/>
                </svg>
            </div>
            <h2 class="empty-state-title">{title}</h2>
            <p class="empty-state-description">{description}</p>
            {action.map(|(href, label)| {
                view! {
                    <div class="empty-state-actions">
                        <A href=href attr:class="btn btn-primary">{label}</A>
                    </div>
                }
            })}
        </div>
    }
}
