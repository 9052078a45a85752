//! "Your Plan Features" panel

use hookcraft_core::models::FeatureSet;
use leptos::prelude::*;

#[component]
pub fn PlanFeatures(features: FeatureSet) -> impl IntoView {
    let angles = features.monetization_angles;

    view! {
        <div class="card plan-features">
            <h3 class="card-title">"Your Plan Features"</h3>
            <ul class="plan-features-list">
                {features
                    .entitlements()
                    .into_iter()
                    .map(|entitlement| {
                        let class = if entitlement.enabled {
                            "plan-feature plan-feature-on"
                        } else {
                            "plan-feature plan-feature-off"
                        };
                        view! {
                            <li class=class>
                                <span class="plan-feature-mark">
                                    {if entitlement.enabled { "✓" } else { "—" }}
                                </span>
                                {entitlement.label()}
                            </li>
                        }
                    })
                    .collect_view()}
                <li class="plan-feature">
                    <span class="plan-feature-mark">{angles.to_string()}</span>
                    "Monetization angles"
                </li>
            </ul>
        </div>
    }
}
