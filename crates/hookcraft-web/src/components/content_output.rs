//! Generated content, rendered section by section through the gating rules

use hookcraft_core::gating::{render_sections, ContentItem, SectionBody, SectionView};
use hookcraft_core::models::{FeatureSet, GeneratedContent};
use leptos::prelude::*;

use crate::components::{CopyButton, UpgradePrompt};

#[component]
pub fn ContentOutput(content: GeneratedContent, features: FeatureSet) -> impl IntoView {
    render_sections(&content, &features)
        .into_iter()
        .map(|section_view| view! { <SectionCard section_view /> })
        .collect_view()
}

#[component]
fn SectionCard(section_view: SectionView) -> impl IntoView {
    let section = section_view.section;
    let badge = section_view.badge();

    match section_view.body {
        SectionBody::Locked(prompt) => view! { <UpgradePrompt prompt /> }.into_any(),
        SectionBody::Pending(placeholder) => view! {
            <div class=format!("card section section-{}", section.key())>
                <div class="card-header">
                    <h3 class="card-title">{section.title()}</h3>
                    <p class="card-description">{section.description()}</p>
                </div>
                <p class="section-placeholder">{placeholder}</p>
            </div>
        }
        .into_any(),
        SectionBody::Items(items) => view! {
            <div class=format!("card section section-{}", section.key())>
                <div class="card-header">
                    <h3 class="card-title">{section.title()}</h3>
                    <p class="card-description">{section.description()}</p>
                    {badge.map(|b| view! { <span class="badge">{b}</span> })}
                </div>
                <ul class="section-items">
                    <For
                        each=move || items.clone()
                        key=|item| item.key.clone()
                        children=|item: ContentItem| {
                            view! {
                                <li class="section-item">
                                    <span class="item-position">{format!("#{}", item.position)}</span>
                                    <p class="item-text">{item.text.clone()}</p>
                                    <CopyButton text=item.text />
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        }
        .into_any(),
    }
}
