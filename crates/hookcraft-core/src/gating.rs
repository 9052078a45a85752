//! Feature-gated rendering
//!
//! Decides, per output section, whether the caller sees their content, a
//! placeholder, or an upgrade prompt. Pure: everything depends on the
//! content and feature set passed in, so both the Leptos frontend and the
//! CLI render from the same view-model.

use crate::models::{Feature, FeatureSet, GeneratedContent, TierLevel};
use std::fmt;

/// Gated output sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hooks,
    Scripts,
    Captions,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Hooks, Section::Scripts, Section::Captions];

    pub fn feature(&self) -> Feature {
        match self {
            Section::Hooks => Feature::Hooks,
            Section::Scripts => Feature::Scripts,
            Section::Captions => Feature::Captions,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Hooks => "Scroll-Stopping Hooks",
            Section::Scripts => "Original Scripts",
            Section::Captions => "Engagement Captions",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Section::Hooks => "Under 8 seconds spoken - grab attention instantly",
            Section::Scripts => "30-45 second engaging content scripts",
            Section::Captions => "Ready-to-use captions for your posts",
        }
    }

    /// Name used in upgrade prompts
    pub fn upgrade_label(&self) -> &'static str {
        match self {
            Section::Hooks => "Viral Hooks",
            Section::Scripts => "Full Scripts",
            Section::Captions => "Engagement Captions",
        }
    }

    /// Prefix for per-item keys
    pub fn key(&self) -> &'static str {
        match self {
            Section::Hooks => "hook",
            Section::Scripts => "script",
            Section::Captions => "caption",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Section::Hooks => "Your hooks will appear here after generation.",
            Section::Scripts => "Your scripts will appear here after generation.",
            Section::Captions => "Your captions will appear here after generation.",
        }
    }

    fn items<'a>(&self, content: &'a GeneratedContent) -> &'a [String] {
        match self {
            Section::Hooks => &content.hooks,
            Section::Scripts => &content.scripts,
            Section::Captions => &content.captions,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Shown in place of a section the caller is not entitled to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradePrompt {
    pub feature: &'static str,
    pub required_tier: TierLevel,
}

impl UpgradePrompt {
    pub fn for_section(section: Section) -> Self {
        Self {
            feature: section.upgrade_label(),
            required_tier: TierLevel::minimum_for(section.feature()).unwrap_or(TierLevel::Elite),
        }
    }

    pub fn headline(&self) -> String {
        format!("Unlock {}", self.feature)
    }

    pub fn detail(&self) -> String {
        format!(
            "This feature is available on the {} tier",
            self.required_tier.label()
        )
    }

    pub fn call_to_action(&self) -> String {
        format!(
            "Upgrade to access {} and unlock your content's full potential.",
            self.feature.to_lowercase()
        )
    }
}

/// One rendered item with a stable key and the exact text to copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub key: String,
    /// 1-based
    pub position: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Locked(UpgradePrompt),
    /// Entitled but nothing generated yet
    Pending(&'static str),
    Items(Vec<ContentItem>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub section: Section,
    pub body: SectionBody,
}

impl SectionView {
    pub fn is_locked(&self) -> bool {
        matches!(self.body, SectionBody::Locked(_))
    }

    /// Item count badge, only for sections with content
    pub fn badge(&self) -> Option<String> {
        match &self.body {
            SectionBody::Items(items) => Some(match items.len() {
                1 => format!("1 {}", self.section.key()),
                n => format!("{} {}s", n, self.section.key()),
            }),
            _ => None,
        }
    }
}

/// Render one section. A disabled flag always yields the upgrade prompt,
/// whatever `content` holds.
pub fn render_section(section: Section, content: &GeneratedContent, features: &FeatureSet) -> SectionView {
    if !features.is_enabled(section.feature()) {
        return SectionView {
            section,
            body: SectionBody::Locked(UpgradePrompt::for_section(section)),
        };
    }

    let items = section.items(content);
    let body = if items.is_empty() {
        SectionBody::Pending(section.placeholder())
    } else {
        SectionBody::Items(
            items
                .iter()
                .enumerate()
                .map(|(index, text)| ContentItem {
                    key: format!("{}-{}", section.key(), index),
                    position: index + 1,
                    text: text.clone(),
                })
                .collect(),
        )
    };

    SectionView { section, body }
}

pub fn render_sections(content: &GeneratedContent, features: &FeatureSet) -> Vec<SectionView> {
    Section::ALL
        .into_iter()
        .map(|section| render_section(section, content, features))
        .collect()
}
