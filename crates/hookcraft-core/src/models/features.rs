//! Subscription tiers and the feature flags they unlock

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Subscription tier, ordered from cheapest to most complete
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TierLevel {
    #[default]
    Free,
    Pro,
    Elite,
}

impl TierLevel {
    pub const ALL: [TierLevel; 3] = [TierLevel::Free, TierLevel::Pro, TierLevel::Elite];

    /// Wire name (`free`, `pro`, `elite`)
    pub fn as_str(&self) -> &'static str {
        match self {
            TierLevel::Free => "free",
            TierLevel::Pro => "pro",
            TierLevel::Elite => "elite",
        }
    }

    /// Display name (`Free`, `Pro`, `Elite`)
    pub fn label(&self) -> &'static str {
        match self {
            TierLevel::Free => "Free",
            TierLevel::Pro => "Pro",
            TierLevel::Elite => "Elite",
        }
    }

    /// Canonical feature set of this tier
    pub fn features(&self) -> FeatureSet {
        let pro = *self >= TierLevel::Pro;
        let elite = *self == TierLevel::Elite;
        FeatureSet {
            hooks: true,
            scripts: pro,
            captions: pro,
            hashtags: pro,
            content_score: pro,
            affiliate_suggestions: pro,
            calendar: elite,
            roadmap: elite,
            faceless_version: elite,
            monetization_angles: match self {
                TierLevel::Free => 0,
                TierLevel::Pro => 1,
                TierLevel::Elite => 2,
            },
        }
    }

    /// Lowest tier whose canonical feature set enables `feature`
    pub fn minimum_for(feature: Feature) -> Option<TierLevel> {
        TierLevel::ALL
            .into_iter()
            .find(|tier| tier.features().is_enabled(feature))
    }

    /// Whether a paid checkout is needed to move to this tier
    pub fn is_paid(&self) -> bool {
        *self != TierLevel::Free
    }
}

impl fmt::Display for TierLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tier '{0}' (expected free, pro or elite)")]
pub struct ParseTierError(pub String);

impl FromStr for TierLevel {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(TierLevel::Free),
            "pro" => Ok(TierLevel::Pro),
            "elite" => Ok(TierLevel::Elite),
            _ => Err(ParseTierError(s.to_string())),
        }
    }
}

/// A boolean entitlement carried by [`FeatureSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Hooks,
    Scripts,
    Captions,
    Hashtags,
    ContentScore,
    Calendar,
    Roadmap,
    AffiliateSuggestions,
    FacelessVersion,
}

impl Feature {
    pub const ALL: [Feature; 9] = [
        Feature::Hooks,
        Feature::Scripts,
        Feature::Captions,
        Feature::Hashtags,
        Feature::ContentScore,
        Feature::Calendar,
        Feature::Roadmap,
        Feature::AffiliateSuggestions,
        Feature::FacelessVersion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Hooks => "Viral Hooks",
            Feature::Scripts => "Full Scripts",
            Feature::Captions => "Captions",
            Feature::Hashtags => "Hashtags",
            Feature::ContentScore => "Content Score",
            Feature::Calendar => "Content Calendar",
            Feature::Roadmap => "Growth Roadmap",
            Feature::AffiliateSuggestions => "Affiliate Suggestions",
            Feature::FacelessVersion => "Faceless Content",
        }
    }
}

/// Feature flags returned by `checkUserTier`.
///
/// Read-only on the client: refetched after subscription changes, never
/// patched locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    #[serde(default)]
    pub hooks: bool,
    #[serde(default)]
    pub scripts: bool,
    #[serde(default)]
    pub captions: bool,
    #[serde(default)]
    pub hashtags: bool,
    #[serde(default)]
    pub content_score: bool,
    #[serde(default)]
    pub calendar: bool,
    #[serde(default)]
    pub roadmap: bool,
    #[serde(default)]
    pub affiliate_suggestions: bool,
    #[serde(default)]
    pub faceless_version: bool,
    #[serde(default)]
    pub monetization_angles: u32,
}

impl FeatureSet {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Hooks => self.hooks,
            Feature::Scripts => self.scripts,
            Feature::Captions => self.captions,
            Feature::Hashtags => self.hashtags,
            Feature::ContentScore => self.content_score,
            Feature::Calendar => self.calendar,
            Feature::Roadmap => self.roadmap,
            Feature::AffiliateSuggestions => self.affiliate_suggestions,
            Feature::FacelessVersion => self.faceless_version,
        }
    }

    /// Every boolean feature with its state, for plan summaries
    pub fn entitlements(&self) -> Vec<Entitlement> {
        Feature::ALL
            .into_iter()
            .map(|feature| Entitlement {
                feature,
                enabled: self.is_enabled(feature),
            })
            .collect()
    }

    /// Number of boolean features enabled
    pub fn enabled_count(&self) -> usize {
        Feature::ALL
            .into_iter()
            .filter(|feature| self.is_enabled(*feature))
            .count()
    }
}

/// One row of a plan-feature summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entitlement {
    pub feature: Feature,
    pub enabled: bool,
}

impl Entitlement {
    pub fn label(&self) -> &'static str {
        self.feature.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_feature_matrix() {
        let free = TierLevel::Free.features();
        assert!(free.hooks);
        assert!(!free.scripts && !free.captions && !free.calendar);
        assert_eq!(free.monetization_angles, 0);

        let pro = TierLevel::Pro.features();
        assert!(pro.scripts && pro.captions && pro.hashtags && pro.content_score);
        assert!(pro.affiliate_suggestions);
        assert!(!pro.calendar && !pro.roadmap && !pro.faceless_version);
        assert_eq!(pro.monetization_angles, 1);

        let elite = TierLevel::Elite.features();
        assert_eq!(elite.enabled_count(), Feature::ALL.len());
        assert_eq!(elite.monetization_angles, 2);
    }

    #[test]
    fn test_minimum_tier_per_feature() {
        assert_eq!(TierLevel::minimum_for(Feature::Hooks), Some(TierLevel::Free));
        assert_eq!(TierLevel::minimum_for(Feature::Scripts), Some(TierLevel::Pro));
        assert_eq!(TierLevel::minimum_for(Feature::Captions), Some(TierLevel::Pro));
        assert_eq!(TierLevel::minimum_for(Feature::Roadmap), Some(TierLevel::Elite));
    }

    #[test]
    fn test_parse_tier() {
        assert_eq!("Elite".parse::<TierLevel>(), Ok(TierLevel::Elite));
        assert_eq!(" pro ".parse::<TierLevel>(), Ok(TierLevel::Pro));
        assert!("platinum".parse::<TierLevel>().is_err());
    }

    #[test]
    fn test_feature_set_wire_names() {
        let json = r#"{
            "hooks": true,
            "scripts": true,
            "captions": false,
            "hashtags": false,
            "contentScore": true,
            "calendar": false,
            "roadmap": false,
            "affiliateSuggestions": true,
            "facelessVersion": false,
            "monetizationAngles": 1
        }"#;
        let features: FeatureSet = serde_json::from_str(json).unwrap();
        assert!(features.content_score);
        assert!(features.affiliate_suggestions);
        assert_eq!(features.monetization_angles, 1);
        assert!(!features.is_enabled(Feature::Captions));
    }

    #[test]
    fn test_entitlements_cover_every_feature() {
        let rows = TierLevel::Pro.features().entitlements();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].label(), "Viral Hooks");
        assert!(rows.iter().any(|r| r.feature == Feature::Calendar && !r.enabled));
    }
}
