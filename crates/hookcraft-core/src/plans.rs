//! Plan catalogue shown on the pricing page and by `hookcraft plans`

use crate::models::{FeatureSet, TierLevel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub tier: TierLevel,
    pub description: &'static str,
    /// Monthly price in whole dollars
    pub price_usd: u32,
    pub badge: Option<&'static str>,
    pub included: &'static [&'static str],
    /// Shown struck through
    pub locked: &'static [&'static str],
    pub call_to_action: &'static str,
}

impl Plan {
    pub fn name(&self) -> &'static str {
        self.tier.label()
    }

    pub fn price_label(&self) -> String {
        format!("${}/month", self.price_usd)
    }

    pub fn features(&self) -> FeatureSet {
        self.tier.features()
    }
}

pub static PLANS: [Plan; 3] = [
    Plan {
        tier: TierLevel::Free,
        description: "Perfect for testing the waters",
        price_usd: 0,
        badge: None,
        included: &["3 scroll-stopping hooks"],
        locked: &["Full scripts", "Captions & hashtags", "Monetization angles"],
        call_to_action: "Get Started",
    },
    Plan {
        tier: TierLevel::Pro,
        description: "For serious content creators",
        price_usd: 29,
        badge: Some("Most Popular"),
        included: &[
            "5 scroll-stopping hooks",
            "3 original 30-45s scripts",
            "5 engagement captions",
            "5 hashtag clusters",
            "1 monetization angle",
            "Content performance scores",
            "Affiliate suggestions",
        ],
        locked: &[],
        call_to_action: "Upgrade to Pro",
    },
    Plan {
        tier: TierLevel::Elite,
        description: "Maximum growth potential",
        price_usd: 79,
        badge: None,
        included: &[
            "Everything in Pro, plus:",
            "2 monetization angles",
            "7-day content calendar",
            "Niche domination roadmap",
            "Faceless content adaptation",
            "Priority support",
        ],
        locked: &[],
        call_to_action: "Upgrade to Elite",
    },
];

pub fn plan_for(tier: TierLevel) -> &'static Plan {
    match tier {
        TierLevel::Free => &PLANS[0],
        TierLevel::Pro => &PLANS[1],
        TierLevel::Elite => &PLANS[2],
    }
}

/// Plans a subscriber on `current` can move up to
pub fn upgrades_from(current: TierLevel) -> impl Iterator<Item = &'static Plan> {
    PLANS.iter().filter(move |plan| plan.tier > current)
}
