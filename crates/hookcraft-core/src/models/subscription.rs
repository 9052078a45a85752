//! Subscription and account models

use super::features::TierLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Cancelled,
    Pending,
}

impl SubscriptionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Cancelled => "Cancelled",
            SubscriptionStatus::Pending => "Pending",
        }
    }
}

/// The caller's subscription as recorded by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSubscription {
    pub tier: TierLevel,
    pub status: SubscriptionStatus,
}

impl UserSubscription {
    /// Tier of an optional subscription; no subscription means free
    pub fn effective_tier(subscription: Option<&UserSubscription>) -> TierLevel {
        subscription.map(|s| s.tier).unwrap_or_default()
    }

    /// Elite is the top plan, nothing left to upgrade to
    pub fn can_upgrade(&self) -> bool {
        self.tier != TierLevel::Elite
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}
