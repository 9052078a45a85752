//! Data models exchanged with the actor

pub mod billing;
pub mod features;
pub mod request;
pub mod subscription;

pub use billing::{CheckoutSession, StripeConfiguration, StripeSessionStatus};
pub use features::{Entitlement, Feature, FeatureSet, ParseTierError, TierLevel};
pub use request::{ContentGenerationRequest, GeneratedContent, RequestField, GOALS, PLATFORMS, TONES};
pub use subscription::{SubscriptionStatus, UserProfile, UserSubscription};
