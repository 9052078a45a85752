//! Stripe checkout and payment confirmation

use crate::actor::BillingActor;
use crate::error::CheckoutError;
use crate::models::{CheckoutSession, StripeSessionStatus, TierLevel};
use serde::Deserialize;
use tracing::info;

/// Return URLs handed to Stripe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutUrls {
    pub success: String,
    pub cancel: String,
}

impl CheckoutUrls {
    /// `base` is the public origin of the frontend, e.g. `https://app.example.com`
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            success: format!("{}/payment-success", base),
            cancel: format!("{}/payment-failure", base),
        }
    }
}

/// Lenient shape so a missing url is reported as such, not as a decode error
#[derive(Deserialize)]
struct RawCheckoutSession {
    #[serde(default)]
    id: String,
    #[serde(default)]
    url: Option<String>,
}

/// Parse the JSON payload returned by `createStripeCheckoutSession`
pub fn parse_checkout_session(payload: &str) -> Result<CheckoutSession, CheckoutError> {
    let raw: Option<RawCheckoutSession> = serde_json::from_str(payload)?;
    let raw = raw.ok_or(CheckoutError::MissingUrl)?;

    match raw.url {
        Some(url) if !url.trim().is_empty() => Ok(CheckoutSession { id: raw.id, url }),
        _ => Err(CheckoutError::MissingUrl),
    }
}

/// Open a checkout session for `tier`. The free plan never checks out.
pub async fn create_checkout<A: BillingActor>(
    actor: &A,
    tier: TierLevel,
    base_url: &str,
) -> Result<CheckoutSession, CheckoutError> {
    if !tier.is_paid() {
        return Err(CheckoutError::FreeTier);
    }

    let urls = CheckoutUrls::from_base(base_url);
    let payload = actor
        .create_stripe_checkout_session(tier, &urls.success, &urls.cancel)
        .await?;
    let session = parse_checkout_session(&payload)?;

    info!(tier = %tier, session = %session.id, "Created checkout session");
    Ok(session)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Completed { response: String },
    Failed { reason: String },
}

impl PaymentOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, PaymentOutcome::Completed { .. })
    }
}

impl From<StripeSessionStatus> for PaymentOutcome {
    fn from(status: StripeSessionStatus) -> Self {
        match status {
            StripeSessionStatus::Completed { response, .. } => PaymentOutcome::Completed { response },
            StripeSessionStatus::Failed { error } => PaymentOutcome::Failed { reason: error },
        }
    }
}

/// Look up how a checkout session ended.
///
/// After a completed payment callers must refetch the subscription and the
/// feature set.
pub async fn confirm_payment<A: BillingActor>(
    actor: &A,
    session_id: &str,
) -> Result<PaymentOutcome, CheckoutError> {
    let status = actor.get_stripe_session_status(session_id).await?;
    Ok(status.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_urls_strip_trailing_slash() {
        let urls = CheckoutUrls::from_base("https://hookcraft.app/");
        assert_eq!(urls.success, "https://hookcraft.app/payment-success");
        assert_eq!(urls.cancel, "https://hookcraft.app/payment-failure");
    }

    #[test]
    fn test_parse_checkout_session() {
        let session =
            parse_checkout_session(r#"{"id":"cs_1","url":"https://checkout.stripe.com/c/cs_1"}"#)
                .unwrap();
        assert_eq!(session.id, "cs_1");

        assert!(matches!(
            parse_checkout_session(r#"{"id":"cs_1"}"#),
            Err(CheckoutError::MissingUrl)
        ));
        assert!(matches!(
            parse_checkout_session(r#"{"id":"cs_1","url":""}"#),
            Err(CheckoutError::MissingUrl)
        ));
        assert!(matches!(
            parse_checkout_session("null"),
            Err(CheckoutError::MissingUrl)
        ));
        assert!(matches!(
            parse_checkout_session("<html>"),
            Err(CheckoutError::Decode(_))
        ));
    }
}
