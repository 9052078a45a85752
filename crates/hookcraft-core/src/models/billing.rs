//! Stripe checkout and configuration models

use serde::{Deserialize, Serialize};

/// Checkout session parsed from `createStripeCheckoutSession`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// Result of a Stripe session lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StripeSessionStatus {
    Completed {
        #[serde(default)]
        user_principal: Option<String>,
        response: String,
    },
    Failed {
        error: String,
    },
}

/// Admin-provided Stripe settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StripeConfiguration {
    pub secret_key: String,
    pub allowed_countries: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_status_wire_shape() {
        let completed: StripeSessionStatus = serde_json::from_str(
            r#"{"completed":{"userPrincipal":"aaaa-bbbb","response":"ok"}}"#,
        )
        .unwrap();
        assert_eq!(
            completed,
            StripeSessionStatus::Completed {
                user_principal: Some("aaaa-bbbb".to_string()),
                response: "ok".to_string(),
            }
        );

        let failed: StripeSessionStatus =
            serde_json::from_str(r#"{"failed":{"error":"card declined"}}"#).unwrap();
        assert!(matches!(failed, StripeSessionStatus::Failed { .. }));
    }
}
