//! Stripe configuration for administrators

use crate::actor::AdminActor;
use crate::error::AdminError;
use crate::models::StripeConfiguration;
use crate::session::Session;
use tracing::info;

pub const DEFAULT_COUNTRIES: &str = "US,CA,GB";

/// Raw form input from the Stripe setup screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripeConfigForm {
    pub secret_key: String,
    /// Comma-separated country codes
    pub allowed_countries: String,
}

impl Default for StripeConfigForm {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            allowed_countries: DEFAULT_COUNTRIES.to_string(),
        }
    }
}

impl StripeConfigForm {
    pub fn validate(&self) -> Result<StripeConfiguration, AdminError> {
        let secret_key = self.secret_key.trim();
        if !secret_key.starts_with("sk_") {
            return Err(AdminError::InvalidSecretKey);
        }

        let allowed_countries = parse_countries(&self.allowed_countries);
        if allowed_countries.is_empty() {
            return Err(AdminError::NoCountries);
        }

        Ok(StripeConfiguration {
            secret_key: secret_key.to_string(),
            allowed_countries,
        })
    }
}

/// Two-letter codes only, uppercased; everything else is dropped
pub fn parse_countries(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|code| code.trim().to_ascii_uppercase())
        .filter(|code| code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()))
        .collect()
}

/// Validate and store the Stripe configuration. Non-admin sessions are
/// refused before anything is sent.
pub async fn save_stripe_configuration<A: AdminActor>(
    actor: &A,
    session: &Session,
    form: &StripeConfigForm,
) -> Result<StripeConfiguration, AdminError> {
    if !session.is_admin {
        return Err(AdminError::NotAdmin);
    }

    let config = form.validate()?;
    actor.set_stripe_configuration(&config).await?;

    info!(countries = config.allowed_countries.len(), "Saved Stripe configuration");
    Ok(config)
}

/// Whether payments are configured, for the admin dashboard badge
pub async fn payment_setup_status<A: AdminActor>(
    actor: &A,
    session: &Session,
) -> Result<bool, AdminError> {
    if !session.is_admin {
        return Err(AdminError::NotAdmin);
    }
    Ok(actor.is_stripe_configured().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_countries() {
        assert_eq!(
            parse_countries(" us, ca ,GBR,,g1,de"),
            vec!["US".to_string(), "CA".to_string(), "DE".to_string()]
        );
        assert!(parse_countries("").is_empty());
    }

    #[test]
    fn test_form_validation() {
        let form = StripeConfigForm {
            secret_key: "pk_live_123".into(),
            ..StripeConfigForm::default()
        };
        assert!(matches!(form.validate(), Err(AdminError::InvalidSecretKey)));

        let form = StripeConfigForm {
            secret_key: "sk_test_123".into(),
            allowed_countries: "USA, 12".into(),
        };
        assert!(matches!(form.validate(), Err(AdminError::NoCountries)));

        let form = StripeConfigForm {
            secret_key: "sk_test_123".into(),
            ..StripeConfigForm::default()
        };
        let config = form.validate().unwrap();
        assert_eq!(config.allowed_countries, vec!["US", "CA", "GB"]);
    }
}
