//! Error types for hookcraft-core
//!
//! Every failure that reaches a screen is classified here, so callers branch
//! on typed kinds instead of message text.

use crate::actor::ActorMethod;
use crate::models::RequestField;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ===================
// Actor Errors
// ===================

/// Structured reason an actor call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorErrorKind {
    /// Caller is not signed in or not allowed to call this method
    Unauthorized,
    /// Caller's plan does not include the requested feature
    TierRequired,
    InvalidInput,
    NotFound,
    /// Backend overloaded, paused or temporarily unreachable
    Unavailable,
    Internal,
    /// Request never completed (network, timeout)
    Transport,
    /// Response could not be decoded
    Decode,
}

impl ActorErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorErrorKind::Unauthorized => "unauthorized",
            ActorErrorKind::TierRequired => "tier_required",
            ActorErrorKind::InvalidInput => "invalid_input",
            ActorErrorKind::NotFound => "not_found",
            ActorErrorKind::Unavailable => "unavailable",
            ActorErrorKind::Internal => "internal",
            ActorErrorKind::Transport => "transport",
            ActorErrorKind::Decode => "decode",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "unauthorized" => Some(ActorErrorKind::Unauthorized),
            "tier_required" => Some(ActorErrorKind::TierRequired),
            "invalid_input" => Some(ActorErrorKind::InvalidInput),
            "not_found" => Some(ActorErrorKind::NotFound),
            "unavailable" => Some(ActorErrorKind::Unavailable),
            "internal" => Some(ActorErrorKind::Internal),
            "transport" => Some(ActorErrorKind::Transport),
            "decode" => Some(ActorErrorKind::Decode),
            _ => None,
        }
    }

    /// Kind implied by an HTTP status when the body carries no code
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ActorErrorKind::Unauthorized,
            402 => ActorErrorKind::TierRequired,
            400 | 422 => ActorErrorKind::InvalidInput,
            404 => ActorErrorKind::NotFound,
            429 | 502 | 503 | 504 => ActorErrorKind::Unavailable,
            _ => ActorErrorKind::Internal,
        }
    }

    /// Rejections caused by the caller's plan or identity
    pub fn is_entitlement(&self) -> bool {
        matches!(
            self,
            ActorErrorKind::Unauthorized | ActorErrorKind::TierRequired
        )
    }
}

impl fmt::Display for ActorErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure returned by an actor call
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct ActorError {
    pub kind: ActorErrorKind,
    pub message: String,
}

/// Error body returned by the actor endpoint
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ActorError {
    pub fn new(kind: ActorErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ActorErrorKind::Unauthorized, message)
    }

    pub fn tier_required(message: impl Into<String>) -> Self {
        Self::new(ActorErrorKind::TierRequired, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ActorErrorKind::Unavailable, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ActorErrorKind::Transport, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ActorErrorKind::Decode, message)
    }

    pub fn is_entitlement(&self) -> bool {
        self.kind.is_entitlement()
    }

    /// Build an error from a non-success HTTP response.
    ///
    /// A `code` in the JSON body wins over the status; plain-text bodies are
    /// kept as the message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();

        let kind = parsed
            .as_ref()
            .and_then(|b| b.code.as_deref())
            .and_then(ActorErrorKind::parse)
            .unwrap_or_else(|| ActorErrorKind::from_status(status));

        let message = match parsed.and_then(|b| b.message) {
            Some(message) if !message.is_empty() => message,
            _ if !body.trim().is_empty() && !body.trim_start().starts_with('{') => {
                body.trim().to_string()
            }
            _ => format!("HTTP {}", status),
        };

        Self { kind, message }
    }
}

/// A dispatched call that failed, kept for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFailure {
    pub method: ActorMethod,
    pub error: ActorError,
}

impl fmt::Display for CallFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed ({})", self.method, self.error)
    }
}

// ===================
// Generation Errors
// ===================

/// What went wrong with a generation, as surfaced to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Required fields missing; nothing was sent
    #[error("Missing required fields: {}", field_list(.missing))]
    Validation { missing: Vec<RequestField> },

    /// The backend refused the call for plan or identity reasons
    #[error("{method} rejected by plan check: {message}")]
    Entitlement { method: ActorMethod, message: String },

    /// Any other rejection; safe to resubmit
    #[error("Generation failed: {}", failure_list(.failures))]
    Transient { failures: Vec<CallFailure> },
}

impl GenerationError {
    /// Classify a single failed call
    pub fn from_call(method: ActorMethod, error: ActorError) -> Self {
        if error.is_entitlement() {
            GenerationError::Entitlement {
                method,
                message: error.message,
            }
        } else {
            GenerationError::Transient {
                failures: vec![CallFailure { method, error }],
            }
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationError::Transient { .. })
    }

    /// Whether the UI should show an upgrade prompt instead of a toast
    pub fn requires_upgrade(&self) -> bool {
        matches!(self, GenerationError::Entitlement { .. })
    }

    /// Message shown next to the action that caused the error
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::Validation { .. } => {
                "Please fill in all fields before generating content."
            }
            GenerationError::Entitlement { .. } => {
                "Your current plan does not include this feature. Upgrade to access more content generation tools."
            }
            GenerationError::Transient { .. } => "Failed to generate content. Please try again.",
        }
    }
}

fn field_list(fields: &[RequestField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn failure_list(failures: &[CallFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

// ===================
// Checkout Errors
// ===================

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("The free plan does not need a checkout session")]
    FreeTier,

    #[error("Stripe session missing url")]
    MissingUrl,

    #[error("Failed to decode checkout session: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Actor(#[from] ActorError),
}

// ===================
// Admin Errors
// ===================

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Only administrators can configure payments")]
    NotAdmin,

    #[error("Invalid secret key format. Must start with \"sk_\"")]
    InvalidSecretKey,

    #[error("Please enter at least one valid country code (e.g., US, CA, GB)")]
    NoCountries,

    #[error(transparent)]
    Actor(#[from] ActorError),
}

// ===================
// Config Errors
// ===================

#[cfg(feature = "native")]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {path}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}")]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_in_body_wins_over_status() {
        let err = ActorError::from_response(
            500,
            r#"{"code":"tier_required","message":"Scripts need Pro"}"#,
        );
        assert_eq!(err.kind, ActorErrorKind::TierRequired);
        assert_eq!(err.message, "Scripts need Pro");
        assert!(err.is_entitlement());
    }

    #[test]
    fn test_status_fallback_and_plain_text_body() {
        let err = ActorError::from_response(403, "Unauthorized: only users can generate");
        assert_eq!(err.kind, ActorErrorKind::Unauthorized);
        assert_eq!(err.message, "Unauthorized: only users can generate");

        let err = ActorError::from_response(503, "");
        assert_eq!(err.kind, ActorErrorKind::Unavailable);
        assert_eq!(err.message, "HTTP 503");
        assert!(!err.is_entitlement());
    }

    #[test]
    fn test_unknown_code_falls_back_to_status() {
        let err = ActorError::from_response(402, r#"{"code":"payment_due"}"#);
        assert_eq!(err.kind, ActorErrorKind::TierRequired);
        assert_eq!(err.message, "HTTP 402");
    }

    #[test]
    fn test_entitlement_is_decided_by_kind_not_text() {
        let looks_like_tier = ActorError::new(
            ActorErrorKind::Internal,
            "subscription tier lookup crashed",
        );
        let classified = GenerationError::from_call(ActorMethod::GenerateHooks, looks_like_tier);
        assert!(classified.is_retryable());
        assert!(!classified.requires_upgrade());

        let classified = GenerationError::from_call(
            ActorMethod::GenerateHooks,
            ActorError::unauthorized("nope"),
        );
        assert!(classified.requires_upgrade());
    }

    #[test]
    fn test_validation_message_lists_fields() {
        let err = GenerationError::Validation {
            missing: vec![RequestField::Tone, RequestField::Goal],
        };
        assert_eq!(err.to_string(), "Missing required fields: tone, goal");
        assert_eq!(
            err.user_message(),
            "Please fill in all fields before generating content."
        );
    }
}
