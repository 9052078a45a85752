//! Actor contract
//!
//! The backend is an opaque RPC actor. Its surface is split by concern so
//! each screen (and each test double) only depends on what it calls:
//!
//! - [`GenerationActor`]: content generation and tier checks
//! - [`BillingActor`]: subscription lookup and Stripe checkout
//! - [`AccountActor`]: caller profile, admin flag, request history
//! - [`AdminActor`]: payment provider configuration
//!
//! [`ActorClient`] implements all four on top of any [`ActorTransport`]
//! (reqwest natively, gloo-net in the browser).

#![allow(async_fn_in_trait)]

use crate::error::ActorError;
use crate::models::{
    ContentGenerationRequest, FeatureSet, StripeConfiguration, StripeSessionStatus, TierLevel,
    UserProfile, UserSubscription,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::fmt;

/// Actor methods, by wire name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorMethod {
    GenerateHooks,
    GenerateScripts,
    GenerateCaptions,
    GenerateCalendar,
    CheckUserTier,
    AddContentRequest,
    GetContentRequests,
    GetMySubscription,
    CreateStripeCheckoutSession,
    GetStripeSessionStatus,
    GetCallerUserProfile,
    SaveCallerUserProfile,
    IsCallerAdmin,
    IsStripeConfigured,
    SetStripeConfiguration,
}

impl ActorMethod {
    pub const ALL: [ActorMethod; 15] = [
        ActorMethod::GenerateHooks,
        ActorMethod::GenerateScripts,
        ActorMethod::GenerateCaptions,
        ActorMethod::GenerateCalendar,
        ActorMethod::CheckUserTier,
        ActorMethod::AddContentRequest,
        ActorMethod::GetContentRequests,
        ActorMethod::GetMySubscription,
        ActorMethod::CreateStripeCheckoutSession,
        ActorMethod::GetStripeSessionStatus,
        ActorMethod::GetCallerUserProfile,
        ActorMethod::SaveCallerUserProfile,
        ActorMethod::IsCallerAdmin,
        ActorMethod::IsStripeConfigured,
        ActorMethod::SetStripeConfiguration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActorMethod::GenerateHooks => "generateHooks",
            ActorMethod::GenerateScripts => "generateScripts",
            ActorMethod::GenerateCaptions => "generateCaptions",
            ActorMethod::GenerateCalendar => "generateCalendar",
            ActorMethod::CheckUserTier => "checkUserTier",
            ActorMethod::AddContentRequest => "addContentRequest",
            ActorMethod::GetContentRequests => "getContentRequests",
            ActorMethod::GetMySubscription => "getMySubscription",
            ActorMethod::CreateStripeCheckoutSession => "createStripeCheckoutSession",
            ActorMethod::GetStripeSessionStatus => "getStripeSessionStatus",
            ActorMethod::GetCallerUserProfile => "getCallerUserProfile",
            ActorMethod::SaveCallerUserProfile => "saveCallerUserProfile",
            ActorMethod::IsCallerAdmin => "isCallerAdmin",
            ActorMethod::IsStripeConfigured => "isStripeConfigured",
            ActorMethod::SetStripeConfiguration => "setStripeConfiguration",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        ActorMethod::ALL.into_iter().find(|m| m.as_str() == name)
    }
}

impl fmt::Display for ActorMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content generation surface
pub trait GenerationActor {
    async fn generate_hooks(
        &self,
        request: &ContentGenerationRequest,
    ) -> Result<Vec<String>, ActorError>;

    async fn generate_scripts(
        &self,
        request: &ContentGenerationRequest,
    ) -> Result<Vec<String>, ActorError>;

    async fn generate_captions(
        &self,
        request: &ContentGenerationRequest,
    ) -> Result<Vec<String>, ActorError>;

    async fn generate_calendar(
        &self,
        request: &ContentGenerationRequest,
    ) -> Result<String, ActorError>;

    async fn check_user_tier(&self) -> Result<FeatureSet, ActorError>;

    /// Record a submitted request in the caller's history
    async fn add_content_request(&self, request: &ContentGenerationRequest)
        -> Result<(), ActorError>;
}

/// Subscription and checkout surface
pub trait BillingActor {
    async fn get_my_subscription(&self) -> Result<Option<UserSubscription>, ActorError>;

    /// Returns the raw JSON payload of the created session
    async fn create_stripe_checkout_session(
        &self,
        tier: TierLevel,
        success_url: &str,
        cancel_url: &str,
    ) -> Result<String, ActorError>;

    async fn get_stripe_session_status(
        &self,
        session_id: &str,
    ) -> Result<StripeSessionStatus, ActorError>;
}

/// Caller identity surface
pub trait AccountActor {
    async fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, ActorError>;

    async fn save_caller_user_profile(&self, profile: &UserProfile) -> Result<(), ActorError>;

    async fn is_caller_admin(&self) -> Result<bool, ActorError>;

    async fn get_content_requests(&self) -> Result<Vec<ContentGenerationRequest>, ActorError>;
}

/// Payment provider administration surface
pub trait AdminActor {
    async fn is_stripe_configured(&self) -> Result<bool, ActorError>;

    async fn set_stripe_configuration(
        &self,
        config: &StripeConfiguration,
    ) -> Result<(), ActorError>;
}

/// Moves one JSON call to the actor and back
pub trait ActorTransport {
    /// `args` is the call envelope built by [`call_envelope`]
    async fn call(&self, method: ActorMethod, args: Value) -> Result<Value, ActorError>;
}

/// Wrap positional arguments the way the actor endpoint expects them
pub fn call_envelope(args: Vec<Value>) -> Value {
    json!({ "args": args })
}

/// Decode an HTTP response from the actor endpoint.
///
/// Shared by every transport so error classification is identical natively
/// and in the browser.
pub fn decode_response(status: u16, body: &str) -> Result<Value, ActorError> {
    if !(200..300).contains(&status) {
        return Err(ActorError::from_response(status, body));
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(body).map_err(|e| ActorError::decode(format!("Invalid JSON: {}", e)))
}

/// Typed actor client over a transport
#[derive(Debug, Clone)]
pub struct ActorClient<T> {
    transport: T,
}

impl<T: ActorTransport> ActorClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn invoke<R: DeserializeOwned>(
        &self,
        method: ActorMethod,
        args: Vec<Value>,
    ) -> Result<R, ActorError> {
        let value = self.transport.call(method, call_envelope(args)).await?;
        serde_json::from_value(value)
            .map_err(|e| ActorError::decode(format!("{} returned unexpected data: {}", method, e)))
    }

    async fn invoke_unit(&self, method: ActorMethod, args: Vec<Value>) -> Result<(), ActorError> {
        self.transport
            .call(method, call_envelope(args))
            .await
            .map(|_| ())
    }
}

fn to_arg<S: serde::Serialize>(value: &S) -> Value {
    // Model types serialize infallibly
    serde_json::to_value(value).unwrap_or(Value::Null)
}

impl<T: ActorTransport> GenerationActor for ActorClient<T> {
    async fn generate_hooks(
        &self,
        request: &ContentGenerationRequest,
    ) -> Result<Vec<String>, ActorError> {
        self.invoke(ActorMethod::GenerateHooks, vec![to_arg(request)])
            .await
    }

    async fn generate_scripts(
        &self,
        request: &ContentGenerationRequest,
    ) -> Result<Vec<String>, ActorError> {
        self.invoke(ActorMethod::GenerateScripts, vec![to_arg(request)])
            .await
    }

    async fn generate_captions(
        &self,
        request: &ContentGenerationRequest,
    ) -> Result<Vec<String>, ActorError> {
        self.invoke(ActorMethod::GenerateCaptions, vec![to_arg(request)])
            .await
    }

    async fn generate_calendar(
        &self,
        request: &ContentGenerationRequest,
    ) -> Result<String, ActorError> {
        self.invoke(ActorMethod::GenerateCalendar, vec![to_arg(request)])
            .await
    }

    async fn check_user_tier(&self) -> Result<FeatureSet, ActorError> {
        self.invoke(ActorMethod::CheckUserTier, Vec::new()).await
    }

    async fn add_content_request(
        &self,
        request: &ContentGenerationRequest,
    ) -> Result<(), ActorError> {
        self.invoke_unit(ActorMethod::AddContentRequest, vec![to_arg(request)])
            .await
    }
}

impl<T: ActorTransport> BillingActor for ActorClient<T> {
    async fn get_my_subscription(&self) -> Result<Option<UserSubscription>, ActorError> {
        self.invoke(ActorMethod::GetMySubscription, Vec::new())
            .await
    }

    async fn create_stripe_checkout_session(
        &self,
        tier: TierLevel,
        success_url: &str,
        cancel_url: &str,
    ) -> Result<String, ActorError> {
        self.invoke(
            ActorMethod::CreateStripeCheckoutSession,
            vec![json!(tier.as_str()), json!(success_url), json!(cancel_url)],
        )
        .await
    }

    async fn get_stripe_session_status(
        &self,
        session_id: &str,
    ) -> Result<StripeSessionStatus, ActorError> {
        self.invoke(ActorMethod::GetStripeSessionStatus, vec![json!(session_id)])
            .await
    }
}

impl<T: ActorTransport> AccountActor for ActorClient<T> {
    async fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, ActorError> {
        self.invoke(ActorMethod::GetCallerUserProfile, Vec::new())
            .await
    }

    async fn save_caller_user_profile(&self, profile: &UserProfile) -> Result<(), ActorError> {
        self.invoke_unit(ActorMethod::SaveCallerUserProfile, vec![to_arg(profile)])
            .await
    }

    async fn is_caller_admin(&self) -> Result<bool, ActorError> {
        self.invoke(ActorMethod::IsCallerAdmin, Vec::new()).await
    }

    async fn get_content_requests(&self) -> Result<Vec<ContentGenerationRequest>, ActorError> {
        self.invoke(ActorMethod::GetContentRequests, Vec::new())
            .await
    }
}

impl<T: ActorTransport> AdminActor for ActorClient<T> {
    async fn is_stripe_configured(&self) -> Result<bool, ActorError> {
        self.invoke(ActorMethod::IsStripeConfigured, Vec::new())
            .await
    }

    async fn set_stripe_configuration(
        &self,
        config: &StripeConfiguration,
    ) -> Result<(), ActorError> {
        self.invoke_unit(ActorMethod::SetStripeConfiguration, vec![to_arg(config)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ActorErrorKind;
    use std::sync::Mutex;

    /// Transport replaying one canned response and recording the call
    struct CannedTransport {
        response: Result<Value, ActorError>,
        calls: Mutex<Vec<(ActorMethod, Value)>>,
    }

    impl CannedTransport {
        fn new(response: Result<Value, ActorError>) -> Self {
            Self {
                response,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl ActorTransport for CannedTransport {
        async fn call(&self, method: ActorMethod, args: Value) -> Result<Value, ActorError> {
            self.calls.lock().unwrap().push((method, args));
            self.response.clone()
        }
    }

    #[test]
    fn test_method_names_round_trip() {
        for method in ActorMethod::ALL {
            assert_eq!(ActorMethod::parse(method.as_str()), Some(method));
        }
        assert_eq!(ActorMethod::parse("dropAllTables"), None);
    }

    #[test]
    fn test_decode_response() {
        assert_eq!(decode_response(200, "").unwrap(), Value::Null);
        assert_eq!(decode_response(200, "[\"a\"]").unwrap(), json!(["a"]));
        assert_eq!(
            decode_response(200, "not json").unwrap_err().kind,
            ActorErrorKind::Decode
        );
        assert_eq!(
            decode_response(402, "").unwrap_err().kind,
            ActorErrorKind::TierRequired
        );
    }

    #[tokio::test]
    async fn test_client_sends_request_as_first_argument() {
        let client = ActorClient::new(CannedTransport::new(Ok(json!(["hook one"]))));
        let request = ContentGenerationRequest::new("fitness", "TikTok", "Energetic", "teens", "Entertain");

        let hooks = client.generate_hooks(&request).await.unwrap();
        assert_eq!(hooks, vec!["hook one".to_string()]);

        let calls = client.transport().calls.lock().unwrap();
        assert_eq!(calls[0].0, ActorMethod::GenerateHooks);
        assert_eq!(calls[0].1["args"][0]["niche"], "fitness");
    }

    #[tokio::test]
    async fn test_client_reports_shape_mismatch_as_decode_error() {
        let client = ActorClient::new(CannedTransport::new(Ok(json!({"not": "a list"}))));
        let request = ContentGenerationRequest::default();

        let err = client.generate_scripts(&request).await.unwrap_err();
        assert_eq!(err.kind, ActorErrorKind::Decode);
        assert!(err.message.starts_with("generateScripts"));
    }

    #[tokio::test]
    async fn test_checkout_arguments_and_missing_subscription() {
        let client = ActorClient::new(CannedTransport::new(Ok(Value::Null)));
        assert_eq!(client.get_my_subscription().await.unwrap(), None);

        let client = ActorClient::new(CannedTransport::new(Ok(json!("{}"))));
        client
            .create_stripe_checkout_session(TierLevel::Pro, "https://a/ok", "https://a/cancel")
            .await
            .unwrap();
        let calls = client.transport().calls.lock().unwrap();
        assert_eq!(calls[0].1["args"], json!(["pro", "https://a/ok", "https://a/cancel"]));
    }
}
