//! Generation orchestrator
//!
//! Validates a request, fans out to the generation calls the caller is
//! entitled to, waits for every call to settle, and merges whatever came
//! back. Individual failures never cancel the other calls; they are kept in
//! the report's failure list instead.

use crate::actor::{ActorMethod, GenerationActor};
use crate::error::{ActorError, CallFailure, GenerationError};
use crate::models::{ContentGenerationRequest, FeatureSet, GeneratedContent};
use futures::join;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Identifies one generation; later generations get larger tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Which gated calls a feature set allows. Hooks are always dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchPlan {
    pub scripts: bool,
    pub captions: bool,
}

impl DispatchPlan {
    pub fn for_features(features: &FeatureSet) -> Self {
        Self {
            scripts: features.scripts,
            captions: features.captions,
        }
    }

    /// Methods that will be sent, hooks first
    pub fn methods(&self) -> Vec<ActorMethod> {
        let mut methods = vec![ActorMethod::GenerateHooks];
        if self.scripts {
            methods.push(ActorMethod::GenerateScripts);
        }
        if self.captions {
            methods.push(ActorMethod::GenerateCaptions);
        }
        methods
    }
}

/// Settled state of one generation call
enum CallOutcome {
    /// Not entitled, never sent
    Skipped,
    Succeeded(Vec<String>),
    Failed(ActorError),
}

impl From<Result<Vec<String>, ActorError>> for CallOutcome {
    fn from(result: Result<Vec<String>, ActorError>) -> Self {
        match result {
            Ok(items) => CallOutcome::Succeeded(items),
            Err(err) => CallOutcome::Failed(err),
        }
    }
}

/// Whether the submitted request was recorded in the caller's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    Saved,
    /// Nothing succeeded, so nothing was recorded
    Skipped,
    /// Recording failed; the generated content is still valid
    Failed(ActorError),
}

/// Everything one generation produced
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub token: RequestToken,
    pub request: ContentGenerationRequest,
    /// Feature set captured at dispatch time
    pub features: FeatureSet,
    pub content: GeneratedContent,
    pub dispatched: Vec<ActorMethod>,
    pub failures: Vec<CallFailure>,
    pub persistence: Persistence,
}

impl GenerationReport {
    /// Error to surface alongside the (possibly partial) content.
    ///
    /// A hooks rejection for plan reasons means the tier check was stale and
    /// takes precedence; any other failure is transient.
    pub fn error(&self) -> Option<GenerationError> {
        let hooks_entitlement = self.failures.iter().find(|f| {
            f.method == ActorMethod::GenerateHooks && f.error.is_entitlement()
        });

        if let Some(failure) = hooks_entitlement {
            return Some(GenerationError::Entitlement {
                method: failure.method,
                message: failure.error.message.clone(),
            });
        }

        if self.failures.is_empty() {
            None
        } else {
            Some(GenerationError::Transient {
                failures: self.failures.clone(),
            })
        }
    }

    pub fn succeeded_calls(&self) -> usize {
        self.dispatched.len() - self.failures.len()
    }

    /// At least one call succeeded
    pub fn has_results(&self) -> bool {
        self.succeeded_calls() > 0
    }

    pub fn persistence_error(&self) -> Option<&ActorError> {
        match &self.persistence {
            Persistence::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Runs generations and tracks which one is the latest.
///
/// Responses are not cancelled when a newer generation starts; callers use
/// [`GenerationOrchestrator::is_current`] to drop stale reports.
#[derive(Debug, Default)]
pub struct GenerationOrchestrator {
    latest: AtomicU64,
}

impl GenerationOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_token(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// True if no generation started after the one holding `token`
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::Acquire) == token.0
    }

    /// Run one generation.
    ///
    /// Fails only with [`GenerationError::Validation`], before any call is
    /// made. Call failures are reported through [`GenerationReport::error`]
    /// next to the merged content.
    pub async fn generate<A: GenerationActor>(
        &self,
        actor: &A,
        request: &ContentGenerationRequest,
        features: &FeatureSet,
    ) -> Result<GenerationReport, GenerationError> {
        validate(request)?;

        let token = self.next_token();
        let plan = DispatchPlan::for_features(features);
        let dispatched = plan.methods();

        debug!(
            token = token.value(),
            calls = dispatched.len(),
            platform = %request.platform,
            "Dispatching generation"
        );

        let hooks = async { CallOutcome::from(actor.generate_hooks(request).await) };
        let scripts = async {
            if plan.scripts {
                CallOutcome::from(actor.generate_scripts(request).await)
            } else {
                CallOutcome::Skipped
            }
        };
        let captions = async {
            if plan.captions {
                CallOutcome::from(actor.generate_captions(request).await)
            } else {
                CallOutcome::Skipped
            }
        };

        let (hooks, scripts, captions) = join!(hooks, scripts, captions);

        let mut failures = Vec::new();
        let content = GeneratedContent {
            hooks: settle(ActorMethod::GenerateHooks, hooks, &mut failures),
            scripts: settle(ActorMethod::GenerateScripts, scripts, &mut failures),
            captions: settle(ActorMethod::GenerateCaptions, captions, &mut failures),
            calendar: None,
        };

        let persistence = if failures.len() < dispatched.len() {
            match actor.add_content_request(request).await {
                Ok(()) => Persistence::Saved,
                Err(err) => {
                    warn!(token = token.value(), error = %err, "Failed to record content request");
                    Persistence::Failed(err)
                }
            }
        } else {
            Persistence::Skipped
        };

        Ok(GenerationReport {
            token,
            request: request.clone(),
            features: features.clone(),
            content,
            dispatched,
            failures,
            persistence,
        })
    }

    /// Generate a content calendar (Elite).
    ///
    /// Without the `calendar` entitlement this fails locally and sends
    /// nothing.
    pub async fn generate_calendar<A: GenerationActor>(
        &self,
        actor: &A,
        request: &ContentGenerationRequest,
        features: &FeatureSet,
    ) -> Result<String, GenerationError> {
        validate(request)?;

        if !features.calendar {
            return Err(GenerationError::Entitlement {
                method: ActorMethod::GenerateCalendar,
                message: "Content calendar is not included in your plan".to_string(),
            });
        }

        actor.generate_calendar(request).await.map_err(|err| {
            warn!(error = %err, "Calendar generation failed");
            GenerationError::from_call(ActorMethod::GenerateCalendar, err)
        })
    }
}

fn validate(request: &ContentGenerationRequest) -> Result<(), GenerationError> {
    let missing = request.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(GenerationError::Validation { missing })
    }
}

fn settle(method: ActorMethod, outcome: CallOutcome, failures: &mut Vec<CallFailure>) -> Vec<String> {
    match outcome {
        CallOutcome::Skipped => Vec::new(),
        CallOutcome::Succeeded(items) => items,
        CallOutcome::Failed(error) => {
            warn!(method = %method, error = %error, "Generation call failed");
            failures.push(CallFailure { method, error });
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TierLevel;

    #[test]
    fn test_dispatch_plan_per_tier() {
        let free = DispatchPlan::for_features(&TierLevel::Free.features());
        assert_eq!(free.methods(), vec![ActorMethod::GenerateHooks]);
        assert_eq!(free.methods().len(), 1);

        let pro = DispatchPlan::for_features(&TierLevel::Pro.features());
        assert_eq!(
            pro.methods(),
            vec![
                ActorMethod::GenerateHooks,
                ActorMethod::GenerateScripts,
                ActorMethod::GenerateCaptions
            ]
        );
        assert_eq!(pro.methods().len(), 3);

        let scripts_only = DispatchPlan::for_features(&FeatureSet {
            hooks: true,
            scripts: true,
            ..FeatureSet::default()
        });
        assert_eq!(scripts_only.methods().len(), 2);
    }

    #[test]
    fn test_tokens_are_monotonic_and_only_latest_is_current() {
        let orchestrator = GenerationOrchestrator::new();
        let first = orchestrator.next_token();
        let second = orchestrator.next_token();

        assert!(second > first);
        assert!(!orchestrator.is_current(first));
        assert!(orchestrator.is_current(second));
    }

    #[test]
    fn test_report_error_prefers_hooks_entitlement() {
        let report = GenerationReport {
            token: RequestToken(1),
            request: ContentGenerationRequest::default(),
            features: FeatureSet::default(),
            content: GeneratedContent::default(),
            dispatched: vec![ActorMethod::GenerateHooks, ActorMethod::GenerateScripts],
            failures: vec![
                CallFailure {
                    method: ActorMethod::GenerateScripts,
                    error: ActorError::unavailable("busy"),
                },
                CallFailure {
                    method: ActorMethod::GenerateHooks,
                    error: ActorError::tier_required("upgrade"),
                },
            ],
            persistence: Persistence::Skipped,
        };

        assert!(matches!(
            report.error(),
            Some(GenerationError::Entitlement {
                method: ActorMethod::GenerateHooks,
                ..
            })
        ));
        assert!(!report.has_results());
    }

    #[test]
    fn test_report_without_failures_has_no_error() {
        let report = GenerationReport {
            token: RequestToken(3),
            request: ContentGenerationRequest::default(),
            features: FeatureSet::default(),
            content: GeneratedContent::default(),
            dispatched: vec![ActorMethod::GenerateHooks],
            failures: Vec::new(),
            persistence: Persistence::Saved,
        };
        assert!(report.error().is_none());
        assert_eq!(report.succeeded_calls(), 1);
        assert!(report.persistence_error().is_none());
    }
}
