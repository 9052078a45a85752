//! Content generator page: form, plan features, gated output

use hookcraft_core::models::{
    ContentGenerationRequest, FeatureSet, GeneratedContent, RequestField, GOALS, PLATFORMS, TONES,
};
use hookcraft_core::{GenerationError, GenerationOrchestrator, GenerationReport};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use std::sync::Arc;

use crate::api;
use crate::app::{use_app, Lookup};
use crate::components::{use_toast, ContentOutput, EmptyState, ErrorFallback, PlanFeatures};

#[component]
pub fn Generator() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="page generator-page">
            <Suspense fallback=|| view! { <div class="loading">"Loading your account..."</div> }>
                {move || {
                    app.session
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(session) if !session.authenticated => view! {
                                <EmptyState
                                    title="Please log in to generate content"
                                    description="Sign in to create hooks, scripts, and captions for your plan."
                                    action=("/", "Go to Home")
                                />
                            }
                            .into_any(),
                            Ok(_) => view! { <GeneratorWorkspace /> }.into_any(),
                            Err(e) => view! {
                                <ErrorFallback
                                    error=format!("Could not load your account: {}", e)
                                    on_retry=Callback::new(move |_| app.session.refetch())
                                />
                            }
                            .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn GeneratorWorkspace() -> impl IntoView {
    let app = use_app();
    let toast = use_toast();
    let orchestrator = Arc::new(GenerationOrchestrator::new());

    let niche = RwSignal::new(String::new());
    let platform = RwSignal::new(String::new());
    let tone = RwSignal::new(String::new());
    let audience = RwSignal::new(String::new());
    let goal = RwSignal::new(String::new());

    let generating = RwSignal::new(false);
    let report = RwSignal::new(None::<GenerationReport>);
    let inline_error = RwSignal::new(None::<GenerationError>);
    let calendar = RwSignal::new(None::<String>);

    let build_request = move || {
        ContentGenerationRequest::new(
            niche.get_untracked(),
            platform.get_untracked(),
            tone.get_untracked(),
            audience.get_untracked(),
            goal.get_untracked(),
        )
    };

    let generate_orchestrator = Arc::clone(&orchestrator);
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        inline_error.set(None);

        let features = match app.features_lookup_untracked() {
            Lookup::Ready(features) => features,
            Lookup::Loading => {
                toast.warning("Your plan is still loading. Please try again in a moment.");
                return;
            }
            Lookup::Failed(e) => {
                toast.error(format!("Could not check your plan: {}", e));
                return;
            }
        };

        let request = build_request();
        let orchestrator = Arc::clone(&generate_orchestrator);
        generating.set(true);

        spawn_local(async move {
            let outcome = orchestrator
                .generate(&api::client(), &request, &features)
                .await;
            if !finishes_pending(&orchestrator, &outcome) {
                return;
            }
            match outcome {
                Err(err) => inline_error.set(Some(err)),
                Ok(result) => apply_report(result, report, inline_error, calendar),
            }
            generating.set(false);
        });
    };

    let calendar_orchestrator = Arc::clone(&orchestrator);
    let on_calendar = move |_: leptos::ev::MouseEvent| {
        let Lookup::Ready(features) = app.features_lookup_untracked() else {
            return;
        };
        let request = build_request();
        let orchestrator = Arc::clone(&calendar_orchestrator);

        spawn_local(async move {
            match orchestrator
                .generate_calendar(&api::client(), &request, &features)
                .await
            {
                Ok(text) => calendar.set(Some(text)),
                Err(err) if err.is_retryable() => toast.error(err.user_message()),
                Err(err) => inline_error.set(Some(err)),
            }
        });
    };

    // Entitlement rejection means our tier snapshot is stale
    Effect::new(move |_| {
        if inline_error.with(|e| e.as_ref().is_some_and(|e| e.requires_upgrade())) {
            app.invalidate_billing();
        }
    });

    // Transient failures and failed history writes surface as toasts
    Effect::new(move |_| {
        report.with(|current| {
            let Some(current) = current else { return };
            match current.error() {
                Some(err) if err.is_retryable() => toast.error(err.user_message()),
                Some(_) => {}
                None => toast.success("Content generated successfully!"),
            }
            if current.persistence_error().is_some() {
                toast.warning("Content generated, but it could not be saved to your history.");
            }
        });
    });

    view! {
        <div class="generator-workspace">
            <div class="page-header">
                <h1 class="page-title">"Content Generator"</h1>
                <p class="page-subtitle">
                    "Fill in the details and get hooks, scripts, and captions for your next post."
                </p>
            </div>

            <div class="generator-layout">
                <form class="card generator-form" on:submit=on_submit>
                    {move || match app.features_lookup() {
                        Lookup::Failed(e) => Some(view! {
                            <ErrorFallback
                                error=format!("Could not check your plan: {}", e)
                                on_retry=Callback::new(move |_| app.invalidate_billing())
                            />
                        }),
                        _ => None,
                    }}

                    <TextField label="Niche" placeholder="e.g. fitness, personal finance" value=niche />
                    <SelectField label="Platform" options=PLATFORMS value=platform />
                    <SelectField label="Tone" options=TONES value=tone />
                    <TextField label="Target Audience" placeholder="e.g. young adults" value=audience />
                    <SelectField label="Goal" options=GOALS value=goal />

                    {move || inline_error.get().map(|err| view! { <InlineError err /> })}

                    <button class="btn btn-primary" type="submit" disabled=move || generating.get()>
                        {move || if generating.get() { "Generating..." } else { "Generate Content" }}
                    </button>
                </form>

                <aside class="generator-sidebar">
                    {move || app.current_features().map(|features| view! { <PlanFeatures features /> })}
                </aside>
            </div>

            <section class="generator-output">
                {move || {
                    let features = app.current_features().unwrap_or_default();
                    let (content, snapshot) = report.with(|current| match current {
                        Some(r) => (r.content.clone(), r.features.clone()),
                        None => (GeneratedContent::default(), features.clone()),
                    });
                    view! { <ContentOutput content features=snapshot /> }
                }}
            </section>

            <Show when=move || app.current_features().is_some_and(|f: FeatureSet| f.calendar)>
                <section class="card generator-calendar">
                    <h3 class="card-title">"7-Day Content Calendar"</h3>
                    <button class="btn btn-outline" on:click=on_calendar.clone()>"Generate Calendar"</button>
                    {move || calendar.get().map(|text| view! { <pre class="calendar-text">{text}</pre> })}
                </section>
            </Show>
        </div>
    }
}

/// A validation failure or the latest report ends the pending state; a
/// superseded report does not.
fn finishes_pending(
    orchestrator: &GenerationOrchestrator,
    outcome: &Result<GenerationReport, GenerationError>,
) -> bool {
    match outcome {
        Err(_) => true,
        Ok(report) => orchestrator.is_current(report.token),
    }
}

fn apply_report(
    result: GenerationReport,
    report: RwSignal<Option<GenerationReport>>,
    inline_error: RwSignal<Option<GenerationError>>,
    calendar: RwSignal<Option<String>>,
) {
    if let Some(err) = result.error().filter(|e| e.requires_upgrade()) {
        inline_error.set(Some(err));
    }
    calendar.set(None);
    report.set(Some(result));
}

#[component]
fn InlineError(err: GenerationError) -> impl IntoView {
    let missing = match &err {
        GenerationError::Validation { missing } => missing
            .iter()
            .map(RequestField::label)
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    };
    let upgrade = err.requires_upgrade();

    view! {
        <div class="inline-error" role="alert">
            <p>{err.user_message()}</p>
            {(!missing.is_empty())
                .then(|| view! { <p class="inline-error-detail">"Missing: " {missing}</p> })}
            {upgrade.then(|| view! { <A href="/pricing" attr:class="btn btn-primary">"Upgrade Plan"</A> })}
        </div>
    }
}

#[component]
fn TextField(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
fn SelectField(
    label: &'static str,
    options: &'static [&'static str],
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">"Select..."</option>
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookcraft_core::actor::GenerationActor;
    use hookcraft_core::models::TierLevel;
    use hookcraft_core::ActorError;

    struct EchoActor;

    impl GenerationActor for EchoActor {
        async fn generate_hooks(
            &self,
            request: &ContentGenerationRequest,
        ) -> Result<Vec<String>, ActorError> {
            Ok(vec![format!("Stop scrolling, {} fans", request.niche)])
        }

        async fn generate_scripts(
            &self,
            _request: &ContentGenerationRequest,
        ) -> Result<Vec<String>, ActorError> {
            Ok(Vec::new())
        }

        async fn generate_captions(
            &self,
            _request: &ContentGenerationRequest,
        ) -> Result<Vec<String>, ActorError> {
            Ok(Vec::new())
        }

        async fn generate_calendar(
            &self,
            _request: &ContentGenerationRequest,
        ) -> Result<String, ActorError> {
            Ok(String::new())
        }

        async fn check_user_tier(&self) -> Result<FeatureSet, ActorError> {
            Ok(TierLevel::Free.features())
        }

        async fn add_content_request(
            &self,
            _request: &ContentGenerationRequest,
        ) -> Result<(), ActorError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_superseded_generation_keeps_pending_state() {
        let orchestrator = GenerationOrchestrator::new();
        let features = TierLevel::Free.features();
        let request = ContentGenerationRequest::new(
            "fitness",
            "TikTok",
            "Energetic",
            "young adults",
            "Grow Audience",
        );

        let first = orchestrator.generate(&EchoActor, &request, &features).await;
        let second = orchestrator.generate(&EchoActor, &request, &features).await;

        assert!(!finishes_pending(&orchestrator, &first));
        assert!(finishes_pending(&orchestrator, &second));
    }

    #[test]
    fn test_validation_failure_ends_pending_state() {
        let orchestrator = GenerationOrchestrator::new();
        let outcome = Err(GenerationError::Validation {
            missing: vec![RequestField::Niche],
        });
        assert!(finishes_pending(&orchestrator, &outcome));
    }
}
