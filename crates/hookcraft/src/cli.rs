//! Terminal rendering for hookcraft commands
//!
//! Every formatter returns a `String` so commands stay thin and output is
//! testable. `json = true` yields pretty JSON for scripting.

use comfy_table::{Cell, Color, ContentArrangement, Table};
use hookcraft_core::error::GenerationError;
use hookcraft_core::gating::{SectionBody, SectionView};
use hookcraft_core::models::{
    ContentGenerationRequest, Feature, FeatureSet, TierLevel, UserSubscription,
};
use hookcraft_core::orchestrator::{GenerationReport, Persistence};
use hookcraft_core::plans::Plan;
use hookcraft_core::PaymentOutcome;
use serde_json::json;

// ============================================================================
// Generation
// ============================================================================

/// Gated sections of one generation, locked ones rendered as upgrade prompts
pub fn format_sections(views: &[SectionView], no_color: bool) -> String {
    let mut out = Vec::new();

    for view in views {
        let title = match view.badge() {
            Some(badge) => format!("{} ({})", view.section.title(), badge),
            None => view.section.title().to_string(),
        };
        out.push(title);
        out.push("=".repeat(view.section.title().chars().count()));

        match &view.body {
            SectionBody::Locked(prompt) => {
                out.push(format!("🔒 {}", prompt.headline()));
                out.push(format!("   {}", prompt.detail()));
                out.push(format!("   → hookcraft checkout {}", prompt.required_tier));
            }
            SectionBody::Pending(placeholder) => out.push(placeholder.to_string()),
            SectionBody::Items(items) => {
                let mut table = Table::new();
                table.set_content_arrangement(ContentArrangement::Dynamic);
                if no_color {
                    table.set_header(vec!["#", "Content"]);
                } else {
                    table.set_header(vec![
                        Cell::new("#").fg(Color::Cyan),
                        Cell::new("Content").fg(Color::Cyan),
                    ]);
                }
                for item in items {
                    table.add_row(vec![item.position.to_string(), item.text.clone()]);
                }
                out.push(table.to_string());
            }
        }
        out.push(String::new());
    }

    out.join("\n").trim_end().to_string()
}

/// Machine-readable generation result
pub fn format_report_json(report: &GenerationReport, calendar: Option<&str>) -> String {
    let persistence = match &report.persistence {
        Persistence::Saved => json!("saved"),
        Persistence::Skipped => json!("skipped"),
        Persistence::Failed(err) => json!({ "failed": err.to_string() }),
    };
    let error = report.error().map(|e| error_json(&e));

    let mut content = report.content.clone();
    if let Some(calendar) = calendar {
        content.calendar = Some(calendar.to_string());
    }

    let value = json!({
        "request": report.request,
        "features": report.features,
        "content": content,
        "dispatched": report.dispatched.iter().map(|m| m.as_str()).collect::<Vec<_>>(),
        "persistence": persistence,
        "error": error,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

fn error_json(error: &GenerationError) -> serde_json::Value {
    let kind = match error {
        GenerationError::Validation { .. } => "validation",
        GenerationError::Entitlement { .. } => "entitlement",
        GenerationError::Transient { .. } => "transient",
    };
    json!({
        "kind": kind,
        "message": error.user_message(),
        "detail": error.to_string(),
    })
}

// ============================================================================
// Account
// ============================================================================

/// Current tier and its entitlements
pub fn format_tier(
    subscription: Option<&UserSubscription>,
    features: &FeatureSet,
    json: bool,
    no_color: bool,
) -> String {
    let tier = UserSubscription::effective_tier(subscription);

    if json {
        let value = json!({
            "tier": tier,
            "status": subscription.map(|s| s.status.label()),
            "features": features,
        });
        return serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string());
    }

    let mut lines = vec![format!("Plan:    {}", tier.label())];
    if let Some(subscription) = subscription {
        lines.push(format!("Status:  {}", subscription.status.label()));
    }
    lines.push(format!(
        "Unlocked: {} of {} features",
        features.enabled_count(),
        Feature::ALL.len()
    ));
    lines.push(String::new());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if no_color {
        table.set_header(vec!["Feature", "Included"]);
    } else {
        table.set_header(vec![
            Cell::new("Feature").fg(Color::Cyan),
            Cell::new("Included").fg(Color::Cyan),
        ]);
    }

    for entitlement in features.entitlements() {
        let mark = if entitlement.enabled { "✓" } else { "✗" };
        let cell = match (no_color, entitlement.enabled) {
            (true, _) => Cell::new(mark),
            (false, true) => Cell::new(mark).fg(Color::Green),
            (false, false) => Cell::new(mark).fg(Color::DarkGrey),
        };
        table.add_row(vec![Cell::new(entitlement.label()), cell]);
    }
    table.add_row(vec![
        Cell::new("Monetization Angles"),
        Cell::new(features.monetization_angles),
    ]);

    lines.push(table.to_string());
    if tier != TierLevel::Elite {
        lines.push(String::new());
        lines.push("Upgrade with: hookcraft checkout <pro|elite>".to_string());
    }
    lines.join("\n")
}

/// Plan catalogue, `current` highlighted when known
pub fn format_plans(
    plans: &[Plan],
    current: Option<TierLevel>,
    json: bool,
    no_color: bool,
) -> String {
    if json {
        let value: Vec<_> = plans
            .iter()
            .map(|plan| {
                json!({
                    "tier": plan.tier,
                    "name": plan.name(),
                    "priceUsd": plan.price_usd,
                    "description": plan.description,
                    "badge": plan.badge,
                    "included": plan.included,
                    "locked": plan.locked,
                })
            })
            .collect();
        return serde_json::to_string_pretty(&value).unwrap_or_else(|_| "[]".to_string());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if no_color {
        table.set_header(vec!["Plan", "Price", "Includes", "Not included"]);
    } else {
        table.set_header(vec![
            Cell::new("Plan").fg(Color::Cyan),
            Cell::new("Price").fg(Color::Cyan),
            Cell::new("Includes").fg(Color::Cyan),
            Cell::new("Not included").fg(Color::Cyan),
        ]);
    }

    for plan in plans {
        let mut name = plan.name().to_string();
        if let Some(badge) = plan.badge {
            name.push_str(&format!("\n[{}]", badge));
        }
        if current == Some(plan.tier) {
            name.push_str("\n(current)");
        }

        let name_cell = if !no_color && current == Some(plan.tier) {
            Cell::new(name).fg(Color::Green)
        } else {
            Cell::new(name)
        };

        table.add_row(vec![
            name_cell,
            Cell::new(plan.price_label()),
            Cell::new(plan.included.join("\n")),
            Cell::new(if plan.locked.is_empty() {
                "-".to_string()
            } else {
                plan.locked.join("\n")
            }),
        ]);
    }

    table.to_string()
}

/// Previously submitted requests, newest first in both formats.
///
/// The actor returns them in submission order.
pub fn format_history(requests: &[ContentGenerationRequest], json: bool, no_color: bool) -> String {
    let newest_first: Vec<&ContentGenerationRequest> = requests.iter().rev().collect();

    if json {
        return serde_json::to_string_pretty(&newest_first).unwrap_or_else(|_| "[]".to_string());
    }

    if requests.is_empty() {
        return "No content requests yet.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if no_color {
        table.set_header(vec!["#", "Niche", "Platform", "Tone", "Audience", "Goal"]);
    } else {
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Niche").fg(Color::Cyan),
            Cell::new("Platform").fg(Color::Cyan),
            Cell::new("Tone").fg(Color::Cyan),
            Cell::new("Audience").fg(Color::Cyan),
            Cell::new("Goal").fg(Color::Cyan),
        ]);
    }

    for (index, request) in newest_first.into_iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            truncate(&request.niche, 30),
            request.platform.clone(),
            request.tone.clone(),
            truncate(&request.audience, 30),
            request.goal.clone(),
        ]);
    }

    table.to_string()
}

pub fn format_payment(outcome: &PaymentOutcome) -> String {
    match outcome {
        PaymentOutcome::Completed { response } => format!(
            "✓ Payment completed\n  {}\n\nYour plan has been upgraded. Run `hookcraft tier` to see your features.",
            response
        ),
        PaymentOutcome::Failed { reason } => format!(
            "✗ Payment failed: {}\n\nNo charges were made. Try again with `hookcraft checkout <tier>`.",
            reason
        ),
    }
}

// ============================================================================
// Utilities
// ============================================================================

fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max - 1).collect::<String>() + "…"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hookcraft_core::models::GeneratedContent;
    use hookcraft_core::plans::PLANS;
    use hookcraft_core::render_sections;

    fn request(niche: &str) -> ContentGenerationRequest {
        ContentGenerationRequest::new(niche, "TikTok", "Casual", "students", "Entertain")
    }

    #[test]
    fn test_free_tier_sections_show_upgrade_prompts() {
        let content = GeneratedContent {
            hooks: vec!["Stop scrolling".to_string()],
            ..Default::default()
        };
        let views = render_sections(&content, &TierLevel::Free.features());
        let out = format_sections(&views, true);

        assert!(out.contains("Stop scrolling"));
        assert!(out.contains("Viral Hooks (1 hook)"));
        assert!(out.contains("Unlock Full Scripts"));
        assert!(out.contains("Unlock Engagement Captions"));
        assert!(out.contains("hookcraft checkout pro"));
    }

    #[test]
    fn test_entitled_empty_section_shows_placeholder() {
        let views = render_sections(&GeneratedContent::default(), &TierLevel::Pro.features());
        let out = format_sections(&views, true);

        assert!(out.contains("Your hooks will appear here after generation."));
        assert!(!out.contains("Unlock"));
    }

    #[test]
    fn test_tier_json_defaults_to_free() {
        let out = format_tier(None, &TierLevel::Free.features(), true, true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["tier"], "free");
        assert_eq!(value["features"]["hooks"], true);
        assert_eq!(value["features"]["scripts"], false);
    }

    #[test]
    fn test_tier_table_suggests_upgrade_below_elite() {
        let subscription = UserSubscription {
            tier: TierLevel::Pro,
            ..Default::default()
        };
        let out = format_tier(Some(&subscription), &TierLevel::Pro.features(), false, true);
        assert!(out.contains("Plan:    Pro"));
        assert!(out.contains("Unlocked: 6 of 9 features"));
        assert!(out.contains("Upgrade with"));

        let elite = UserSubscription {
            tier: TierLevel::Elite,
            ..Default::default()
        };
        let out = format_tier(Some(&elite), &TierLevel::Elite.features(), false, true);
        assert!(out.contains("Unlocked: 9 of 9 features"));
        assert!(!out.contains("Upgrade with"));
    }

    #[test]
    fn test_plans_table_and_json() {
        let table = format_plans(&PLANS, Some(TierLevel::Pro), false, true);
        assert!(table.contains("$29/month"));
        assert!(table.contains("Most Popular"));
        assert!(table.contains("(current)"));

        let value: serde_json::Value =
            serde_json::from_str(&format_plans(&PLANS, None, true, true)).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(3));
        assert_eq!(value[2]["priceUsd"], 79);
    }

    #[test]
    fn test_history_is_newest_first() {
        let requests = vec![request("baking"), request("chess")];
        let out = format_history(&requests, false, true);

        let chess = out.find("chess").unwrap();
        let baking = out.find("baking").unwrap();
        assert!(chess < baking);

        assert_eq!(format_history(&[], false, true), "No content requests yet.");
    }

    #[test]
    fn test_history_json_matches_table_order() {
        let requests = vec![request("baking"), request("chess")];
        let value: serde_json::Value =
            serde_json::from_str(&format_history(&requests, true, true)).unwrap();

        assert_eq!(value[0]["niche"], "chess");
        assert_eq!(value[1]["niche"], "baking");
    }

    #[test]
    fn test_payment_messages() {
        let ok = format_payment(&PaymentOutcome::Completed {
            response: "Upgraded to pro".to_string(),
        });
        assert!(ok.contains("Payment completed"));

        let failed = format_payment(&PaymentOutcome::Failed {
            reason: "card declined".to_string(),
        });
        assert!(failed.contains("card declined"));
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello world", 5), "hell…");
        assert_eq!(truncate("🚀🔍💡test", 4), "🚀🔍💡…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate("hello", 0), "");
        assert_eq!(truncate("", 0), "");
    }
}
