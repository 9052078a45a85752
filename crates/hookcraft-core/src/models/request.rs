//! Content generation request and the content produced for it

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platforms offered by the generator form
pub const PLATFORMS: &[&str] = &[
    "TikTok",
    "YouTube",
    "Instagram",
    "Twitter/X",
    "LinkedIn",
    "Facebook",
];

/// Tones offered by the generator form
pub const TONES: &[&str] = &[
    "Energetic",
    "Professional",
    "Casual",
    "Inspirational",
    "Educational",
    "Humorous",
];

/// Goals offered by the generator form
pub const GOALS: &[&str] = &[
    "Grow Audience",
    "Drive Sales",
    "Increase Engagement",
    "Build Authority",
    "Entertain",
];

/// A required field of [`ContentGenerationRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestField {
    Niche,
    Platform,
    Tone,
    Audience,
    Goal,
}

impl RequestField {
    pub const ALL: [RequestField; 5] = [
        RequestField::Niche,
        RequestField::Platform,
        RequestField::Tone,
        RequestField::Audience,
        RequestField::Goal,
    ];

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            RequestField::Niche => "Your Niche",
            RequestField::Platform => "Platform",
            RequestField::Tone => "Tone",
            RequestField::Audience => "Target Audience",
            RequestField::Goal => "Goal",
        }
    }
}

impl fmt::Display for RequestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestField::Niche => "niche",
            RequestField::Platform => "platform",
            RequestField::Tone => "tone",
            RequestField::Audience => "audience",
            RequestField::Goal => "goal",
        };
        f.write_str(name)
    }
}

/// What the user asked the generator for.
///
/// A fresh value is built for every submission; the orchestrator never
/// mutates a submitted request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentGenerationRequest {
    pub niche: String,
    pub platform: String,
    pub tone: String,
    pub audience: String,
    pub goal: String,
}

impl ContentGenerationRequest {
    pub fn new(
        niche: impl Into<String>,
        platform: impl Into<String>,
        tone: impl Into<String>,
        audience: impl Into<String>,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            niche: niche.into(),
            platform: platform.into(),
            tone: tone.into(),
            audience: audience.into(),
            goal: goal.into(),
        }
    }

    pub fn field(&self, field: RequestField) -> &str {
        match field {
            RequestField::Niche => &self.niche,
            RequestField::Platform => &self.platform,
            RequestField::Tone => &self.tone,
            RequestField::Audience => &self.audience,
            RequestField::Goal => &self.goal,
        }
    }

    pub fn set_field(&mut self, field: RequestField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RequestField::Niche => self.niche = value,
            RequestField::Platform => self.platform = value,
            RequestField::Tone => self.tone = value,
            RequestField::Audience => self.audience = value,
            RequestField::Goal => self.goal = value,
        }
    }

    /// Fields that are empty or whitespace-only, in form order
    pub fn missing_fields(&self) -> Vec<RequestField> {
        RequestField::ALL
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }
}

/// Merged output of one generation.
///
/// Every list is always present; a section the caller is not entitled to, or
/// whose call failed, is simply empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    #[serde(default)]
    pub hooks: Vec<String>,
    #[serde(default)]
    pub scripts: Vec<String>,
    #[serde(default)]
    pub captions: Vec<String>,
    /// Elite-only content calendar, generated on demand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar: Option<String>,
}

impl GeneratedContent {
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
            && self.scripts.is_empty()
            && self.captions.is_empty()
            && self.calendar.is_none()
    }

    /// Total number of generated items across the three lists
    pub fn item_count(&self) -> usize {
        self.hooks.len() + self.scripts.len() + self.captions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_in_form_order() {
        let request = ContentGenerationRequest::new("fitness", "", "Energetic", "  ", "");
        assert_eq!(
            request.missing_fields(),
            vec![RequestField::Platform, RequestField::Audience, RequestField::Goal]
        );
        assert_eq!(request.missing_fields().len(), 3);
    }

    #[test]
    fn test_set_field_round_trips_through_field() {
        let mut request = ContentGenerationRequest::default();
        for field in RequestField::ALL {
            request.set_field(field, field.label());
        }
        assert!(request.missing_fields().is_empty());
        assert_eq!(request.field(RequestField::Audience), "Target Audience");
    }

    #[test]
    fn test_generated_content_defaults_missing_lists() {
        let content: GeneratedContent = serde_json::from_str(r#"{"hooks":["a"]}"#).unwrap();
        assert_eq!(content.hooks, vec!["a".to_string()]);
        assert!(content.scripts.is_empty());
        assert!(content.calendar.is_none());
        assert_eq!(content.item_count(), 1);
    }
}
