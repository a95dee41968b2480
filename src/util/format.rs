//! Presentation helpers for classification results.
//!
//! SYSTEM CONTEXT
//! ==============
//! The upload backend reports diseases as underscore-separated identifiers
//! and confidence as a fraction in [0, 1]. These helpers own the mapping to
//! display text so the result card and chat context stay consistent.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Confidence tier derived from a prediction score, presentation only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// Classify a confidence score: `> 0.8` high, `> 0.6` medium, else low.
    #[must_use]
    pub fn from_score(confidence: f64) -> Self {
        if confidence > 0.8 {
            Self::High
        } else if confidence > 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Modifier class applied to the confidence badge.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::High => "result-card__badge--high",
            Self::Medium => "result-card__badge--medium",
            Self::Low => "result-card__badge--low",
        }
    }
}

/// Human-readable disease name: underscores become spaces.
#[must_use]
pub fn disease_display_name(raw: &str) -> String {
    raw.replace('_', " ")
}

/// Confidence as a percentage with two decimals, e.g. `"93.00%"`.
#[must_use]
pub fn confidence_percent(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// Deep link into the chat view for a stored result id.
#[must_use]
pub fn chat_deep_link(result_id: &str) -> String {
    format!("/chat?disease_id={result_id}")
}
