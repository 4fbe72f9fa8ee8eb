//! Canonical match records, the backend-agnostic output of normalization.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rect::FaceBox;

/// A canonical match/no-match verdict for one detection.
///
/// Created fresh per detection by a detector adapter's normalizer; a pure
/// projection of the raw detection plus threshold configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MatchRecord {
    /// Resolved name: lowercased label, or "unknown"
    pub name: String,

    /// Confidence in the 0-100 range, two-decimal precision
    pub confidence: f64,

    /// Whether this detection clears the configured match thresholds
    #[serde(rename = "match")]
    pub is_match: bool,

    /// Canonical bounding box
    #[serde(rename = "box")]
    pub face_box: FaceBox,

    /// Annotations attached by post-decision checks, when any fired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<String>>,
}

/// Round a confidence value to two decimal places.
pub fn round_confidence(confidence: f64) -> f64 {
    (confidence * 100.0).round() / 100.0
}
