//! Per-camera detection thresholds.
//!
//! The aggregation service resolves thresholds per camera; adapters only
//! consume the resolved [`DetectSettings`].

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Floors a detection must clear to count as a positive match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatchThresholds {
    /// Minimum confidence (0-100)
    #[serde(default = "default_match_confidence")]
    pub confidence: f64,
    /// Minimum bounding-box area in square pixels
    #[serde(default = "default_min_area")]
    pub min_area: f64,
}

fn default_match_confidence() -> f64 {
    60.0
}

fn default_min_area() -> f64 {
    10_000.0
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            confidence: default_match_confidence(),
            min_area: default_min_area(),
        }
    }
}

/// Confidence floor below which the resolved name falls back to "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UnknownThresholds {
    /// Minimum confidence (0-100) for keeping a non-"unknown" label
    #[serde(default = "default_unknown_confidence")]
    pub confidence: f64,
}

fn default_unknown_confidence() -> f64 {
    40.0
}

impl Default for UnknownThresholds {
    fn default() -> Self {
        Self {
            confidence: default_unknown_confidence(),
        }
    }
}

/// Resolved thresholds for one camera.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct DetectSettings {
    #[serde(default, rename = "match")]
    pub matching: MatchThresholds,
    #[serde(default)]
    pub unknown: UnknownThresholds,
}

/// Detection configuration keyed by camera identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DetectConfig {
    /// Settings applied when a camera has no override
    #[serde(default)]
    pub default: DetectSettings,

    /// Per-camera overrides
    #[serde(default)]
    pub cameras: HashMap<String, DetectSettings>,
}

impl DetectConfig {
    /// Resolve the settings for a camera, falling back to the default.
    pub fn for_camera(&self, camera: &str) -> &DetectSettings {
        self.cameras.get(camera).unwrap_or(&self.default)
    }
}
