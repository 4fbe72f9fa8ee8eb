//! Raw detector output, the uniform payload between an adapter's recognize
//! call and the normalizer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rect::BoundingBox;

/// One raw detection produced by a recognition backend.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Prediction {
    /// Confidence in the 0.0-1.0 range. Backends that report identity
    /// binding instead of a continuous score binarize this to 0.0 or 1.0.
    pub confidence: f64,

    /// Name of the bound identity, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userid: Option<String>,

    /// Alternate label field used by plate-reading backends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate: Option<String>,

    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Prediction {
    /// Resolve the effective label: userid, falling back to plate, falling
    /// back to "unknown". Empty strings count as absent.
    pub fn label(&self) -> &str {
        self.userid
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.plate.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("unknown")
    }

    /// Raw bounding box of this detection.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x_min, self.y_min, self.x_max, self.y_max)
    }
}

/// Raw response envelope returned by a detector adapter's recognize call.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DetectorResponse {
    /// HTTP-like status code of the backend exchange
    pub status: u16,

    /// Whether the backend produced a usable result
    pub success: bool,

    /// Backend error code (on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,

    /// Backend error message (on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Raw detections; absent on failure payloads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Vec<Prediction>>,
}

impl DetectorResponse {
    /// Build a successful response carrying raw detections.
    pub fn success(predictions: Vec<Prediction>) -> Self {
        Self {
            status: 200,
            success: true,
            code: None,
            error: None,
            predictions: Some(predictions),
        }
    }

    /// Build a failure response carrying a backend error.
    pub fn failure(code: u16, error: impl Into<String>) -> Self {
        Self {
            status: code,
            success: false,
            code: Some(code),
            error: Some(error.into()),
            predictions: None,
        }
    }
}
