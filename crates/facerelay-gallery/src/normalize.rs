//! Raw-detection normalization.
//!
//! Turns the heterogeneous raw payload of a recognize call into canonical
//! match records, applying the camera's confidence and area thresholds and
//! running the injected post-decision checks. Pure except for logging:
//! malformed input is logged and treated as zero detections, never an error.

use tracing::{info, warn};

use facerelay_models::{
    round_confidence, CheckVerdict, DecisionCheck, DecisionContext, DetectSettings,
    DetectorResponse, FaceBox, MatchRecord,
};

/// Backend error message for an image without any face.
const NO_FACE_ERROR: &str = "No face found in image";

/// Normalize raw detections into canonical match records.
///
/// Output ordering matches input ordering; records rejected by the decision
/// checks are omitted.
pub fn normalize(
    settings: &DetectSettings,
    response: &DetectorResponse,
    checks: &dyn DecisionCheck,
) -> Vec<MatchRecord> {
    if !response.success {
        if response.code == Some(500) && response.error.as_deref() == Some(NO_FACE_ERROR) {
            info!("backend machine learning found no face in the image");
            return Vec::new();
        }
        warn!(status = response.status, "unexpected detector response payload");
        return Vec::new();
    }

    let Some(predictions) = response.predictions.as_ref() else {
        warn!("detector response carries no predictions field");
        return Vec::new();
    };

    predictions
        .iter()
        .filter_map(|prediction| {
            let confidence = round_confidence(prediction.confidence * 100.0);
            let label = prediction.label();
            let name = if confidence >= settings.unknown.confidence {
                label.to_lowercase()
            } else {
                "unknown".to_string()
            };

            let raw_box = prediction.bounding_box();
            let is_match = label != "unknown"
                && confidence >= settings.matching.confidence
                && raw_box.area() >= settings.matching.min_area;
            let face_box = FaceBox::from(raw_box);

            let ctx = DecisionContext {
                name: &name,
                confidence,
                is_match,
                face_box: &face_box,
                settings,
            };
            match checks.evaluate(&ctx) {
                CheckVerdict::Accept(annotations) => Some(MatchRecord {
                    name,
                    confidence,
                    is_match,
                    face_box,
                    checks: if annotations.is_empty() {
                        None
                    } else {
                        Some(annotations)
                    },
                }),
                CheckVerdict::Reject => None,
            }
        })
        .collect()
}
