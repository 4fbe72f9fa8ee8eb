//! The gallery detector adapter.
//!
//! Translates the aggregator's recognize/train/remove/normalize contract
//! into the gallery backend's REST surface. One sequential chain of network
//! round-trips per call; the backend's own job queue serializes detection
//! and recognition server-side, so there is no client-side fan-out.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use facerelay_models::{
    AcceptAll, DecisionCheck, DetectConfig, DetectorResponse, MatchRecord, Prediction,
    TrainOutcome,
};

use crate::cleanup;
use crate::client::GalleryClient;
use crate::cleanup::Advisory;
use crate::config::GalleryConfig;
use crate::error::{GalleryError, GalleryResult};
use crate::normalize;
use crate::people;
use crate::pipeline;
use crate::store::TrainStore;
use crate::types::Face;

/// Detector adapter for the gallery backend.
pub struct GalleryDetector {
    client: GalleryClient,
    detect: DetectConfig,
    store: Arc<dyn TrainStore>,
    checks: Arc<dyn DecisionCheck>,
}

impl GalleryDetector {
    /// Create a new detector with the default (accept-all) decision checks.
    pub fn new(
        config: GalleryConfig,
        detect: DetectConfig,
        store: Arc<dyn TrainStore>,
    ) -> GalleryResult<Self> {
        Ok(Self {
            client: GalleryClient::new(config)?,
            detect,
            store,
            checks: Arc::new(AcceptAll),
        })
    }

    /// Replace the post-decision checks.
    pub fn with_checks(mut self, checks: Arc<dyn DecisionCheck>) -> Self {
        self.checks = checks;
        self
    }

    /// Run recognition on an image and return the raw detector response.
    ///
    /// The backend reports identity binding rather than a continuous score,
    /// so prediction confidence is binarized: 1.0 when a face has a bound
    /// identity, 0.0 otherwise.
    pub async fn recognize(&self, image: &Path) -> GalleryResult<DetectorResponse> {
        let (asset, faces) = pipeline::submit_and_detect(&self.client, image).await?;
        let predictions = faces.iter().map(to_prediction).collect();

        if self.client.config().delete_after_recognize {
            cleanup::delete_assets(&self.client, std::slice::from_ref(&asset.id)).await;
        }

        Ok(DetectorResponse::success(predictions))
    }

    /// Upload a training sample and bind its faces to the named identity.
    ///
    /// Zero detected faces is a terminal structured failure: no identity is
    /// looked up, created, or bound.
    pub async fn train(&self, name: &str, image: &Path) -> GalleryResult<TrainOutcome> {
        let (asset, faces) = pipeline::submit_and_detect(&self.client, image).await?;

        if faces.is_empty() {
            info!(asset_id = %asset.id, name = %name, "no face detected in training image");
            return Ok(TrainOutcome::failed(
                Some(asset.id),
                "no face detected in training image",
            ));
        }

        people::bind_faces_to_identity(&self.client, &faces, name).await?;
        Ok(TrainOutcome::trained(asset.id))
    }

    /// Delete the backend assets recorded for the given train-record file
    /// ids; an empty slice removes every recorded asset. Records without an
    /// asset id are skipped. Deletion is advisory: failures are logged, not
    /// propagated.
    pub async fn remove(&self, file_ids: &[i64]) -> GalleryResult<Advisory> {
        let asset_ids: Vec<String> = self
            .store
            .trained_asset_ids(file_ids)
            .await
            .map_err(GalleryError::from)?
            .into_iter()
            .flatten()
            .collect();

        if asset_ids.is_empty() {
            debug!("no trained assets to remove");
            return Ok(Advisory::Done);
        }
        Ok(cleanup::delete_assets(&self.client, &asset_ids).await)
    }

    /// Normalize a raw detector response under the camera's thresholds.
    pub fn normalize(&self, camera: &str, response: &DetectorResponse) -> Vec<MatchRecord> {
        let settings = self.detect.for_camera(camera);
        normalize::normalize(settings, response, self.checks.as_ref())
    }
}

fn to_prediction(face: &Face) -> Prediction {
    let (confidence, userid) = match face.person.as_ref().filter(|p| !p.name.is_empty()) {
        Some(person) => (1.0, Some(person.name.clone())),
        None => (0.0, None),
    };
    Prediction {
        confidence,
        userid,
        plate: None,
        x_min: face.bounding_box_x1,
        y_min: face.bounding_box_y1,
        x_max: face.bounding_box_x2,
        y_max: face.bounding_box_y2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Person;

    fn face(person: Option<Person>) -> Face {
        Face {
            id: "face-1".to_string(),
            person,
            bounding_box_x1: 0.0,
            bounding_box_y1: 0.0,
            bounding_box_x2: 50.0,
            bounding_box_y2: 50.0,
        }
    }

    #[test]
    fn test_bound_face_binarizes_to_full_confidence() {
        let prediction = to_prediction(&face(Some(Person {
            id: "person-1".to_string(),
            name: "Alice".to_string(),
            is_hidden: false,
        })));
        assert_eq!(prediction.confidence, 1.0);
        assert_eq!(prediction.userid.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_unbound_face_binarizes_to_zero() {
        let prediction = to_prediction(&face(None));
        assert_eq!(prediction.confidence, 0.0);
        assert!(prediction.userid.is_none());
    }

    #[test]
    fn test_nameless_identity_counts_as_unbound() {
        let prediction = to_prediction(&face(Some(Person {
            id: "person-1".to_string(),
            name: String::new(),
            is_hidden: false,
        })));
        assert_eq!(prediction.confidence, 0.0);
        assert!(prediction.userid.is_none());
    }
}
