//! Wire types for the gallery backend REST surface.

use std::fmt;

use serde::{Deserialize, Serialize};

use facerelay_models::BoundingBox;

/// Upload response for one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedAsset {
    pub id: String,
    pub status: AssetStatus,
}

/// Backend-side status of an uploaded asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Created,
    Replaced,
    Duplicate,
    #[serde(other)]
    Other,
}

/// One face detection within an asset. Immutable once returned; the backend
/// may report several per asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Face {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    pub bounding_box_x1: f64,
    pub bounding_box_y1: f64,
    pub bounding_box_x2: f64,
    pub bounding_box_y2: f64,
}

impl Face {
    /// Raw bounding box of this detection.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.bounding_box_x1,
            self.bounding_box_y1,
            self.bounding_box_x2,
            self.bounding_box_y2,
        )
    }
}

/// A named identity in the backend's recognition index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    /// The backend hides identities it considers noise; training identities
    /// may end up hidden, so searches must include them.
    #[serde(default)]
    pub is_hidden: bool,
}

/// Named asynchronous backend jobs the adapter waits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobName {
    #[serde(rename = "faceDetection")]
    FaceDetection,
    #[serde(rename = "facialRecognition")]
    FacialRecognition,
    /// On-disk index housekeeping
    #[serde(rename = "library")]
    Library,
}

impl JobName {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobName::FaceDetection => "faceDetection",
            JobName::FacialRecognition => "facialRecognition",
            JobName::Library => "library",
        }
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Queue state of one backend job. Transient; re-read on every poll, never
/// cached across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    pub queue_status: QueueStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStatus {
    pub is_active: bool,
}

/// Job trigger command body.
#[derive(Debug, Clone, Serialize)]
pub struct JobCommand {
    pub command: &'static str,
    pub force: bool,
}

impl JobCommand {
    /// Queue the job without restarting an already queued run.
    pub fn start() -> Self {
        Self {
            command: "start",
            force: false,
        }
    }
}

/// Body for binding a face to an identity.
#[derive(Debug, Clone, Serialize)]
pub struct AssignFaceRequest {
    pub id: String,
}

/// Body for creating an identity.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePersonRequest {
    pub name: String,
}

/// Body for bulk-deleting assets.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAssetsRequest {
    pub force: bool,
    pub ids: Vec<String>,
}
