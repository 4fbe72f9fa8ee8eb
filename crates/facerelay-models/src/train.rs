//! Training outcomes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Terminal state of one training call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrainStatus {
    /// The sample was uploaded and bound to an identity
    Trained,
    /// The sample was rejected (e.g. no face detected)
    Failed,
}

/// Structured result of a training call.
///
/// "No face detected" is a `Failed` outcome carrying a message, not an
/// error: the caller must check the status rather than catch anything.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TrainOutcome {
    pub status: TrainStatus,

    /// Remote asset id of the uploaded sample, when the upload succeeded.
    /// Stored by the aggregator so the sample can be removed later.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,

    /// Human-readable failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TrainOutcome {
    pub fn trained(asset_id: impl Into<String>) -> Self {
        Self {
            status: TrainStatus::Trained,
            asset_id: Some(asset_id.into()),
            message: None,
        }
    }

    pub fn failed(asset_id: Option<String>, message: impl Into<String>) -> Self {
        Self {
            status: TrainStatus::Failed,
            asset_id,
            message: Some(message.into()),
        }
    }

    pub fn is_trained(&self) -> bool {
        self.status == TrainStatus::Trained
    }
}
