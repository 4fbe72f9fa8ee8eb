//! Best-effort asset cleanup.

use tracing::{debug, warn};

use crate::client::GalleryClient;
use crate::types::JobName;

/// Outcome of an advisory operation: reported for observability, only ever
/// logged, never propagated. A missing asset on the remote side does not
/// corrupt local state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    Done,
    Failed(String),
}

impl Advisory {
    pub fn is_done(&self) -> bool {
        matches!(self, Advisory::Done)
    }
}

/// Force-delete the given assets, then re-trigger the library housekeeping
/// job so the backend's index stays consistent.
///
/// The job trigger is fire-and-forget: this does not wait for the job to
/// finish, and a trigger failure is only logged.
pub async fn delete_assets(client: &GalleryClient, asset_ids: &[String]) -> Advisory {
    if asset_ids.is_empty() {
        return Advisory::Done;
    }

    if let Err(e) = client.delete_assets(asset_ids).await {
        warn!(count = asset_ids.len(), error = %e, "asset cleanup failed, continuing");
        return Advisory::Failed(e.to_string());
    }
    debug!(count = asset_ids.len(), "deleted assets");

    if let Err(e) = client.start_job(JobName::Library).await {
        warn!(error = %e, "failed to re-trigger library housekeeping after cleanup");
    }

    Advisory::Done
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisory_is_done() {
        assert!(Advisory::Done.is_done());
        assert!(!Advisory::Failed("delete failed".to_string()).is_done());
    }
}
