//! Upload-and-detect pipeline.

use std::path::Path;

use tracing::{debug, warn};

use crate::client::GalleryClient;
use crate::error::GalleryResult;
use crate::jobs::ensure_job_idle;
use crate::types::{AssetStatus, Face, JobName, UploadedAsset};

/// Upload an image, wait for backend-side detection and recognition, and
/// return the faces found in it.
///
/// Detection must finish before recognition can attribute faces to
/// identities, so the jobs are awaited in that order. An empty face list is
/// a valid terminal answer, not re-polled: once the recognition job is quiet,
/// zero faces means zero faces.
pub async fn submit_and_detect(
    client: &GalleryClient,
    image: &Path,
) -> GalleryResult<(UploadedAsset, Vec<Face>)> {
    let asset = client.upload_asset(image).await?;
    if asset.status != AssetStatus::Created {
        // The asset id is still usable; the backend merely matched an
        // existing upload.
        warn!(
            asset_id = %asset.id,
            status = ?asset.status,
            "upload did not report a created asset, continuing"
        );
    }

    ensure_job_idle(client, JobName::FaceDetection).await;
    ensure_job_idle(client, JobName::FacialRecognition).await;

    let faces = client.faces(&asset.id).await?;
    debug!(asset_id = %asset.id, count = faces.len(), "fetched faces");

    // Keep the backend's on-disk index consistent with what was just
    // processed.
    ensure_job_idle(client, JobName::Library).await;

    Ok((asset, faces))
}
