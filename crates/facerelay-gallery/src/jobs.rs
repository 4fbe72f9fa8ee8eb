//! Bounded waits on backend job queues.
//!
//! The backend processes uploads through named asynchronous jobs (detection,
//! recognition, housekeeping). The adapter needs those jobs quiet before it
//! reads results, but a backend that never quiesces must not hang a
//! recognition call, so every wait is bounded by the configured retry
//! ceiling and exhaustion is a warning, not an error.

use tracing::{debug, warn};

use crate::client::GalleryClient;
use crate::types::{JobName, JobStatus};

/// Wait until the named job is idle, best-effort.
///
/// If the job is not already active it is queued (non-forced, so an existing
/// queued run is not restarted) and the trigger response becomes the current
/// status view. While the job stays active the loop sleeps
/// `poll_interval` and re-reads, up to `max_poll_retries` iterations.
///
/// All failures are absorbed: on exhaustion or a status-read error the
/// caller proceeds without the guarantee that the job finished.
pub async fn ensure_job_idle(client: &GalleryClient, job: JobName) {
    let config = client.config();

    let mut status = match client.jobs().await {
        Ok(mut jobs) => jobs.remove(job.as_str()),
        Err(e) => {
            warn!(job = %job, error = %e, "failed to read job queue status");
            return;
        }
    };

    if !is_active(&status) {
        match client.start_job(job).await {
            Ok(refreshed) => status = Some(refreshed),
            Err(e) => {
                warn!(job = %job, error = %e, "failed to queue job");
                return;
            }
        }
    }

    for attempt in 0..config.max_poll_retries {
        if !is_active(&status) {
            return;
        }
        debug!(job = %job, attempt = attempt + 1, "job still active, waiting");
        tokio::time::sleep(config.poll_interval).await;

        match client.jobs().await {
            Ok(mut jobs) => status = jobs.remove(job.as_str()),
            // Transient read failure: keep the last view and let the next
            // iteration try again; the attempt still counts.
            Err(e) => warn!(job = %job, error = %e, "failed to re-read job queue status"),
        }
    }

    if is_active(&status) {
        warn!(
            job = %job,
            retries = config.max_poll_retries,
            "job still active after retry budget; proceeding without completion guarantee"
        );
    }
}

fn is_active(status: &Option<JobStatus>) -> bool {
    status
        .as_ref()
        .map(|s| s.queue_status.is_active)
        .unwrap_or(false)
}
