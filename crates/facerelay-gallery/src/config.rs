//! Gallery adapter configuration.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Configuration for the gallery backend adapter.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Base URL of the gallery backend
    pub base_url: String,
    /// API key sent with every request
    pub api_key: String,
    /// Request timeout
    pub timeout: Duration,
    /// Sleep between job-status polls
    pub poll_interval: Duration,
    /// Maximum poll iterations before giving up on a job
    pub max_poll_retries: u32,
    /// Timestamp stamped on every upload's created/modified fields so
    /// adapter uploads land in a single date bucket for bulk cleanup
    pub date_group: DateTime<Utc>,
    /// Delete the uploaded asset once recognition results are collected
    pub delete_after_recognize: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:2283".to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(15),
            poll_interval: Duration::from_secs(1),
            max_poll_retries: 60,
            date_group: default_date_group(),
            delete_after_recognize: false,
        }
    }
}

impl GalleryConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("GALLERY_URL")
                .unwrap_or_else(|_| "http://localhost:2283".to_string()),
            api_key: std::env::var("GALLERY_API_KEY").unwrap_or_default(),
            timeout: Duration::from_secs(
                std::env::var("GALLERY_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(15),
            ),
            poll_interval: Duration::from_millis(
                std::env::var("GALLERY_POLL_INTERVAL_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1000),
            ),
            max_poll_retries: std::env::var("GALLERY_MAX_POLL_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            date_group: std::env::var("GALLERY_DATE_GROUP")
                .ok()
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(default_date_group),
            delete_after_recognize: std::env::var("GALLERY_DELETE_AFTER_RECOGNIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Upper bound on wall-clock blocking for one job wait.
    pub fn max_poll_duration(&self) -> Duration {
        self.poll_interval * self.max_poll_retries
    }
}

// 1999-01-01T00:00:00Z
fn default_date_group() -> DateTime<Utc> {
    DateTime::from_timestamp(915_148_800, 0).unwrap_or_default()
}
