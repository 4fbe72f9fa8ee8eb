//! Gallery adapter error types.

use thiserror::Error;

/// Result type for gallery operations.
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Errors that can occur while talking to the gallery backend.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unauthorized: the backend rejected the configured API key")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Backend error {0}: {1}")]
    ServerError(u16, String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Train store error: {0}")]
    Store(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GalleryError {
    /// Map a non-success HTTP response to an error.
    pub fn from_http_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401 | 403 => GalleryError::Unauthorized,
            404 => GalleryError::NotFound(body),
            500..=599 => GalleryError::ServerError(status, body),
            _ => GalleryError::RequestFailed(format!("backend returned {status}: {body}")),
        }
    }

    /// Check if error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GalleryError::Network(_) | GalleryError::ServerError(_, _)
        )
    }
}
