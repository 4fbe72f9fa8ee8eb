//! Gallery backend HTTP client.

use std::collections::HashMap;
use std::path::Path;

use chrono::SecondsFormat;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::config::GalleryConfig;
use crate::error::{GalleryError, GalleryResult};
use crate::types::{
    AssignFaceRequest, CreatePersonRequest, DeleteAssetsRequest, Face, JobCommand, JobName,
    JobStatus, Person, UploadedAsset,
};

/// Device identifier reported with every upload.
const DEVICE_ID: &str = "facerelay";

/// Client for the gallery backend REST API.
pub struct GalleryClient {
    http: Client,
    config: GalleryConfig,
}

impl GalleryClient {
    /// Create a new gallery client.
    pub fn new(config: GalleryConfig) -> GalleryResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            GalleryError::Config("API key contains characters not valid in a header".to_string())
        })?;
        key.set_sensitive(true);
        headers.insert("x-api-key", key);

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(GalleryError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> GalleryResult<Self> {
        Self::new(GalleryConfig::from_env())
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Upload an image as a new asset.
    ///
    /// The device-asset id is random per upload so repeated uploads of
    /// near-identical frames are not deduplicated server-side. Both file
    /// timestamps carry the configured date group.
    pub async fn upload_asset(&self, path: &Path) -> GalleryResult<UploadedAsset> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("asset.jpg")
            .to_string();
        let stamp = self
            .config
            .date_group
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        let form = Form::new()
            .part("assetData", Part::bytes(bytes).file_name(file_name))
            .text("deviceId", DEVICE_ID)
            .text("deviceAssetId", format!("{DEVICE_ID}-{}", Uuid::new_v4()))
            .text("fileCreatedAt", stamp.clone())
            .text("fileModifiedAt", stamp);

        let url = format!("{}/api/assets", self.config.base_url);
        debug!(url = %url, "uploading asset");
        let response = self.http.post(&url).multipart(form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GalleryError::UploadFailed(format!(
                "backend returned {status}: {body}"
            )));
        }
        Ok(response.json().await?)
    }

    /// Fetch the faces detected for an asset.
    pub async fn faces(&self, asset_id: &str) -> GalleryResult<Vec<Face>> {
        let url = format!("{}/api/faces", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("id", asset_id)])
            .send()
            .await?;
        Self::parse_json(response).await
    }

    /// Search identities by name, including hidden ones.
    pub async fn search_people(&self, name: &str) -> GalleryResult<Vec<Person>> {
        let url = format!("{}/api/search/person", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("name", name), ("withHidden", "true")])
            .send()
            .await?;
        Self::parse_json(response).await
    }

    /// Create a new identity.
    pub async fn create_person(&self, name: &str) -> GalleryResult<Person> {
        let url = format!("{}/api/people", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .json(&CreatePersonRequest {
                name: name.to_string(),
            })
            .send()
            .await?;
        Self::parse_json(response).await
    }

    /// Bind a detected face to an identity.
    pub async fn assign_face(&self, face_id: &str, person_id: &str) -> GalleryResult<()> {
        let url = format!("{}/api/faces/{}", self.config.base_url, person_id);
        let response = self
            .http
            .put(&url)
            .json(&AssignFaceRequest {
                id: face_id.to_string(),
            })
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// Force-delete assets in bulk.
    pub async fn delete_assets(&self, ids: &[String]) -> GalleryResult<()> {
        let url = format!("{}/api/assets", self.config.base_url);
        let response = self
            .http
            .delete(&url)
            .json(&DeleteAssetsRequest {
                force: true,
                ids: ids.to_vec(),
            })
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// Read the current job-status map.
    pub async fn jobs(&self) -> GalleryResult<HashMap<String, JobStatus>> {
        let url = format!("{}/api/jobs", self.config.base_url);
        let response = self.http.get(&url).send().await?;
        Self::parse_json(response).await
    }

    /// Queue a job (non-forced) and return its refreshed status.
    pub async fn start_job(&self, job: JobName) -> GalleryResult<JobStatus> {
        let url = format!("{}/api/jobs/{}", self.config.base_url, job.as_str());
        let response = self
            .http
            .put(&url)
            .json(&JobCommand::start())
            .send()
            .await?;
        Self::parse_json(response).await
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> GalleryResult<T> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GalleryError::from_http_status(status, body));
        }
        Ok(response.json().await?)
    }

    async fn expect_success(response: Response) -> GalleryResult<()> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GalleryError::from_http_status(status, body));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unprintable_api_key() {
        let config = GalleryConfig {
            api_key: "bad\nkey".to_string(),
            ..GalleryConfig::default()
        };
        assert!(matches!(
            GalleryClient::new(config),
            Err(GalleryError::Config(_))
        ));
    }
}
