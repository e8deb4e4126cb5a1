//! External background-removal service client.
//!
//! The removal algorithm itself is a remote collaborator; the core only
//! needs "bytes in, bytes out, or an error". No retries, no cancellation.

use async_trait::async_trait;
use reqwest::multipart;
use tracing::debug;

use crate::core::config::AppConfig;
use crate::utils::{AppError, AppResult};

/// Port for the single opaque removal operation.
#[async_trait]
pub trait BackgroundRemoval: Send + Sync {
    /// Strips the background from `image`, returning the processed bytes.
    async fn remove(&self, image: Vec<u8>, file_name: &str) -> AppResult<Vec<u8>>;
}

/// HTTP client posting the image as multipart form data.
pub struct HttpRemovalService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRemovalService {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::removal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: config.removal_endpoint.clone(),
        })
    }
}

#[async_trait]
impl BackgroundRemoval for HttpRemovalService {
    async fn remove(&self, image: Vec<u8>, file_name: &str) -> AppResult<Vec<u8>> {
        debug!("Posting {} bytes to {}", image.len(), self.endpoint);

        let part = multipart::Part::bytes(image).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::removal(format!("Removal request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::removal(format!(
                "Removal service returned {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::removal(format!("Failed to read removal response: {e}")))?;

        if bytes.is_empty() {
            return Err(AppError::removal("Removal service returned an empty image"));
        }

        debug!("Removal service returned {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}
