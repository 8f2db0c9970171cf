use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use atelier_application::{
    error::{AppError, AppResult},
    infrastructure_config::StorageConfig,
    ports::outgoing::object_storage::ObjectStoragePort,
};

/// Talks the supabase-storage HTTP API: authenticated writes under
/// `/object/{bucket}/{key}`, anonymous reads under
/// `/object/public/{bucket}/{key}`.
pub struct SupabaseStorageAdapter {
    client: Client,
    base_url: String,
    bucket: String,
    service_key: SecretString,
}

impl SupabaseStorageAdapter {
    pub fn new(config: &StorageConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::ConfigError {
                message: format!("Failed to build storage HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bucket: config.bucket.clone(),
            service_key: config.service_key.clone(),
        })
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/object/{}/{}", self.base_url, self.bucket, key)
    }
}

#[async_trait::async_trait]
impl ObjectStoragePort for SupabaseStorageAdapter {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn upload(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> AppResult<String> {
        let response = self
            .client
            .post(self.object_url(key))
            .bearer_auth(self.service_key.expose_secret())
            .header(header::CONTENT_TYPE, content_type)
            // replace any previous object under the same key
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError {
                message: format!("Storage upload request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::StorageError {
                message: format!("Storage upload of '{key}' returned {status}: {body}"),
            });
        }

        debug!(key = %key, "Uploaded object");
        Ok(self.public_url(key))
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> AppResult<()> {
        let response = self
            .client
            .delete(self.object_url(key))
            .bearer_auth(self.service_key.expose_secret())
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError {
                message: format!("Storage delete request failed: {e}"),
            })?;

        let status = response.status();
        // deleting a missing object is not an error
        if !status.is_success() && status != StatusCode::NOT_FOUND {
            return Err(AppError::StorageError {
                message: format!("Storage delete of '{key}' returned {status}"),
            });
        }

        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/object/public/{}/{}", self.base_url, self.bucket, key)
    }
}
