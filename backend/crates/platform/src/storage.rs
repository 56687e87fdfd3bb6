//! Blob Storage Client
//!
//! Path-addressed object storage speaking the Supabase storage REST API:
//! - `POST {url}/storage/v1/object/{bucket}/{path}` uploads (with `x-upsert`)
//! - `POST {url}/storage/v1/object/sign/{bucket}/{path}` issues signed read URLs

use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use serde::{Deserialize, Serialize};

/// Storage-specific result type alias
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Transport failure (connection, TLS, decoding)
    #[error("Storage request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The storage service answered with a non-success status
    #[error("Storage rejected the request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

/// Blob store contract: upload with overwrite, short-lived signed reads
#[trait_variant::make(BlobStore: Send)]
pub trait LocalBlobStore {
    /// Upload `bytes` to `bucket/path`, replacing any existing object when `upsert` is set
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> StorageResult<()>;

    /// Issue a signed URL that grants read access for `expires_in`
    async fn signed_url(&self, bucket: &str, path: &str, expires_in: Duration)
    -> StorageResult<String>;
}

/// Storage connection settings
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    pub base_url: String,
    /// Privileged (service role) key
    pub service_key: String,
}

impl StorageConfig {
    /// Build from optional parts; both are required
    pub fn from_parts(base_url: Option<String>, service_key: Option<String>) -> Option<Self> {
        Some(Self {
            base_url: base_url?.trim_end_matches('/').to_string(),
            service_key: service_key?,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignRequest {
    expires_in: u64,
}

#[derive(Deserialize)]
struct SignResponse {
    #[serde(rename = "signedURL")]
    signed_url: String,
}

#[derive(Deserialize)]
struct StorageErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// reqwest-backed storage client
#[derive(Clone)]
pub struct SupabaseStorage {
    pub(crate) client: Client,
    pub(crate) config: StorageConfig,
}

impl SupabaseStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn object_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.config.base_url,
            bucket,
            path.trim_start_matches('/')
        )
    }

    fn sign_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/sign/{}/{}",
            self.config.base_url,
            bucket,
            path.trim_start_matches('/')
        )
    }

    /// The sign endpoint answers with a path relative to `/storage/v1`
    fn absolute_signed_url(&self, relative: &str) -> String {
        if relative.starts_with("http://") || relative.starts_with("https://") {
            return relative.to_string();
        }
        format!(
            "{}/storage/v1/{}",
            self.config.base_url,
            relative.trim_start_matches('/')
        )
    }

    pub(crate) async fn rejected(response: reqwest::Response) -> StorageError {
        let status = response.status();
        let message = match response.json::<StorageErrorBody>().await {
            Ok(body) => body
                .message
                .or(body.error)
                .unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        };
        StorageError::Rejected { status, message }
    }
}

impl BlobStore for SupabaseStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> StorageResult<()> {
        let response = self
            .client
            .post(self.object_url(bucket, path))
            .bearer_auth(&self.config.service_key)
            .header("apikey", &self.config.service_key)
            .header(header::CONTENT_TYPE, content_type)
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejected(response).await);
        }

        tracing::debug!(bucket, path, "Object uploaded");
        Ok(())
    }

    async fn signed_url(
        &self,
        bucket: &str,
        path: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        let response = self
            .client
            .post(self.sign_url(bucket, path))
            .bearer_auth(&self.config.service_key)
            .header("apikey", &self.config.service_key)
            .json(&SignRequest {
                expires_in: expires_in.as_secs(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejected(response).await);
        }

        let body: SignResponse = response.json().await?;
        Ok(self.absolute_signed_url(&body.signed_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> SupabaseStorage {
        let config = StorageConfig::from_parts(
            Some("https://demo.supabase.co/".to_string()),
            Some("service-key".to_string()),
        )
        .unwrap();
        SupabaseStorage::new(config)
    }

    #[test]
    fn test_config_requires_both_parts() {
        assert!(StorageConfig::from_parts(Some("https://a".into()), None).is_none());
        assert!(StorageConfig::from_parts(None, Some("key".into())).is_none());
    }

    #[test]
    fn test_object_url() {
        assert_eq!(
            storage().object_url("verification", "u1/xinxue_1.png"),
            "https://demo.supabase.co/storage/v1/object/verification/u1/xinxue_1.png"
        );
    }

    #[test]
    fn test_sign_url() {
        assert_eq!(
            storage().sign_url("verification", "/u1/a.jpg"),
            "https://demo.supabase.co/storage/v1/object/sign/verification/u1/a.jpg"
        );
    }

    #[test]
    fn test_absolute_signed_url() {
        let s = storage();
        assert_eq!(
            s.absolute_signed_url("/object/sign/verification/u1/a.jpg?token=t"),
            "https://demo.supabase.co/storage/v1/object/sign/verification/u1/a.jpg?token=t"
        );
        assert_eq!(
            s.absolute_signed_url("https://cdn.example.com/x"),
            "https://cdn.example.com/x"
        );
    }
}
