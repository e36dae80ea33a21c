//! Cloudinary-backed [`MediaStore`] implementation.
//!
//! Uses the signed upload API: parameters are sorted, concatenated, and
//! signed with SHA-256 (the account must be configured for SHA-256
//! signatures). Assets land in a single configured folder.

use async_trait::async_trait;
use core_config::{env_or_default, env_required, ConfigError, FromEnv};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::instrument;

use crate::{MediaStore, StoreError, StoreResult, StoredObject};

const UPLOAD_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Cloudinary credentials and upload folder.
#[derive(Clone, Debug)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Folder every asset is uploaded into
    pub folder: String,
}

impl FromEnv for CloudinaryConfig {
    /// Environment variables:
    /// - `CLOUDINARY_CLOUD_NAME` (required)
    /// - `CLOUDINARY_API_KEY` (required)
    /// - `CLOUDINARY_API_SECRET` (required)
    /// - `CLOUDINARY_FOLDER` (optional, default: "content")
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cloud_name: env_required("CLOUDINARY_CLOUD_NAME")?,
            api_key: env_required("CLOUDINARY_API_KEY")?,
            api_secret: env_required("CLOUDINARY_API_SECRET")?,
            folder: env_or_default("CLOUDINARY_FOLDER", "content"),
        })
    }
}

/// Subset of the Cloudinary upload response we keep.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
    #[serde(default)]
    format: String,
    resource_type: String,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    bytes: u64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ApiErrorMessage {
    message: String,
}

pub struct CloudinaryStore {
    config: CloudinaryConfig,
    http: reqwest::Client,
}

impl CloudinaryStore {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn upload_url(&self) -> String {
        format!("{}/{}/auto/upload", UPLOAD_BASE, self.config.cloud_name)
    }

    fn destroy_url(&self) -> String {
        // Parity with the uploader default: destroy targets the image type.
        format!("{}/{}/image/destroy", UPLOAD_BASE, self.config.cloud_name)
    }

    /// Sign the given parameters: sort by key, join as a query string,
    /// append the secret, SHA-256, hex.
    fn sign(&self, params: &[(&str, &str)]) -> String {
        let mut sorted: Vec<_> = params.to_vec();
        sorted.sort_by_key(|(key, _)| *key);

        let to_sign: String = sorted
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        let digest = Sha256::digest(format!("{}{}", to_sign, self.config.api_secret).as_bytes());
        format!("{:x}", digest)
    }

    fn signed_form(&self, public_id: &str) -> reqwest::multipart::Form {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = self.sign(&[
            ("folder", &self.config.folder),
            ("public_id", public_id),
            ("timestamp", &timestamp),
        ]);

        reqwest::multipart::Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("folder", self.config.folder.clone())
            .text("public_id", public_id.to_string())
            .text("timestamp", timestamp)
            .text("signature", signature)
    }

    async fn send_upload(&self, form: reqwest::multipart::Form) -> StoreResult<StoredObject> {
        let response = self
            .http
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| format!("upload failed with status {}", status));
            return Err(StoreError::Rejected(message));
        }

        let uploaded: UploadResponse = response.json().await?;
        Ok(StoredObject {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
            format: uploaded.format,
            resource_type: uploaded.resource_type,
            width: uploaded.width,
            height: uploaded.height,
            bytes: uploaded.bytes,
        })
    }
}

#[async_trait]
impl MediaStore for CloudinaryStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn upload_buffer(&self, bytes: Vec<u8>, public_id: &str) -> StoreResult<StoredObject> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(public_id.to_string());
        let form = self.signed_form(public_id).part("file", part);

        let stored = self.send_upload(form).await?;
        tracing::info!(public_id = %stored.public_id, "Buffer uploaded to object storage");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn upload_from_source(
        &self,
        source: &str,
        public_id: &str,
    ) -> StoreResult<StoredObject> {
        // Cloudinary fetches the asset itself when `file` is a URL or data URI.
        let form = self.signed_form(public_id).text("file", source.to_string());

        let stored = self.send_upload(form).await?;
        tracing::info!(public_id = %stored.public_id, "Remote source uploaded to object storage");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn delete(&self, public_id: &str) -> StoreResult<()> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = self.sign(&[("public_id", public_id), ("timestamp", &timestamp)]);

        let response = self
            .http
            .post(self.destroy_url())
            .form(&[
                ("api_key", self.config.api_key.as_str()),
                ("public_id", public_id),
                ("timestamp", &timestamp),
                ("signature", &signature),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Rejected(format!(
                "destroy failed with status {}",
                response.status()
            )));
        }

        tracing::info!(public_id, "Asset deleted from object storage");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CloudinaryStore {
        CloudinaryStore::new(CloudinaryConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            folder: "content".to_string(),
        })
    }

    #[test]
    fn sign_sorts_parameters_before_hashing() {
        let store = store();
        let forward = store.sign(&[("folder", "content"), ("public_id", "x"), ("timestamp", "1")]);
        let shuffled = store.sign(&[("timestamp", "1"), ("folder", "content"), ("public_id", "x")]);
        assert_eq!(forward, shuffled);
        assert_eq!(forward.len(), 64); // hex sha256
    }

    #[test]
    fn sign_depends_on_secret() {
        let a = store();
        let mut config = a.config.clone();
        config.api_secret = "other".to_string();
        let b = CloudinaryStore::new(config);

        let params = [("public_id", "x"), ("timestamp", "1")];
        assert_ne!(a.sign(&params), b.sign(&params));
    }

    #[test]
    fn urls_embed_cloud_name() {
        let store = store();
        assert_eq!(
            store.upload_url(),
            "https://api.cloudinary.com/v1_1/demo/auto/upload"
        );
        assert_eq!(
            store.destroy_url(),
            "https://api.cloudinary.com/v1_1/demo/image/destroy"
        );
    }

    #[test]
    fn config_from_env() {
        temp_env::with_vars(
            [
                ("CLOUDINARY_CLOUD_NAME", Some("demo")),
                ("CLOUDINARY_API_KEY", Some("key")),
                ("CLOUDINARY_API_SECRET", Some("secret")),
                ("CLOUDINARY_FOLDER", None::<&str>),
            ],
            || {
                let config = CloudinaryConfig::from_env().unwrap();
                assert_eq!(config.cloud_name, "demo");
                assert_eq!(config.folder, "content");
            },
        );
    }

    #[test]
    fn config_from_env_missing_secret() {
        temp_env::with_vars(
            [
                ("CLOUDINARY_CLOUD_NAME", Some("demo")),
                ("CLOUDINARY_API_KEY", Some("key")),
                ("CLOUDINARY_API_SECRET", None::<&str>),
            ],
            || {
                assert!(CloudinaryConfig::from_env().is_err());
            },
        );
    }
}
