//! Object-storage collaborator.
//!
//! The content services never talk to a storage vendor directly; they hold a
//! [`MediaStore`] and receive back a [`StoredObject`] describing whatever was
//! uploaded. [`CloudinaryStore`] is the production implementation. Tests use
//! the generated mock (feature `mock`).

mod cloudinary;

pub use cloudinary::{CloudinaryConfig, CloudinaryStore};

use async_trait::async_trait;
use serde::Deserialize;

/// Metadata returned by the storage backend for a completed upload.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredObject {
    /// Public HTTPS URL of the stored asset
    pub url: String,
    /// Backend identifier, required for later deletion
    pub public_id: String,
    /// File format as reported by the backend (e.g. "webp")
    pub format: String,
    /// Backend resource class (e.g. "image", "video", "raw")
    pub resource_type: String,
    /// Pixel width, 0 for non-visual assets
    #[serde(default)]
    pub width: u32,
    /// Pixel height, 0 for non-visual assets
    #[serde(default)]
    pub height: u32,
    /// Stored size in bytes
    #[serde(default)]
    pub bytes: u64,
}

/// Error type for object-storage operations.
///
/// Storage failures are upstream errors: they are reported to the caller
/// and never retried at this layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Object storage rejected the request: {0}")]
    Rejected(String),

    #[error("Object storage transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Object storage configuration error: {0}")]
    Config(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage backend seam for media assets.
///
/// Implementations upload bytes or remote sources under a caller-suggested
/// public id and delete by public id. Uniqueness of public ids is enforced
/// by the media repository at record time, not here.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload raw bytes under the suggested public id.
    async fn upload_buffer(&self, bytes: Vec<u8>, public_id: &str) -> StoreResult<StoredObject>;

    /// Upload from a remote URL or data-URI string.
    async fn upload_from_source(&self, source: &str, public_id: &str)
        -> StoreResult<StoredObject>;

    /// Delete a previously uploaded asset.
    async fn delete(&self, public_id: &str) -> StoreResult<()>;
}
