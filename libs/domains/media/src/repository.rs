use async_trait::async_trait;
use axum_helpers::Pagination;
use uuid::Uuid;

use crate::error::MediaResult;
use crate::models::{Media, MediaPurpose};

/// Repository trait for Media record persistence
///
/// Implementations must enforce a unique constraint on `publicId` and
/// surface violations as `MediaError::DuplicatePublicId`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Insert a new media record
    async fn insert(&self, media: Media) -> MediaResult<Media>;

    /// Get a record by ID
    async fn get_by_id(&self, id: Uuid) -> MediaResult<Option<Media>>;

    /// One page of records, newest first, plus the filtered total
    async fn find_page(
        &self,
        purpose: Option<MediaPurpose>,
        pagination: Pagination,
    ) -> MediaResult<(Vec<Media>, u64)>;

    /// All records, newest first
    async fn find_all(&self, purpose: Option<MediaPurpose>) -> MediaResult<Vec<Media>>;

    /// Records back-referencing one owning entity, newest first
    async fn find_by_ref(&self, ref_id: &str) -> MediaResult<Vec<Media>>;

    /// Count records matching the purpose filter
    async fn count(&self, purpose: Option<MediaPurpose>) -> MediaResult<u64>;

    /// Delete a record by ID
    async fn delete(&self, id: Uuid) -> MediaResult<bool>;
}
