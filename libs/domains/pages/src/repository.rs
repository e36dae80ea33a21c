use async_trait::async_trait;

use crate::error::PageResult;
use crate::models::{CreatePage, Page, UpdatePage};

/// Repository trait for Page persistence
///
/// Implementations must enforce a unique constraint on `key` and surface
/// violations as `PageError::DuplicateKey`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Create a new page
    async fn create(&self, input: CreatePage) -> PageResult<Page>;

    /// Every page
    async fn find_all(&self) -> PageResult<Vec<Page>>;

    /// Get a page by its stable key
    async fn get_by_key(&self, key: &str) -> PageResult<Option<Page>>;

    /// Update a page by key
    async fn update_by_key(&self, key: &str, input: UpdatePage) -> PageResult<Page>;

    /// Delete a page by key
    async fn delete_by_key(&self, key: &str) -> PageResult<bool>;
}
