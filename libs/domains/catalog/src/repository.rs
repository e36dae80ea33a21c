use async_trait::async_trait;
use axum_helpers::Pagination;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{CatalogFilter, CatalogStats, CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Implementations must enforce a unique constraint on `shortId` and
/// surface violations as `CatalogError::DuplicateShortId`; the id
/// generator itself never checks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, input: CreateProduct) -> CatalogResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>>;

    /// Get a product by its public identifier
    async fn get_by_short_id(&self, short_id: &str) -> CatalogResult<Option<Product>>;

    /// One page of products matching the filter, sorted by position
    /// ascending, plus the size of the full filtered set
    async fn find_page(
        &self,
        filter: CatalogFilter,
        pagination: Pagination,
    ) -> CatalogResult<(Vec<Product>, u64)>;

    /// Update an existing product
    async fn update(&self, id: Uuid, input: UpdateProduct) -> CatalogResult<Product>;

    /// Replace a product's media block in a single write
    async fn set_media(&self, id: Uuid, media: crate::models::ProductMedia)
        -> CatalogResult<Product>;

    /// Delete a product by ID
    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;

    /// Catalog statistics from one consistent aggregation pass
    async fn stats(&self) -> CatalogResult<CatalogStats>;
}
