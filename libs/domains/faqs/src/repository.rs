use async_trait::async_trait;
use uuid::Uuid;

use crate::error::FaqResult;
use crate::models::{CreateFaq, Faq, UpdateFaq};

/// Repository trait for FAQ persistence
///
/// Implementations must enforce a unique constraint on `shortId`; the
/// random-suffix generator accepts the (tiny) collision probability and
/// relies on that constraint as the backstop.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FaqRepository: Send + Sync {
    /// Create a new FAQ
    async fn create(&self, input: CreateFaq) -> FaqResult<Faq>;

    /// Every FAQ, position ascending
    async fn find_all(&self) -> FaqResult<Vec<Faq>>;

    /// Visible FAQs only (hide == false), position ascending
    async fn find_visible(&self) -> FaqResult<Vec<Faq>>;

    /// Get an FAQ by ID
    async fn get_by_id(&self, id: Uuid) -> FaqResult<Option<Faq>>;

    /// Get an FAQ by its public identifier
    async fn get_by_short_id(&self, short_id: &str) -> FaqResult<Option<Faq>>;

    /// Update an existing FAQ
    async fn update(&self, id: Uuid, input: UpdateFaq) -> FaqResult<Faq>;

    /// Delete an FAQ by ID
    async fn delete(&self, id: Uuid) -> FaqResult<bool>;
}
