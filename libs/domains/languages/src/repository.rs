use async_trait::async_trait;
use uuid::Uuid;

use crate::error::LanguageResult;
use crate::models::{CreateLanguage, Language, UpdateLanguage};

/// Repository trait for Language persistence
///
/// Implementations must enforce a unique constraint on `code` and surface
/// violations as `LanguageError::DuplicateCode`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageRepository: Send + Sync {
    /// Register a new language
    async fn create(&self, input: CreateLanguage) -> LanguageResult<Language>;

    /// Every language, sorted by label
    async fn find_all(&self) -> LanguageResult<Vec<Language>>;

    /// Get a language by ID
    async fn get_by_id(&self, id: Uuid) -> LanguageResult<Option<Language>>;

    /// Get a language by its (lowercase) code
    async fn get_by_code(&self, code: &str) -> LanguageResult<Option<Language>>;

    /// Languages spoken in one country (uppercase country code)
    async fn find_by_country(&self, country_code: &str) -> LanguageResult<Vec<Language>>;

    /// Update an existing language
    async fn update(&self, id: Uuid, input: UpdateLanguage) -> LanguageResult<Language>;

    /// Delete a language by ID
    async fn delete(&self, id: Uuid) -> LanguageResult<bool>;
}
