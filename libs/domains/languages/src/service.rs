//! Language Service - business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{LanguageError, LanguageResult};
use crate::models::{CreateLanguage, Language, UpdateLanguage};
use crate::repository::LanguageRepository;

/// Language service: validation over plain reference-data CRUD.
pub struct LanguageService<R: LanguageRepository> {
    repository: Arc<R>,
}

impl<R: LanguageRepository> LanguageService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new language
    #[instrument(skip(self, input), fields(code = %input.code))]
    pub async fn create(&self, input: CreateLanguage) -> LanguageResult<Language> {
        input
            .validate()
            .map_err(|e| LanguageError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Every language, sorted by label
    #[instrument(skip(self))]
    pub async fn list(&self) -> LanguageResult<Vec<Language>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> LanguageResult<Language> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| LanguageError::NotFound(id.to_string()))
    }

    /// Lookup by code, case-insensitive
    #[instrument(skip(self))]
    pub async fn get_by_code(&self, code: &str) -> LanguageResult<Language> {
        self.repository
            .get_by_code(code)
            .await?
            .ok_or_else(|| LanguageError::NotFound(format!("with code {}", code)))
    }

    /// Languages spoken in one country, case-insensitive
    #[instrument(skip(self))]
    pub async fn by_country(&self, country_code: &str) -> LanguageResult<Vec<Language>> {
        self.repository.find_by_country(country_code).await
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateLanguage) -> LanguageResult<Language> {
        input
            .validate()
            .map_err(|e| LanguageError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> LanguageResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: LanguageRepository> Clone for LanguageService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::create_input;
    use crate::repository::MockLanguageRepository;
    use mockall::predicate;

    #[tokio::test]
    async fn duplicate_code_surfaces_as_conflict() {
        let mut repo = MockLanguageRepository::new();
        repo.expect_create()
            .returning(|_| Err(LanguageError::DuplicateCode));

        let service = LanguageService::new(repo);
        let result = service.create(create_input()).await;
        assert!(matches!(result, Err(LanguageError::DuplicateCode)));
    }

    #[tokio::test]
    async fn get_by_code_misses_surface_as_not_found() {
        let mut repo = MockLanguageRepository::new();
        repo.expect_get_by_code()
            .with(predicate::eq("xx"))
            .returning(|_| Ok(None));

        let service = LanguageService::new(repo);
        let result = service.get_by_code("xx").await;
        assert!(matches!(result, Err(LanguageError::NotFound(_))));
    }

    #[tokio::test]
    async fn create_rejects_invalid_country_code() {
        let mut input = create_input();
        input.country_code = "BGD".to_string();

        let service = LanguageService::new(MockLanguageRepository::new());
        let result = service.create(input).await;
        assert!(matches!(result, Err(LanguageError::Validation(_))));
    }
}
