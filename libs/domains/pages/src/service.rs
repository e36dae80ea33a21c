//! Page Service - business logic layer

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{PageError, PageResult};
use crate::models::{CreatePage, Page, PageView, UpdatePage};
use crate::repository::PageRepository;

/// Page service: validation plus the registry/single read paths.
pub struct PageService<R: PageRepository> {
    repository: Arc<R>,
}

impl<R: PageRepository> PageService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new page
    #[instrument(skip(self, input), fields(key = %input.key))]
    pub async fn create(&self, input: CreatePage) -> PageResult<Page> {
        input
            .validate()
            .map_err(|e| PageError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Public: every page resolved into the requested language,
    /// keyed by page key
    #[instrument(skip(self))]
    pub async fn registry(&self, lang: &str) -> PageResult<BTreeMap<String, PageView>> {
        let pages = self.repository.find_all().await?;
        Ok(pages
            .iter()
            .map(|page| (page.key.clone(), PageView::project(page, lang)))
            .collect())
    }

    /// Public: one page resolved into the requested language
    #[instrument(skip(self))]
    pub async fn view(&self, key: &str, lang: &str) -> PageResult<PageView> {
        let page = self
            .repository
            .get_by_key(key)
            .await?
            .ok_or_else(|| PageError::NotFound(key.to_string()))?;
        Ok(PageView::project(&page, lang))
    }

    /// Admin: every page, raw
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> PageResult<Vec<Page>> {
        self.repository.find_all().await
    }

    /// Admin: raw document by key
    #[instrument(skip(self))]
    pub async fn get(&self, key: &str) -> PageResult<Page> {
        self.repository
            .get_by_key(key)
            .await?
            .ok_or_else(|| PageError::NotFound(key.to_string()))
    }

    /// Admin update by key; the key itself never changes
    #[instrument(skip(self, input))]
    pub async fn update(&self, key: &str, input: UpdatePage) -> PageResult<Page> {
        input
            .validate()
            .map_err(|e| PageError::Validation(e.to_string()))?;

        self.repository.update_by_key(key, input).await
    }

    /// Admin delete by key
    #[instrument(skip(self))]
    pub async fn delete(&self, key: &str) -> PageResult<()> {
        self.repository.delete_by_key(key).await?;
        Ok(())
    }
}

impl<R: PageRepository> Clone for PageService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
