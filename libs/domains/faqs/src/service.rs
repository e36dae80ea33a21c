//! FAQ Service - business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{FaqError, FaqResult};
use crate::models::{CreateFaq, Faq, FaqView, UpdateFaq};
use crate::repository::FaqRepository;

/// FAQ service: validation plus the public/admin read split.
pub struct FaqService<R: FaqRepository> {
    repository: Arc<R>,
}

impl<R: FaqRepository> FaqService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new FAQ
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateFaq) -> FaqResult<Faq> {
        input
            .validate()
            .map_err(|e| FaqError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Admin: every FAQ, raw, position ascending
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> FaqResult<Vec<Faq>> {
        self.repository.find_all().await
    }

    /// Public: visible FAQs resolved into the requested language
    #[instrument(skip(self))]
    pub async fn list_by_lang(&self, lang: &str) -> FaqResult<Vec<FaqView>> {
        let faqs = self.repository.find_visible().await?;
        Ok(faqs.iter().map(|faq| FaqView::project(faq, lang)).collect())
    }

    /// Public: one visible FAQ by public identifier, resolved into `lang`.
    /// Hidden entries are indistinguishable from missing ones.
    #[instrument(skip(self))]
    pub async fn get_by_lang_and_short_id(
        &self,
        lang: &str,
        short_id: &str,
    ) -> FaqResult<FaqView> {
        let faq = self
            .repository
            .get_by_short_id(short_id)
            .await?
            .filter(|faq| !faq.hide)
            .ok_or_else(|| FaqError::NotFound(short_id.to_string()))?;
        Ok(FaqView::project(&faq, lang))
    }

    /// Admin: raw document by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> FaqResult<Faq> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| FaqError::NotFound(id.to_string()))
    }

    /// Admin: raw document by public identifier
    #[instrument(skip(self))]
    pub async fn get_by_short_id(&self, short_id: &str) -> FaqResult<Faq> {
        self.repository
            .get_by_short_id(short_id)
            .await?
            .ok_or_else(|| FaqError::NotFound(short_id.to_string()))
    }

    /// Admin update; a position change mints a fresh public identifier
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateFaq) -> FaqResult<Faq> {
        input
            .validate()
            .map_err(|e| FaqError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Admin delete
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> FaqResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: FaqRepository> Clone for FaqService<R> {
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
    use crate::repository::MockFaqRepository;
    use mockall::predicate;

    #[tokio::test]
    async fn create_rejects_missing_english_answer() {
        let mut input = create_input();
        input.answer = localization::LocalizedText::from_pairs([("bn", "উত্তর")]);

        let service = FaqService::new(MockFaqRepository::new());
        let result = service.create(input).await;
        assert!(matches!(result, Err(FaqError::Validation(_))));
    }

    #[tokio::test]
    async fn public_list_projects_visible_entries() {
        let mut repo = MockFaqRepository::new();
        repo.expect_find_visible()
            .returning(|| Ok(vec![Faq::new(create_input())]));

        let service = FaqService::new(repo);
        let views = service.list_by_lang("bn").await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].question, "ডেলিভারি হয়?");
    }

    #[tokio::test]
    async fn hidden_entry_reads_as_not_found_publicly() {
        let mut repo = MockFaqRepository::new();
        repo.expect_get_by_short_id()
            .with(predicate::eq("faq--4--abc123"))
            .returning(|_| {
                let mut faq = Faq::new(create_input());
                faq.hide = true;
                Ok(Some(faq))
            });

        let service = FaqService::new(repo);
        let result = service
            .get_by_lang_and_short_id("en", "faq--4--abc123")
            .await;
        assert!(matches!(result, Err(FaqError::NotFound(_))));
    }

    #[tokio::test]
    async fn admin_read_returns_hidden_entries_raw() {
        let mut repo = MockFaqRepository::new();
        repo.expect_get_by_short_id().returning(|_| {
            let mut faq = Faq::new(create_input());
            faq.hide = true;
            Ok(Some(faq))
        });

        let service = FaqService::new(repo);
        let faq = service.get_by_short_id("faq--4--abc123").await.unwrap();
        assert!(faq.hide);
    }
}
