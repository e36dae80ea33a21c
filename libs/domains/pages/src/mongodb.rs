//! MongoDB implementation of PageRepository

use async_trait::async_trait;
use mongodb::{
    bson::doc, options::IndexOptions, Collection, Database, IndexModel,
};
use tracing::instrument;

use crate::error::{PageError, PageResult};
use crate::models::{CreatePage, Page, UpdatePage};
use crate::repository::PageRepository;

/// MongoDB implementation of the PageRepository
pub struct MongoPageRepository {
    collection: Collection<Page>,
}

impl MongoPageRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Page>("pages");
        Self { collection }
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Page>(collection_name);
        Self { collection }
    }

    /// Initialize indexes: unique page key
    pub async fn init_indexes(&self) -> PageResult<()> {
        let indexes = vec![IndexModel::builder()
            .keys(doc! { "key": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("idx_key_unique".to_string())
                    .build(),
            )
            .build()];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Page indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl PageRepository for MongoPageRepository {
    #[instrument(skip(self, input), fields(key = %input.key))]
    async fn create(&self, input: CreatePage) -> PageResult<Page> {
        let page = Page::new(input);

        self.collection
            .insert_one(&page)
            .await
            .map_err(|err| match PageError::from(err) {
                PageError::DuplicateKey(_) => PageError::DuplicateKey(page.key.clone()),
                other => other,
            })?;

        tracing::info!(page_id = %page.id, key = %page.key, "Page created");
        Ok(page)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> PageResult<Vec<Page>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let pages: Vec<Page> = cursor.try_collect().await?;
        Ok(pages)
    }

    #[instrument(skip(self))]
    async fn get_by_key(&self, key: &str) -> PageResult<Option<Page>> {
        let page = self.collection.find_one(doc! { "key": key }).await?;
        Ok(page)
    }

    #[instrument(skip(self, input))]
    async fn update_by_key(&self, key: &str, input: UpdatePage) -> PageResult<Page> {
        let filter = doc! { "key": key };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or_else(|| PageError::NotFound(key.to_string()))?;

        let mut updated = existing;
        updated.apply_update(input);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(key, "Page updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_by_key(&self, key: &str) -> PageResult<bool> {
        let result = self.collection.delete_one(doc! { "key": key }).await?;

        if result.deleted_count == 0 {
            return Err(PageError::NotFound(key.to_string()));
        }

        tracing::info!(key, "Page deleted");
        Ok(true)
    }
}
