//! MongoDB implementation of FaqRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{FaqError, FaqResult};
use crate::models::{CreateFaq, Faq, UpdateFaq};
use crate::repository::FaqRepository;

/// MongoDB implementation of the FaqRepository
pub struct MongoFaqRepository {
    collection: Collection<Faq>,
}

impl MongoFaqRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Faq>("faqs");
        Self { collection }
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Faq>(collection_name);
        Self { collection }
    }

    /// Initialize indexes: unique shortId (sparse - legacy documents may
    /// lack one), position listing order
    pub async fn init_indexes(&self) -> FaqResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "shortId": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .sparse(true)
                        .name("idx_short_id_unique".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "position": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_position".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("FAQ indexes created successfully");
        Ok(())
    }

    async fn find_sorted(&self, filter: Document) -> FaqResult<Vec<Faq>> {
        use futures_util::TryStreamExt;

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "position": 1 })
            .build();

        let cursor = self.collection.find(filter).with_options(options).await?;
        let faqs: Vec<Faq> = cursor.try_collect().await?;
        Ok(faqs)
    }
}

#[async_trait]
impl FaqRepository for MongoFaqRepository {
    #[instrument(skip(self, input), fields(position = input.position))]
    async fn create(&self, input: CreateFaq) -> FaqResult<Faq> {
        let faq = Faq::new(input);

        self.collection.insert_one(&faq).await?;

        tracing::info!(faq_id = %faq.id, "FAQ created");
        Ok(faq)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> FaqResult<Vec<Faq>> {
        self.find_sorted(doc! {}).await
    }

    #[instrument(skip(self))]
    async fn find_visible(&self) -> FaqResult<Vec<Faq>> {
        self.find_sorted(doc! { "hide": false }).await
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> FaqResult<Option<Faq>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let faq = self.collection.find_one(filter).await?;
        Ok(faq)
    }

    #[instrument(skip(self))]
    async fn get_by_short_id(&self, short_id: &str) -> FaqResult<Option<Faq>> {
        let faq = self.collection.find_one(doc! { "shortId": short_id }).await?;
        Ok(faq)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateFaq) -> FaqResult<Faq> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or_else(|| FaqError::NotFound(id.to_string()))?;

        let mut updated = existing;
        updated.apply_update(input);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(faq_id = %id, "FAQ updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> FaqResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count == 0 {
            return Err(FaqError::NotFound(id.to_string()));
        }

        tracing::info!(faq_id = %id, "FAQ deleted");
        Ok(true)
    }
}
