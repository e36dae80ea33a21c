//! MongoDB implementation of LanguageRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{LanguageError, LanguageResult};
use crate::models::{CreateLanguage, Language, UpdateLanguage};
use crate::repository::LanguageRepository;

/// MongoDB implementation of the LanguageRepository
pub struct MongoLanguageRepository {
    collection: Collection<Language>,
}

impl MongoLanguageRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Language>("languages");
        Self { collection }
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Language>(collection_name);
        Self { collection }
    }

    /// Initialize indexes: unique language code
    pub async fn init_indexes(&self) -> LanguageResult<()> {
        let indexes = vec![IndexModel::builder()
            .keys(doc! { "code": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("idx_code_unique".to_string())
                    .build(),
            )
            .build()];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Language indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl LanguageRepository for MongoLanguageRepository {
    #[instrument(skip(self, input), fields(code = %input.code))]
    async fn create(&self, input: CreateLanguage) -> LanguageResult<Language> {
        let language = Language::new(input);

        self.collection.insert_one(&language).await?;

        tracing::info!(language_id = %language.id, code = %language.code, "Language registered");
        Ok(language)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> LanguageResult<Vec<Language>> {
        use futures_util::TryStreamExt;

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "label": 1 })
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let languages: Vec<Language> = cursor.try_collect().await?;
        Ok(languages)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> LanguageResult<Option<Language>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let language = self.collection.find_one(filter).await?;
        Ok(language)
    }

    #[instrument(skip(self))]
    async fn get_by_code(&self, code: &str) -> LanguageResult<Option<Language>> {
        let language = self
            .collection
            .find_one(doc! { "code": code.to_lowercase() })
            .await?;
        Ok(language)
    }

    #[instrument(skip(self))]
    async fn find_by_country(&self, country_code: &str) -> LanguageResult<Vec<Language>> {
        use futures_util::TryStreamExt;

        let cursor = self
            .collection
            .find(doc! { "countryCode": country_code.to_uppercase() })
            .await?;
        let languages: Vec<Language> = cursor.try_collect().await?;
        Ok(languages)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateLanguage) -> LanguageResult<Language> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or_else(|| LanguageError::NotFound(id.to_string()))?;

        let mut updated = existing;
        updated.apply_update(input);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(language_id = %id, "Language updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> LanguageResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count == 0 {
            return Err(LanguageError::NotFound(id.to_string()));
        }

        tracing::info!(language_id = %id, "Language deleted");
        Ok(true)
    }
}
