//! MongoDB implementation of MediaRepository

use async_trait::async_trait;
use axum_helpers::Pagination;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{MediaError, MediaResult};
use crate::models::{Media, MediaPurpose};
use crate::repository::MediaRepository;

/// MongoDB implementation of the MediaRepository
pub struct MongoMediaRepository {
    collection: Collection<Media>,
}

impl MongoMediaRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Media>("media");
        Self { collection }
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Media>(collection_name);
        Self { collection }
    }

    /// Initialize indexes: unique publicId, refId lookup, createdAt listing order
    pub async fn init_indexes(&self) -> MediaResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "publicId": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_public_id_unique".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "refId": 1 })
                .options(
                    IndexOptions::builder()
                        .sparse(true)
                        .name("idx_ref_id".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "purpose": 1, "createdAt": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_purpose_created".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Media indexes created successfully");
        Ok(())
    }

    fn build_filter(purpose: Option<MediaPurpose>) -> mongodb::bson::Document {
        match purpose {
            Some(purpose) => doc! { "purpose": purpose.to_string() },
            None => doc! {},
        }
    }
}

#[async_trait]
impl MediaRepository for MongoMediaRepository {
    #[instrument(skip(self, media), fields(public_id = %media.public_id))]
    async fn insert(&self, media: Media) -> MediaResult<Media> {
        self.collection
            .insert_one(&media)
            .await
            .map_err(|err| match MediaError::from(err) {
                MediaError::DuplicatePublicId(_) => {
                    MediaError::DuplicatePublicId(media.public_id.clone())
                }
                other => other,
            })?;

        tracing::info!(media_id = %media.id, "Media record created");
        Ok(media)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> MediaResult<Option<Media>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let media = self.collection.find_one(filter).await?;
        Ok(media)
    }

    #[instrument(skip(self))]
    async fn find_page(
        &self,
        purpose: Option<MediaPurpose>,
        pagination: Pagination,
    ) -> MediaResult<(Vec<Media>, u64)> {
        use futures_util::TryStreamExt;

        let filter = Self::build_filter(purpose);

        let options = mongodb::options::FindOptions::builder()
            .limit(pagination.limit())
            .skip(pagination.skip())
            .sort(doc! { "createdAt": -1 })
            .build();

        let (total, items) = tokio::try_join!(
            async { self.collection.count_documents(filter.clone()).await },
            async {
                let cursor = self
                    .collection
                    .find(filter.clone())
                    .with_options(options)
                    .await?;
                cursor.try_collect::<Vec<Media>>().await
            }
        )?;

        Ok((items, total))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, purpose: Option<MediaPurpose>) -> MediaResult<Vec<Media>> {
        use futures_util::TryStreamExt;

        let filter = Self::build_filter(purpose);
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();

        let cursor = self.collection.find(filter).with_options(options).await?;
        let items: Vec<Media> = cursor.try_collect().await?;
        Ok(items)
    }

    #[instrument(skip(self))]
    async fn find_by_ref(&self, ref_id: &str) -> MediaResult<Vec<Media>> {
        use futures_util::TryStreamExt;

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();

        let cursor = self
            .collection
            .find(doc! { "refId": ref_id })
            .with_options(options)
            .await?;
        let items: Vec<Media> = cursor.try_collect().await?;
        Ok(items)
    }

    #[instrument(skip(self))]
    async fn count(&self, purpose: Option<MediaPurpose>) -> MediaResult<u64> {
        let count = self
            .collection
            .count_documents(Self::build_filter(purpose))
            .await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> MediaResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count == 0 {
            return Err(MediaError::NotFound(id));
        }

        tracing::info!(media_id = %id, "Media record deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_empty() {
        let doc = MongoMediaRepository::build_filter(None);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_build_filter_with_purpose() {
        let doc = MongoMediaRepository::build_filter(Some(MediaPurpose::MenuItem));
        assert_eq!(doc.get_str("purpose").unwrap(), "menu-item");
    }
}
