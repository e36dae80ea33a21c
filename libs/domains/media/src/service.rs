//! Media Service - upload orchestration and record keeping

use async_trait::async_trait;
use axum_helpers::{Paginated, Pagination};
use media_store::{MediaStore, StoredObject};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{MediaError, MediaResult};
use crate::models::{Media, MediaCount, MediaPurpose, RemoteUpload};
use crate::repository::MediaRepository;

/// Registry seam for uploads performed by other domains.
///
/// Catalog media uploads go through the object store directly but still
/// leave a library record behind; this trait is the only thing those
/// domains need to know about the media library.
#[async_trait]
pub trait MediaArchive: Send + Sync {
    /// Record an already-completed upload.
    async fn record(
        &self,
        object: StoredObject,
        purpose: MediaPurpose,
        ref_id: Option<String>,
    ) -> MediaResult<Media>;
}

/// Media service: uploads through the object-storage collaborator plus
/// metadata records in the repository.
pub struct MediaService<R: MediaRepository, S: MediaStore> {
    repository: Arc<R>,
    store: Arc<S>,
}

impl<R: MediaRepository, S: MediaStore> MediaService<R, S> {
    pub fn new(repository: R, store: Arc<S>) -> Self {
        Self {
            repository: Arc::new(repository),
            store,
        }
    }

    /// Upload raw bytes and record the result.
    #[instrument(skip(self, bytes), fields(name = %name, size = bytes.len()))]
    pub async fn upload_buffer(
        &self,
        name: String,
        bytes: Vec<u8>,
        purpose: MediaPurpose,
        ref_id: Option<String>,
    ) -> MediaResult<Media> {
        if bytes.is_empty() {
            return Err(MediaError::Validation("Uploaded file is empty".to_string()));
        }

        let public_id = suggested_public_id(purpose);
        let object = self.store.upload_buffer(bytes, &public_id).await?;

        self.repository
            .insert(Media::from_stored(object, name, purpose, ref_id))
            .await
    }

    /// Have the backend fetch a remote source and record the result.
    #[instrument(skip(self, input), fields(url = %input.url))]
    pub async fn upload_remote(&self, input: RemoteUpload) -> MediaResult<Media> {
        input
            .validate()
            .map_err(|e| MediaError::Validation(e.to_string()))?;

        let public_id = suggested_public_id(input.purpose);
        let object = self.store.upload_from_source(&input.url, &public_id).await?;

        let name = input
            .name
            .unwrap_or_else(|| format!("remote-{}", public_id));

        self.repository
            .insert(Media::from_stored(object, name, input.purpose, input.ref_id))
            .await
    }

    /// One page of records, newest first.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        purpose: Option<MediaPurpose>,
        pagination: Pagination,
    ) -> MediaResult<Paginated<Media>> {
        let (items, total) = self.repository.find_page(purpose, pagination).await?;
        Ok(Paginated::new(items, total, pagination))
    }

    /// Every record, newest first.
    #[instrument(skip(self))]
    pub async fn list_all(&self, purpose: Option<MediaPurpose>) -> MediaResult<Vec<Media>> {
        self.repository.find_all(purpose).await
    }

    /// Records back-referencing one owning entity.
    #[instrument(skip(self))]
    pub async fn by_ref(&self, ref_id: &str) -> MediaResult<Vec<Media>> {
        self.repository.find_by_ref(ref_id).await
    }

    #[instrument(skip(self))]
    pub async fn count(&self, purpose: Option<MediaPurpose>) -> MediaResult<MediaCount> {
        let count = self.repository.count(purpose).await?;
        Ok(MediaCount {
            count,
            purpose: purpose
                .map(|p| p.to_string())
                .unwrap_or_else(|| "all".to_string()),
        })
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> MediaResult<Media> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(MediaError::NotFound(id))
    }

    /// Delete the stored asset, then its record.
    ///
    /// Store failures abort before the record is touched, so a record never
    /// points at a deleted asset.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> MediaResult<Media> {
        let media = self.get(id).await?;
        self.store.delete(&media.public_id).await?;
        self.repository.delete(id).await?;
        Ok(media)
    }
}

#[async_trait]
impl<R: MediaRepository, S: MediaStore> MediaArchive for MediaService<R, S> {
    #[instrument(skip(self, object), fields(public_id = %object.public_id))]
    async fn record(
        &self,
        object: StoredObject,
        purpose: MediaPurpose,
        ref_id: Option<String>,
    ) -> MediaResult<Media> {
        let name = object.public_id.clone();
        self.repository
            .insert(Media::from_stored(object, name, purpose, ref_id))
            .await
    }
}

impl<R: MediaRepository, S: MediaStore> Clone for MediaService<R, S> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            store: Arc::clone(&self.store),
        }
    }
}

/// Storage public id: `{purpose}-{6 random chars}`.
fn suggested_public_id(purpose: MediaPurpose) -> String {
    format!("{}-{}", purpose, short_id::random_suffix(6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockMediaRepository;
    use media_store::{MockMediaStore, StoreError};

    fn stored(public_id: &str) -> StoredObject {
        StoredObject {
            url: format!("https://cdn.example.com/{}.webp", public_id),
            public_id: public_id.to_string(),
            format: "webp".to_string(),
            resource_type: "image".to_string(),
            width: 800,
            height: 600,
            bytes: 2048,
        }
    }

    #[tokio::test]
    async fn upload_buffer_stores_then_records() {
        let mut store = MockMediaStore::new();
        store
            .expect_upload_buffer()
            .withf(|bytes, public_id| !bytes.is_empty() && public_id.starts_with("banner-"))
            .returning(|_, public_id| Ok(stored(public_id)));

        let mut repo = MockMediaRepository::new();
        repo.expect_insert()
            .withf(|media| media.purpose == MediaPurpose::Banner && media.ref_id.is_none())
            .returning(|media| Ok(media));

        let service = MediaService::new(repo, Arc::new(store));
        let media = service
            .upload_buffer("hero.webp".to_string(), vec![1, 2, 3], MediaPurpose::Banner, None)
            .await
            .unwrap();

        assert_eq!(media.name, "hero.webp");
        assert!((media.aspect_ratio - 800.0 / 600.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn upload_buffer_rejects_empty_file() {
        let store = MockMediaStore::new();
        let repo = MockMediaRepository::new();
        let service = MediaService::new(repo, Arc::new(store));

        let result = service
            .upload_buffer("empty".to_string(), Vec::new(), MediaPurpose::General, None)
            .await;
        assert!(matches!(result, Err(MediaError::Validation(_))));
    }

    #[tokio::test]
    async fn upload_remote_derives_name_from_public_id() {
        let mut store = MockMediaStore::new();
        store
            .expect_upload_from_source()
            .returning(|_, public_id| Ok(stored(public_id)));

        let mut repo = MockMediaRepository::new();
        repo.expect_insert().returning(|media| Ok(media));

        let service = MediaService::new(repo, Arc::new(store));
        let media = service
            .upload_remote(RemoteUpload {
                url: "https://example.com/logo.png".to_string(),
                name: None,
                purpose: MediaPurpose::Logo,
                ref_id: None,
            })
            .await
            .unwrap();

        assert!(media.name.starts_with("remote-logo-"));
    }

    #[tokio::test]
    async fn delete_skips_record_when_store_fails() {
        let mut store = MockMediaStore::new();
        store
            .expect_delete()
            .returning(|_| Err(StoreError::Rejected("down".to_string())));

        let id = Uuid::now_v7();
        let mut repo = MockMediaRepository::new();
        repo.expect_get_by_id().returning(move |_| {
            Ok(Some(Media::from_stored(
                stored("logo-abc123"),
                "logo.png".to_string(),
                MediaPurpose::Logo,
                None,
            )))
        });
        // No expect_delete: the record must survive a store failure.

        let service = MediaService::new(repo, Arc::new(store));
        let result = service.delete(id).await;
        assert!(matches!(result, Err(MediaError::Store(_))));
    }

    #[tokio::test]
    async fn archive_record_uses_public_id_as_name() {
        let store = MockMediaStore::new();
        let mut repo = MockMediaRepository::new();
        repo.expect_insert()
            .withf(|media| media.name == media.public_id && media.ref_id.as_deref() == Some("tea--01--x"))
            .returning(|media| Ok(media));

        let service = MediaService::new(repo, Arc::new(store));
        let media = service
            .record(
                stored("menu-item-xyz789"),
                MediaPurpose::MenuItem,
                Some("tea--01--x".to_string()),
            )
            .await
            .unwrap();
        assert_eq!(media.name, "menu-item-xyz789");
    }
}
