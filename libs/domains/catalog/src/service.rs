//! Product Service - business rules over the repository and the
//! object-storage collaborator.

use axum_helpers::{Paginated, Pagination};
use domain_media::{MediaArchive, MediaPurpose};
use media_store::MediaStore;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CatalogFilter, CatalogStats, Category, CreateProduct, MediaOrder, Product, ProductMedia,
    UpdateProduct, UploadedFile,
};
use crate::projection::{ProductCard, ProductDetail};
use crate::repository::ProductRepository;

/// Upper bound on gallery files per upload request
pub const MAX_GALLERY_FILES: usize = 10;

/// Result of a media upload: the persisted document plus, when the batch
/// was cut short, the failure that stopped it.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaUploadOutcome {
    pub product: Product,
    /// Number of files that reached object storage
    pub uploaded: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<UploadFailure>,
}

/// The file that broke a batch, and why
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadFailure {
    pub file: String,
    pub error: String,
}

/// Product service providing the catalog business logic.
///
/// Public reads resolve into one language; admin reads return raw
/// documents. Media uploads run against the object-storage collaborator
/// and optionally leave records in the media library.
pub struct ProductService<R: ProductRepository, S: MediaStore> {
    repository: Arc<R>,
    store: Arc<S>,
    archive: Option<Arc<dyn MediaArchive>>,
}

impl<R: ProductRepository, S: MediaStore> ProductService<R, S> {
    pub fn new(repository: R, store: Arc<S>) -> Self {
        Self {
            repository: Arc::new(repository),
            store,
            archive: None,
        }
    }

    /// Also register every completed upload in the media library.
    pub fn with_archive(mut self, archive: Arc<dyn MediaArchive>) -> Self {
        self.archive = Some(archive);
        self
    }

    /// Create a new catalog entry
    #[instrument(skip(self, input), fields(category = %input.category))]
    pub async fn create(&self, input: CreateProduct) -> CatalogResult<Product> {
        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Public menu page: available entries only, projected into `lang`
    #[instrument(skip(self))]
    pub async fn menu_cards(
        &self,
        lang: &str,
        category: Option<Category>,
        pagination: Pagination,
    ) -> CatalogResult<Paginated<ProductCard>> {
        let filter = CatalogFilter {
            available: Some(true),
            category,
            search: None,
        };
        let (items, total) = self.repository.find_page(filter, pagination).await?;
        let cards = items
            .iter()
            .map(|product| ProductCard::project(product, lang))
            .collect();
        Ok(Paginated::new(cards, total, pagination))
    }

    /// Public search: available entries matching the term, projected into `lang`
    #[instrument(skip(self))]
    pub async fn search_cards(
        &self,
        lang: &str,
        term: &str,
        category: Option<Category>,
        pagination: Pagination,
    ) -> CatalogResult<Paginated<ProductCard>> {
        let filter = CatalogFilter {
            available: Some(true),
            category,
            search: Some(term.to_string()),
        };
        let (items, total) = self.repository.find_page(filter, pagination).await?;
        let cards = items
            .iter()
            .map(|product| ProductCard::project(product, lang))
            .collect();
        Ok(Paginated::new(cards, total, pagination))
    }

    /// Public detail view by public identifier
    #[instrument(skip(self))]
    pub async fn detail(&self, short_id: &str, lang: &str) -> CatalogResult<ProductDetail> {
        let product = self
            .repository
            .get_by_short_id(short_id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(short_id.to_string()))?;
        Ok(ProductDetail::project(&product, lang))
    }

    /// Admin page of raw documents, no availability filter
    #[instrument(skip(self))]
    pub async fn admin_page(&self, pagination: Pagination) -> CatalogResult<Paginated<Product>> {
        let (items, total) = self
            .repository
            .find_page(CatalogFilter::default(), pagination)
            .await?;
        Ok(Paginated::new(items, total, pagination))
    }

    /// Admin raw document by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> CatalogResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Catalog statistics from one aggregation pass
    #[instrument(skip(self))]
    pub async fn stats(&self) -> CatalogResult<CatalogStats> {
        self.repository.stats().await
    }

    /// Admin update; a position change recomposes the public identifier
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateProduct) -> CatalogResult<Product> {
        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Admin delete
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> CatalogResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Upload product media: at most one thumbnail plus a gallery batch.
    ///
    /// Uploads run sequentially; the first failure aborts the remainder of
    /// the batch. Nothing uploaded so far is rolled back: the document is
    /// updated in a single write carrying exactly the successful URLs, and
    /// the failure travels back alongside the updated product.
    #[instrument(skip(self, thumbnail, gallery), fields(gallery_len = gallery.len()))]
    pub async fn upload_media(
        &self,
        id: Uuid,
        thumbnail: Option<UploadedFile>,
        gallery: Vec<UploadedFile>,
    ) -> CatalogResult<MediaUploadOutcome> {
        if thumbnail.is_none() && gallery.is_empty() {
            return Err(CatalogError::Validation(
                "No files provided in the request".to_string(),
            ));
        }
        if gallery.len() > MAX_GALLERY_FILES {
            return Err(CatalogError::Validation(format!(
                "At most {} gallery files per request",
                MAX_GALLERY_FILES
            )));
        }

        let product = self.get(id).await?;
        let mut media = product.media.clone().unwrap_or_default();
        let mut uploaded = Vec::new();
        let mut failed: Option<UploadFailure> = None;

        if let Some(file) = thumbnail {
            match self.upload_one(&file).await {
                Ok(object) => {
                    media.thumbnail = object.url.clone();
                    uploaded.push(object);
                }
                Err(error) => {
                    failed = Some(UploadFailure {
                        file: file.name,
                        error,
                    });
                }
            }
        }

        if failed.is_none() {
            for file in gallery {
                match self.upload_one(&file).await {
                    Ok(object) => {
                        media.gallery.push(object.url.clone());
                        uploaded.push(object);
                    }
                    Err(error) => {
                        failed = Some(UploadFailure {
                            file: file.name,
                            error,
                        });
                        break;
                    }
                }
            }
        }

        // Persist only when something actually changed
        let product = if uploaded.is_empty() {
            product
        } else {
            self.repository.set_media(id, media).await?
        };

        if let Some(archive) = &self.archive {
            for object in &uploaded {
                if let Err(e) = archive
                    .record(
                        object.clone(),
                        MediaPurpose::MenuItem,
                        Some(product.short_id.clone()),
                    )
                    .await
                {
                    tracing::warn!(public_id = %object.public_id, "Media library record failed: {}", e);
                }
            }
        }

        Ok(MediaUploadOutcome {
            product,
            uploaded: uploaded.len(),
            failed,
        })
    }

    async fn upload_one(&self, file: &UploadedFile) -> Result<media_store::StoredObject, String> {
        let public_id = format!("{}-{}", MediaPurpose::MenuItem, short_id::random_suffix(6));
        self.store
            .upload_buffer(file.bytes.clone(), &public_id)
            .await
            .map_err(|e| e.to_string())
    }

    /// Rearrange existing media: swap the thumbnail and/or reorder the
    /// gallery. Only URLs already attached to the product are accepted.
    #[instrument(skip(self, order))]
    pub async fn reorder_media(&self, id: Uuid, order: MediaOrder) -> CatalogResult<Product> {
        order
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        let product = self.get(id).await?;
        let current = product.media.clone().unwrap_or_default();

        let known = |url: &str| current.thumbnail == url || current.gallery.iter().any(|u| u == url);

        if !known(&order.thumbnail) {
            return Err(CatalogError::Validation(format!(
                "Unknown media URL: {}",
                order.thumbnail
            )));
        }
        if let Some(unknown) = order.gallery.iter().find(|url| !known(url)) {
            return Err(CatalogError::Validation(format!(
                "Unknown media URL: {}",
                unknown
            )));
        }

        self.repository
            .set_media(
                id,
                ProductMedia {
                    thumbnail: order.thumbnail,
                    gallery: order.gallery,
                },
            )
            .await
    }
}

impl<R: ProductRepository, S: MediaStore> Clone for ProductService<R, S> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            store: Arc::clone(&self.store),
            archive: self.archive.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::create_input;
    use crate::repository::MockProductRepository;
    use media_store::{MockMediaStore, StoreError, StoredObject};
    use mockall::predicate;

    fn stored(public_id: &str) -> StoredObject {
        StoredObject {
            url: format!("https://cdn.example.com/{}.webp", public_id),
            public_id: public_id.to_string(),
            format: "webp".to_string(),
            resource_type: "image".to_string(),
            width: 800,
            height: 600,
            bytes: 4096,
        }
    }

    fn file(name: &str) -> UploadedFile {
        UploadedFile {
            name: name.to_string(),
            bytes: vec![0xFF, 0xD8],
        }
    }

    fn service(
        repo: MockProductRepository,
        store: MockMediaStore,
    ) -> ProductService<MockProductRepository, MockMediaStore> {
        ProductService::new(repo, Arc::new(store))
    }

    #[tokio::test]
    async fn create_rejects_missing_english_description() {
        let mut input = create_input(1, "Hot Milk Tea");
        input.description = localization::LocalizedText::from_pairs([("bn", "বর্ণনা")]);

        let svc = service(MockProductRepository::new(), MockMediaStore::new());
        let result = svc.create(input).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn menu_cards_force_availability_filter() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_page()
            .withf(|filter, _| filter.available == Some(true) && filter.search.is_none())
            .returning(|_, _| Ok((vec![Product::new(create_input(1, "Hot Milk Tea"))], 1)));

        let svc = service(repo, MockMediaStore::new());
        let page = svc
            .menu_cards("bn", None, Pagination::default())
            .await
            .unwrap();
        assert_eq!(page.meta.total_items, 1);
        assert_eq!(page.data[0].title, "গরম দুধ চা");
    }

    #[tokio::test]
    async fn search_cards_carry_term_and_category() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_page()
            .withf(|filter, _| {
                filter.available == Some(true)
                    && filter.category == Some(Category::Tea)
                    && filter.search.as_deref() == Some("চা")
            })
            .returning(|_, _| Ok((Vec::new(), 0)));

        let svc = service(repo, MockMediaStore::new());
        let page = svc
            .search_cards("bn", "চা", Some(Category::Tea), Pagination::default())
            .await
            .unwrap();
        assert_eq!(page.meta.total_items, 0);
    }

    #[tokio::test]
    async fn detail_misses_surface_as_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_short_id()
            .with(predicate::eq("tea--99--gone"))
            .returning(|_| Ok(None));

        let svc = service(repo, MockMediaStore::new());
        let result = svc.detail("tea--99--gone", "en").await;
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn upload_media_rejects_empty_request() {
        let svc = service(MockProductRepository::new(), MockMediaStore::new());
        let result = svc.upload_media(Uuid::now_v7(), None, Vec::new()).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn gallery_failure_persists_only_prior_successes() {
        // Three gallery files; the second upload fails. The batch aborts,
        // the persisted gallery carries exactly the first URL, and the
        // failure is reported next to the updated product.
        let product = Product::new(create_input(1, "Hot Milk Tea"));
        let id = product.id;

        let mut repo = MockProductRepository::new();
        let lookup = product.clone();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(lookup.clone())));

        repo.expect_set_media()
            .withf(|_, media| media.gallery.len() == 1)
            .returning(move |_, media| {
                let mut updated = product.clone();
                updated.media = Some(media);
                Ok(updated)
            });

        let mut store = MockMediaStore::new();
        let mut call = 0;
        store.expect_upload_buffer().returning(move |_, public_id| {
            call += 1;
            if call == 2 {
                Err(StoreError::Rejected("quota exceeded".to_string()))
            } else {
                Ok(stored(public_id))
            }
        });

        let svc = service(repo, store);
        let outcome = svc
            .upload_media(id, None, vec![file("a.webp"), file("b.webp"), file("c.webp")])
            .await
            .unwrap();

        assert_eq!(outcome.uploaded, 1);
        let media = outcome.product.media.unwrap();
        assert_eq!(media.gallery.len(), 1);
        let failure = outcome.failed.unwrap();
        assert_eq!(failure.file, "b.webp");
        assert!(failure.error.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn thumbnail_failure_aborts_gallery_and_skips_write() {
        let product = Product::new(create_input(1, "Hot Milk Tea"));
        let id = product.id;

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(product.clone())));
        // No expect_set_media: nothing succeeded, nothing is written.

        let mut store = MockMediaStore::new();
        store
            .expect_upload_buffer()
            .times(1)
            .returning(|_, _| Err(StoreError::Rejected("down".to_string())));

        let svc = service(repo, store);
        let outcome = svc
            .upload_media(id, Some(file("thumb.webp")), vec![file("a.webp")])
            .await
            .unwrap();

        assert_eq!(outcome.uploaded, 0);
        assert_eq!(outcome.failed.unwrap().file, "thumb.webp");
    }

    #[tokio::test]
    async fn upload_media_caps_gallery_batch() {
        let svc = service(MockProductRepository::new(), MockMediaStore::new());
        let batch: Vec<UploadedFile> = (0..=MAX_GALLERY_FILES).map(|i| file(&format!("{}.webp", i))).collect();
        let result = svc.upload_media(Uuid::now_v7(), None, batch).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn reorder_rejects_unknown_urls() {
        let mut product = Product::new(create_input(1, "Hot Milk Tea"));
        product.media = Some(ProductMedia {
            thumbnail: "https://cdn.example.com/a.webp".to_string(),
            gallery: vec!["https://cdn.example.com/b.webp".to_string()],
        });

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(product.clone())));

        let svc = service(repo, MockMediaStore::new());
        let result = svc
            .reorder_media(
                Uuid::now_v7(),
                MediaOrder {
                    thumbnail: "https://cdn.example.com/elsewhere.webp".to_string(),
                    gallery: Vec::new(),
                },
            )
            .await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn reorder_swaps_thumbnail_into_gallery_order() {
        let mut product = Product::new(create_input(1, "Hot Milk Tea"));
        product.media = Some(ProductMedia {
            thumbnail: "https://cdn.example.com/a.webp".to_string(),
            gallery: vec![
                "https://cdn.example.com/b.webp".to_string(),
                "https://cdn.example.com/c.webp".to_string(),
            ],
        });
        let id = product.id;

        let mut repo = MockProductRepository::new();
        let lookup = product.clone();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(lookup.clone())));
        repo.expect_set_media()
            .withf(|_, media| {
                media.thumbnail == "https://cdn.example.com/b.webp" && media.gallery.len() == 2
            })
            .returning(move |_, media| {
                let mut updated = product.clone();
                updated.media = Some(media);
                Ok(updated)
            });

        let svc = service(repo, MockMediaStore::new());
        let updated = svc
            .reorder_media(
                id,
                MediaOrder {
                    thumbnail: "https://cdn.example.com/b.webp".to_string(),
                    gallery: vec![
                        "https://cdn.example.com/c.webp".to_string(),
                        "https://cdn.example.com/a.webp".to_string(),
                    ],
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.media.unwrap().thumbnail, "https://cdn.example.com/b.webp");
    }
}
