//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use axum_helpers::Pagination;
use chrono::Utc;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CatalogFilter, CatalogStats, Category, CategoryCount, CreateProduct, Product, ProductMedia,
    UpdateProduct, SEARCH_LANGS,
};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

/// `$facet` output shape of the stats pipeline
#[derive(Debug, Default, Deserialize)]
struct StatsFacets {
    #[serde(rename = "totalCount", default)]
    total_count: Vec<FacetCount>,
    #[serde(rename = "byCategory", default)]
    by_category: Vec<CategoryGroup>,
    #[serde(rename = "availableCount", default)]
    available_count: Vec<FacetCount>,
}

#[derive(Debug, Deserialize)]
struct FacetCount {
    count: i64,
}

#[derive(Debug, Deserialize)]
struct CategoryGroup {
    #[serde(rename = "_id")]
    category: Category,
    count: i64,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("menu");
        Self { collection }
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Initialize indexes: unique shortId, position listing order,
    /// category/availability filters
    pub async fn init_indexes(&self) -> CatalogResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "shortId": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
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
            IndexModel::builder()
                .keys(doc! { "category": 1, "logistics.isAvailable": 1, "position": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category_available".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "tags": 1 })
                .options(IndexOptions::builder().name("idx_tags".to_string()).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Build a MongoDB filter document from a CatalogFilter.
    ///
    /// Availability and category are AND-combined equality predicates; the
    /// free-text search adds an `$or` group spanning every configured
    /// language variant of title/description, the tags, and the shortId,
    /// all as case-insensitive substring matches.
    fn build_filter(filter: &CatalogFilter) -> Document {
        let mut doc = doc! {};

        if let Some(available) = filter.available {
            doc.insert("logistics.isAvailable", available);
        }

        if let Some(ref category) = filter.category {
            doc.insert("category", category.to_string());
        }

        if let Some(ref search) = filter.search {
            let regex = doc! { "$regex": search, "$options": "i" };
            let mut or_group: Vec<Document> = Vec::new();

            for lang in SEARCH_LANGS {
                let mut title_clause = Document::new();
                title_clause.insert(format!("title.{}", lang), regex.clone());
                or_group.push(title_clause);

                let mut description_clause = Document::new();
                description_clause.insert(format!("description.{}", lang), regex.clone());
                or_group.push(description_clause);
            }

            or_group.push(doc! { "tags": regex.clone() });
            or_group.push(doc! { "shortId": regex });

            doc.insert("$or", or_group);
        }

        doc
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(category = %input.category, position = input.position))]
    async fn create(&self, input: CreateProduct) -> CatalogResult<Product> {
        let product = Product::new(input);

        self.collection
            .insert_one(&product)
            .await
            .map_err(|err| match CatalogError::from(err) {
                CatalogError::DuplicateShortId(_) => {
                    CatalogError::DuplicateShortId(product.short_id.clone())
                }
                other => other,
            })?;

        tracing::info!(product_id = %product.id, short_id = %product.short_id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let product = self.collection.find_one(filter).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_short_id(&self, short_id: &str) -> CatalogResult<Option<Product>> {
        let product = self.collection.find_one(doc! { "shortId": short_id }).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_page(
        &self,
        filter: CatalogFilter,
        pagination: Pagination,
    ) -> CatalogResult<(Vec<Product>, u64)> {
        use futures_util::TryStreamExt;

        let mongo_filter = Self::build_filter(&filter);

        let options = mongodb::options::FindOptions::builder()
            .limit(pagination.limit())
            .skip(pagination.skip())
            .sort(doc! { "position": 1 })
            .build();

        // Count and slice concurrently; both see the same filter
        let (total, items) = tokio::try_join!(
            async { self.collection.count_documents(mongo_filter.clone()).await },
            async {
                let cursor = self
                    .collection
                    .find(mongo_filter.clone())
                    .with_options(options)
                    .await?;
                cursor.try_collect::<Vec<Product>>().await
            }
        )?;

        Ok((items, total))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateProduct) -> CatalogResult<Product> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let mut updated = existing;
        updated.apply_update(input);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(product_id = %id, short_id = %updated.short_id, "Product updated");
        Ok(updated)
    }

    #[instrument(skip(self, media))]
    async fn set_media(&self, id: Uuid, media: ProductMedia) -> CatalogResult<Product> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };

        let update = doc! {
            "$set": {
                "media": to_bson(&media).map_err(|e| CatalogError::Database(e.to_string()))?,
                "updatedAt": to_bson(&Utc::now()).map_err(|e| CatalogError::Database(e.to_string()))?,
            }
        };

        self.collection.update_one(filter.clone(), update).await?;

        let product = self
            .collection
            .find_one(filter)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        tracing::info!(product_id = %id, "Product media updated");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count == 0 {
            return Err(CatalogError::NotFound(id.to_string()));
        }

        tracing::info!(product_id = %id, "Product deleted");
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> CatalogResult<CatalogStats> {
        use futures_util::TryStreamExt;

        let pipeline = vec![doc! {
            "$facet": {
                "totalCount": [ { "$count": "count" } ],
                "byCategory": [
                    { "$group": { "_id": "$category", "count": { "$sum": 1 } } },
                    { "$sort": { "count": -1 } }
                ],
                "availableCount": [
                    { "$match": { "logistics.isAvailable": true } },
                    { "$count": "count" }
                ],
            }
        }];

        let mut cursor = self.collection.aggregate(pipeline).await?;
        let facets: StatsFacets = match cursor.try_next().await? {
            Some(doc) => mongodb::bson::from_document(doc)
                .map_err(|e| CatalogError::Database(e.to_string()))?,
            None => StatsFacets::default(),
        };

        Ok(CatalogStats {
            total: facets.total_count.first().map_or(0, |c| c.count as u64),
            available: facets.available_count.first().map_or(0, |c| c.count as u64),
            breakdown: facets
                .by_category
                .into_iter()
                .map(|group| CategoryCount {
                    category: group.category,
                    count: group.count as u64,
                })
                .collect(),
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_empty() {
        let doc = MongoProductRepository::build_filter(&CatalogFilter::default());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_build_filter_availability() {
        let filter = CatalogFilter {
            available: Some(true),
            ..Default::default()
        };
        let doc = MongoProductRepository::build_filter(&filter);
        assert_eq!(doc.get_bool("logistics.isAvailable").unwrap(), true);
    }

    #[test]
    fn test_build_filter_with_category() {
        let filter = CatalogFilter {
            category: Some(Category::Coffee),
            ..Default::default()
        };
        let doc = MongoProductRepository::build_filter(&filter);
        assert_eq!(doc.get_str("category").unwrap(), "coffee");
    }

    #[test]
    fn test_build_filter_search_spans_language_variants() {
        let filter = CatalogFilter {
            search: Some("চা".to_string()),
            ..Default::default()
        };
        let doc = MongoProductRepository::build_filter(&filter);

        let or_group = doc.get_array("$or").unwrap();
        // Two clauses per language plus tags and shortId
        assert_eq!(or_group.len(), SEARCH_LANGS.len() * 2 + 2);

        let keys: Vec<&str> = or_group
            .iter()
            .filter_map(|clause| clause.as_document())
            .flat_map(|clause| clause.keys().map(String::as_str))
            .collect();
        // A Bengali title hit must be reachable even when title.en misses
        assert!(keys.contains(&"title.bn"));
        assert!(keys.contains(&"description.bn"));
        assert!(keys.contains(&"tags"));
        assert!(keys.contains(&"shortId"));
    }

    #[test]
    fn test_build_filter_search_is_case_insensitive() {
        let filter = CatalogFilter {
            search: Some("Latte".to_string()),
            ..Default::default()
        };
        let doc = MongoProductRepository::build_filter(&filter);
        let or_group = doc.get_array("$or").unwrap();
        let first = or_group[0].as_document().unwrap();
        let clause = first.get_document("title.en").unwrap();
        assert_eq!(clause.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_build_filter_combines_and_around_or() {
        let filter = CatalogFilter {
            available: Some(true),
            category: Some(Category::Tea),
            search: Some("milk".to_string()),
        };
        let doc = MongoProductRepository::build_filter(&filter);
        // Top-level keys are implicitly ANDed around the $or group
        assert!(doc.contains_key("logistics.isAvailable"));
        assert!(doc.contains_key("category"));
        assert!(doc.contains_key("$or"));
    }

    #[test]
    fn test_stats_facets_parse_from_bson() {
        let doc = doc! {
            "totalCount": [ { "count": 10 } ],
            "byCategory": [
                { "_id": "tea", "count": 6 },
                { "_id": "coffee", "count": 4 }
            ],
            "availableCount": [ { "count": 8 } ],
        };
        let facets: StatsFacets = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(facets.total_count[0].count, 10);
        assert_eq!(facets.by_category[0].category, Category::Tea);
        assert_eq!(facets.by_category[0].count, 6);
        assert_eq!(facets.available_count[0].count, 8);
    }

    #[test]
    fn test_stats_facets_default_when_collection_empty() {
        // An empty collection yields empty facet arrays
        let doc = doc! { "totalCount": [], "byCategory": [], "availableCount": [] };
        let facets: StatsFacets = mongodb::bson::from_document(doc).unwrap();
        assert!(facets.total_count.is_empty());
        assert!(facets.by_category.is_empty());
    }
}
