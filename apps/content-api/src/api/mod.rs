//! API routes module
//!
//! Wires each domain's router to its MongoDB repository and the shared
//! object-storage client. These routes are nested under /api by
//! axum_helpers::create_router.

pub mod health;

use axum::Router;
use domain_catalog::{MongoProductRepository, ProductService};
use domain_faqs::{FaqService, MongoFaqRepository};
use domain_languages::{LanguageService, MongoLanguageRepository};
use domain_media::{MediaArchive, MediaService, MongoMediaRepository};
use domain_pages::{MongoPageRepository, PageService};
use mongodb::Database;
use std::sync::Arc;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    let media_service = MediaService::new(
        MongoMediaRepository::new(&state.db),
        Arc::clone(&state.store),
    );
    let archive: Arc<dyn MediaArchive> = Arc::new(media_service.clone());

    let product_service = ProductService::new(
        MongoProductRepository::new(&state.db),
        Arc::clone(&state.store),
    )
    .with_archive(archive);

    let faq_service = FaqService::new(MongoFaqRepository::new(&state.db));
    let page_service = PageService::new(MongoPageRepository::new(&state.db));
    let language_service = LanguageService::new(MongoLanguageRepository::new(&state.db));

    Router::new()
        .nest("/products", domain_catalog::handlers::router(product_service))
        .nest("/faqs", domain_faqs::handlers::router(faq_service))
        .nest("/pages", domain_pages::handlers::router(page_service))
        .nest("/languages", domain_languages::handlers::router(language_service))
        .nest("/media", domain_media::handlers::router(media_service))
        .merge(health::router(state.clone()))
}

/// Create the unique indexes every collection relies on
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoProductRepository::new(db)
        .init_indexes()
        .await
        .map_err(|e| eyre::eyre!("product indexes: {}", e))?;
    MongoFaqRepository::new(db)
        .init_indexes()
        .await
        .map_err(|e| eyre::eyre!("faq indexes: {}", e))?;
    MongoPageRepository::new(db)
        .init_indexes()
        .await
        .map_err(|e| eyre::eyre!("page indexes: {}", e))?;
    MongoLanguageRepository::new(db)
        .init_indexes()
        .await
        .map_err(|e| eyre::eyre!("language indexes: {}", e))?;
    MongoMediaRepository::new(db)
        .init_indexes()
        .await
        .map_err(|e| eyre::eyre!("media indexes: {}", e))?;
    Ok(())
}
