//! Catalog Domain
//!
//! The product catalog: multilingual menu entries addressed by a
//! human-readable short id, served either raw (admin) or projected into a
//! single requested language (public). Public reads come in two shapes -
//! compact cards for listings and a full detail view - and both degrade
//! missing translations to English silently.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (public + admin read paths)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules, id generation, media upload policy
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, projections
//! └─────────────┘
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod projection;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{
    CatalogFilter, CatalogStats, Category, CreateProduct, Logistics, MediaOrder, Product,
    ProductMedia, UnitKey, UpdateProduct, UploadedFile,
};
pub use mongodb::MongoProductRepository;
pub use projection::{ProductCard, ProductDetail};
pub use repository::ProductRepository;
pub use service::{MediaUploadOutcome, ProductService};
