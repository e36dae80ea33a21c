//! Pages Domain
//!
//! Static-page metadata keyed by a stable `key` (never regenerated):
//! translated title/description, SEO block, and an open-ended set of
//! per-page labels. The public read path serves either the full registry -
//! every page resolved into one language and keyed by `key` - or a single
//! resolved page; admin reads return raw documents.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{PageError, PageResult};
pub use handlers::ApiDoc;
pub use models::{CreatePage, Page, PageView, Seo, SeoView, UpdatePage};
pub use mongodb::MongoPageRepository;
pub use repository::PageRepository;
pub use service::PageService;
