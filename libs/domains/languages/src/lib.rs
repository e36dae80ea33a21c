//! Languages Domain
//!
//! Reference data for the languages the content model is authored in:
//! display label, lowercase language code (unique), uppercase country code.
//! Plain CRUD; no localization logic of its own.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{LanguageError, LanguageResult};
pub use handlers::ApiDoc;
pub use models::{CreateLanguage, Language, UpdateLanguage};
pub use mongodb::MongoLanguageRepository;
pub use repository::LanguageRepository;
pub use service::LanguageService;
