//! FAQ Domain
//!
//! Multilingual question/answer entries with a `hide` flag separating the
//! public read path (resolved into one language, hidden entries filtered)
//! from the admin read path (raw documents). Public identifiers use the
//! random-suffix scheme and rotate whenever the position changes.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{FaqError, FaqResult};
pub use handlers::ApiDoc;
pub use models::{CreateFaq, Faq, FaqView, UpdateFaq};
pub use mongodb::MongoFaqRepository;
pub use repository::FaqRepository;
pub use service::FaqService;
