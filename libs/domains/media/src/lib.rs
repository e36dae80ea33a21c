//! Media Library Domain
//!
//! Upload handling and metadata records for stored assets. Every upload goes
//! through the object-storage collaborator ([`media_store::MediaStore`]) and
//! leaves behind a [`Media`] record carrying the backend metadata plus an
//! optional `refId` back-reference to the owning entity. The back-reference
//! is a lookup key, not ownership: deleting the referenced entity leaves the
//! media records in place.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{MediaError, MediaResult};
pub use handlers::ApiDoc;
pub use models::{Media, MediaCount, MediaFilter, MediaPurpose, RemoteUpload};
pub use mongodb::MongoMediaRepository;
pub use repository::MediaRepository;
pub use service::{MediaArchive, MediaService};
