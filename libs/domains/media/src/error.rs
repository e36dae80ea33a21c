use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use media_store::StoreError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Media record not found: {0}")]
    NotFound(Uuid),

    #[error("Media with publicId '{0}' already exists")]
    DuplicatePublicId(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Object storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Database error: {0}")]
    Database(String),
}

pub type MediaResult<T> = Result<T, MediaError>;

/// Convert MediaError to AppError for standardized error responses
impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::NotFound(id) => AppError::NotFound(format!("Media record {} not found", id)),
            MediaError::DuplicatePublicId(public_id) => {
                AppError::Conflict(format!("Media with publicId '{}' already exists", public_id))
            }
            MediaError::Validation(msg) => AppError::BadRequest(msg),
            MediaError::Store(e) => AppError::Upstream(e.to_string()),
            MediaError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for MediaError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for MediaError {
    fn from(err: mongodb::error::Error) -> Self {
        if database::mongodb::is_duplicate_key(&err) {
            MediaError::DuplicatePublicId("publicId already in use".to_string())
        } else {
            MediaError::Database(err.to_string())
        }
    }
}
