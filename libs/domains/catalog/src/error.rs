use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Product with shortId '{0}' already exists")]
    DuplicateShortId(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(what) => {
                AppError::NotFound(format!("Product {} not found", what))
            }
            CatalogError::DuplicateShortId(short_id) => {
                AppError::Conflict(format!("Product with shortId '{}' already exists", short_id))
            }
            CatalogError::Validation(msg) => AppError::BadRequest(msg),
            CatalogError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        if database::mongodb::is_duplicate_key(&err) {
            CatalogError::DuplicateShortId("shortId already in use".to_string())
        } else {
            CatalogError::Database(err.to_string())
        }
    }
}
