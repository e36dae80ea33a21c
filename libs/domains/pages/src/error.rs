use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Page \"{0}\" not found")]
    NotFound(String),

    #[error("Page key '{0}' already exists")]
    DuplicateKey(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type PageResult<T> = Result<T, PageError>;

/// Convert PageError to AppError for standardized error responses
impl From<PageError> for AppError {
    fn from(err: PageError) -> Self {
        match err {
            PageError::NotFound(key) => AppError::NotFound(format!("Page \"{}\" not found", key)),
            PageError::DuplicateKey(key) => {
                AppError::Conflict(format!("Page key '{}' already exists", key))
            }
            PageError::Validation(msg) => AppError::BadRequest(msg),
            PageError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for PageError {
    fn from(err: mongodb::error::Error) -> Self {
        if database::mongodb::is_duplicate_key(&err) {
            PageError::DuplicateKey("page key already in use".to_string())
        } else {
            PageError::Database(err.to_string())
        }
    }
}
