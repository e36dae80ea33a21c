use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaqError {
    #[error("FAQ not found: {0}")]
    NotFound(String),

    #[error("FAQ with shortId '{0}' already exists")]
    DuplicateShortId(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type FaqResult<T> = Result<T, FaqError>;

/// Convert FaqError to AppError for standardized error responses
impl From<FaqError> for AppError {
    fn from(err: FaqError) -> Self {
        match err {
            FaqError::NotFound(what) => AppError::NotFound(format!("FAQ {} not found", what)),
            FaqError::DuplicateShortId(short_id) => {
                AppError::Conflict(format!("FAQ with shortId '{}' already exists", short_id))
            }
            FaqError::Validation(msg) => AppError::BadRequest(msg),
            FaqError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for FaqError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for FaqError {
    fn from(err: mongodb::error::Error) -> Self {
        if database::mongodb::is_duplicate_key(&err) {
            FaqError::DuplicateShortId("shortId already in use".to_string())
        } else {
            FaqError::Database(err.to_string())
        }
    }
}
