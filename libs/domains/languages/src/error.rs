use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("Language not found: {0}")]
    NotFound(String),

    #[error("Language code already exists")]
    DuplicateCode,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type LanguageResult<T> = Result<T, LanguageError>;

/// Convert LanguageError to AppError for standardized error responses
impl From<LanguageError> for AppError {
    fn from(err: LanguageError) -> Self {
        match err {
            LanguageError::NotFound(what) => {
                AppError::NotFound(format!("Language {} not found", what))
            }
            LanguageError::DuplicateCode => {
                AppError::Conflict("Language code already exists".to_string())
            }
            LanguageError::Validation(msg) => AppError::BadRequest(msg),
            LanguageError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for LanguageError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for LanguageError {
    fn from(err: mongodb::error::Error) -> Self {
        if database::mongodb::is_duplicate_key(&err) {
            LanguageError::DuplicateCode
        } else {
            LanguageError::Database(err.to_string())
        }
    }
}
