//! Type-safe error codes for API responses.
//!
//! Single source of truth for the error codes used across the application.
//! Each error code includes:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Invalid JSON format in request body
    InvalidJson,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Malformed request (bad path/query parameter, unusable multipart body)
    BadRequest,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with current resource state (e.g., duplicate identifier)
    Conflict,

    /// Request payload is semantically incorrect
    UnprocessableEntity,

    // Server errors (1500s)
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Database errors (2000s)
    /// Database connection or query error
    DatabaseError,

    /// Database query returned no results
    DatabaseNotFound,

    // Upstream collaborator errors (3000s)
    /// Object storage or another upstream dependency failed
    UpstreamError,

    // Serialization / IO (4000-5000s)
    /// I/O failure
    IoError,

    /// JSON (de)serialization failure
    SerdeJsonError,
}

impl ErrorCode {
    /// Machine-readable identifier sent to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::JsonExtraction => "JSON_EXTRACTION",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::DatabaseNotFound => "DATABASE_NOT_FOUND",
            ErrorCode::UpstreamError => "UPSTREAM_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Integer code for logs and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::InvalidJson => 1002,
            ErrorCode::JsonExtraction => 1003,
            ErrorCode::BadRequest => 1004,
            ErrorCode::NotFound => 1005,
            ErrorCode::Conflict => 1006,
            ErrorCode::UnprocessableEntity => 1007,
            ErrorCode::InternalError => 1500,
            ErrorCode::ServiceUnavailable => 1503,
            ErrorCode::DatabaseError => 2001,
            ErrorCode::DatabaseNotFound => 2002,
            ErrorCode::UpstreamError => 3001,
            ErrorCode::IoError => 4001,
            ErrorCode::SerdeJsonError => 5001,
        }
    }

    /// Default human-readable message.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::InvalidJson => "Invalid JSON format",
            ErrorCode::JsonExtraction => "Failed to read JSON request body",
            ErrorCode::BadRequest => "Malformed request",
            ErrorCode::NotFound => "Requested resource was not found",
            ErrorCode::Conflict => "Resource already exists",
            ErrorCode::UnprocessableEntity => "Request payload is semantically incorrect",
            ErrorCode::InternalError => "An unexpected error occurred",
            ErrorCode::ServiceUnavailable => "Service is temporarily unavailable",
            ErrorCode::DatabaseError => "A database error occurred",
            ErrorCode::DatabaseNotFound => "Database query returned no results",
            ErrorCode::UpstreamError => "An upstream dependency failed",
            ErrorCode::IoError => "An I/O error occurred",
            ErrorCode::SerdeJsonError => "Failed to (de)serialize JSON",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_serde_representation() {
        let serialized = serde_json::to_string(&ErrorCode::Conflict).unwrap();
        assert_eq!(serialized, format!("\"{}\"", ErrorCode::Conflict.as_str()));
    }

    #[test]
    fn test_codes_are_unique() {
        let all = [
            ErrorCode::ValidationError,
            ErrorCode::InvalidJson,
            ErrorCode::JsonExtraction,
            ErrorCode::BadRequest,
            ErrorCode::NotFound,
            ErrorCode::Conflict,
            ErrorCode::UnprocessableEntity,
            ErrorCode::InternalError,
            ErrorCode::ServiceUnavailable,
            ErrorCode::DatabaseError,
            ErrorCode::DatabaseNotFound,
            ErrorCode::UpstreamError,
            ErrorCode::IoError,
            ErrorCode::SerdeJsonError,
        ];
        let mut codes: Vec<i32> = all.iter().map(ErrorCode::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_client_errors_use_1000_range() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::NotFound.code(), 1005);
        assert_eq!(ErrorCode::Conflict.code(), 1006);
    }
}
