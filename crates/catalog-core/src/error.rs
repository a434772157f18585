//! Unified error types for all layers of the catalog service.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the catalog service.
///
/// Every layer returns this type; the REST layer maps it onto HTTP status
/// codes via [`CatalogError::status_code`].
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Database(_) | Self::Cache(_) | Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns `true` for failures of the server or its dependencies.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            // PostgreSQL: string_data_right_truncation, numeric_value_out_of_range,
            // not_null_violation, check_violation
            if let Some(code) = db_err.code() {
                if matches!(code.as_ref(), "22001" | "22003" | "23502" | "23514") {
                    return Self::Validation(db_err.message().to_string());
                }
            }
        }
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {err}"))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Message returned in place of the detail of server-side failures.
    pub const GENERIC_SERVER_MESSAGE: &'static str = "An unexpected error occurred";

    /// Creates a new error response from a `CatalogError`.
    ///
    /// Server-side failures get a generic message so that connection
    /// strings and driver messages never reach the client.
    #[must_use]
    pub fn from_error(error: &CatalogError) -> Self {
        let message = if error.is_server_error() {
            Self::GENERIC_SERVER_MESSAGE.to_string()
        } else {
            error.to_string()
        };

        Self {
            code: error.error_code().to_string(),
            message,
        }
    }
}

impl From<&CatalogError> for ErrorResponse {
    fn from(error: &CatalogError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(CatalogError::not_found("Product", 1).status_code(), 404);
        assert_eq!(CatalogError::validation("id mismatch").status_code(), 400);
        assert_eq!(CatalogError::Database("down".to_string()).status_code(), 500);
        assert_eq!(CatalogError::Cache("down".to_string()).status_code(), 500);
        assert_eq!(CatalogError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CatalogError::not_found("Product", 1).error_code(), "NOT_FOUND");
        assert_eq!(CatalogError::validation("bad").error_code(), "VALIDATION_ERROR");
        assert_eq!(CatalogError::Cache("x".to_string()).error_code(), "CACHE_ERROR");
        assert_eq!(CatalogError::internal("x").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_not_found_display() {
        let err = CatalogError::not_found("Product", 42);
        assert_eq!(err.to_string(), "Resource not found: Product with id 42");
    }

    #[test]
    fn test_error_response_keeps_client_errors() {
        let err = CatalogError::validation("name: length");
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "VALIDATION_ERROR");
        assert!(response.message.contains("name: length"));
    }

    #[test]
    fn test_error_response_hides_server_detail() {
        let err = CatalogError::Cache("connection refused (redis://secret@host)".to_string());
        let response = ErrorResponse::from(&err);
        assert_eq!(response.code, "CACHE_ERROR");
        assert_eq!(response.message, ErrorResponse::GENERIC_SERVER_MESSAGE);
    }

    #[test]
    fn test_json_error_is_internal() {
        let err: CatalogError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, CatalogError::Internal(_)));
    }
}
