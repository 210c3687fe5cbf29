//! Error response mapping for request boundaries

use super::types::AuthzError;
use serde::{Deserialize, Serialize};

/// Error response body a request boundary can serialize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl AuthzError {
    /// HTTP status a request boundary would typically answer with
    pub fn status_code(&self) -> u16 {
        match self {
            AuthzError::InvalidInput(_) => 400,
            AuthzError::NotFound(_) => 404,
            // Client closed request
            AuthzError::Cancelled(_) => 499,
            AuthzError::Database(_) | AuthzError::Storage(_) | AuthzError::Timeout(_) => 503,
            AuthzError::Config(_)
            | AuthzError::Yaml(_)
            | AuthzError::Serialization(_)
            | AuthzError::Io(_)
            | AuthzError::Internal(_) => 500,
        }
    }

    /// Stable machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthzError::Config(_) => "CONFIG_ERROR",
            AuthzError::Database(_) => "DATABASE_ERROR",
            AuthzError::Storage(_) => "STORAGE_ERROR",
            AuthzError::Timeout(_) => "TIMEOUT",
            AuthzError::Cancelled(_) => "CANCELLED",
            AuthzError::InvalidInput(_) => "INVALID_INPUT",
            AuthzError::NotFound(_) => "NOT_FOUND",
            AuthzError::Yaml(_) | AuthzError::Serialization(_) => "PARSE_ERROR",
            AuthzError::Io(_) => "IO_ERROR",
            AuthzError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Build the serializable response body
    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            // Driver messages can leak schema details
            AuthzError::Database(_) => "Database operation failed".to_string(),
            _ => self.to_string(),
        };

        ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message,
            },
        }
    }
}
