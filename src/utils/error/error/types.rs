//! Error types for the authorization core

use thiserror::Error;

/// Result type alias for the authorization core
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Main error type for the authorization core
#[derive(Error, Debug)]
pub enum AuthzError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Storage collaborator failures other than database driver errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Storage lookup timed out
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Storage lookup was cancelled before it completed
    #[error("Cancelled: {0}")]
    Cancelled(String),

    /// Caller supplied a malformed argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
