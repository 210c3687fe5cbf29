//! Helper functions for creating and classifying errors

use super::types::AuthzError;

impl AuthzError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn cancelled<S: Into<String>>(message: S) -> Self {
        Self::Cancelled(message.into())
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// True when the error came from a storage collaborator rather than the caller.
    ///
    /// A request boundary must not turn these into "permission denied".
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::Storage(_) | Self::Timeout(_) | Self::Cancelled(_)
        )
    }

    /// True when the caller passed malformed input
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
