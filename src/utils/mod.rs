//! Utility modules for the authorization core
//!
//! - **error**: Error types, helpers and response mapping
//! - **logging**: Subscriber setup and decision audit logging

pub mod error; // Error handling
pub mod logging; // Logging & auditing

pub use error::{AuthzError, Result};
pub use logging::{AuditLogger, init_logging};

/// Truncate string to specified length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
