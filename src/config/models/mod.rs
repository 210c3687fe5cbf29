//! Configuration data models
//!
//! This module defines all configuration structures used by the crate.

pub mod authz;
pub mod logging;
pub mod security;
pub mod storage;

// Re-export all configuration types
pub use authz::*;
pub use logging::*;
pub use security::*;
pub use storage::*;

/// Default database URL
pub fn default_database_url() -> String {
    "sqlite://data/registry.db?mode=rwc".to_string()
}

/// Default maximum database connections
pub fn default_max_connections() -> u32 {
    10
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
