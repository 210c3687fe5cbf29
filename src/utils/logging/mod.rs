//! Logging setup and security audit logging
//!
//! All crate logging goes through `tracing`. `init_logging` installs a global
//! subscriber for binaries and tests that want one; libraries embedding this
//! crate may install their own instead.

pub mod audit;

pub use audit::AuditLogger;

use crate::config::LoggingConfig;
use crate::utils::error::{AuthzError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured level. Calling this again once a
/// subscriber is installed is a no-op.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| AuthzError::config(format!("Invalid log level: {}", e)))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if installed.is_err() {
        tracing::debug!("Global subscriber already installed");
    }

    Ok(())
}
