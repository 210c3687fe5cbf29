//! Error handling for the authorization core
//!
//! Denial is never an error: permission queries return `Ok(false)`. Errors are
//! reserved for storage failures, invalid caller input and configuration
//! problems.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{AuthzError, Result};
