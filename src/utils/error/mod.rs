//! Error handling utilities
//!
//! This module defines the error taxonomy shared by the authorization core and
//! its storage collaborators.

pub mod error;

// Re-export commonly used types
pub use error::*;
