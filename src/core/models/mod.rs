//! Core data models for the authorization core

pub mod member;
pub mod project;
pub mod user;

// Re-export commonly used types
pub use member::*;
pub use project::*;
pub use user::*;
