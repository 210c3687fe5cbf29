//! Collaborator contracts consumed by the authorization core
//!
//! Implementations live in [`crate::storage`]; tests substitute fakes.

pub mod member_store;
pub mod project_manager;

pub use member_store::*;
pub use project_manager::*;
