//! Core data structures and collaborator contracts
//!
//! Models describe the principals, projects and membership rows the
//! authorization core reads. Traits describe the storage collaborators it
//! consumes but never implements itself.

pub mod models;
pub mod traits;
