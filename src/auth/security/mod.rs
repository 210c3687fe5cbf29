//! Request-scoped authorization decisions
//!
//! A [`SecurityContext`] binds one principal to the storage collaborators for
//! the lifetime of a request and answers every permission query for it.

mod context;

pub use context::SecurityContext;
