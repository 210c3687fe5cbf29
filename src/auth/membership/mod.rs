//! Membership resolution
//!
//! Computes the set of roles a principal holds on a project by merging its
//! direct membership row with the rows of every group it belongs to.

mod resolver;

pub use resolver::MembershipResolver;
