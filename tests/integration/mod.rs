//! Integration tests for registry-authz
//!
//! These tests run the authorization core against real storage backends
//! without mocking.

pub mod config_tests;
pub mod database_tests;
pub mod security_context_tests;
