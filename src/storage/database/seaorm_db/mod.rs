// Module declarations
mod connection;
mod group_ops;
mod member_ops;
mod project_ops;
mod types;

// Re-export public types
pub use types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};
