use sea_orm::DatabaseConnection;

/// SeaORM-based database implementation
#[derive(Debug)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

/// Database statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseStats {
    /// Number of live projects
    pub projects: u64,
    /// Number of membership rows
    pub members: u64,
}
