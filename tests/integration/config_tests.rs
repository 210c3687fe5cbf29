//! Configuration integration tests
//!
//! Environment variables are process-global, so every test that touches them
//! lives in a single test function.

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use registry_authz::config::{Config, Validate};
    use registry_authz::utils::logging::init_logging;
    use registry_authz::{Authz, AuthzError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VARS: [&str; 5] = [
        "AUTHZ_DATABASE_URL",
        "AUTHZ_DATABASE_MAX_CONNECTIONS",
        "AUTHZ_LOG_LEVEL",
        "AUTHZ_LOG_JSON",
        "AUTHZ_AUDIT_ADMIN_OVERRIDE",
    ];

    fn clear_vars() {
        for var in VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_from_env() {
        clear_vars();
        unsafe {
            std::env::set_var("AUTHZ_DATABASE_URL", "sqlite::memory:");
            std::env::set_var("AUTHZ_DATABASE_MAX_CONNECTIONS", "1");
            std::env::set_var("AUTHZ_LOG_LEVEL", "registry_authz=debug");
            std::env::set_var("AUTHZ_LOG_JSON", "true");
            std::env::set_var("AUTHZ_AUDIT_ADMIN_OVERRIDE", "false");
        }

        let config = assert_ok!(Config::from_env());
        assert_eq!(config.storage().database.url, "sqlite::memory:");
        assert!(config.storage().database.enabled);
        assert_eq!(config.storage().database.max_connections, 1);
        assert_eq!(config.logging().level, "registry_authz=debug");
        assert!(config.logging().json);
        assert!(!config.security().audit_admin_override);

        unsafe {
            std::env::set_var("AUTHZ_DATABASE_MAX_CONNECTIONS", "many");
        }
        let err = assert_err!(Config::from_env());
        assert!(matches!(err, AuthzError::Config(_)));

        clear_vars();
    }

    #[tokio::test]
    async fn test_yaml_file_with_sqlite_database() {
        let yaml = r#"
storage:
  database:
    url: "sqlite::memory:"
    max_connections: 1
    enabled: true
logging:
  level: "warn"
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = assert_ok!(Config::from_file(file.path()).await);
        assert!(config.authz.validate().is_ok());
        assert_ok!(init_logging(config.logging()));

        let authz = assert_ok!(Authz::new(config).await);
        assert!(authz.storage().database.is_some());
        assert_ok!(authz.health_check().await);

        let ctx = authz.security_context(None);
        assert!(!assert_ok!(ctx.has_read_perm("library").await));
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_a_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"storage: [not, a, map]\n").unwrap();

        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(matches!(err, AuthzError::Config(_)));
    }

    #[test]
    fn test_yaml_round_trip_keeps_defaults() {
        let yaml = assert_ok!(Config::default().to_yaml());
        let parsed: registry_authz::config::AuthzConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.logging.level, "info");
        assert!(parsed.storage.run_migrations);
    }
}
