//! Security context integration tests
//!
//! Every decision is checked against both storage backends seeded with the
//! same scenario.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::{Scenario, TestDatabase, UserFactory};
    use registry_authz::config::{Config, SecurityConfig};
    use registry_authz::storage::memory::InMemoryStore;
    use registry_authz::utils::logging::AuditLogger;
    use registry_authz::{Authz, PermissionLevel, Role, StorageLayer, User};
    use std::sync::Arc;

    async fn backends() -> Vec<(&'static str, StorageLayer, Scenario)> {
        let store = Arc::new(InMemoryStore::new());
        let memory_scenario = Scenario::seed_memory(&store);

        let (db, db_scenario) = TestDatabase::seeded().await;

        vec![
            ("memory", StorageLayer::from_memory(store), memory_scenario),
            ("database", StorageLayer::from_database(db.db_arc()), db_scenario),
        ]
    }

    /// (read, write, all, roles) on the private project
    async fn decisions(
        storage: &StorageLayer,
        user: Option<User>,
        scenario: &Scenario,
    ) -> (bool, bool, bool, Vec<Role>) {
        let ctx = storage.security_context(user);
        let private = scenario.private.reference();
        (
            assert_ok!(ctx.has_read_perm(&private).await),
            assert_ok!(ctx.has_write_perm(&private).await),
            assert_ok!(ctx.has_all_perm(&private).await),
            assert_ok!(ctx.project_roles(&private).await),
        )
    }

    #[tokio::test]
    async fn test_role_matrix_on_private_project() {
        for (backend, storage, scenario) in backends().await {
            let cases = [
                (Some(UserFactory::guest()), (true, false, false, vec![Role::Guest])),
                (
                    Some(UserFactory::developer()),
                    (true, true, false, vec![Role::Developer]),
                ),
                (
                    Some(UserFactory::project_admin()),
                    (true, true, true, vec![Role::ProjectAdmin]),
                ),
                (
                    Some(UserFactory::mixed()),
                    (true, true, false, vec![Role::Developer, Role::Guest]),
                ),
                (
                    Some(UserFactory::directory_member()),
                    (true, true, true, vec![Role::ProjectAdmin]),
                ),
                (Some(UserFactory::outsider()), (false, false, false, vec![])),
                (None, (false, false, false, vec![])),
            ];

            for (user, expected) in cases {
                let name = user
                    .as_ref()
                    .map(|u| u.username.clone())
                    .unwrap_or_default();
                let got = decisions(&storage, user, &scenario).await;
                assert_eq!(got, expected, "{} backend, user '{}'", backend, name);
            }
        }
    }

    #[tokio::test]
    async fn test_system_admin_override() {
        for (backend, storage, scenario) in backends().await {
            let ctx = storage.security_context(Some(UserFactory::admin()));

            for project in [scenario.private.reference(), scenario.library.reference()] {
                assert!(assert_ok!(ctx.has_read_perm(&project).await), "{}", backend);
                assert!(assert_ok!(ctx.has_write_perm(&project).await), "{}", backend);
                assert!(assert_ok!(ctx.has_all_perm(&project).await), "{}", backend);
            }

            // The override is not a held role.
            let roles = assert_ok!(ctx.project_roles(&scenario.private.reference()).await);
            assert!(roles.is_empty(), "{}", backend);
        }
    }

    #[tokio::test]
    async fn test_public_project_for_everyone() {
        for (backend, storage, scenario) in backends().await {
            for user in [None, Some(UserFactory::outsider()), Some(UserFactory::guest())] {
                let ctx = storage.security_context(user);
                let library = scenario.library.reference();

                assert!(assert_ok!(ctx.has_read_perm(&library).await), "{}", backend);
                assert!(!assert_ok!(ctx.has_write_perm(&library).await), "{}", backend);
                assert!(!assert_ok!(ctx.has_all_perm(&library).await), "{}", backend);
                assert_eq!(
                    assert_ok!(ctx.permission_level(&library).await),
                    PermissionLevel::Read,
                    "{}",
                    backend
                );
            }
        }
    }

    #[tokio::test]
    async fn test_project_reference_by_name_and_id_agree() {
        for (backend, storage, scenario) in backends().await {
            let ctx = storage.security_context(Some(UserFactory::developer()));

            let by_name = assert_ok!(ctx.has_write_perm("private_project").await);
            let by_id = assert_ok!(ctx.has_write_perm(scenario.private.project_id).await);
            assert!(by_name && by_id, "{}", backend);
        }
    }

    #[tokio::test]
    async fn test_anonymous_my_projects_is_public_only() {
        for (backend, storage, scenario) in backends().await {
            let ctx = storage.security_context(None);
            let projects = assert_ok!(ctx.my_projects().await);

            let ids: Vec<_> = projects.iter().map(|p| p.project_id).collect();
            assert_eq!(ids, vec![scenario.library.project_id], "{}", backend);
        }
    }

    #[tokio::test]
    async fn test_project_admin_my_projects() {
        for (backend, storage, scenario) in backends().await {
            let ctx = storage.security_context(Some(UserFactory::project_admin()));
            let projects = assert_ok!(ctx.my_projects().await);

            assert_eq!(projects.len(), 2, "{}", backend);
            assert!(
                projects
                    .iter()
                    .any(|p| p.project_id == scenario.private.project_id),
                "{}",
                backend
            );
        }
    }

    #[tokio::test]
    async fn test_directory_member_my_projects() {
        for (backend, storage, scenario) in backends().await {
            let ctx = storage.security_context(Some(UserFactory::directory_member()));
            let projects = assert_ok!(ctx.my_projects().await);

            let ids: Vec<_> = projects.iter().map(|p| p.project_id).collect();
            assert_eq!(
                ids,
                vec![scenario.private.project_id, scenario.library.project_id],
                "{}",
                backend
            );
        }
    }

    #[tokio::test]
    async fn test_closed_database_is_a_storage_failure() {
        let (db, scenario) = TestDatabase::seeded().await;
        let storage = StorageLayer::from_database(db.db_arc());
        assert_ok!(db.db().connection().clone().close().await);

        let ctx = storage.security_context(Some(UserFactory::developer()));
        let err = ctx
            .has_write_perm(scenario.private.project_id)
            .await
            .expect_err("closed pool must not look like a denial");
        assert!(err.is_storage_failure());
    }

    #[tokio::test]
    async fn test_authz_facade_applies_security_config() {
        let mut config = Config::default();
        config.authz.security = SecurityConfig {
            audit_admin_override: false,
        };

        let store = Arc::new(InMemoryStore::new());
        let scenario = Scenario::seed_memory(&store);
        let authz = Authz::with_storage(config, StorageLayer::from_memory(store));

        assert!(!authz.config().security().audit_admin_override);
        let ctx = authz.security_context(Some(UserFactory::admin()));
        assert!(assert_ok!(
            ctx.has_all_perm(scenario.private.project_id).await
        ));

        let audit = AuditLogger::new(authz.config().security());
        assert!(!audit.audits_admin_override());
    }
}
