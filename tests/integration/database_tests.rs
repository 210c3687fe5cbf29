//! Database integration tests
//!
//! Tests the SeaORM collaborators against a real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::{TestDatabase, UserFactory};
    use crate::{assert_err, assert_ok};
    use registry_authz::config::DatabaseConfig;
    use registry_authz::storage::database::{Database, DatabaseBackendType};
    use registry_authz::{
        AuthzError, EntityType, GroupType, Member, MemberStore, ProjectManager, ProjectRef, Role,
        User, UserGroup,
    };

    /// Test basic database connection and health check
    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);

        let health = db.db().health_check().await;
        assert!(health.is_ok(), "Health check failed: {:?}", health.err());
    }

    /// Migrations can be applied twice
    #[tokio::test]
    async fn test_database_migration_is_repeatable() {
        let db = TestDatabase::new().await;
        let result = db.db().migrate().await;
        assert!(result.is_ok(), "Migration failed: {:?}", result.err());
    }

    #[tokio::test]
    async fn test_unsupported_url_scheme() {
        let config = DatabaseConfig {
            url: "mysql://localhost/registry".to_string(),
            max_connections: 1,
            connection_timeout: 1,
            enabled: true,
        };

        let err = assert_err!(Database::new(&config).await);
        assert!(matches!(err, AuthzError::Config(_)));
    }

    #[tokio::test]
    async fn test_project_lookup_by_id_and_name() {
        let (db, scenario) = TestDatabase::seeded().await;
        let db = db.db();

        let by_id = assert_ok!(db.get(&ProjectRef::Id(scenario.private.project_id)).await);
        let by_name = assert_ok!(db.get(&ProjectRef::from("private_project")).await);

        let by_id = by_id.expect("project by id");
        let by_name = by_name.expect("project by name");
        assert_eq!(by_id.project_id, by_name.project_id);
        assert_eq!(by_id.name, "private_project");
        assert!(!by_id.public);

        assert!(assert_ok!(db.get(&ProjectRef::from("missing")).await).is_none());
        assert!(assert_ok!(db.get(&ProjectRef::Id(9999)).await).is_none());
    }

    #[tokio::test]
    async fn test_visibility_from_metadata() {
        let (db, scenario) = TestDatabase::seeded().await;
        let db = db.db();

        assert!(assert_ok!(db.is_public(&scenario.library.reference()).await));
        assert!(!assert_ok!(db.is_public(&scenario.private.reference()).await));
        assert!(!assert_ok!(db.is_public(&ProjectRef::from("missing")).await));

        assert_ok!(db.set_project_public(scenario.private.project_id, true).await);
        assert!(assert_ok!(db.is_public(&scenario.private.reference()).await));

        let err = assert_err!(db.set_project_public(9999, true).await);
        assert!(matches!(err, AuthzError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_duplicate_project_name_is_a_database_error() {
        let (db, _) = TestDatabase::seeded().await;

        let err = assert_err!(db.db().create_project("library", 1, false).await);
        assert!(err.is_storage_failure());

        let err = assert_err!(db.db().create_project("   ", 1, false).await);
        assert!(matches!(err, AuthzError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_member_lookup_by_entity_type() {
        let (db, scenario) = TestDatabase::seeded().await;
        let db = db.db();
        let pid = scenario.private.project_id;

        let developer = assert_ok!(
            db.get_member(pid, UserFactory::DEVELOPER_ID, EntityType::User)
                .await
        )
        .expect("developer membership");
        assert_eq!(developer.role, Role::Developer);
        assert_eq!(developer.entity_type, EntityType::User);

        let group = assert_ok!(
            db.get_member(pid, UserFactory::DEV_GROUP_ID, EntityType::Group)
                .await
        )
        .expect("group membership");
        assert_eq!(group.role, Role::Developer);

        // Same numeric ID, other entity type.
        assert!(
            assert_ok!(
                db.get_member(pid, UserFactory::DEV_GROUP_ID, EntityType::User)
                    .await
            )
            .is_none()
        );
        assert!(
            assert_ok!(
                db.get_member(pid, UserFactory::OUTSIDER_ID, EntityType::User)
                    .await
            )
            .is_none()
        );
    }

    #[tokio::test]
    async fn test_member_management() {
        let (db, scenario) = TestDatabase::seeded().await;
        let db = db.db();
        let pid = scenario.private.project_id;

        let member = Member::user(pid, UserFactory::OUTSIDER_ID, Role::Guest);
        let id = assert_ok!(db.add_project_member(&member).await);

        let err = assert_err!(db.add_project_member(&member).await);
        assert!(matches!(err, AuthzError::InvalidInput(_)));

        let err = assert_err!(
            db.add_project_member(&Member::user(9999, UserFactory::OUTSIDER_ID, Role::Guest))
                .await
        );
        assert!(matches!(err, AuthzError::NotFound(_)));

        let err = assert_err!(
            db.add_project_member(&Member::user(pid, 77, Role::SystemAdmin))
                .await
        );
        assert!(matches!(err, AuthzError::InvalidInput(_)));

        assert_ok!(db.update_project_member_role(id, Role::ProjectAdmin).await);
        let updated = assert_ok!(
            db.get_member(pid, UserFactory::OUTSIDER_ID, EntityType::User)
                .await
        )
        .expect("updated membership");
        assert_eq!(updated.role, Role::ProjectAdmin);

        let members = assert_ok!(db.list_project_members(pid).await);
        assert_eq!(members.len(), 7);

        assert!(assert_ok!(db.delete_project_member(id).await));
        assert!(!assert_ok!(db.delete_project_member(id).await));
    }

    #[tokio::test]
    async fn test_list_accessible_projects() {
        let (db, scenario) = TestDatabase::seeded().await;
        let db = db.db();
        let hidden = assert_ok!(db.create_project("hidden", 1, false).await);

        let anonymous = assert_ok!(db.list_accessible(None).await);
        let names: Vec<_> = anonymous.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["library"]);

        let guest = assert_ok!(db.list_accessible(Some(&UserFactory::guest())).await);
        let ids: Vec<_> = guest.iter().map(|p| p.project_id).collect();
        assert_eq!(
            ids,
            vec![scenario.private.project_id, scenario.library.project_id]
        );
        assert!(guest.iter().any(|p| p.public));

        let via_group = User::new(500, "groupOnly")
            .with_groups(vec![UserGroup::internal(UserFactory::DEV_GROUP_ID, "devs")]);
        let projects = assert_ok!(db.list_accessible(Some(&via_group)).await);
        assert_eq!(projects.len(), 2);
        assert!(!projects.iter().any(|p| p.project_id == hidden.project_id));
    }

    #[tokio::test]
    async fn test_group_onboarding_and_dn_lookup() {
        let (db, scenario) = TestDatabase::seeded().await;
        let db = db.db();

        assert_eq!(scenario.admin_group.group_type, GroupType::Ldap);
        assert_eq!(
            assert_ok!(db.group_id_by_dn(UserFactory::ADMIN_GROUP_DN).await),
            Some(scenario.admin_group.id)
        );
        assert_eq!(
            assert_ok!(db.group_id_by_dn("cn=nobody,dc=example,dc=com").await),
            None
        );

        let err = assert_err!(
            db.create_user_group("again", GroupType::Ldap, Some(UserFactory::ADMIN_GROUP_DN))
                .await
        );
        assert!(matches!(err, AuthzError::InvalidInput(_)));
        let err = assert_err!(db.create_user_group("no_dn", GroupType::Ldap, None).await);
        assert!(matches!(err, AuthzError::InvalidInput(_)));

        // Internal groups carry no DN and never collide on it
        let qa = assert_ok!(db.create_user_group("qa", GroupType::Internal, None).await);
        let ops = assert_ok!(db.create_user_group("ops", GroupType::Internal, None).await);
        assert_ne!(qa.id, ops.id);
        assert_eq!(qa.ldap_group_dn, None);
    }

    #[tokio::test]
    async fn test_list_accessible_resolves_group_dn() {
        let (db, scenario) = TestDatabase::seeded().await;
        let db = db.db();
        assert_ok!(db.create_project("hidden", 1, false).await);

        let projects = assert_ok!(db.list_accessible(Some(&UserFactory::directory_member())).await);
        let ids: Vec<_> = projects.iter().map(|p| p.project_id).collect();
        assert_eq!(
            ids,
            vec![scenario.private.project_id, scenario.library.project_id]
        );

        let stranger = User::new(501, "stranger").with_groups(vec![UserGroup::ldap(
            0,
            "outsiders",
            "cn=outsiders,dc=example,dc=com",
        )]);
        let projects = assert_ok!(db.list_accessible(Some(&stranger)).await);
        assert_eq!(projects.len(), 1);
    }

    #[tokio::test]
    async fn test_deleted_project_disappears() {
        let (db, scenario) = TestDatabase::seeded().await;
        let db = db.db();
        let pid = scenario.private.project_id;

        assert!(assert_ok!(db.delete_project(pid).await));
        assert!(!assert_ok!(db.delete_project(pid).await));

        assert!(assert_ok!(db.get(&ProjectRef::Id(pid)).await).is_none());
        assert!(
            assert_ok!(
                db.get_member(pid, UserFactory::GUEST_ID, EntityType::User)
                    .await
            )
            .is_none()
        );

        let stats = assert_ok!(db.stats().await);
        assert_eq!(stats.projects, 1);
        assert_eq!(stats.members, 0);
    }
}
