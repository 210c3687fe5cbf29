//! Test fixtures
//!
//! A private project with one member per role, a public "library" project, a
//! developer group bound to the private project, and an onboarded LDAP group
//! that administers it.

use registry_authz::storage::memory::InMemoryStore;
use registry_authz::{Member, Project, Role, User, UserGroup};

/// Factory for test principals
pub struct UserFactory;

impl UserFactory {
    pub const ADMIN_ID: i64 = 1;
    pub const GUEST_ID: i64 = 2;
    pub const DEVELOPER_ID: i64 = 3;
    pub const PROJECT_ADMIN_ID: i64 = 4;
    pub const OUTSIDER_ID: i64 = 5;
    pub const MIXED_ID: i64 = 6;
    pub const DIRECTORY_ID: i64 = 7;
    pub const DEV_GROUP_ID: i64 = 10;
    pub const ADMIN_GROUP_DN: &'static str = "cn=registry_admins,ou=groups,dc=example,dc=com";

    pub fn admin() -> User {
        User::new(Self::ADMIN_ID, "admin").with_admin_role()
    }

    pub fn guest() -> User {
        User::new(Self::GUEST_ID, "guestUser")
    }

    pub fn developer() -> User {
        User::new(Self::DEVELOPER_ID, "developerUser")
    }

    pub fn project_admin() -> User {
        User::new(Self::PROJECT_ADMIN_ID, "projectAdminUser")
    }

    pub fn outsider() -> User {
        User::new(Self::OUTSIDER_ID, "outsider")
    }

    /// Direct guest role plus developer role through the group
    pub fn mixed() -> User {
        User::new(Self::MIXED_ID, "mixedUser").with_groups(vec![UserGroup::ldap(
            Self::DEV_GROUP_ID,
            "developers",
            "cn=developers,ou=groups,dc=example,dc=com",
        )])
    }

    /// Member of the onboarded LDAP group, known to the caller only by DN
    pub fn directory_member() -> User {
        User::new(Self::DIRECTORY_ID, "directoryUser").with_groups(vec![UserGroup::ldap(
            0,
            "registry_admins",
            Self::ADMIN_GROUP_DN,
        )])
    }
}

/// Projects created by a seeded backend
#[derive(Debug, Clone)]
pub struct Scenario {
    pub private: Project,
    pub library: Project,
    pub admin_group: UserGroup,
}

impl Scenario {
    /// Direct user memberships on the private project
    pub fn members(project_id: i64) -> Vec<Member> {
        vec![
            Member::user(project_id, UserFactory::GUEST_ID, Role::Guest),
            Member::user(project_id, UserFactory::DEVELOPER_ID, Role::Developer),
            Member::user(project_id, UserFactory::PROJECT_ADMIN_ID, Role::ProjectAdmin),
            Member::user(project_id, UserFactory::MIXED_ID, Role::Guest),
        ]
    }

    /// Seed an in-memory store with the same data as the database scenario
    pub fn seed_memory(store: &InMemoryStore) -> Self {
        let private = store
            .add_project("private_project", UserFactory::ADMIN_ID, false)
            .expect("Failed to create private project");
        let library = store
            .add_project("library", UserFactory::ADMIN_ID, true)
            .expect("Failed to create public project");

        for member in Self::members(private.project_id) {
            store.add_member(member).expect("Failed to add project member");
        }
        store
            .add_member(Member::group(
                private.project_id,
                UserFactory::DEV_GROUP_ID,
                Role::Developer,
            ))
            .expect("Failed to add group member");

        let admin_group = store
            .add_group(UserGroup::ldap(0, "registry_admins", UserFactory::ADMIN_GROUP_DN))
            .expect("Failed to onboard LDAP group");
        store
            .add_member(Member::group(
                private.project_id,
                admin_group.id,
                Role::ProjectAdmin,
            ))
            .expect("Failed to add LDAP group member");

        Self {
            private,
            library,
            admin_group,
        }
    }
}
