/// Project entity module
pub mod project;
/// Project member entity module
pub mod project_member;
/// Project metadata entity module
pub mod project_metadata;
/// User group entity module
pub mod user_group;

pub use project::Entity as Project;
pub use project_member::Entity as ProjectMember;
pub use project_metadata::Entity as ProjectMetadata;
pub use user_group::Entity as UserGroup;
