//! Project manager trait

use crate::core::models::{Project, ProjectRef, User};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves project references to project metadata
///
/// Implementations must accept [`ProjectRef::Id`] and [`ProjectRef::Name`]
/// interchangeably. A reference that matches nothing is `Ok(None)`, never an
/// error; errors are reserved for storage failures.
#[async_trait]
pub trait ProjectManager: Send + Sync {
    /// Resolve a project by ID or name
    async fn get(&self, project: &ProjectRef) -> Result<Option<Project>>;

    /// Whether the project is public; unknown projects are not public
    async fn is_public(&self, project: &ProjectRef) -> Result<bool> {
        Ok(self.get(project).await?.is_some_and(|p| p.public))
    }

    /// Every project visible to the principal: public projects plus every
    /// project where the user holds a role directly or through a group.
    /// Anonymous callers see public projects only.
    async fn list_accessible(&self, user: Option<&User>) -> Result<Vec<Project>>;
}
