//! Project models

use crate::utils::error::{AuthzError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project: a named resource container inside the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project ID
    pub project_id: i64,
    /// Project name (unique)
    pub name: String,
    /// Owner user ID
    pub owner_id: i64,
    /// Whether anyone, including anonymous callers, may read the project
    #[serde(default)]
    pub public: bool,
    /// Creation timestamp
    pub creation_time: DateTime<Utc>,
    /// Last update timestamp
    pub update_time: DateTime<Utc>,
}

impl Project {
    /// Create a private project
    pub fn new(project_id: i64, name: impl Into<String>, owner_id: i64) -> Self {
        let now = Utc::now();
        Self {
            project_id,
            name: name.into(),
            owner_id,
            public: false,
            creation_time: now,
            update_time: now,
        }
    }

    /// Set the visibility flag
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// Reference to this project by ID
    pub fn reference(&self) -> ProjectRef {
        ProjectRef::Id(self.project_id)
    }
}

/// Reference to a project by ID or by name
///
/// Both forms are accepted interchangeably by every collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectRef {
    /// Numeric project ID
    Id(i64),
    /// Unique project name
    Name(String),
}

impl ProjectRef {
    /// Interpret an untyped path segment: all digits means an ID, anything else a name
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AuthzError::invalid_input("project reference is empty"));
        }

        if raw.bytes().all(|b| b.is_ascii_digit()) {
            let id = raw.parse::<i64>().map_err(|e| {
                AuthzError::invalid_input(format!("invalid project id '{}': {}", raw, e))
            })?;
            let reference = Self::Id(id);
            reference.validate()?;
            return Ok(reference);
        }

        Ok(Self::Name(raw.to_string()))
    }

    /// Reject references that can never name a project
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Id(id) if *id <= 0 => Err(AuthzError::invalid_input(format!(
                "project id must be positive, got {}",
                id
            ))),
            Self::Name(name) if name.trim().is_empty() => {
                Err(AuthzError::invalid_input("project name is empty"))
            }
            _ => Ok(()),
        }
    }

    /// Whether this reference points at the given project
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::Id(id) => project.project_id == *id,
            Self::Name(name) => project.name == *name,
        }
    }
}

impl std::fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectRef::Id(id) => write!(f, "{}", id),
            ProjectRef::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<i64> for ProjectRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ProjectRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ProjectRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&Project> for ProjectRef {
    fn from(project: &Project) -> Self {
        project.reference()
    }
}

impl From<&ProjectRef> for ProjectRef {
    fn from(reference: &ProjectRef) -> Self {
        reference.clone()
    }
}
