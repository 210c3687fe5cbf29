use crate::core::models::{EntityType, Project, ProjectRef, User};
use crate::core::traits::ProjectManager;
use crate::utils::error::{AuthzError, Result};
use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::*;
use std::collections::HashSet;
use tracing::debug;

use super::super::entities::{self, project, project_member, project_metadata};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find a live project by ID or name
    pub async fn find_project(&self, reference: &ProjectRef) -> Result<Option<Project>> {
        debug!("Finding project: {}", reference);

        let query = entities::Project::find().filter(project::Column::Deleted.eq(false));
        let query = match reference {
            ProjectRef::Id(id) => query.filter(project::Column::ProjectId.eq(*id)),
            ProjectRef::Name(name) => query.filter(project::Column::Name.eq(name.as_str())),
        };

        let Some(model) = query.one(&self.db).await.map_err(AuthzError::Database)? else {
            return Ok(None);
        };

        let public = self.project_public_flag(model.project_id).await?;
        Ok(Some(model.to_domain_project(public)))
    }

    /// Create a project together with its visibility metadata
    pub async fn create_project(&self, name: &str, owner_id: i64, public: bool) -> Result<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthzError::invalid_input("project name is empty"));
        }
        debug!("Creating project: {}", name);

        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        let txn = self.db.begin().await.map_err(AuthzError::Database)?;

        let model = project::ActiveModel {
            project_id: NotSet,
            name: Set(name.to_string()),
            owner_id: Set(owner_id),
            deleted: Set(false),
            creation_time: Set(now),
            update_time: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(AuthzError::Database)?;

        project_metadata::ActiveModel {
            id: NotSet,
            project_id: Set(model.project_id),
            name: Set(project_metadata::PUBLIC_KEY.to_string()),
            value: Set(public.to_string()),
            creation_time: Set(now),
            update_time: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(AuthzError::Database)?;

        txn.commit().await.map_err(AuthzError::Database)?;

        Ok(model.to_domain_project(public))
    }

    /// Set the visibility flag of a project
    pub async fn set_project_public(&self, project_id: i64, public: bool) -> Result<()> {
        debug!("Setting project {} public={}", project_id, public);

        if self.find_project(&ProjectRef::Id(project_id)).await?.is_none() {
            return Err(AuthzError::not_found(format!("project {}", project_id)));
        }

        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        let existing = entities::ProjectMetadata::find()
            .filter(project_metadata::Column::ProjectId.eq(project_id))
            .filter(project_metadata::Column::Name.eq(project_metadata::PUBLIC_KEY))
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        match existing {
            Some(row) => {
                let mut row: project_metadata::ActiveModel = row.into();
                row.value = Set(public.to_string());
                row.update_time = Set(now);
                row.update(&self.db).await.map_err(AuthzError::Database)?;
            }
            None => {
                project_metadata::ActiveModel {
                    id: NotSet,
                    project_id: Set(project_id),
                    name: Set(project_metadata::PUBLIC_KEY.to_string()),
                    value: Set(public.to_string()),
                    creation_time: Set(now),
                    update_time: Set(now),
                }
                .insert(&self.db)
                .await
                .map_err(AuthzError::Database)?;
            }
        }

        Ok(())
    }

    /// Soft delete a project and drop its membership rows
    pub async fn delete_project(&self, project_id: i64) -> Result<bool> {
        debug!("Deleting project: {}", project_id);

        let Some(model) = entities::Project::find_by_id(project_id)
            .filter(project::Column::Deleted.eq(false))
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?
        else {
            return Ok(false);
        };

        let txn = self.db.begin().await.map_err(AuthzError::Database)?;

        entities::ProjectMember::delete_many()
            .filter(project_member::Column::ProjectId.eq(project_id))
            .exec(&txn)
            .await
            .map_err(AuthzError::Database)?;

        let mut model: project::ActiveModel = model.into();
        model.deleted = Set(true);
        model.update_time = Set(chrono::Utc::now().into());
        model.update(&txn).await.map_err(AuthzError::Database)?;

        txn.commit().await.map_err(AuthzError::Database)?;
        Ok(true)
    }

    /// Public projects plus every project the user or one of its groups is a member of
    pub async fn list_accessible_projects(&self, user: Option<&User>) -> Result<Vec<Project>> {
        debug!(
            "Listing projects accessible to {}",
            user.map(|u| u.username.as_str()).unwrap_or("anonymous")
        );

        let public_ids: HashSet<i64> = entities::ProjectMetadata::find()
            .filter(project_metadata::Column::Name.eq(project_metadata::PUBLIC_KEY))
            .filter(project_metadata::Column::Value.eq("true"))
            .all(&self.db)
            .await
            .map_err(AuthzError::Database)?
            .into_iter()
            .map(|row| row.project_id)
            .collect();

        let mut ids = public_ids.clone();
        if let Some(user) = user {
            let mut condition = Condition::any().add(
                Condition::all()
                    .add(project_member::Column::EntityType.eq(EntityType::User.code()))
                    .add(project_member::Column::EntityId.eq(user.user_id)),
            );

            let group_ids = self.user_group_ids(user).await?;
            if !group_ids.is_empty() {
                condition = condition.add(
                    Condition::all()
                        .add(project_member::Column::EntityType.eq(EntityType::Group.code()))
                        .add(project_member::Column::EntityId.is_in(group_ids)),
                );
            }

            let rows = entities::ProjectMember::find()
                .filter(condition)
                .all(&self.db)
                .await
                .map_err(AuthzError::Database)?;
            ids.extend(rows.into_iter().map(|row| row.project_id));
        }

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = entities::Project::find()
            .filter(project::Column::Deleted.eq(false))
            .filter(project::Column::ProjectId.is_in(ids))
            .order_by_asc(project::Column::ProjectId)
            .all(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        Ok(models
            .iter()
            .map(|m| m.to_domain_project(public_ids.contains(&m.project_id)))
            .collect())
    }

    async fn project_public_flag(&self, project_id: i64) -> Result<bool> {
        let row = entities::ProjectMetadata::find()
            .filter(project_metadata::Column::ProjectId.eq(project_id))
            .filter(project_metadata::Column::Name.eq(project_metadata::PUBLIC_KEY))
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        Ok(row.is_some_and(|r| project_metadata::parse_flag(&r.value)))
    }
}

#[async_trait]
impl ProjectManager for SeaOrmDatabase {
    async fn get(&self, project: &ProjectRef) -> Result<Option<Project>> {
        self.find_project(project).await
    }

    async fn list_accessible(&self, user: Option<&User>) -> Result<Vec<Project>> {
        self.list_accessible_projects(user).await
    }
}
