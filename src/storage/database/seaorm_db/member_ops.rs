use crate::auth::rbac::Role;
use crate::core::models::{EntityType, Member, ProjectRef};
use crate::core::traits::MemberStore;
use crate::utils::error::{AuthzError, Result};
use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, project_member};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find the membership row of one entity on one project
    pub async fn get_project_member(
        &self,
        project_id: i64,
        entity_id: i64,
        entity_type: EntityType,
    ) -> Result<Option<Member>> {
        debug!(
            "Finding {} {} on project {}",
            entity_type, entity_id, project_id
        );

        entities::ProjectMember::find()
            .filter(project_member::Column::ProjectId.eq(project_id))
            .filter(project_member::Column::EntityId.eq(entity_id))
            .filter(project_member::Column::EntityType.eq(entity_type.code()))
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?
            .map(|model| model.to_domain_member())
            .transpose()
    }

    /// List every membership row of a project
    pub async fn list_project_members(&self, project_id: i64) -> Result<Vec<Member>> {
        entities::ProjectMember::find()
            .filter(project_member::Column::ProjectId.eq(project_id))
            .order_by_asc(project_member::Column::Id)
            .all(&self.db)
            .await
            .map_err(AuthzError::Database)?
            .iter()
            .map(project_member::Model::to_domain_member)
            .collect()
    }

    /// Bind an entity to a project; returns the membership row ID
    pub async fn add_project_member(&self, member: &Member) -> Result<i64> {
        debug!(
            "Adding {} {} to project {} as {}",
            member.entity_type, member.entity_id, member.project_id, member.role
        );

        let code = project_role_code(member.role)?;

        if self
            .find_project(&ProjectRef::Id(member.project_id))
            .await?
            .is_none()
        {
            return Err(AuthzError::not_found(format!(
                "project {}",
                member.project_id
            )));
        }

        if self
            .get_project_member(member.project_id, member.entity_id, member.entity_type)
            .await?
            .is_some()
        {
            return Err(AuthzError::invalid_input(format!(
                "{} {} is already a member of project {}",
                member.entity_type, member.entity_id, member.project_id
            )));
        }

        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        let model = project_member::ActiveModel {
            id: NotSet,
            project_id: Set(member.project_id),
            entity_id: Set(member.entity_id),
            entity_type: Set(member.entity_type.code().to_string()),
            role: Set(code),
            creation_time: Set(now),
            update_time: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(AuthzError::Database)?;

        Ok(model.id)
    }

    /// Change the role of a membership row
    pub async fn update_project_member_role(&self, member_id: i64, role: Role) -> Result<()> {
        debug!("Updating project member {} to {}", member_id, role);

        let code = project_role_code(role)?;
        let mut model: project_member::ActiveModel = entities::ProjectMember::find_by_id(member_id)
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?
            .ok_or_else(|| AuthzError::not_found(format!("project member {}", member_id)))?
            .into();

        model.role = Set(code);
        model.update_time = Set(chrono::Utc::now().into());
        model.update(&self.db).await.map_err(AuthzError::Database)?;

        Ok(())
    }

    /// Delete a membership row
    pub async fn delete_project_member(&self, member_id: i64) -> Result<bool> {
        debug!("Deleting project member {}", member_id);

        let result = entities::ProjectMember::delete_by_id(member_id)
            .exec(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        Ok(result.rows_affected > 0)
    }
}

fn project_role_code(role: Role) -> Result<i32> {
    role.code().ok_or_else(|| {
        AuthzError::invalid_input(format!("role {} cannot be granted on a project", role))
    })
}

#[async_trait]
impl MemberStore for SeaOrmDatabase {
    async fn get_member(
        &self,
        project_id: i64,
        entity_id: i64,
        entity_type: EntityType,
    ) -> Result<Option<Member>> {
        self.get_project_member(project_id, entity_id, entity_type)
            .await
    }

    async fn group_id_by_dn(&self, ldap_group_dn: &str) -> Result<Option<i64>> {
        self.find_group_id_by_dn(ldap_group_dn).await
    }
}
