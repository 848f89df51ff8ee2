//! Condominium administration: role assignment, blackouts, towers, audit trail.

use std::sync::Arc;

use serde_json::json;
use validator::Validate;

use crate::error::AppError;
use crate::models::audit_log::AuditLog;
use crate::models::blackout::{BlackoutWindow, CreateBlackout};
use crate::models::court::{CreateTower, Tower};
use crate::models::user::{AssignRolePayload, User};
use crate::repositories::{
    AuditLogRepository, BlackoutRepository, CourtRepository, UserRepository,
};
use crate::services::{audit, policy};
use crate::types::BlackoutWindowId;

pub const DEFAULT_AUDIT_LIMIT: i64 = 100;
pub const MAX_AUDIT_LIMIT: i64 = 500;

#[derive(Clone)]
pub struct AdminService {
    users: Arc<dyn UserRepository>,
    courts: Arc<dyn CourtRepository>,
    blackouts: Arc<dyn BlackoutRepository>,
    audit: Arc<dyn AuditLogRepository>,
}

impl AdminService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        courts: Arc<dyn CourtRepository>,
        blackouts: Arc<dyn BlackoutRepository>,
        audit: Arc<dyn AuditLogRepository>,
    ) -> Self {
        Self {
            users,
            courts,
            blackouts,
            audit,
        }
    }

    pub async fn assign_role(
        &self,
        actor: &User,
        payload: AssignRolePayload,
    ) -> Result<User, AppError> {
        policy::require_role(actor, policy::ROLE_ASSIGNER_ROLES)?;
        let target = self
            .users
            .find_by_id(payload.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;
        let tower = policy::resolve_role_assignment(actor, &target, &payload)?;
        if let Some(tower_id) = tower {
            self.courts
                .find_tower(tower_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Tower not found".into()))?;
        }

        let updated = self
            .users
            .assign_role(target.id, payload.role, tower)
            .await?;
        tracing::info!(
            actor = %actor.id,
            target = %target.id,
            from = target.role.as_str(),
            to = payload.role.as_str(),
            "Role assigned"
        );
        audit::record(
            self.audit.as_ref(),
            actor.id,
            "user.assign_role",
            "user",
            target.id,
            json!({ "from": target.role, "to": payload.role, "tower_id": tower }),
        )
        .await;
        Ok(updated)
    }

    pub async fn list_blackouts(&self, actor: &User) -> Result<Vec<BlackoutWindow>, AppError> {
        policy::require_role(actor, policy::CONDO_MANAGER_ROLES)?;
        self.blackouts.list().await
    }

    pub async fn create_blackout(
        &self,
        actor: &User,
        payload: CreateBlackout,
    ) -> Result<BlackoutWindow, AppError> {
        policy::require_role(actor, policy::CONDO_MANAGER_ROLES)?;
        if payload.end_time <= payload.start_time {
            return Err(AppError::BadRequest(
                "end_time must be after start_time".into(),
            ));
        }
        if payload.reason.trim().is_empty() {
            return Err(AppError::BadRequest("reason is required".into()));
        }
        payload.validate()?;

        let window = self.blackouts.create(&payload, actor.id).await?;
        audit::record(
            self.audit.as_ref(),
            actor.id,
            "blackout.create",
            "blackout_window",
            window.id,
            json!({ "start_time": window.start_time, "end_time": window.end_time }),
        )
        .await;
        Ok(window)
    }

    pub async fn delete_blackout(&self, actor: &User, id: BlackoutWindowId) -> Result<(), AppError> {
        policy::require_role(actor, policy::CONDO_MANAGER_ROLES)?;
        if !self.blackouts.delete(id).await? {
            return Err(AppError::NotFound("Blackout window not found".into()));
        }
        audit::record(
            self.audit.as_ref(),
            actor.id,
            "blackout.delete",
            "blackout_window",
            id,
            json!({}),
        )
        .await;
        Ok(())
    }

    pub async fn create_tower(&self, actor: &User, payload: CreateTower) -> Result<Tower, AppError> {
        policy::require_role(actor, policy::CONDO_MANAGER_ROLES)?;
        let name = payload.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("name is required".into()));
        }
        payload.validate()?;
        let tower = self.courts.create_tower(name).await.map_err(|err| match err {
            AppError::Conflict(_) => AppError::Conflict("Tower already exists".into()),
            other => other,
        })?;
        audit::record(
            self.audit.as_ref(),
            actor.id,
            "tower.create",
            "tower",
            tower.id,
            json!({ "name": tower.name }),
        )
        .await;
        Ok(tower)
    }

    pub async fn list_audit_logs(
        &self,
        actor: &User,
        limit: Option<i64>,
    ) -> Result<Vec<AuditLog>, AppError> {
        policy::require_role(actor, policy::CONDO_MANAGER_ROLES)?;
        let limit = limit
            .unwrap_or(DEFAULT_AUDIT_LIMIT)
            .clamp(1, MAX_AUDIT_LIMIT);
        self.audit.list_recent(limit).await
    }
}
