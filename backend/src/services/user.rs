//! Self-service account operations for the signed-in user.

use std::sync::Arc;

use validator::Validate;

use crate::error::AppError;
use crate::models::approval::{CreateApprovalRequest, SignupApprovalRequest};
use crate::models::user::{User, UserProfileUpdate};
use crate::repositories::{ApprovalRepository, CourtRepository, UserRepository};

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    approvals: Arc<dyn ApprovalRepository>,
    courts: Arc<dyn CourtRepository>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        approvals: Arc<dyn ApprovalRepository>,
        courts: Arc<dyn CourtRepository>,
    ) -> Self {
        Self {
            users,
            approvals,
            courts,
        }
    }

    pub async fn update_profile(
        &self,
        actor: &User,
        mut update: UserProfileUpdate,
    ) -> Result<User, AppError> {
        update.unit_number = update.unit_number.map(|unit| unit.trim().to_string());
        if let Some(tower) = update.tower_id {
            self.ensure_tower_exists(tower).await?;
        }
        self.users.update_profile(actor.id, &update).await
    }

    pub async fn request_approval(
        &self,
        actor: &User,
        payload: CreateApprovalRequest,
    ) -> Result<SignupApprovalRequest, AppError> {
        let unit = payload.unit_number.trim();
        if unit.is_empty() {
            return Err(AppError::BadRequest("unit_number is required".into()));
        }
        payload.validate()?;
        self.ensure_tower_exists(payload.tower_id).await?;

        let request = self
            .approvals
            .upsert_pending(actor.id, payload.tower_id, unit)
            .await?;
        tracing::info!(user_id = %actor.id, request_id = %request.id, "Approval request submitted");
        Ok(request)
    }

    async fn ensure_tower_exists(&self, tower: crate::types::TowerId) -> Result<(), AppError> {
        self.courts
            .find_tower(tower)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Tower not found".into()))
    }
}
