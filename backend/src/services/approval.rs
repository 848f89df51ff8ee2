//! Staff review of signup approval requests.

use std::sync::Arc;

use chrono_tz::Tz;
use serde_json::json;

use crate::error::AppError;
use crate::models::approval::SignupApprovalRequest;
use crate::models::user::User;
use crate::repositories::{ApprovalRepository, AuditLogRepository, UserRepository};
use crate::services::{audit, policy};
use crate::types::ApprovalRequestId;
use crate::utils::time::{age_in_years, today_in};

#[derive(Clone)]
pub struct ApprovalService {
    approvals: Arc<dyn ApprovalRepository>,
    users: Arc<dyn UserRepository>,
    audit: Arc<dyn AuditLogRepository>,
    tz: Tz,
}

impl ApprovalService {
    pub fn new(
        approvals: Arc<dyn ApprovalRepository>,
        users: Arc<dyn UserRepository>,
        audit: Arc<dyn AuditLogRepository>,
        tz: Tz,
    ) -> Self {
        Self {
            approvals,
            users,
            audit,
            tz,
        }
    }

    pub async fn list_pending(&self, actor: &User) -> Result<Vec<SignupApprovalRequest>, AppError> {
        policy::require_role(actor, policy::APPROVER_ROLES)?;
        if actor.role.is_tower_scoped() {
            match actor.tower_id {
                Some(tower) => self.approvals.list_pending(Some(tower)).await,
                None => Ok(Vec::new()),
            }
        } else {
            self.approvals.list_pending(None).await
        }
    }

    pub async fn approve(
        &self,
        actor: &User,
        id: ApprovalRequestId,
    ) -> Result<SignupApprovalRequest, AppError> {
        let request = self.load_for_decision(actor, id).await?;

        let applicant = self
            .users
            .find_by_id(request.applicant_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Applicant user not found".into()))?;
        let birth_date = applicant.birth_date.ok_or_else(|| {
            AppError::BadRequest("Applicant must set birth_date before approval".into())
        })?;
        if age_in_years(birth_date, today_in(self.tz)) < 18 {
            return Err(AppError::BadRequest(
                "Applicant must be 18+ to reserve the court".into(),
            ));
        }

        let approved = self.approvals.approve(id, actor.id).await?;
        tracing::info!(request_id = %id, applicant = %applicant.id, approver = %actor.id, "Signup approved");
        audit::record(
            self.audit.as_ref(),
            actor.id,
            "approval.approve",
            "signup_approval_request",
            approved.id,
            json!({ "applicant": applicant.id }),
        )
        .await;
        Ok(approved)
    }

    pub async fn reject(
        &self,
        actor: &User,
        id: ApprovalRequestId,
    ) -> Result<SignupApprovalRequest, AppError> {
        let request = self.load_for_decision(actor, id).await?;
        let rejected = self.approvals.reject(id, actor.id).await?;
        audit::record(
            self.audit.as_ref(),
            actor.id,
            "approval.reject",
            "signup_approval_request",
            rejected.id,
            json!({ "applicant": request.applicant_user_id }),
        )
        .await;
        Ok(rejected)
    }

    async fn load_for_decision(
        &self,
        actor: &User,
        id: ApprovalRequestId,
    ) -> Result<SignupApprovalRequest, AppError> {
        policy::require_role(actor, policy::APPROVER_ROLES)?;
        let request = self
            .approvals
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Approval request not found".into()))?;
        policy::ensure_same_tower(actor, Some(request.tower_id))?;
        if !request.is_pending() {
            return Err(AppError::Conflict("Request is not pending".into()));
        }
        Ok(request)
    }
}
