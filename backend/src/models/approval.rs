//! Signup approval requests raised by residents after their first sign-in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::types::{ApprovalRequestId, TowerId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SignupApprovalRequest {
    pub id: ApprovalRequestId,
    pub applicant_user_id: UserId,
    pub tower_id: TowerId,
    pub unit_number: String,
    pub status: ApprovalStatus,
    /// Staff member who approved or rejected the request.
    pub approved_by_user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

impl SignupApprovalRequest {
    pub fn is_pending(&self) -> bool {
        self.status == ApprovalStatus::Pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateApprovalRequest {
    pub tower_id: TowerId,
    #[validate(length(max = 20))]
    pub unit_number: String,
}
