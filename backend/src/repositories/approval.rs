//! Signup approval requests.
//!
//! Submitting and approving both touch the applicant's `users` row, so those
//! operations run inside a single transaction.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::approval::{ApprovalStatus, SignupApprovalRequest};
use crate::models::user::UserStatus;
use crate::repositories::transaction::{begin_transaction, commit_transaction};
use crate::types::{ApprovalRequestId, TowerId, UserId};

const SELECT_COLUMNS: &str = "id, applicant_user_id, tower_id, unit_number, status, \
    approved_by_user_id, created_at, decided_at, note";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApprovalRepository: Send + Sync {
    async fn find_by_id(
        &self,
        id: ApprovalRequestId,
    ) -> Result<Option<SignupApprovalRequest>, AppError>;

    /// Pending requests, oldest first, optionally limited to one tower.
    async fn list_pending(
        &self,
        tower_id: Option<TowerId>,
    ) -> Result<Vec<SignupApprovalRequest>, AppError>;

    /// Records the applicant's tower and unit and opens (or refreshes) their
    /// pending request.
    async fn upsert_pending(
        &self,
        applicant: UserId,
        tower_id: TowerId,
        unit_number: &str,
    ) -> Result<SignupApprovalRequest, AppError>;

    /// Marks the request approved and activates the applicant.
    async fn approve(
        &self,
        id: ApprovalRequestId,
        approver: UserId,
    ) -> Result<SignupApprovalRequest, AppError>;

    async fn reject(
        &self,
        id: ApprovalRequestId,
        approver: UserId,
    ) -> Result<SignupApprovalRequest, AppError>;
}

#[derive(Debug, Clone)]
pub struct PgApprovalRepository {
    pool: PgPool,
}

impl PgApprovalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApprovalRepository for PgApprovalRepository {
    async fn find_by_id(
        &self,
        id: ApprovalRequestId,
    ) -> Result<Option<SignupApprovalRequest>, AppError> {
        let query = format!(
            "SELECT {} FROM signup_approval_requests WHERE id = $1",
            SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, SignupApprovalRequest>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_pending(
        &self,
        tower_id: Option<TowerId>,
    ) -> Result<Vec<SignupApprovalRequest>, AppError> {
        let query = format!(
            "SELECT {} FROM signup_approval_requests \
             WHERE status = $1 AND ($2::UUID IS NULL OR tower_id = $2) \
             ORDER BY created_at ASC",
            SELECT_COLUMNS
        );
        let rows = sqlx::query_as::<_, SignupApprovalRequest>(&query)
            .bind(ApprovalStatus::Pending)
            .bind(tower_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn upsert_pending(
        &self,
        applicant: UserId,
        tower_id: TowerId,
        unit_number: &str,
    ) -> Result<SignupApprovalRequest, AppError> {
        let mut tx = begin_transaction(&self.pool).await?;

        sqlx::query("UPDATE users SET tower_id = $2, unit_number = $3, status = $4 WHERE id = $1")
            .bind(applicant)
            .bind(tower_id)
            .bind(unit_number)
            .bind(UserStatus::Pending)
            .execute(&mut *tx)
            .await?;

        let update = format!(
            "UPDATE signup_approval_requests SET tower_id = $2, unit_number = $3, created_at = NOW() \
             WHERE applicant_user_id = $1 AND status = $4 RETURNING {}",
            SELECT_COLUMNS
        );
        let existing = sqlx::query_as::<_, SignupApprovalRequest>(&update)
            .bind(applicant)
            .bind(tower_id)
            .bind(unit_number)
            .bind(ApprovalStatus::Pending)
            .fetch_optional(&mut *tx)
            .await?;

        let request = match existing {
            Some(request) => request,
            None => {
                let insert = format!(
                    "INSERT INTO signup_approval_requests \
                     (id, applicant_user_id, tower_id, unit_number, status, created_at) \
                     VALUES ($1, $2, $3, $4, $5, NOW()) RETURNING {}",
                    SELECT_COLUMNS
                );
                sqlx::query_as::<_, SignupApprovalRequest>(&insert)
                    .bind(ApprovalRequestId::new())
                    .bind(applicant)
                    .bind(tower_id)
                    .bind(unit_number)
                    .bind(ApprovalStatus::Pending)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        commit_transaction(tx).await?;
        Ok(request)
    }

    async fn approve(
        &self,
        id: ApprovalRequestId,
        approver: UserId,
    ) -> Result<SignupApprovalRequest, AppError> {
        let mut tx = begin_transaction(&self.pool).await?;

        let query = format!(
            "UPDATE signup_approval_requests \
             SET status = $2, approved_by_user_id = $3, decided_at = NOW() \
             WHERE id = $1 AND status = $4 RETURNING {}",
            SELECT_COLUMNS
        );
        let request = sqlx::query_as::<_, SignupApprovalRequest>(&query)
            .bind(id)
            .bind(ApprovalStatus::Approved)
            .bind(approver)
            .bind(ApprovalStatus::Pending)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::Conflict("Request is not pending".into()))?;

        sqlx::query("UPDATE users SET status = $2, is_verified = TRUE WHERE id = $1")
            .bind(request.applicant_user_id)
            .bind(UserStatus::Active)
            .execute(&mut *tx)
            .await?;

        commit_transaction(tx).await?;
        Ok(request)
    }

    async fn reject(
        &self,
        id: ApprovalRequestId,
        approver: UserId,
    ) -> Result<SignupApprovalRequest, AppError> {
        let query = format!(
            "UPDATE signup_approval_requests \
             SET status = $2, approved_by_user_id = $3, decided_at = NOW() \
             WHERE id = $1 AND status = $4 RETURNING {}",
            SELECT_COLUMNS
        );
        let request = sqlx::query_as::<_, SignupApprovalRequest>(&query)
            .bind(id)
            .bind(ApprovalStatus::Rejected)
            .bind(approver)
            .bind(ApprovalStatus::Pending)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::Conflict("Request is not pending".into()))?;
        Ok(request)
    }
}
