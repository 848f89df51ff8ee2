use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::audit_log::{AuditLog, NewAuditLog};
use crate::types::AuditLogId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn insert(&self, entry: &NewAuditLog) -> Result<(), AppError>;

    /// Most recent entries first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<AuditLog>, AppError>;
}

#[derive(Debug, Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    async fn insert(&self, entry: &NewAuditLog) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO audit_logs \
             (id, actor_user_id, action, entity_type, entity_id, metadata, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, NOW())",
        )
        .bind(AuditLogId::new())
        .bind(entry.actor_user_id)
        .bind(entry.action)
        .bind(entry.entity_type)
        .bind(&entry.entity_id)
        .bind(&entry.metadata)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<AuditLog>, AppError> {
        let rows = sqlx::query_as::<_, AuditLog>(
            "SELECT id, actor_user_id, action, entity_type, entity_id, metadata, created_at \
             FROM audit_logs ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
