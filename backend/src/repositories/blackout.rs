use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::blackout::{BlackoutWindow, CreateBlackout};
use crate::types::{BlackoutWindowId, UserId};

const SELECT_COLUMNS: &str = "id, start_time, end_time, reason, created_by";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlackoutRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<BlackoutWindow>, AppError>;

    /// Windows intersecting `[from, to)`.
    async fn list_overlapping(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<BlackoutWindow>, AppError>;

    async fn create(
        &self,
        payload: &CreateBlackout,
        created_by: UserId,
    ) -> Result<BlackoutWindow, AppError>;

    /// Returns `false` when no window had that id.
    async fn delete(&self, id: BlackoutWindowId) -> Result<bool, AppError>;
}

#[derive(Debug, Clone)]
pub struct PgBlackoutRepository {
    pool: PgPool,
}

impl PgBlackoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlackoutRepository for PgBlackoutRepository {
    async fn list(&self) -> Result<Vec<BlackoutWindow>, AppError> {
        let query = format!(
            "SELECT {} FROM blackout_windows ORDER BY start_time ASC",
            SELECT_COLUMNS
        );
        let rows = sqlx::query_as::<_, BlackoutWindow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_overlapping(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<BlackoutWindow>, AppError> {
        let query = format!(
            "SELECT {} FROM blackout_windows WHERE start_time < $2 AND end_time > $1 \
             ORDER BY start_time ASC",
            SELECT_COLUMNS
        );
        let rows = sqlx::query_as::<_, BlackoutWindow>(&query)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(
        &self,
        payload: &CreateBlackout,
        created_by: UserId,
    ) -> Result<BlackoutWindow, AppError> {
        let query = format!(
            "INSERT INTO blackout_windows (id, start_time, end_time, reason, created_by) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, BlackoutWindow>(&query)
            .bind(BlackoutWindowId::new())
            .bind(payload.start_time)
            .bind(payload.end_time)
            .bind(&payload.reason)
            .bind(created_by)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: BlackoutWindowId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM blackout_windows WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
