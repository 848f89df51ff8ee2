//! Courts and towers. Both are small reference tables managed by staff.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::court::{Court, Tower};
use crate::types::{CourtId, TowerId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourtRepository: Send + Sync {
    async fn find_court(&self, id: CourtId) -> Result<Option<Court>, AppError>;

    async fn list_courts(&self) -> Result<Vec<Court>, AppError>;

    /// Returns the court called `name`, creating an active one if missing.
    async fn find_or_create_court(&self, name: &str) -> Result<Court, AppError>;

    async fn find_tower(&self, id: TowerId) -> Result<Option<Tower>, AppError>;

    async fn list_towers(&self) -> Result<Vec<Tower>, AppError>;

    async fn create_tower(&self, name: &str) -> Result<Tower, AppError>;
}

#[derive(Debug, Clone)]
pub struct PgCourtRepository {
    pool: PgPool,
}

impl PgCourtRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourtRepository for PgCourtRepository {
    async fn find_court(&self, id: CourtId) -> Result<Option<Court>, AppError> {
        let court = sqlx::query_as::<_, Court>("SELECT id, name, is_active FROM courts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(court)
    }

    async fn list_courts(&self) -> Result<Vec<Court>, AppError> {
        let courts = sqlx::query_as::<_, Court>(
            "SELECT id, name, is_active FROM courts WHERE is_active = TRUE ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(courts)
    }

    async fn find_or_create_court(&self, name: &str) -> Result<Court, AppError> {
        let existing =
            sqlx::query_as::<_, Court>("SELECT id, name, is_active FROM courts WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;
        if let Some(court) = existing {
            return Ok(court);
        }
        let court = sqlx::query_as::<_, Court>(
            "INSERT INTO courts (id, name, is_active) VALUES ($1, $2, TRUE) \
             RETURNING id, name, is_active",
        )
        .bind(CourtId::new())
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(court)
    }

    async fn find_tower(&self, id: TowerId) -> Result<Option<Tower>, AppError> {
        let tower = sqlx::query_as::<_, Tower>("SELECT id, name FROM towers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tower)
    }

    async fn list_towers(&self) -> Result<Vec<Tower>, AppError> {
        let towers = sqlx::query_as::<_, Tower>("SELECT id, name FROM towers ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(towers)
    }

    async fn create_tower(&self, name: &str) -> Result<Tower, AppError> {
        let tower = sqlx::query_as::<_, Tower>(
            "INSERT INTO towers (id, name) VALUES ($1, $2) RETURNING id, name",
        )
        .bind(TowerId::new())
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(tower)
    }
}
