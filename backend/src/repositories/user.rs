//! User repository.
//!
//! Accounts are keyed by email because that is what the Google profile and the
//! access token carry.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::user::{NewUser, User, UserProfileUpdate, UserRole};
use crate::types::{TowerId, UserId};

const TABLE_NAME: &str = "users";
const SELECT_COLUMNS: &str = "id, email, phone, name, unit_number, birth_date, status, \
    is_verified, role, tower_id, auth_provider, created_at";

/// This trait is designed to be mockable using mockall for testing.
/// Use `MockUserRepository` in tests to mock the behavior.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn create(&self, user: &NewUser) -> Result<User, AppError>;

    /// Inserts `user` unless the email is taken; `None` means another
    /// request created it first.
    async fn create_if_absent(&self, user: &NewUser) -> Result<Option<User>, AppError>;

    /// Applies only the fields present in `update`.
    async fn update_profile(&self, id: UserId, update: &UserProfileUpdate)
        -> Result<User, AppError>;

    async fn assign_role(
        &self,
        id: UserId,
        role: UserRole,
        tower_id: Option<TowerId>,
    ) -> Result<User, AppError>;
}

#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError> {
        let query = format!("SELECT {} FROM {} WHERE id = $1", SELECT_COLUMNS, TABLE_NAME);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE email = $1",
            SELECT_COLUMNS, TABLE_NAME
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create(&self, user: &NewUser) -> Result<User, AppError> {
        let query = format!(
            "INSERT INTO {} (id, email, name, role, status, is_verified, auth_provider, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, NOW()) \
             RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, User>(&query)
            .bind(UserId::new())
            .bind(&user.email)
            .bind(&user.name)
            .bind(user.role)
            .bind(user.status)
            .bind(user.is_verified)
            .bind(&user.auth_provider)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create_if_absent(&self, user: &NewUser) -> Result<Option<User>, AppError> {
        let query = format!(
            "INSERT INTO {} (id, email, name, role, status, is_verified, auth_provider, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, NOW()) \
             ON CONFLICT (email) DO NOTHING \
             RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, User>(&query)
            .bind(UserId::new())
            .bind(&user.email)
            .bind(&user.name)
            .bind(user.role)
            .bind(user.status)
            .bind(user.is_verified)
            .bind(&user.auth_provider)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_profile(
        &self,
        id: UserId,
        update: &UserProfileUpdate,
    ) -> Result<User, AppError> {
        let query = format!(
            "UPDATE {} SET \
                phone = COALESCE($2, phone), \
                tower_id = COALESCE($3, tower_id), \
                unit_number = COALESCE($4, unit_number), \
                birth_date = COALESCE($5, birth_date) \
             WHERE id = $1 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&update.phone)
            .bind(update.tower_id)
            .bind(&update.unit_number)
            .bind(update.birth_date)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;
        Ok(row)
    }

    async fn assign_role(
        &self,
        id: UserId,
        role: UserRole,
        tower_id: Option<TowerId>,
    ) -> Result<User, AppError> {
        let query = format!(
            "UPDATE {} SET role = $2, tower_id = COALESCE($3, tower_id) \
             WHERE id = $1 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(role)
            .bind(tower_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_columns_cover_user_fields() {
        for column in ["email", "birth_date", "status", "role", "tower_id"] {
            assert!(SELECT_COLUMNS.contains(column), "missing {column}");
        }
    }

    #[test]
    fn mock_user_repository_is_send_sync() {
        fn check_send_sync<T: Send + Sync>() {}
        check_send_sync::<MockUserRepository>();
    }
}
