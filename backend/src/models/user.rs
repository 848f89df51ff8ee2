//! Models that represent residents, staff accounts, and their role metadata.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::types::{TowerId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of an account created through Google sign-in.
pub struct User {
    pub id: UserId,
    /// Unique address used to match the Google profile on every sign-in.
    pub email: String,
    pub phone: Option<String>,
    pub name: String,
    pub unit_number: Option<String>,
    /// Needed to check the 18+ rule before approval and booking.
    pub birth_date: Option<NaiveDate>,
    pub status: UserStatus,
    pub is_verified: bool,
    pub role: UserRole,
    pub tower_id: Option<TowerId>,
    pub auth_provider: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Condominium-wide roles that are not bound to a single tower.
    pub fn is_admin_like(&self) -> bool {
        self.role.is_admin_like()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
/// Roles ordered from resident to platform operator.
pub enum UserRole {
    /// Resident of a unit.
    #[default]
    Morador,
    /// Doorman, scoped to one tower.
    Porteiro,
    /// Tower manager, scoped to one tower.
    Subsindico,
    /// Condominium manager.
    SindicoGeral,
    /// Platform operator.
    Superuser,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Morador => "morador",
            UserRole::Porteiro => "porteiro",
            UserRole::Subsindico => "subsindico",
            UserRole::SindicoGeral => "sindico_geral",
            UserRole::Superuser => "superuser",
        }
    }

    pub fn is_admin_like(&self) -> bool {
        matches!(self, UserRole::SindicoGeral | UserRole::Superuser)
    }

    /// Staff roles whose powers are limited to their own tower.
    pub fn is_tower_scoped(&self) -> bool {
        matches!(self, UserRole::Porteiro | UserRole::Subsindico)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Signed in but not yet approved by staff.
    #[default]
    Pending,
    Active,
    Blocked,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub tower_id: Option<TowerId>,
    pub unit_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub status: UserStatus,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub auth_provider: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            name: user.name,
            phone: user.phone,
            role: user.role,
            tower_id: user.tower_id,
            unit_number: user.unit_number,
            birth_date: user.birth_date,
            status: user.status,
            is_verified: user.is_verified,
            created_at: user.created_at,
            auth_provider: user.auth_provider,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
/// Partial profile update; absent fields are left untouched.
pub struct UserProfileUpdate {
    pub phone: Option<String>,
    pub tower_id: Option<TowerId>,
    pub unit_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignRolePayload {
    pub user_id: UserId,
    pub role: UserRole,
    pub tower_id: Option<TowerId>,
}

/// Fields needed to create an account on first sign-in.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub is_verified: bool,
    pub auth_provider: String,
}

impl NewUser {
    pub fn from_google(email: impl Into<String>, name: Option<String>) -> Self {
        NewUser {
            email: email.into(),
            name: name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            role: UserRole::Morador,
            status: UserStatus::Pending,
            is_verified: false,
            auth_provider: "google".to_string(),
        }
    }
}
