//! Courts and the towers residents belong to.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::types::{CourtId, TowerId};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Court {
    pub id: CourtId,
    pub name: String,
    /// Inactive courts stay listed for history but cannot be booked.
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tower {
    pub id: TowerId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTower {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}
