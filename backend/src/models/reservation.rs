//! Court reservations and their lifecycle events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::types::{CourtId, ReservationId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reservation {
    pub id: ReservationId,
    pub court_id: CourtId,
    /// Resident the court is booked for.
    pub user_id: UserId,
    /// Account that made the booking; differs from `user_id` when staff book on behalf of a resident.
    pub created_by_user_id: UserId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub cancelled_by: Option<UserId>,
    pub notes: Option<String>,
}

impl Reservation {
    pub fn is_cancelled(&self) -> bool {
        self.status == ReservationStatus::Cancelled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReservation {
    pub court_id: CourtId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub notes: Option<String>,
    /// Staff may book for a resident; residents always book for themselves.
    pub reserved_for_user_id: Option<UserId>,
}

/// Row data for a reservation that passed every booking rule.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub court_id: CourtId,
    pub user_id: UserId,
    pub created_by_user_id: UserId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ReservationListQuery {
    /// Optional `YYYY-MM-DD` day filter.
    pub date_str: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReservationEventType {
    Created,
    Confirmed,
    Reminder,
    Modified,
    Cancelled,
    Checkin,
    Checkout,
}
