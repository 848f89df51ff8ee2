//! Reservation repository.
//!
//! Inserts and cancellations write a matching `reservation_events` row in the
//! same transaction. Inserts for one user are serialized with an advisory lock
//! so the daily limit is rechecked against committed bookings; court overlap
//! is enforced by the `reservations_no_overlap` exclusion constraint.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::reservation::{
    NewReservation, Reservation, ReservationEventType, ReservationStatus,
};
use crate::repositories::transaction::{begin_transaction, commit_transaction};
use crate::types::{CourtId, ReservationEventId, ReservationId, UserId};

const TABLE_NAME: &str = "reservations";
const SELECT_COLUMNS: &str = "id, court_id, user_id, created_by_user_id, start_time, end_time, \
    status, created_at, cancelled_by, notes";

/// Booked time a user may hold in reservations starting inside `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyLimit {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub max_seconds: i64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>, AppError>;

    /// Non-cancelled reservations, optionally limited to those starting in `[from, to)`.
    async fn list_active(
        &self,
        window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<Reservation>, AppError>;

    /// Every reservation held by `user_id`, newest first.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Reservation>, AppError>;

    /// Non-cancelled reservations on `court_id` intersecting `[from, to)`.
    async fn list_overlapping(
        &self,
        court_id: CourtId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, AppError>;

    /// Seconds already booked by `user_id` in reservations starting in `[from, to)`.
    async fn booked_seconds(
        &self,
        user_id: UserId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<i64, AppError>;

    /// Inserts a confirmed reservation unless it would push the user past `limit`.
    async fn insert(
        &self,
        reservation: &NewReservation,
        limit: DailyLimit,
    ) -> Result<Reservation, AppError>;

    /// Fails with a conflict when the reservation is already cancelled.
    async fn cancel(&self, id: ReservationId, cancelled_by: UserId)
        -> Result<Reservation, AppError>;
}

#[derive(Debug, Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn record_event<'c, E>(
    executor: E,
    reservation_id: ReservationId,
    event_type: ReservationEventType,
    payload: serde_json::Value,
) -> Result<(), AppError>
where
    E: sqlx::Executor<'c, Database = sqlx::Postgres>,
{
    sqlx::query(
        "INSERT INTO reservation_events (id, reservation_id, type, payload, created_at) \
         VALUES ($1, $2, $3, $4, NOW())",
    )
    .bind(ReservationEventId::new())
    .bind(reservation_id)
    .bind(event_type)
    .bind(payload)
    .execute(executor)
    .await?;
    Ok(())
}

async fn sum_booked_seconds<'c, E>(
    executor: E,
    user_id: UserId,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<i64, AppError>
where
    E: sqlx::Executor<'c, Database = sqlx::Postgres>,
{
    let seconds: i64 = sqlx::query_scalar(
        "SELECT COALESCE(SUM(EXTRACT(EPOCH FROM (end_time - start_time))), 0)::BIGINT \
         FROM reservations \
         WHERE user_id = $1 AND status <> $2 AND start_time >= $3 AND start_time < $4",
    )
    .bind(user_id)
    .bind(ReservationStatus::Cancelled)
    .bind(from)
    .bind(to)
    .fetch_one(executor)
    .await?;
    Ok(seconds)
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    async fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>, AppError> {
        let query = format!("SELECT {} FROM {} WHERE id = $1", SELECT_COLUMNS, TABLE_NAME);
        let row = sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_active(
        &self,
        window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<Reservation>, AppError> {
        let rows = match window {
            Some((from, to)) => {
                let query = format!(
                    "SELECT {} FROM {} WHERE status <> $1 AND start_time >= $2 AND start_time < $3 \
                     ORDER BY start_time ASC",
                    SELECT_COLUMNS, TABLE_NAME
                );
                sqlx::query_as::<_, Reservation>(&query)
                    .bind(ReservationStatus::Cancelled)
                    .bind(from)
                    .bind(to)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {} FROM {} WHERE status <> $1 ORDER BY start_time ASC",
                    SELECT_COLUMNS, TABLE_NAME
                );
                sqlx::query_as::<_, Reservation>(&query)
                    .bind(ReservationStatus::Cancelled)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows)
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Reservation>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE user_id = $1 ORDER BY start_time DESC",
            SELECT_COLUMNS, TABLE_NAME
        );
        let rows = sqlx::query_as::<_, Reservation>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_overlapping(
        &self,
        court_id: CourtId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, AppError> {
        let query = format!(
            "SELECT {} FROM {} \
             WHERE court_id = $1 AND status <> $2 AND start_time < $4 AND end_time > $3 \
             ORDER BY start_time ASC",
            SELECT_COLUMNS, TABLE_NAME
        );
        let rows = sqlx::query_as::<_, Reservation>(&query)
            .bind(court_id)
            .bind(ReservationStatus::Cancelled)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn booked_seconds(
        &self,
        user_id: UserId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        sum_booked_seconds(&self.pool, user_id, from, to).await
    }

    async fn insert(
        &self,
        reservation: &NewReservation,
        limit: DailyLimit,
    ) -> Result<Reservation, AppError> {
        let mut tx = begin_transaction(&self.pool).await?;
        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
            .bind(reservation.user_id.to_string())
            .execute(&mut *tx)
            .await?;

        let booked =
            sum_booked_seconds(&mut *tx, reservation.user_id, limit.from, limit.to).await?;
        let requested = (reservation.end_time - reservation.start_time).num_seconds();
        if booked + requested > limit.max_seconds {
            return Err(AppError::BadRequest(
                "Daily limit exceeded (max 2h/day)".into(),
            ));
        }

        let query = format!(
            "INSERT INTO {} (id, court_id, user_id, created_by_user_id, start_time, end_time, \
                status, created_at, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), $8) \
             RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Reservation>(&query)
            .bind(ReservationId::new())
            .bind(reservation.court_id)
            .bind(reservation.user_id)
            .bind(reservation.created_by_user_id)
            .bind(reservation.start_time)
            .bind(reservation.end_time)
            .bind(ReservationStatus::Confirmed)
            .bind(&reservation.notes)
            .fetch_one(&mut *tx)
            .await?;

        record_event(
            &mut *tx,
            row.id,
            ReservationEventType::Created,
            json!({ "created_by": reservation.created_by_user_id }),
        )
        .await?;
        commit_transaction(tx).await?;
        Ok(row)
    }

    async fn cancel(
        &self,
        id: ReservationId,
        cancelled_by: UserId,
    ) -> Result<Reservation, AppError> {
        let mut tx = begin_transaction(&self.pool).await?;
        let query = format!(
            "UPDATE {} SET status = $2, cancelled_by = $3 \
             WHERE id = $1 AND status <> $2 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(ReservationStatus::Cancelled)
            .bind(cancelled_by)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::Conflict("Reservation already cancelled".into()))?;

        record_event(
            &mut *tx,
            row.id,
            ReservationEventType::Cancelled,
            json!({ "cancelled_by": cancelled_by }),
        )
        .await?;
        commit_transaction(tx).await?;
        Ok(row)
    }
}
