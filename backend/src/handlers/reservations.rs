use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppError,
    models::{
        availability::{AvailabilityQuery, DayAvailability},
        reservation::{CreateReservation, Reservation, ReservationListQuery},
        user::User,
    },
    state::AppState,
    types::ReservationId,
};

pub async fn list_reservations(
    State(state): State<AppState>,
    Query(query): Query<ReservationListQuery>,
) -> Result<Json<Vec<Reservation>>, AppError> {
    let reservations = state.reservations.list(query.date_str.as_deref()).await?;
    Ok(Json(reservations))
}

pub async fn my_reservations(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<Reservation>>, AppError> {
    Ok(Json(state.reservations.list_mine(&user).await?))
}

pub async fn create_reservation(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateReservation>,
) -> Result<(StatusCode, Json<Reservation>), AppError> {
    let reservation = state.reservations.create(&user, payload).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

pub async fn cancel_reservation(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(reservation_id): Path<ReservationId>,
) -> Result<Json<Reservation>, AppError> {
    Ok(Json(state.reservations.cancel(&user, reservation_id).await?))
}

pub async fn availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<DayAvailability>>, AppError> {
    Ok(Json(state.reservations.availability(&query).await?))
}
