//! Read-only listings of courts and towers.

use axum::{extract::State, Json};

use crate::{
    error::AppError,
    models::court::{Court, Tower},
    state::AppState,
};

pub async fn list_courts(State(state): State<AppState>) -> Result<Json<Vec<Court>>, AppError> {
    Ok(Json(state.courts.list_courts().await?))
}

pub async fn list_towers(State(state): State<AppState>) -> Result<Json<Vec<Tower>>, AppError> {
    Ok(Json(state.courts.list_towers().await?))
}
