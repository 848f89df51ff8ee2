use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use utoipa::IntoParams;

use crate::{
    error::AppError,
    models::{
        audit_log::AuditLog,
        blackout::{BlackoutWindow, CreateBlackout},
        court::{CreateTower, Tower},
        user::{AssignRolePayload, User},
    },
    state::AppState,
    types::BlackoutWindowId,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuditLogQuery {
    /// Maximum number of entries (1 to 500, default 100).
    pub limit: Option<i64>,
}

pub async fn assign_role(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<AssignRolePayload>,
) -> Result<Json<Value>, AppError> {
    state.admin.assign_role(&user, payload).await?;
    Ok(Json(json!({ "ok": true })))
}

pub async fn list_blackouts(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<BlackoutWindow>>, AppError> {
    Ok(Json(state.admin.list_blackouts(&user).await?))
}

pub async fn create_blackout(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateBlackout>,
) -> Result<(StatusCode, Json<BlackoutWindow>), AppError> {
    let window = state.admin.create_blackout(&user, payload).await?;
    Ok((StatusCode::CREATED, Json(window)))
}

pub async fn delete_blackout(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(blackout_id): Path<BlackoutWindowId>,
) -> Result<StatusCode, AppError> {
    state.admin.delete_blackout(&user, blackout_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_tower(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateTower>,
) -> Result<(StatusCode, Json<Tower>), AppError> {
    let tower = state.admin.create_tower(&user, payload).await?;
    Ok((StatusCode::CREATED, Json(tower)))
}

pub async fn list_audit_logs(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<AuditLogQuery>,
) -> Result<Json<Vec<AuditLog>>, AppError> {
    Ok(Json(state.admin.list_audit_logs(&user, query.limit).await?))
}
