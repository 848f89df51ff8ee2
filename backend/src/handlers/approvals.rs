use axum::{
    extract::{Extension, Path, State},
    Json,
};

use crate::{
    error::AppError,
    models::{approval::SignupApprovalRequest, user::User},
    state::AppState,
    types::ApprovalRequestId,
};

pub async fn list_pending(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<SignupApprovalRequest>>, AppError> {
    Ok(Json(state.approvals.list_pending(&user).await?))
}

pub async fn approve(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(request_id): Path<ApprovalRequestId>,
) -> Result<Json<SignupApprovalRequest>, AppError> {
    Ok(Json(state.approvals.approve(&user, request_id).await?))
}

pub async fn reject(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(request_id): Path<ApprovalRequestId>,
) -> Result<Json<SignupApprovalRequest>, AppError> {
    Ok(Json(state.approvals.reject(&user, request_id).await?))
}
