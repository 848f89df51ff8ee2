use axum::{
    extract::{Extension, State},
    Json,
};

use crate::{
    error::AppError,
    models::{
        approval::{CreateApprovalRequest, SignupApprovalRequest},
        user::{User, UserProfileUpdate, UserResponse},
    },
    state::AppState,
};

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<UserProfileUpdate>,
) -> Result<Json<UserResponse>, AppError> {
    let updated = state.users.update_profile(&user, payload).await?;
    Ok(Json(updated.into()))
}

pub async fn request_approval(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateApprovalRequest>,
) -> Result<Json<SignupApprovalRequest>, AppError> {
    let request = state.users.request_approval(&user, payload).await?;
    Ok(Json(request))
}
