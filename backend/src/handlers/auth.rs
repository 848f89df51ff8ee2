use axum::{
    extract::{Extension, Query, State},
    response::Redirect,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppError,
    models::user::{User, UserResponse},
    state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GoogleCallbackQuery {
    pub code: String,
}

/// Sends the browser to Google's consent screen.
pub async fn login_google(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let url = state.auth.login_url()?;
    Ok(Redirect::to(url.as_str()))
}

/// Google redirects here; the browser continues to the front-end with a token.
pub async fn callback_google(
    State(state): State<AppState>,
    Query(query): Query<GoogleCallbackQuery>,
) -> Result<Redirect, AppError> {
    let target = state.auth.complete_google_sign_in(&query.code).await?;
    Ok(Redirect::to(target.as_str()))
}

pub async fn me(Extension(user): Extension<User>) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}
