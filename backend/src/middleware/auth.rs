use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, models::user::User, state::AppState};

/// Resolves the bearer token to a [`User`] and exposes it to handlers as an
/// `Extension<User>`. Pending and blocked accounts pass.
pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate_request(request.headers(), &state).await?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Like [`auth`], but only approved (active) accounts get through.
pub async fn auth_active(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate_request(request.headers(), &state).await?;
    if !user.is_active() {
        return Err(AppError::Forbidden(
            "User is not active (approval pending or blocked).".into(),
        ));
    }
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

async fn authenticate_request(headers: &HeaderMap, state: &AppState) -> Result<User, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer_token)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Not authenticated".into()))?;
    state.auth.authenticate(token).await
}

fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.trim().split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") {
        Some(rest.trim())
    } else {
        None
    }
}
