use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, docs::ApiDoc, handlers, middleware, state::AppState};

pub const API_PREFIX: &str = "/api/v1";

pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/login/google", get(handlers::auth::login_google))
        .route("/auth/callback/google", get(handlers::auth::callback_google));

    // Signed-in accounts, approved or not.
    let user_routes = Router::new()
        .route("/auth/me", get(handlers::auth::me))
        .route("/users/me", get(handlers::auth::me))
        .route("/users/me/profile", patch(handlers::users::update_profile))
        .route(
            "/users/me/approval-request",
            post(handlers::users::request_approval),
        )
        .route("/towers", get(handlers::catalog::list_towers))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth,
        ));

    let active_routes = Router::new()
        .route("/courts", get(handlers::catalog::list_courts))
        .route("/approvals/pending", get(handlers::approvals::list_pending))
        .route("/approvals/{id}/approve", post(handlers::approvals::approve))
        .route("/approvals/{id}/reject", post(handlers::approvals::reject))
        .route(
            "/reservations",
            get(handlers::reservations::list_reservations)
                .post(handlers::reservations::create_reservation),
        )
        .route(
            "/reservations/mine",
            get(handlers::reservations::my_reservations),
        )
        .route(
            "/reservations/availability",
            get(handlers::reservations::availability),
        )
        .route(
            "/reservations/{id}/cancel",
            post(handlers::reservations::cancel_reservation),
        )
        .route("/admin/assign-role", post(handlers::admin::assign_role))
        .route(
            "/admin/blackouts",
            get(handlers::admin::list_blackouts).post(handlers::admin::create_blackout),
        )
        .route(
            "/admin/blackouts/{id}",
            delete(handlers::admin::delete_blackout),
        )
        .route("/admin/towers", post(handlers::admin::create_tower))
        .route("/admin/audit-logs", get(handlers::admin::list_audit_logs))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_active,
        ));

    let api = Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(active_routes);

    Router::new()
        .route("/healthz", get(handlers::health::healthz))
        .nest(API_PREFIX, api)
        .merge(SwaggerUi::new("/api/docs").url("/api/v1/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.config))
                .layer(axum_middleware::from_fn(middleware::log_error_responses)),
        )
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(24 * 60 * 60))
}
