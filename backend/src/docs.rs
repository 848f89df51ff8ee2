#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    handlers::{admin::AuditLogQuery, auth::GoogleCallbackQuery, health::HealthResponse},
    models::{
        approval::{ApprovalStatus, CreateApprovalRequest, SignupApprovalRequest},
        audit_log::AuditLog,
        availability::{AvailabilityQuery, DayAvailability, PeriodAvailability, SlotStatus},
        blackout::{BlackoutWindow, CreateBlackout},
        court::{Court, CreateTower, Tower},
        reservation::{CreateReservation, Reservation, ReservationListQuery, ReservationStatus},
        user::{AssignRolePayload, UserProfileUpdate, UserResponse, UserRole, UserStatus},
    },
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Quadra API", description = "Condominium sports-court reservations"),
    paths(
        healthz_doc,
        login_google_doc,
        callback_google_doc,
        me_doc,
        update_profile_doc,
        request_approval_doc,
        list_towers_doc,
        list_courts_doc,
        list_pending_approvals_doc,
        approve_doc,
        reject_doc,
        list_reservations_doc,
        my_reservations_doc,
        create_reservation_doc,
        cancel_reservation_doc,
        availability_doc,
        assign_role_doc,
        list_blackouts_doc,
        create_blackout_doc,
        delete_blackout_doc,
        create_tower_doc,
        list_audit_logs_doc
    ),
    components(
        schemas(
            HealthResponse,
            // users
            UserResponse,
            UserRole,
            UserStatus,
            UserProfileUpdate,
            AssignRolePayload,
            // approvals
            CreateApprovalRequest,
            SignupApprovalRequest,
            ApprovalStatus,
            // courts & reservations
            Court,
            Tower,
            CreateTower,
            Reservation,
            ReservationStatus,
            CreateReservation,
            DayAvailability,
            PeriodAvailability,
            SlotStatus,
            // admin
            BlackoutWindow,
            CreateBlackout,
            AuditLog
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Auth", description = "Google sign-in and session"),
        (name = "Users", description = "Profile and signup approval requests"),
        (name = "Approvals", description = "Staff review of new residents"),
        (name = "Reservations", description = "Court bookings and availability"),
        (name = "Admin", description = "Roles, blackouts, towers, audit trail")
    ),
    security(("BearerAuth" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("JWT".to_string());

        components.add_security_scheme("BearerAuth", SecurityScheme::Http(bearer));
    }
}

#[utoipa::path(
    get,
    path = "/healthz",
    responses((status = 200, body = HealthResponse)),
    security(())
)]
fn healthz_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/auth/login/google",
    responses((status = 303, description = "Redirect to Google's consent screen")),
    tag = "Auth",
    security(())
)]
fn login_google_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/auth/callback/google",
    params(GoogleCallbackQuery),
    responses(
        (status = 303, description = "Redirect to the front-end with ?token="),
        (status = 400, description = "Code rejected or profile without email")
    ),
    tag = "Auth",
    security(())
)]
fn callback_google_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, body = UserResponse),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "Auth"
)]
fn me_doc() {}

#[utoipa::path(
    patch,
    path = "/api/v1/users/me/profile",
    request_body = UserProfileUpdate,
    responses((status = 200, body = UserResponse)),
    tag = "Users"
)]
fn update_profile_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/users/me/approval-request",
    request_body = CreateApprovalRequest,
    responses(
        (status = 200, body = SignupApprovalRequest),
        (status = 400, description = "Blank unit number")
    ),
    tag = "Users"
)]
fn request_approval_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/towers",
    responses((status = 200, body = [Tower])),
    tag = "Users"
)]
fn list_towers_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/courts",
    responses((status = 200, body = [Court])),
    tag = "Reservations"
)]
fn list_courts_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/approvals/pending",
    responses((status = 200, body = [SignupApprovalRequest])),
    tag = "Approvals"
)]
fn list_pending_approvals_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/approvals/{id}/approve",
    params(("id" = String, Path, description = "Approval request ID")),
    responses(
        (status = 200, body = SignupApprovalRequest),
        (status = 400, description = "Applicant without birth date or under 18"),
        (status = 403, description = "Tower scope violation"),
        (status = 409, description = "Request already decided")
    ),
    tag = "Approvals"
)]
fn approve_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/approvals/{id}/reject",
    params(("id" = String, Path, description = "Approval request ID")),
    responses((status = 200, body = SignupApprovalRequest)),
    tag = "Approvals"
)]
fn reject_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    params(ReservationListQuery),
    responses((status = 200, body = [Reservation])),
    tag = "Reservations"
)]
fn list_reservations_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/reservations/mine",
    responses((status = 200, body = [Reservation])),
    tag = "Reservations"
)]
fn my_reservations_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    request_body = CreateReservation,
    responses(
        (status = 201, body = Reservation),
        (status = 400, description = "Invalid window or daily limit exceeded"),
        (status = 409, description = "Slot taken or blacked out")
    ),
    tag = "Reservations"
)]
fn create_reservation_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/reservations/{id}/cancel",
    params(("id" = String, Path, description = "Reservation ID")),
    responses(
        (status = 200, body = Reservation),
        (status = 403, description = "Not the owner"),
        (status = 409, description = "Already cancelled")
    ),
    tag = "Reservations"
)]
fn cancel_reservation_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/reservations/availability",
    params(AvailabilityQuery),
    responses((status = 200, body = [DayAvailability])),
    tag = "Reservations"
)]
fn availability_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/admin/assign-role",
    request_body = AssignRolePayload,
    responses((status = 200, description = "{\"ok\": true}")),
    tag = "Admin"
)]
fn assign_role_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/admin/blackouts",
    responses((status = 200, body = [BlackoutWindow])),
    tag = "Admin"
)]
fn list_blackouts_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/admin/blackouts",
    request_body = CreateBlackout,
    responses((status = 201, body = BlackoutWindow)),
    tag = "Admin"
)]
fn create_blackout_doc() {}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/blackouts/{id}",
    params(("id" = String, Path, description = "Blackout window ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown window")
    ),
    tag = "Admin"
)]
fn delete_blackout_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/admin/towers",
    request_body = CreateTower,
    responses(
        (status = 201, body = Tower),
        (status = 409, description = "Duplicate name")
    ),
    tag = "Admin"
)]
fn create_tower_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/admin/audit-logs",
    params(AuditLogQuery),
    responses((status = 200, body = [AuditLog])),
    tag = "Admin"
)]
fn list_audit_logs_doc() {}
