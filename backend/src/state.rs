use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::repositories::{
    ApprovalRepository, AuditLogRepository, BlackoutRepository, CourtRepository,
    PgApprovalRepository, PgAuditLogRepository, PgBlackoutRepository, PgCourtRepository,
    PgReservationRepository, PgUserRepository, ReservationRepository, UserRepository,
};
use crate::services::{AdminService, ApprovalService, AuthService, ReservationService, UserService};
use crate::utils::oauth::OAuthProvider;

/// Storage seams behind every service.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub courts: Arc<dyn CourtRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub approvals: Arc<dyn ApprovalRepository>,
    pub blackouts: Arc<dyn BlackoutRepository>,
    pub audit: Arc<dyn AuditLogRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            courts: Arc::new(PgCourtRepository::new(pool.clone())),
            reservations: Arc::new(PgReservationRepository::new(pool.clone())),
            approvals: Arc::new(PgApprovalRepository::new(pool.clone())),
            blackouts: Arc::new(PgBlackoutRepository::new(pool.clone())),
            audit: Arc::new(PgAuditLogRepository::new(pool)),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub courts: Arc<dyn CourtRepository>,
    pub auth: AuthService,
    pub users: UserService,
    pub approvals: ApprovalService,
    pub reservations: ReservationService,
    pub admin: AdminService,
}

impl AppState {
    pub fn new(config: Config, repos: Repositories, oauth: Arc<dyn OAuthProvider>) -> Self {
        let tz = config.time_zone;
        Self {
            auth: AuthService::new(repos.users.clone(), oauth, config.clone()),
            users: UserService::new(
                repos.users.clone(),
                repos.approvals.clone(),
                repos.courts.clone(),
            ),
            approvals: ApprovalService::new(
                repos.approvals.clone(),
                repos.users.clone(),
                repos.audit.clone(),
                tz,
            ),
            reservations: ReservationService::new(
                repos.reservations.clone(),
                repos.users.clone(),
                repos.courts.clone(),
                repos.blackouts.clone(),
                repos.audit.clone(),
                tz,
            ),
            admin: AdminService::new(
                repos.users.clone(),
                repos.courts.clone(),
                repos.blackouts.clone(),
                repos.audit.clone(),
            ),
            courts: repos.courts,
            config,
        }
    }
}
