pub mod approval;
pub mod audit_log;
pub mod blackout;
pub mod court;
pub mod reservation;
pub mod transaction;
pub mod user;

pub use approval::{ApprovalRepository, PgApprovalRepository};
pub use audit_log::{AuditLogRepository, PgAuditLogRepository};
pub use blackout::{BlackoutRepository, PgBlackoutRepository};
pub use court::{CourtRepository, PgCourtRepository};
pub use reservation::{DailyLimit, PgReservationRepository, ReservationRepository};
pub use user::{PgUserRepository, UserRepository};
