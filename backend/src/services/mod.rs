pub mod admin;
pub mod approval;
pub mod audit;
pub mod auth;
pub mod availability;
pub mod policy;
pub mod reservation;
pub mod user;

pub use admin::AdminService;
pub use approval::ApprovalService;
pub use auth::AuthService;
pub use reservation::ReservationService;
pub use user::UserService;
