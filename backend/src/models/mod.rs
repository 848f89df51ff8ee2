pub mod approval;
pub mod audit_log;
pub mod availability;
pub mod blackout;
pub mod court;
pub mod reservation;
pub mod user;
