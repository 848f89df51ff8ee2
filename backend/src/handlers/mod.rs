pub mod admin;
pub mod approvals;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod reservations;
pub mod users;
