pub mod auth_callback;
pub mod dashboard;
pub mod home;

pub use auth_callback::AuthCallbackPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
