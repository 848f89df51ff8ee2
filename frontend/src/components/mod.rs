pub mod bottom_nav;
pub mod court_status_grid;
pub mod footer;
pub mod layout;
pub mod reservation_card;
