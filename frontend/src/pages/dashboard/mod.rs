pub mod panel;

pub use panel::DashboardPage;

use crate::components::reservation_card::ReservationCardData;

pub const UPCOMING_RESERVATIONS: [ReservationCardData; 2] = [
    ReservationCardData {
        day_label: "SEXTA, 14 ABRIL",
        time_range: "10:00 - 11:00",
        court: "Quadra poliesportiva",
        resident: "Pedro Sousa",
        badge_class: "bg-emerald-400",
    },
    ReservationCardData {
        day_label: "QUINTA, 13 ABRIL",
        time_range: "18:00 - 19:00",
        court: "Quadra poliesportiva",
        resident: "Ana Martins",
        badge_class: "bg-orange-400",
    },
];
