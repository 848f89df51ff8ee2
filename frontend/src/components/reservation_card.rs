use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationCardData {
    pub day_label: &'static str,
    pub time_range: &'static str,
    pub court: &'static str,
    pub resident: &'static str,
    pub badge_class: &'static str,
}

#[component]
pub fn ReservationCard(card: ReservationCardData) -> impl IntoView {
    view! {
        <div class="bg-white p-4 rounded-3xl shadow-sm border border-gray-100">
            <div class=format!(
                "inline-block px-3 py-1 {} text-white text-[10px] font-bold rounded-full mb-2",
                card.badge_class,
            )>{card.day_label}</div>
            <div class="text-lg font-bold text-gray-800">{card.time_range}</div>
            <div class="text-xs text-blue-500 font-medium mb-3">{card.court}</div>
            <div class="flex items-center gap-2">
                <div class="w-6 h-6 bg-gray-200 rounded-full"></div>
                <span class="text-xs text-gray-600 font-medium">{card.resident}</span>
            </div>
        </div>
    }
}
