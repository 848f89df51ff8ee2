use crate::components::{
    bottom_nav::BottomNav, court_status_grid::CourtStatusGrid,
    reservation_card::ReservationCard,
};
use crate::pages::dashboard::UPCOMING_RESERVATIONS;
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="flex-1 bg-gray-50 pb-20">
            <header class="pt-12 pb-6 px-6 bg-white">
                <div class="flex items-center gap-4">
                    <div class="w-12 h-12 bg-emerald-400 rounded-full flex items-center justify-center p-2.5 shadow-lg shadow-emerald-200">
                        <svg viewBox="0 0 24 24" fill="none" class="w-full h-full text-white" stroke="currentColor" stroke-width="2">
                            <path d="M3 3h18v18H3z" />
                            <path d="M12 3v18" />
                            <path d="M3 12h18" />
                        </svg>
                    </div>
                    <h1 class="text-xl font-bold text-gray-800 leading-tight">
                        "Reserva Quadra de"<br/>" Esportes JP"
                    </h1>
                </div>
            </header>

            <main class="px-6 space-y-6">
                <CourtStatusGrid />

                <div class="relative w-full h-48 rounded-3xl overflow-hidden shadow-sm">
                    <div class="w-full h-full bg-blue-100 flex items-center justify-center">
                        <span class="text-blue-300 font-bold">"Foto da Quadra"</span>
                    </div>
                </div>

                <div class="grid grid-cols-3 gap-3">
                    <ActionButton tone="bg-emerald-400 hover:bg-emerald-500 shadow-emerald-200" first="Nova" second=Some("Reserva") />
                    <ActionButton tone="bg-blue-500 hover:bg-blue-600 shadow-blue-200" first="Minhas" second=Some("Reservas") />
                    <ActionButton tone="bg-orange-500 hover:bg-orange-600 shadow-orange-200" first="Calendário" second=None />
                </div>

                <div class="grid grid-cols-2 gap-4">
                    {UPCOMING_RESERVATIONS
                        .iter()
                        .map(|card| view! { <ReservationCard card=*card /> })
                        .collect_view()}
                </div>
            </main>

            <BottomNav />
        </div>
    }
}

#[component]
fn ActionButton(
    tone: &'static str,
    first: &'static str,
    second: Option<&'static str>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!(
                "{} text-white p-4 rounded-2xl shadow-lg flex flex-col items-center justify-center gap-1 transition-transform active:scale-95",
                tone,
            )
        >
            <span class="text-sm font-bold leading-tight">
                {first}
                {second.map(|line| view! { <br/>{line} })}
            </span>
        </button>
    }
}
