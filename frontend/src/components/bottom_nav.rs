use leptos::*;

#[component]
pub fn BottomNav() -> impl IntoView {
    view! {
        <nav class="fixed bottom-0 left-0 right-0 bg-white border-t border-gray-100 px-6 py-3 flex justify-between items-center z-50 rounded-t-3xl shadow-[0_-5px_20px_rgba(0,0,0,0.05)] text-gray-400">
            <a href="/dashboard" class="flex flex-col items-center gap-1 text-indigo-600" aria-current="page" aria-label="Início">
                <svg class="w-6 h-6" viewBox="0 0 24 24" fill="currentColor" stroke="currentColor" stroke-width="2">
                    <path d="M3 10.5 12 3l9 7.5V21h-6v-6H9v6H3z" />
                </svg>
            </a>
            <a href="/dashboard/calendar" class="flex flex-col items-center gap-1 hover:text-indigo-600 transition-colors" aria-label="Calendário">
                <svg class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <rect x="3" y="4" width="18" height="18" rx="2" />
                    <path d="M16 2v4M8 2v4M3 10h18" />
                </svg>
            </a>
            <a href="/dashboard/profile" class="flex flex-col items-center gap-1 hover:text-indigo-600 transition-colors" aria-label="Perfil">
                <svg class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="8" r="4" />
                    <path d="M4 21a8 8 0 0 1 16 0" />
                </svg>
            </a>
            <button type="button" class="flex flex-col items-center gap-1 hover:text-indigo-600 transition-colors" aria-label="Menu">
                <svg class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M4 6h16M4 12h16M4 18h16" />
                </svg>
            </button>
        </nav>
    }
}
