use crate::{components::footer::Footer, config};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let login_url = config::google_login_url(&config::api_base_url());

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <div class="flex-1 flex flex-col items-center justify-center p-6 text-center">
                <div class="bg-white rounded-3xl p-8 sm:p-12 shadow-[0_8px_30px_rgb(0,0,0,0.04)] border border-gray-100 max-w-md w-full">
                    <div class="mb-6 flex justify-center">
                        <div class="p-4 bg-emerald-50 rounded-full">
                            <svg class="w-12 h-12 text-emerald-500" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <rect x="3" y="4" width="18" height="18" rx="2" />
                                <path d="M16 2v4M8 2v4M3 10h18" />
                            </svg>
                        </div>
                    </div>

                    <h1 class="text-2xl font-bold text-gray-900 mb-2">"Quadra do Condomínio"</h1>
                    <p class="text-gray-500 mb-8">
                        "Agende seu horário, gerencie reservas e receba notificações."
                    </p>

                    <a
                        href=login_url
                        class="group relative w-full flex justify-center py-3 px-4 border border-gray-200 text-sm font-medium rounded-xl text-gray-700 bg-white hover:bg-gray-50 hover:border-gray-300 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-emerald-500 transition-all shadow-sm"
                    >
                        <span class="absolute left-0 inset-y-0 flex items-center pl-3">
                            <svg class="h-5 w-5 text-emerald-500 group-hover:text-emerald-600" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                                <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" />
                                <path d="m9 12 2 2 4-4" />
                            </svg>
                        </span>
                        "Entrar com Google"
                    </a>

                    <div class="mt-6 text-xs text-gray-400">
                        "Acesso restrito a moradores e administração."
                    </div>
                </div>
            </div>
            <Footer />
        </div>
    }
}
