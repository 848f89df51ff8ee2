use leptos::*;

pub const TELEGRAM_URL: &str = "https://t.me/eek029";
pub const X_URL: &str = "https://x.com/eek029";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full text-[10px] text-gray-400 py-6 mb-16 text-center">
            <div class="mx-auto max-w-sm px-6 flex flex-col items-center gap-2">
                <span class="select-none leading-relaxed">
                    "© 2026 eek029 Sistemas e Automação."<br/>"Todos os direitos reservados."
                </span>
                <div class="flex items-center gap-4 mt-1">
                    <a
                        href=TELEGRAM_URL
                        class="flex items-center gap-1 hover:text-indigo-500 transition-colors"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <svg class="w-3 h-3" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <path d="M22 2 11 13" />
                            <path d="M22 2 15 22 11 13 2 9z" />
                        </svg>
                        <span>"Telegram"</span>
                    </a>
                    <span class="text-gray-300">"•"</span>
                    <a
                        href=X_URL
                        class="flex items-center gap-1 hover:text-indigo-500 transition-colors"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <span class="font-bold text-xs">"X"</span>
                        <span>"Twitter"</span>
                    </a>
                </div>
            </div>
        </footer>
    }
}
