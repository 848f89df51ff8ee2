use leptos::*;
use leptos_meta::{Html, Meta, Title};

pub const APP_TITLE: &str = "Quadra do Condomínio";
pub const APP_DESCRIPTION: &str = "Sistema de reservas da quadra";

/// Document-level metadata shared by every page.
#[component]
pub fn AppMeta() -> impl IntoView {
    view! {
        <Html lang="pt-BR" />
        <Title text=APP_TITLE />
        <Meta name="description" content=APP_DESCRIPTION />
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <main class="min-h-screen flex flex-col bg-gray-50 text-gray-900 antialiased">
            {children()}
        </main>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center mb-4">
            <div class="animate-spin rounded-full h-10 w-10 border-b-2 border-emerald-500"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="text-red-300 mb-2" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}
