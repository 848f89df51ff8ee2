use crate::components::layout::{ErrorMessage, LoadingSpinner};
use leptos::*;

#[component]
pub fn AuthCallbackPanel(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div class="flex-1 flex flex-col items-center justify-center min-h-screen">
            <div class="bg-white/10 backdrop-blur-lg rounded-xl p-8 border border-white/20 text-center">
                {move || match error.get() {
                    Some(message) => view! { <ErrorMessage message=message /> }.into_view(),
                    None => view! {
                        <LoadingSpinner />
                        <h2 class="text-xl font-semibold text-gray-700">"Autenticando..."</h2>
                        <p class="text-gray-400 text-sm mt-2">"Por favor aguarde."</p>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::auth_callback::utils::AUTH_FAILED_MESSAGE;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_spinner_while_deciding() {
        let html = render_to_string(|| {
            let error = create_rw_signal(None::<String>);
            view! { <AuthCallbackPanel error=error.read_only().into() /> }
        });
        assert!(html.contains("Autenticando..."));
        assert!(html.contains("Por favor aguarde."));
        assert!(!html.contains(AUTH_FAILED_MESSAGE));
    }

    #[test]
    fn renders_error_message_on_failure() {
        let html = render_to_string(|| {
            let error = create_rw_signal(Some(AUTH_FAILED_MESSAGE.to_string()));
            view! { <AuthCallbackPanel error=error.read_only().into() /> }
        });
        assert!(html.contains(AUTH_FAILED_MESSAGE));
        assert!(!html.contains("Autenticando..."));
    }
}
