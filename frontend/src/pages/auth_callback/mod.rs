use leptos::*;

pub mod utils;
pub mod view_model;

mod panel;

pub use panel::AuthCallbackPanel;

use view_model::use_auth_callback_view_model;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let vm = use_auth_callback_view_model();
    view! { <AuthCallbackPanel error=vm.error.read_only().into() /> }
}
