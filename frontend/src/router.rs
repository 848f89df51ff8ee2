use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    components::layout::{AppMeta, Layout},
    pages::{AuthCallbackPage, DashboardPage, HomePage},
};

pub const AUTH_CALLBACK_PATH: &str = "/auth/callback";

pub const ROUTE_PATHS: &[&str] = &["/", AUTH_CALLBACK_PATH, "/dashboard"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <AppMeta />
        <Router>
            <Layout>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path=AUTH_CALLBACK_PATH view=AuthCallbackPage/>
                    <Route path="/dashboard" view=DashboardPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
