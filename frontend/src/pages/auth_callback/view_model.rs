use std::rc::Rc;

use leptos::*;
use leptos_router::{use_navigate, use_query_map};

use super::utils::{
    extract_token, AUTH_FAILED_MESSAGE, FAILURE_PATH, FAILURE_REDIRECT_DELAY, SUCCESS_PATH,
};
use crate::utils::{
    navigation::{Navigator, RouterNavigator, Scheduler, TimeoutScheduler},
    storage::{LocalTokenStore, TokenStore},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    Authenticated,
    Failed(String),
}

/// Persists the token handed over by the backend redirect and moves on.
///
/// On success the browser goes straight to the dashboard. Without a usable
/// token (or when it cannot be stored) a single redirect home is scheduled
/// and the failure message is returned for display.
pub fn handle_callback(
    token: Option<String>,
    store: &dyn TokenStore,
    navigator: Rc<dyn Navigator>,
    scheduler: &dyn Scheduler,
) -> CallbackOutcome {
    let saved = match extract_token(token) {
        Some(token) => store.save(&token),
        None => Err("token query parameter missing".to_string()),
    };

    match saved {
        Ok(()) => {
            navigator.navigate(SUCCESS_PATH);
            CallbackOutcome::Authenticated
        }
        Err(reason) => {
            log::warn!("Authentication callback failed: {}", reason);
            scheduler.schedule(
                FAILURE_REDIRECT_DELAY,
                Box::new(move || navigator.navigate(FAILURE_PATH)),
            );
            CallbackOutcome::Failed(AUTH_FAILED_MESSAGE.to_string())
        }
    }
}

#[derive(Clone, Copy)]
pub struct AuthCallbackViewModel {
    pub error: RwSignal<Option<String>>,
}

pub fn use_auth_callback_view_model() -> AuthCallbackViewModel {
    let error = create_rw_signal(None::<String>);
    let query = use_query_map();
    let navigate = use_navigate();

    // Nothing is tracked, so this runs once per visit.
    create_effect(move |_| {
        let token = query.with_untracked(|params| params.get("token").cloned());
        let navigator: Rc<dyn Navigator> = Rc::new(RouterNavigator(navigate.clone()));
        if let CallbackOutcome::Failed(message) =
            handle_callback(token, &LocalTokenStore, navigator, &TimeoutScheduler)
        {
            error.set(Some(message));
        }
    });

    AuthCallbackViewModel { error }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{ManualScheduler, MemoryTokenStore, RecordingNavigator};
    use std::time::Duration;

    fn run(
        token: Option<&str>,
        store: &MemoryTokenStore,
    ) -> (CallbackOutcome, Rc<RecordingNavigator>, ManualScheduler) {
        let navigator = Rc::new(RecordingNavigator::default());
        let scheduler = ManualScheduler::default();
        let outcome = handle_callback(
            token.map(str::to_string),
            store,
            navigator.clone(),
            &scheduler,
        );
        (outcome, navigator, scheduler)
    }

    #[test]
    fn token_is_stored_and_dashboard_opened() {
        let store = MemoryTokenStore::default();
        let (outcome, navigator, scheduler) = run(Some("abc123"), &store);

        assert_eq!(outcome, CallbackOutcome::Authenticated);
        assert_eq!(store.stored(), Some("abc123".to_string()));
        assert_eq!(navigator.visited(), vec!["/dashboard".to_string()]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn missing_token_schedules_single_redirect_home() {
        let store = MemoryTokenStore::default();
        let (outcome, navigator, scheduler) = run(None, &store);

        assert_eq!(
            outcome,
            CallbackOutcome::Failed("Falha na autenticação. Token não fornecido.".into())
        );
        assert_eq!(store.stored(), None);
        assert!(navigator.visited().is_empty());
        assert_eq!(scheduler.delays(), vec![Duration::from_secs(3)]);

        scheduler.run_all();
        assert_eq!(navigator.visited(), vec!["/".to_string()]);
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let store = MemoryTokenStore::default();
        let (outcome, navigator, scheduler) = run(Some(""), &store);

        assert!(matches!(outcome, CallbackOutcome::Failed(_)));
        assert_eq!(store.stored(), None);
        assert_eq!(scheduler.pending(), 1);
        scheduler.run_all();
        assert_eq!(navigator.visited(), vec!["/".to_string()]);
    }

    #[test]
    fn storage_failure_takes_failure_path() {
        let store = MemoryTokenStore::failing();
        let (outcome, navigator, scheduler) = run(Some("abc123"), &store);

        assert!(matches!(outcome, CallbackOutcome::Failed(msg) if msg == AUTH_FAILED_MESSAGE));
        assert!(navigator.visited().is_empty());
        scheduler.run_all();
        assert_eq!(navigator.visited(), vec!["/".to_string()]);
    }
}
