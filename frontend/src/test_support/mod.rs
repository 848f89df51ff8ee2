#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use std::cell::RefCell;
    use std::time::Duration;

    use crate::utils::{
        navigation::{Navigator, Scheduler},
        storage::TokenStore,
    };

    #[derive(Default)]
    pub struct MemoryTokenStore {
        token: RefCell<Option<String>>,
        fail_writes: bool,
    }

    impl MemoryTokenStore {
        /// Behaves like a browser without `localStorage`.
        pub fn failing() -> Self {
            Self {
                token: RefCell::new(None),
                fail_writes: true,
            }
        }

        pub fn stored(&self) -> Option<String> {
            self.token.borrow().clone()
        }
    }

    impl TokenStore for MemoryTokenStore {
        fn save(&self, token: &str) -> Result<(), String> {
            if self.fail_writes {
                return Err("No localStorage".into());
            }
            *self.token.borrow_mut() = Some(token.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl RecordingNavigator {
        pub fn visited(&self) -> Vec<String> {
            self.visited.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    /// Holds scheduled tasks until the test runs them.
    #[derive(Default)]
    pub struct ManualScheduler {
        tasks: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.tasks.borrow().len()
        }

        pub fn delays(&self) -> Vec<Duration> {
            self.tasks.borrow().iter().map(|(delay, _)| *delay).collect()
        }

        pub fn run_all(&self) {
            let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
            for (_, task) in tasks {
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
            self.tasks.borrow_mut().push((delay, task));
        }
    }
}
