use web_sys::{Storage, Window};

/// Key the access token is stored under.
pub const TOKEN_KEY: &str = "token";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Client-side persistence for the access token.
pub trait TokenStore {
    fn save(&self, token: &str) -> Result<(), String>;
}

/// `localStorage`-backed store.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn save(&self, token: &str) -> Result<(), String> {
        local_storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|_| "Failed to write token to localStorage".to_string())
    }
}
