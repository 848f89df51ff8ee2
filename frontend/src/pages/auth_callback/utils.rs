use std::time::Duration;

pub const AUTH_FAILED_MESSAGE: &str = "Falha na autenticação. Token não fornecido.";
pub const FAILURE_REDIRECT_DELAY: Duration = Duration::from_secs(3);
pub const SUCCESS_PATH: &str = "/dashboard";
pub const FAILURE_PATH: &str = "/";

/// An empty `token=` parameter counts as no token.
pub fn extract_token(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn extract_token_treats_empty_as_absent() {
        assert_eq!(extract_token(Some("abc123".into())), Some("abc123".into()));
        assert_eq!(extract_token(Some(String::new())), None);
        assert_eq!(extract_token(None), None);
    }
}
