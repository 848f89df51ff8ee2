pub mod jwt;
pub mod oauth;
pub mod time;

/// Shows enough of a secret to recognise it in logs without leaking it.
pub fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}
