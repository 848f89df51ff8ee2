use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_TIME_ZONE: &str = "America/Sao_Paulo";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Access token lifetime in seconds.
    pub jwt_expires_in: u64,
    pub google_client_id: String,
    pub google_client_secret: String,
    pub oauth_redirect_uri: String,
    pub cors_origins: Vec<String>,
    /// Where the OAuth callback hands the token back to the browser.
    pub frontend_url: String,
    /// Calendar days (daily limits, availability periods) are computed in this zone.
    pub time_zone: Tz,
    pub bind_addr: String,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so parsing can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> anyhow::Result<String> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| anyhow!("{} must be set", key))
        };

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;
        let google_client_id = required("GOOGLE_CLIENT_ID")?;
        let google_client_secret = required("GOOGLE_CLIENT_SECRET")?;
        let oauth_redirect_uri = required("OAUTH_REDIRECT_URI")?;

        let jwt_expires_in = match lookup("JWT_EXPIRES_IN") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid JWT_EXPIRES_IN value: {}", raw))?,
            None => 3600,
        };

        let cors_origins = parse_origins(
            &lookup("CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string()),
        );
        if cors_origins.is_empty() {
            return Err(anyhow!("CORS_ORIGINS must list at least one origin"));
        }

        let frontend_url = lookup("FRONTEND_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| cors_origins[0].clone())
            .trim_end_matches('/')
            .to_string();

        let time_zone_name =
            lookup("APP_TIMEZONE").unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Config {
            database_url,
            jwt_secret,
            jwt_expires_in,
            google_client_id,
            google_client_secret,
            oauth_redirect_uri,
            cors_origins,
            frontend_url,
            time_zone,
            bind_addr,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DATABASE_URL", "postgres://localhost/quadra"),
            ("JWT_SECRET", "secret"),
            ("GOOGLE_CLIENT_ID", "client-id"),
            ("GOOGLE_CLIENT_SECRET", "client-secret"),
            (
                "OAUTH_REDIRECT_URI",
                "http://localhost:8000/api/v1/auth/callback/google",
            ),
        ])
    }

    fn load(env: &HashMap<&'static str, &'static str>) -> anyhow::Result<Config> {
        Config::from_lookup(|key| env.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_apply_when_optional_values_missing() {
        let config = load(&base_env()).expect("config");
        assert_eq!(config.jwt_expires_in, 3600);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.frontend_url, "http://localhost:3000");
        assert_eq!(config.time_zone, chrono_tz::America::Sao_Paulo);
        assert_eq!(config.bind_addr, "0.0.0.0:8000");
    }

    #[test]
    fn frontend_url_falls_back_to_first_origin() {
        let mut env = base_env();
        env.insert("CORS_ORIGINS", "https://quadra.example/, http://localhost:3000");
        let config = load(&env).expect("config");
        assert_eq!(
            config.cors_origins,
            vec!["https://quadra.example", "http://localhost:3000"]
        );
        assert_eq!(config.frontend_url, "https://quadra.example");
    }

    #[test]
    fn missing_required_value_is_reported() {
        let mut env = base_env();
        env.remove("JWT_SECRET");
        let err = load(&env).expect_err("should fail");
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn invalid_timezone_is_rejected() {
        let mut env = base_env();
        env.insert("APP_TIMEZONE", "Mars/Olympus");
        assert!(load(&env).is_err());
    }

    #[test]
    fn invalid_expiry_is_rejected() {
        let mut env = base_env();
        env.insert("JWT_EXPIRES_IN", "soon");
        assert!(load(&env).is_err());
    }
}
