use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account email; the token is resolved back to a user through it.
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(email: String, expires_in_seconds: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::seconds(expires_in_seconds as i64);

        Self {
            sub: email,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        }
    }
}

pub fn create_access_token(
    email: String,
    secret: &str,
    expires_in_seconds: u64,
) -> anyhow::Result<String> {
    let claims = Claims::new(email, expires_in_seconds);
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;

    Ok(token)
}

pub fn verify_access_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let validation = Validation::new(Algorithm::HS256);
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )?;

    if token_data.claims.sub.trim().is_empty() {
        anyhow::bail!("token subject is empty");
    }

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_verify_carries_email_subject() {
        let token = create_access_token("ana@example.com".into(), "secret", 3600)
            .expect("create token");
        let claims = verify_access_token(&token, "secret").expect("verify token");
        assert_eq!(claims.sub, "ana@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_access_token("ana@example.com".into(), "secret", 3600).unwrap();
        assert!(verify_access_token(&token, "other").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "ana@example.com".into(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();
        assert!(verify_access_token(&token, "secret").is_err());
    }

    #[test]
    fn empty_subject_is_rejected() {
        let token = create_access_token(String::new(), "secret", 3600).unwrap();
        assert!(verify_access_token(&token, "secret").is_err());
    }
}
