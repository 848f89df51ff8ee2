//! Google sign-in and bearer-token resolution.

use std::sync::Arc;

use url::Url;

use crate::config::Config;
use crate::error::AppError;
use crate::models::user::{NewUser, User};
use crate::repositories::UserRepository;
use crate::utils::jwt::{create_access_token, verify_access_token};
use crate::utils::oauth::{google_authorization_url, OAuthProvider};

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    oauth: Arc<dyn OAuthProvider>,
    config: Config,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, oauth: Arc<dyn OAuthProvider>, config: Config) -> Self {
        Self {
            users,
            oauth,
            config,
        }
    }

    pub fn login_url(&self) -> Result<Url, AppError> {
        google_authorization_url(&self.config)
    }

    /// Completes the authorization-code exchange and returns the front-end
    /// URL that carries the freshly issued access token.
    pub async fn complete_google_sign_in(&self, code: &str) -> Result<Url, AppError> {
        let profile = self.oauth.exchange_code(code).await?;
        let email = profile
            .email
            .filter(|email| !email.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("No email found in google profile".into()))?;

        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => self.create_account(email, profile.name).await?,
        };

        let token = create_access_token(
            user.email.clone(),
            &self.config.jwt_secret,
            self.config.jwt_expires_in,
        )?;
        self.frontend_callback_url(&token)
    }

    /// Resolves a bearer token to its account; every failure is a 401.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = verify_access_token(token, &self.config.jwt_secret).map_err(|err| {
            tracing::debug!(error = %err, "Rejected access token");
            AppError::Unauthorized("Could not validate credentials".into())
        })?;
        self.users
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Could not validate credentials".into()))
    }

    async fn create_account(&self, email: String, name: Option<String>) -> Result<User, AppError> {
        let new_user = NewUser::from_google(email, name);
        if let Some(created) = self.users.create_if_absent(&new_user).await? {
            tracing::info!(user_id = %created.id, "Created account from Google sign-in");
            return Ok(created);
        }
        // A concurrent first sign-in inserted the row.
        self.users
            .find_by_email(&new_user.email)
            .await?
            .ok_or_else(|| {
                AppError::InternalServerError(anyhow::anyhow!(
                    "account vanished after email conflict"
                ))
            })
    }

    fn frontend_callback_url(&self, token: &str) -> Result<Url, AppError> {
        let base = self.config.frontend_url.trim_end_matches('/');
        Url::parse_with_params(&format!("{}/auth/callback", base), &[("token", token)]).map_err(
            |e| AppError::InternalServerError(anyhow::anyhow!("Invalid FRONTEND_URL: {}", e)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{UserRole, UserStatus};
    use crate::repositories::user::MockUserRepository;
    use crate::test_support::{sample_user, test_config};
    use crate::utils::oauth::{GoogleProfile, MockOAuthProvider};

    fn oauth_returning(profile: GoogleProfile) -> MockOAuthProvider {
        let mut oauth = MockOAuthProvider::new();
        oauth
            .expect_exchange_code()
            .returning(move |_| Ok(profile.clone()));
        oauth
    }

    fn token_from(url: &Url) -> String {
        url.query_pairs()
            .find(|(k, _)| k == "token")
            .map(|(_, v)| v.into_owned())
            .expect("token param")
    }

    #[tokio::test]
    async fn first_sign_in_creates_pending_resident() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_create_if_absent()
            .withf(|new| {
                new.email == "ana@example.com"
                    && new.role == UserRole::Morador
                    && new.status == UserStatus::Pending
            })
            .times(1)
            .returning(|new| {
                let mut user = sample_user(new.role);
                user.email = new.email.clone();
                user.status = new.status;
                Ok(Some(user))
            });
        let oauth = oauth_returning(GoogleProfile {
            email: Some("ana@example.com".into()),
            name: Some("Ana".into()),
        });
        let config = test_config();
        let svc = AuthService::new(Arc::new(users), Arc::new(oauth), config.clone());

        let url = svc.complete_google_sign_in("code-123").await.unwrap();
        assert!(url
            .as_str()
            .starts_with("http://localhost:3000/auth/callback?token="));
        let claims = verify_access_token(&token_from(&url), &config.jwt_secret).unwrap();
        assert_eq!(claims.sub, "ana@example.com");
    }

    #[tokio::test]
    async fn returning_user_is_not_recreated() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|email| {
            let mut user = sample_user(UserRole::Morador);
            user.email = email.to_string();
            Ok(Some(user))
        });
        users.expect_create_if_absent().never();
        let oauth = oauth_returning(GoogleProfile {
            email: Some("bia@example.com".into()),
            name: None,
        });
        let svc = AuthService::new(Arc::new(users), Arc::new(oauth), test_config());
        svc.complete_google_sign_in("code").await.unwrap();
    }

    #[tokio::test]
    async fn simultaneous_first_sign_in_reuses_the_winning_account() {
        let lookups = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let mut users = MockUserRepository::new();
        let seen = lookups.clone();
        users.expect_find_by_email().times(2).returning(move |email| {
            if seen.fetch_add(1, std::sync::atomic::Ordering::SeqCst) == 0 {
                return Ok(None);
            }
            let mut user = sample_user(UserRole::Morador);
            user.email = email.to_string();
            Ok(Some(user))
        });
        users
            .expect_create_if_absent()
            .times(1)
            .returning(|_| Ok(None));
        let oauth = oauth_returning(GoogleProfile {
            email: Some("caio@example.com".into()),
            name: Some("Caio".into()),
        });
        let config = test_config();
        let svc = AuthService::new(Arc::new(users), Arc::new(oauth), config.clone());

        let url = svc.complete_google_sign_in("code").await.unwrap();
        let claims = verify_access_token(&token_from(&url), &config.jwt_secret).unwrap();
        assert_eq!(claims.sub, "caio@example.com");
        assert_eq!(lookups.load(std::sync::atomic::Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn profile_without_email_is_bad_request() {
        let svc = AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(oauth_returning(GoogleProfile::default())),
            test_config(),
        );
        let err = svc.complete_google_sign_in("code").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "No email found in google profile"));
    }

    #[tokio::test]
    async fn authenticate_rejects_bad_tokens_and_unknown_users() {
        let config = test_config();
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        let svc = AuthService::new(Arc::new(users), Arc::new(MockOAuthProvider::new()), config.clone());

        assert!(matches!(
            svc.authenticate("not-a-jwt").await,
            Err(AppError::Unauthorized(_))
        ));

        let token = create_access_token("ghost@example.com".into(), &config.jwt_secret, 60).unwrap();
        assert!(matches!(
            svc.authenticate(&token).await,
            Err(AppError::Unauthorized(_))
        ));
    }
}
