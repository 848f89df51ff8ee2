//! Seeds the default court and, when `SUPERUSER_EMAIL` is set, an operator account.

use std::env;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quadra_backend::{
    config::Config,
    db::connection::create_pool,
    models::user::{NewUser, UserRole, UserStatus},
    repositories::{CourtRepository, PgCourtRepository, PgUserRepository, UserRepository},
};

const DEFAULT_COURT_NAME: &str = "Quadra Poliesportiva";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,quadra_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let courts = PgCourtRepository::new(pool.clone());
    let court = courts.find_or_create_court(DEFAULT_COURT_NAME).await?;
    tracing::info!(court_id = %court.id, name = %court.name, "Default court ready");

    let Some(email) = env::var("SUPERUSER_EMAIL")
        .ok()
        .filter(|email| !email.trim().is_empty())
    else {
        tracing::info!("SUPERUSER_EMAIL not set; skipping superuser");
        return Ok(());
    };

    let users = PgUserRepository::new(pool);
    match users.find_by_email(&email).await? {
        Some(existing) => {
            tracing::info!(user_id = %existing.id, "Superuser already exists");
        }
        None => {
            let created = users
                .create(&NewUser {
                    email,
                    name: "System Admin".into(),
                    role: UserRole::Superuser,
                    status: UserStatus::Active,
                    is_verified: true,
                    auth_provider: "seed".into(),
                })
                .await?;
            tracing::info!(user_id = %created.id, "Superuser created");
        }
    }

    Ok(())
}
