use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quadra_backend::{
    app::build_router,
    config::Config,
    db::connection::create_pool,
    state::{AppState, Repositories},
    utils::{mask_secret, oauth::GoogleOAuthClient},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quadra_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        jwt_secret = %mask_secret(&config.jwt_secret),
        google_client_id = %config.google_client_id,
        google_client_secret = %mask_secret(&config.google_client_secret),
        frontend_url = %config.frontend_url,
        cors_origins = ?config.cors_origins,
        time_zone = %config.time_zone,
        "Loaded configuration from environment/.env"
    );

    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let oauth = Arc::new(GoogleOAuthClient::new(&config)?);
    let bind_addr = config.bind_addr.clone();
    let app = build_router(AppState::new(config, Repositories::postgres(pool), oauth));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
