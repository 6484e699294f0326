use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use user_api::{
    config::AppConfig,
    converter::UserConverter,
    db, routes,
    service::UserService,
    state::AppState,
    store::{InMemoryUserStore, PgUserStore, UserStore},
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let providers = telemetry::init_telemetry(&config.logging, &config.telemetry)?;

    let store: Arc<dyn UserStore> = match config.database.resolved_url() {
        Some(database_url) => {
            let pool = db::create_pool(&database_url, &config.database).await?;
            db::run_migrations(&pool).await?;
            tracing::info!("Connected to database and migrations applied");
            Arc::new(PgUserStore::new(pool))
        }
        None => {
            tracing::warn!("No database URL configured, users are kept in memory");
            Arc::new(InMemoryUserStore::new())
        }
    };

    let service = UserService::new(store, UserConverter);
    let app = routes::create_router(AppState::new(service));

    let address = config.server.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    tracing::info!("Listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(providers) = providers {
        providers.shutdown();
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, flushing telemetry...");
}
