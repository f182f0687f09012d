use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use workforce_core::app_state::build_app_state;
use workforce_core::config::Config;
use workforce_core::core::persistence::db;
use workforce_core::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let pool = db::init_pool(&config.database_path)?;
    tracing::info!(path = %config.database_path, "database ready");

    let state = build_app_state(pool, &config.secret_key);
    let app = app_router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("server is running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
}
