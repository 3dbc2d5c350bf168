// Main entry point for the tweet video download API

use anyhow::{Context, Result};
use server::app::{build_app, AppState};
use server::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server=debug,vidextract=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting tweet video download API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(proxy_api_base = %config.proxy_api_base, "Configuration loaded");

    // Build application
    let app = build_app(AppState::new(&config.proxy_api_base));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Download endpoint: http://localhost:{}/api/download", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
