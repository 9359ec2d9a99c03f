// Main entry point for the pass-through server

use std::sync::Arc;

use anyhow::{Context, Result};
use crawler_proxy::{
    server::{build_app, AppState},
    Config, CrawlerClient,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,crawler_proxy=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(project = %config.project_name, "Starting pass-through server");
    tracing::info!(upstream = %config.crawler_api_url, "Configuration loaded");

    let state = AppState {
        client: Arc::new(CrawlerClient::new(&config.crawler_api_url)),
        default_category: config.default_category.clone(),
        project_name: config.project_name.clone(),
    };
    let app = build_app(state, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Crawler: http://localhost:{}/api/v1/crawler/", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
