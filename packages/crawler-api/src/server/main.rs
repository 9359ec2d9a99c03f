// Main entry point for the scraping API server

use std::sync::Arc;

use anyhow::{Context, Result};
use crawler_api::{
    server::{build_app, AppState},
    Config,
};
use product_scraper::{CatalogScraper, HttpFetcher, RegexExtractor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,crawler_api=debug,product_scraper=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(project = %config.project_name, "Starting scraping API");

    let site = config.site_config();
    tracing::info!(
        site_origin = %site.site_origin,
        default_category = %site.default_category,
        "Configuration loaded"
    );

    let scraper = CatalogScraper::new(
        Arc::new(HttpFetcher::new()),
        Arc::new(RegexExtractor::new(&site.site_origin)),
        site,
    );

    let state = AppState {
        scraper: Arc::new(scraper),
        project_name: config.project_name.clone(),
    };
    let app = build_app(state, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!(
        "Products: http://localhost:{}/api/v1/products/computers",
        config.port
    );
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
