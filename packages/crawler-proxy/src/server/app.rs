//! Application setup and server configuration.

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use crawler_api::server::cors_layer;
use tower_http::trace::TraceLayer;

use crate::client::CrawlerClient;
use crate::server::routes::{fetch_all_products, fetch_by_id, fetch_by_page, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<CrawlerClient>,
    pub default_category: String,
    pub project_name: String,
}

/// Build the Axum application router
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/api/v1/crawler", get(fetch_all_products))
        .route("/api/v1/crawler/", get(fetch_all_products))
        .route("/api/v1/crawler/product/:id", get(fetch_by_id))
        .route("/api/v1/crawler/page/:page", get(fetch_by_page))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
