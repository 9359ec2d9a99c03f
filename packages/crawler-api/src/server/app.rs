//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::HeaderValue,
    routing::get,
    Router,
};
use product_scraper::CatalogScraper;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    fetch_all_products, fetch_by_id, fetch_by_page, health_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<CatalogScraper>,
    pub project_name: String,
}

/// CORS policy: any origin when `allowed_origins` is empty, otherwise only
/// the listed ones. Methods and headers are always unrestricted.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

/// Build the Axum application router
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    let products = Router::new()
        .route("/computers", get(fetch_all_products))
        .route("/computers/product/:id", get(fetch_by_id))
        .route("/computers/page/:page", get(fetch_by_page))
        // Legacy detail path kept for older clients
        .route("/computers/:id", get(fetch_by_id));

    Router::new()
        .nest("/api/v1/products", products)
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
