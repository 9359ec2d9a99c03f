use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
    version: String,
    upstream: String,
}

/// Health check endpoint
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.project_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream: state.client.base_url().to_string(),
    })
}
