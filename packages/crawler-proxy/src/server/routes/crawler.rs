//! Pass-through endpoints.
//!
//! GET /api/v1/crawler/?url=&pages=&category=
//! GET /api/v1/crawler/product/:id?url=
//! GET /api/v1/crawler/page/:page?url=&category=
//!
//! The scraping API's body is returned byte for byte. Failures to reach it
//! are reported as `200 OK` with an `{"error": ...}` body.

use axum::{
    extract::{Extension, Path, Query},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use product_scraper::{error::FetchResult, ErrorResult};
use serde::Deserialize;

use crate::client::UpstreamBody;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    url: Option<String>,
    pages: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    url: Option<String>,
    category: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn category_or_default<'a>(category: &'a Option<String>, state: &'a AppState) -> &'a str {
    non_empty(category).unwrap_or(state.default_category.as_str())
}

/// Relay the upstream body as-is, or the error body in its place.
fn passthrough(result: FetchResult<UpstreamBody>) -> Response {
    match result {
        Ok(upstream) => {
            let content_type = upstream
                .content_type
                .and_then(|ct| HeaderValue::from_str(&ct).ok())
                .unwrap_or_else(|| HeaderValue::from_static("application/json"));

            ([(header::CONTENT_TYPE, content_type)], upstream.body).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Scraping API call failed");
            Json(ErrorResult::from(&e)).into_response()
        }
    }
}

pub async fn fetch_all_products(
    Extension(state): Extension<AppState>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let result = state
        .client
        .get_all_products(
            non_empty(&query.url),
            non_empty(&query.pages).unwrap_or("1"),
            category_or_default(&query.category, &state),
        )
        .await;

    passthrough(result)
}

pub async fn fetch_by_id(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Response {
    passthrough(state.client.get_product_by_id(non_empty(&query.url), &id).await)
}

pub async fn fetch_by_page(
    Extension(state): Extension<AppState>,
    Path(page): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let result = state
        .client
        .get_products_by_page(
            non_empty(&query.url),
            &page,
            category_or_default(&query.category, &state),
        )
        .await;

    passthrough(result)
}
