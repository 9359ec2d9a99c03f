//! Product endpoints.
//!
//! GET /api/v1/products/computers?url=&pages=&category=
//! GET /api/v1/products/computers/product/:id?url=
//! GET /api/v1/products/computers/page/:page?url=&category=
//!
//! Failures are reported as `200 OK` with an `{"error": ...}` body, so callers
//! detect them by body shape rather than status code. Path ids and page
//! numbers are passed through as text without validation. `pages` is read as
//! text too, and a non-integer value is answered with an error body.

use axum::{
    extract::{Extension, Path, Query},
    response::{IntoResponse, Response},
    Json,
};
use product_scraper::{ErrorResult, ScrapeError};
use serde::{Deserialize, Serialize};

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

/// Serialize a record, or the error body in its place.
fn respond<T: Serialize>(result: Result<T, ScrapeError>) -> Response {
    match result {
        Ok(value) => Json(value).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Scrape failed");
            Json(ErrorResult::from(&e)).into_response()
        }
    }
}

/// Page count from the query; blank or absent means one page.
fn parse_pages(raw: Option<&str>) -> Result<i64, ErrorResult> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(1),
        Some(v) => v
            .parse()
            .map_err(|_| ErrorResult::new(format!("Invalid pages value: {}", v))),
    }
}

/// Every product across `pages` listing pages.
pub async fn fetch_all_products(
    Extension(state): Extension<AppState>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let pages = match parse_pages(query.pages.as_deref()) {
        Ok(pages) => pages,
        Err(body) => {
            tracing::warn!(error = %body.error, "Rejected listing request");
            return Json(body).into_response();
        }
    };

    let result = state
        .scraper
        .fetch_all_products(query.url.as_deref(), pages, query.category.as_deref())
        .await;

    respond(result)
}

/// A single product's detail page.
pub async fn fetch_by_id(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Response {
    respond(state.scraper.fetch_by_id(query.url.as_deref(), &id).await)
}

/// One listing page.
pub async fn fetch_by_page(
    Extension(state): Extension<AppState>,
    Path(page): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let result = state
        .scraper
        .fetch_by_page(query.url.as_deref(), &page, query.category.as_deref())
        .await;

    respond(result)
}
