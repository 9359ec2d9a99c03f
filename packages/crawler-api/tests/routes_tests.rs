//! Route tests for the scraping API.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`; a
//! `MockFetcher` supplies the catalog HTML.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use crawler_api::server::{build_app, AppState};
use pretty_assertions::assert_eq;
use product_scraper::{testing::MockFetcher, CatalogScraper, RegexExtractor, SiteConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

const LAPTOPS: &str = "https://webscraper.io/test-sites/e-commerce/static/computers/laptops";
const PRODUCT: &str = "https://webscraper.io/test-sites/e-commerce/static/product";

fn card(price: &str, id: u32, title: &str, description: &str, rating: u8) -> String {
    format!(
        r#"<div class="card thumbnail">
    <h4 class="price float-end card-title pull-right">${price}</h4>
    <a href="/test-sites/e-commerce/static/product/{id}" class="title" title="{title}">{title}</a>
    <p class="description card-text">{description}</p>
    <p data-rating="{rating}"></p>
</div>
"#
    )
}

const DETAIL_HTML: &str = r#"<div class="card thumbnail">
    <h4 class="price float-end pull-right">$295.99</h4>
    <h4 class="title card-title">Asus VivoBook</h4>
    <p class="description card-text">Dual-core</p>
    <button type="button" class="btn swatch" value="128">128</button>
    <p class="review-count">7 reviews</p>
</div>
</div>"#;

fn app(fetcher: Arc<MockFetcher>, allowed_origins: &[String]) -> Router {
    let site = SiteConfig::default();
    let scraper = CatalogScraper::new(
        fetcher,
        Arc::new(RegexExtractor::new(&site.site_origin)),
        site,
    );

    build_app(
        AppState {
            scraper: Arc::new(scraper),
            project_name: "Crawler Service".to_string(),
        },
        allowed_origins,
    )
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_listing_defaults_to_one_page() {
    let fetcher = Arc::new(
        MockFetcher::new()
            .with_page(
                format!("{}?page=1", LAPTOPS),
                card("295.99", 1, "Asus VivoBook", "Dual-core", 3),
            )
            .with_page(
                format!("{}?page=2", LAPTOPS),
                card("399.00", 2, "Acer", "Quad-core", 4),
            ),
    );

    let (status, body) = get_json(app(fetcher.clone(), &[]), "/api/v1/products/computers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "title": "Asus VivoBook",
            "price": "295.99",
            "product_link": "https://webscraper.io/test-sites/e-commerce/static/product/1",
            "description": "Dual-core",
            "rating": "3",
        }])
    );
    assert_eq!(fetcher.call_count(), 1);
}

#[tokio::test]
async fn test_listing_forwards_pages_and_category() {
    let tablets = "https://webscraper.io/test-sites/e-commerce/static/computers/tablets";
    let fetcher = Arc::new(
        MockFetcher::new()
            .with_page(format!("{}?page=1", tablets), card("99.99", 5, "Tab A", "a", 2))
            .with_page(format!("{}?page=2", tablets), card("89.99", 6, "Tab B", "b", 3)),
    );

    let (status, body) = get_json(
        app(fetcher.clone(), &[]),
        "/api/v1/products/computers?pages=5&category=tablets&url=",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Tab A", "Tab B"]);
    // page 3 is empty, so aggregation stops there
    assert_eq!(fetcher.call_count(), 3);
}

#[tokio::test]
async fn test_listing_failure_is_ok_with_error_body() {
    let fetcher = Arc::new(MockFetcher::new().with_failure(format!("{}?page=1", LAPTOPS), 502));

    let (status, body) = get_json(app(fetcher, &[]), "/api/v1/products/computers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "error": format!("Error fetching data: HTTP 502 for url ({}?page=1)", LAPTOPS) })
    );
}

#[tokio::test]
async fn test_listing_non_numeric_pages_is_ok_with_error_body() {
    let fetcher = Arc::new(MockFetcher::new());

    let (status, body) = get_json(
        app(fetcher.clone(), &[]),
        "/api/v1/products/computers?pages=abc",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Invalid pages value: abc" }));
    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn test_detail_by_id() {
    let fetcher = Arc::new(MockFetcher::new().with_page(format!("{}/1", PRODUCT), DETAIL_HTML));

    let (status, body) =
        get_json(app(fetcher, &[]), "/api/v1/products/computers/product/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "price": "295.99",
            "title": "Asus VivoBook",
            "description": "Dual-core",
            "swatches": ["128"],
            "rating": "7",
        })
    );
}

#[tokio::test]
async fn test_detail_legacy_path_matches_product_path() {
    let fetcher = Arc::new(MockFetcher::new().with_page(format!("{}/1", PRODUCT), DETAIL_HTML));

    let (_, legacy) = get_json(app(fetcher.clone(), &[]), "/api/v1/products/computers/1").await;
    let (_, current) =
        get_json(app(fetcher, &[]), "/api/v1/products/computers/product/1").await;

    assert_eq!(legacy, current);
}

#[tokio::test]
async fn test_detail_without_card_section() {
    let fetcher = Arc::new(
        MockFetcher::new().with_page("https://mirror.test/item", "<html><body></body></html>"),
    );

    let (status, body) = get_json(
        app(fetcher, &[]),
        "/api/v1/products/computers/product/3?url=https://mirror.test/item",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Product card section not found." }));
}

#[tokio::test]
async fn test_detail_non_numeric_id_propagates_to_url() {
    let fetcher = Arc::new(MockFetcher::new());

    let (status, body) =
        get_json(app(fetcher.clone(), &[]), "/api/v1/products/computers/product/abc").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["error"].as_str().unwrap().contains("HTTP 404"));
    assert_eq!(fetcher.requested_urls(), vec![format!("{}/abc", PRODUCT)]);
}

#[tokio::test]
async fn test_single_page() {
    let fetcher = Arc::new(MockFetcher::new().with_page(
        format!("{}?page=2", LAPTOPS),
        [card("1.00", 8, "Eight", "e", 1), card("2.00", 9, "Nine", "n", 2)].concat(),
    ));

    let (status, body) = get_json(app(fetcher, &[]), "/api/v1/products/computers/page/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[1]["product_link"], json!(format!("{}/9", PRODUCT)));
}

#[tokio::test]
async fn test_single_page_without_cards_is_empty_list() {
    let fetcher = Arc::new(
        MockFetcher::new().with_page(format!("{}?page=40", LAPTOPS), "<html></html>"),
    );

    let (status, body) = get_json(app(fetcher, &[]), "/api/v1/products/computers/page/40").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json(app(Arc::new(MockFetcher::new()), &[]), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Crawler Service");
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let response = app(Arc::new(MockFetcher::new()), &[])
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/v1/products/computers")
                .header(header::ORIGIN, "http://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_allow_list() {
    let allowed = vec!["http://localhost:8080".to_string()];
    let request = |origin: &str| {
        Request::builder()
            .uri("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    };

    let accepted = app(Arc::new(MockFetcher::new()), &allowed)
        .oneshot(request("http://localhost:8080"))
        .await
        .unwrap();
    assert_eq!(
        accepted
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:8080"
    );

    let rejected = app(Arc::new(MockFetcher::new()), &allowed)
        .oneshot(request("http://evil.test"))
        .await
        .unwrap();
    assert!(rejected
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
