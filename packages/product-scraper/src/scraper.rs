//! Catalog operations over a [`Fetcher`] and an [`Extractor`].
//!
//! Builds target URLs from request parameters and site defaults, retrieves
//! them and hands the HTML to the extractor.

use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

use crate::error::{FetchError, FetchResult, Result, ScrapeError};
use crate::extractor::Extractor;
use crate::fetcher::{Fetcher, StatusPolicy};
use crate::types::{ProductDetail, ProductSummary};

pub const DEFAULT_SITE_ORIGIN: &str = "https://webscraper.io";
pub const DEFAULT_CATEGORY: &str = "laptops";

const LISTING_PATH: &str = "/test-sites/e-commerce/static/computers";
const PRODUCT_PATH: &str = "/test-sites/e-commerce/static/product";

/// Query parameter carrying the page number.
const PAGE_PARAM: &str = "page";

/// Where the catalog lives and what to browse when the caller does not say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_origin: String,
    pub default_category: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn new(site_origin: impl Into<String>, default_category: impl Into<String>) -> Self {
        let site_origin: String = site_origin.into();
        Self {
            site_origin: site_origin.trim_end_matches('/').to_string(),
            default_category: default_category.into(),
        }
    }

    /// Listing page of a category, e.g. `.../static/computers/laptops`.
    pub fn listing_url(&self, category: &str) -> String {
        format!("{}{}/{}", self.site_origin, LISTING_PATH, category)
    }

    /// Detail page of a product, e.g. `.../static/product/1`.
    pub fn product_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.site_origin, PRODUCT_PATH, id)
    }
}

/// Set the `page` query parameter, replacing any existing one.
///
/// The rest of the query string is kept byte for byte, in its original order.
pub fn with_page_param(base: &str, page: &str) -> FetchResult<String> {
    let mut url = Url::parse(base).map_err(|_| FetchError::InvalidUrl {
        url: base.to_string(),
    })?;

    let page: String = url::form_urlencoded::byte_serialize(page.as_bytes()).collect();
    let mut segments: Vec<String> = url
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter(|segment| segment.split('=').next() != Some(PAGE_PARAM))
        .map(String::from)
        .collect();
    segments.push(format!("{}={}", PAGE_PARAM, page));

    url.set_query(Some(&segments.join("&")));
    Ok(url.to_string())
}

/// Treat an empty `url` parameter the same as an absent one.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Listing, detail and paged operations against one catalog site.
#[derive(Clone)]
pub struct CatalogScraper {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn Extractor>,
    config: SiteConfig,
}

impl CatalogScraper {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        extractor: Arc<dyn Extractor>,
        config: SiteConfig,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            config,
        }
    }

    fn listing_base(&self, url: Option<&str>, category: Option<&str>) -> String {
        match non_empty(url) {
            Some(url) => url.to_string(),
            None => {
                let category = non_empty(category).unwrap_or(self.config.default_category.as_str());
                self.config.listing_url(category)
            }
        }
    }

    /// Aggregate listing pages `1..=pages`, one request at a time.
    ///
    /// The starting page index is 1, the same default as
    /// [`fetch_by_page`](Self::fetch_by_page), so `pages` is also the number
    /// of pages requested at most. Stops at the first page that yields no
    /// products. Any fetch failure aborts the whole run. `pages <= 0` returns
    /// an empty list.
    pub async fn fetch_all_products(
        &self,
        url: Option<&str>,
        pages: i64,
        category: Option<&str>,
    ) -> Result<Vec<ProductSummary>> {
        let base = self.listing_base(url, category);
        let mut products = Vec::new();

        info!(base = %base, pages, fetcher = self.fetcher.name(), "Fetching product listing");

        for page in 1..=pages {
            let page_url = with_page_param(&base, &page.to_string())?;
            let fetched = self
                .fetcher
                .fetch(&page_url, StatusPolicy::Lenient)
                .await?;

            info!(page, url = %fetched.url, status = fetched.status, "Parsing page");
            let page_products = self.extractor.extract_listing(&fetched.body);

            if page_products.is_empty() {
                info!(page, "No products on page, stopping");
                break;
            }

            products.extend(page_products);
        }

        info!(count = products.len(), "Product listing complete");
        Ok(products)
    }

    /// Scrape a single product page.
    ///
    /// A `url` override is fetched as given; otherwise the detail page of `id`
    /// on the configured site is used.
    pub async fn fetch_by_id(&self, url: Option<&str>, id: &str) -> Result<ProductDetail> {
        let target = match non_empty(url) {
            Some(url) => url.to_string(),
            None => self.config.product_url(id),
        };

        info!(url = %target, id, "Fetching product detail");
        let fetched = self.fetcher.fetch(&target, StatusPolicy::Strict).await?;

        self.extractor.extract_detail(&fetched.body).map_err(|e| {
            warn!(url = %target, error = %e, "Detail extraction failed");
            ScrapeError::from(e)
        })
    }

    /// Scrape exactly one listing page.
    pub async fn fetch_by_page(
        &self,
        url: Option<&str>,
        page: &str,
        category: Option<&str>,
    ) -> Result<Vec<ProductSummary>> {
        let base = self.listing_base(url, category);
        let page_url = with_page_param(&base, page)?;

        info!(url = %page_url, "Fetching product page");
        let fetched = self.fetcher.fetch(&page_url, StatusPolicy::Strict).await?;

        Ok(self.extractor.extract_listing(&fetched.body))
    }
}
