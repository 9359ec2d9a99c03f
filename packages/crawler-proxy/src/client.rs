//! Client for the scraping API.
//!
//! Forwards the caller's parameters as query parameters and hands back the
//! upstream body untouched. Nothing is parsed, validated or cached.

use bytes::Bytes;
use product_scraper::error::{FetchError, FetchResult};
use url::Url;

/// Raw upstream response body.
#[derive(Debug, Clone)]
pub struct UpstreamBody {
    pub content_type: Option<String>,
    pub body: Bytes,
}

pub struct CrawlerClient {
    client: reqwest::Client,
    base_url: String,
}

impl CrawlerClient {
    /// `base_url` points at the product routes, e.g.
    /// `http://localhost:3000/api/v1/products/computers`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `{base}/{segments..}?{query}`, percent-encoding each piece.
    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> FetchResult<Url> {
        let invalid = || FetchError::InvalidUrl {
            url: self.base_url.clone(),
        };

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    async fn get(&self, url: Url) -> FetchResult<UpstreamBody> {
        tracing::debug!(url = %url, "Calling scraping API");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Scraping API returned an error");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = resp.bytes().await.map_err(FetchError::Transport)?;

        Ok(UpstreamBody { content_type, body })
    }

    /// Listing across `pages` pages. `pages` is forwarded as the caller sent
    /// it; the scraping API decides whether it is a valid count.
    pub async fn get_all_products(
        &self,
        url: Option<&str>,
        pages: &str,
        category: &str,
    ) -> FetchResult<UpstreamBody> {
        let mut query = vec![("pages", pages), ("category", category)];
        if let Some(url) = url {
            query.push(("url", url));
        }

        self.get(self.endpoint(&[], &query)?).await
    }

    /// Detail page of one product.
    pub async fn get_product_by_id(
        &self,
        url: Option<&str>,
        product_id: &str,
    ) -> FetchResult<UpstreamBody> {
        let query: Vec<(&str, &str)> = url.map(|url| ("url", url)).into_iter().collect();

        self.get(self.endpoint(&["product", product_id], &query)?)
            .await
    }

    /// A single listing page.
    pub async fn get_products_by_page(
        &self,
        url: Option<&str>,
        page: &str,
        category: &str,
    ) -> FetchResult<UpstreamBody> {
        let mut query = vec![("category", category)];
        if let Some(url) = url {
            query.push(("url", url));
        }

        self.get(self.endpoint(&["page", page], &query)?).await
    }
}
