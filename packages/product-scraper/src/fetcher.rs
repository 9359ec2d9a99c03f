//! Outbound HTTP retrieval.
//!
//! One GET per call, no retries. Redirects and timeouts are whatever the
//! underlying reqwest client does by default.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};

/// How a non-2xx response is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Non-2xx responses become [`FetchError::Status`]
    Strict,
    /// The body is returned whatever the status
    Lenient,
}

/// Raw response of a single GET.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Retrieves the body behind an absolute URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, policy: StatusPolicy) -> FetchResult<FetchedPage>;

    /// Name for logging.
    fn name(&self) -> &str;
}

/// reqwest-backed fetcher.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, policy: StatusPolicy) -> FetchResult<FetchedPage> {
        debug!(url = %url, ?policy, "HTTP fetch starting");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            FetchError::Transport(e)
        })?;

        let status = response.status();
        if policy == StatusPolicy::Strict && !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Non-success status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(FetchError::Transport)?;

        debug!(
            url = %url,
            status = status.as_u16(),
            content_length = body.len(),
            "Page fetched"
        );

        Ok(FetchedPage::new(url, status.as_u16(), body))
    }

    fn name(&self) -> &str {
        "http"
    }
}
