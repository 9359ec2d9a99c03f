//! Testing utilities.
//!
//! [`MockFetcher`] serves canned HTML by URL so catalog operations can be
//! exercised without network calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::fetcher::{FetchedPage, Fetcher, StatusPolicy};

#[derive(Debug, Clone)]
enum Canned {
    Page { status: u16, body: String },
    Failure { status: u16 },
}

/// Mock fetcher for testing.
///
/// Unknown URLs answer 404 with an empty body, which fails under
/// [`StatusPolicy::Strict`] and reads as a card-less page otherwise.
///
/// # Example
///
/// ```rust
/// use product_scraper::testing::MockFetcher;
///
/// let fetcher = MockFetcher::new()
///     .with_page("https://shop.test/list?page=1", "<html></html>")
///     .with_failure("https://shop.test/list?page=2", 503);
/// ```
#[derive(Default)]
pub struct MockFetcher {
    responses: Arc<RwLock<HashMap<String, Canned>>>,
    /// Every requested URL, in call order
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 for `url`.
    pub fn add_page(&self, url: impl Into<String>, body: impl Into<String>) {
        self.add_response(url, 200, body);
    }

    /// Serve `body` with an arbitrary status for `url`.
    pub fn add_response(&self, url: impl Into<String>, status: u16, body: impl Into<String>) {
        let mut responses = self.responses.write().unwrap();
        responses.insert(
            url.into(),
            Canned::Page {
                status,
                body: body.into(),
            },
        );
    }

    /// Fail every request for `url` regardless of the status policy.
    pub fn add_failure(&self, url: impl Into<String>, status: u16) {
        let mut responses = self.responses.write().unwrap();
        responses.insert(url.into(), Canned::Failure { status });
    }

    pub fn with_page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.add_page(url, body);
        self
    }

    pub fn with_response(
        self,
        url: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.add_response(url, status, body);
        self
    }

    pub fn with_failure(self, url: impl Into<String>, status: u16) -> Self {
        self.add_failure(url, status);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str, policy: StatusPolicy) -> FetchResult<FetchedPage> {
        self.calls.write().unwrap().push(url.to_string());

        let canned = self.responses.read().unwrap().get(url).cloned();
        let (status, body) = match canned {
            Some(Canned::Failure { status }) => {
                return Err(FetchError::Status {
                    status,
                    url: url.to_string(),
                })
            }
            Some(Canned::Page { status, body }) => (status, body),
            None => (404, String::new()),
        };

        let page = FetchedPage::new(url, status, body);
        if policy == StatusPolicy::Strict && !page.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(page)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
