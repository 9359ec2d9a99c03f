//! Product extraction for the webscraper.io e-commerce demo site.
//!
//! Pulls catalog pages over HTTP and turns their raw HTML into structured
//! product records using a fixed set of regular expressions.
//!
//! # Usage
//!
//! ```rust,ignore
//! use product_scraper::{CatalogScraper, HttpFetcher, RegexExtractor, SiteConfig};
//! use std::sync::Arc;
//!
//! let config = SiteConfig::default();
//! let scraper = CatalogScraper::new(
//!     Arc::new(HttpFetcher::new()),
//!     Arc::new(RegexExtractor::new(&config.site_origin)),
//!     config,
//! );
//!
//! let laptops = scraper.fetch_all_products(None, 2, "laptops").await?;
//! ```
//!
//! # Modules
//!
//! - [`fetcher`] - Outbound HTTP GET behind the [`Fetcher`] trait
//! - [`extractor`] - HTML to record extraction behind the [`Extractor`] trait
//! - [`scraper`] - Catalog operations: listing, detail, single page, aggregation
//! - [`types`] - Product records and the error body
//! - [`testing`] - Mock fetcher for tests

pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod scraper;
pub mod testing;
pub mod types;

pub use error::{ExtractError, FetchError, ScrapeError};
pub use extractor::{Extractor, RegexExtractor};
pub use fetcher::{FetchedPage, Fetcher, HttpFetcher, StatusPolicy};
pub use scraper::{CatalogScraper, SiteConfig};
pub use types::{ErrorResult, ProductDetail, ProductSummary};
