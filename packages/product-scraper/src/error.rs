//! Typed errors for the scraping library.
//!
//! Every variant renders to the single-line message that ends up in the
//! `{"error": ...}` body returned by the HTTP services.

use thiserror::Error;

/// Errors produced while retrieving a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, body decoding or any other transport failure
    #[error("Error fetching data: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx status under a strict status policy
    #[error("Error fetching data: HTTP {status} for url ({url})")]
    Status { status: u16, url: String },

    /// Target URL could not be built or parsed
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },
}

/// Errors produced while turning HTML into records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The product card wrapper is missing from a detail page
    #[error("Product card section not found.")]
    CardNotFound,
}

/// Any failure of a catalog operation.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;
