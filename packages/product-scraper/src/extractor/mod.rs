//! HTML to record extraction.
//!
//! Callers only see the [`Extractor`] trait; the matching strategy behind it
//! (currently a fixed regex pattern set) can be replaced without touching them.

mod patterns;

pub use patterns::RegexExtractor;

use crate::error::ExtractError;
use crate::types::{ProductDetail, ProductSummary};

/// Turns raw page HTML into product records.
pub trait Extractor: Send + Sync {
    /// Extract every well-formed product card of a listing page, in document
    /// order. A page without cards yields an empty vector.
    fn extract_listing(&self, html: &str) -> Vec<ProductSummary>;

    /// Extract the fields of a single product page.
    ///
    /// Fails only when the product card wrapper is missing; any individual
    /// field that cannot be found is `None`.
    fn extract_detail(&self, html: &str) -> Result<ProductDetail, ExtractError>;
}
