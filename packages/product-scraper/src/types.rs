use serde::{Deserialize, Serialize};

/// One product card from a catalog listing page.
///
/// Values are copied verbatim from the markup; no entity decoding happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub title: String,
    /// Decimal price without the currency sign (e.g. "295.99")
    pub price: String,
    /// Absolute URL of the product detail page
    pub product_link: String,
    pub description: String,
    /// Star rating as text (e.g. "3")
    pub rating: String,
}

/// Fields of a single product detail page.
///
/// Missing fields serialize as `null` rather than being omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub price: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Variant identifiers in document order, duplicates kept
    pub swatches: Vec<String>,
    /// Review count as text
    pub rating: Option<String>,
}

/// Body returned in place of a record when a fetch or parse fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl<E: std::error::Error> From<&E> for ErrorResult {
    fn from(err: &E) -> Self {
        Self::new(err.to_string())
    }
}
