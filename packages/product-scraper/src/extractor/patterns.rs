//! Regex pattern set for the webscraper.io static e-commerce markup.
//!
//! The patterns are tied to the exact attribute order of that site. A card
//! that deviates from it (reordered or extra attributes, a missing rating
//! element) is skipped as a whole rather than partially recovered.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::Extractor;
use crate::error::ExtractError;
use crate::types::{ProductDetail, ProductSummary};

/// Opening tag of a product card, shared by listing and detail pages.
const CARD_OPEN: &str = r#"<div class="card thumbnail">"#;

// Listing card: price, detail path, title, description, rating in document order.
static RE_LISTING_CARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?s)<div class="card thumbnail">.*?"#,
        r#"<h4 class="price.*?">\$(\d+\.\d+)</h4>.*?"#,
        r#"<a href="(/test-sites/e-commerce/static/product/\d+)" class="title" title="([^"]+)">.*?"#,
        r#"<p class="description card-text">(.*?)</p>.*?"#,
        r#"<p data-rating="(\d+)">"#,
    ))
    .expect("listing card pattern compiles")
});

static RE_DETAIL_CARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div class="card thumbnail">(.*?)</div>\s*</div>"#)
        .expect("detail card pattern compiles")
});
static RE_PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<h4 class="price.*?">\$(\d+\.\d+)</h4>"#).expect("price pattern compiles")
});
static RE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<h4 class="title card-title">(.*?)</h4>"#).expect("title pattern compiles")
});
static RE_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<p class="description card-text">(.*?)</p>"#)
        .expect("description pattern compiles")
});
static RE_SWATCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<button[^>]+value="(\d+)"[^>]*>.*?</button>"#)
        .expect("swatch pattern compiles")
});
static RE_REVIEWS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<p class="review-count">(\d+) reviews[\s\S]*?</p>"#)
        .expect("review count pattern compiles")
});

/// [`Extractor`] backed by the fixed webscraper.io pattern set.
#[derive(Debug, Clone)]
pub struct RegexExtractor {
    /// Scheme and host prefixed to relative product paths
    site_origin: String,
}

impl RegexExtractor {
    pub fn new(site_origin: impl Into<String>) -> Self {
        let site_origin: String = site_origin.into();
        Self {
            site_origin: site_origin.trim_end_matches('/').to_string(),
        }
    }

    fn absolute_link(&self, path: &str) -> String {
        format!("{}{}", self.site_origin, path)
    }
}

/// Split a page into one slice per product card.
///
/// Each slice runs from a card's opening tag up to the next card's opening
/// tag (or the end of the document), so a pattern applied to it can never
/// borrow fields from a neighbouring card.
fn card_segments(html: &str) -> Vec<&str> {
    let starts: Vec<usize> = html.match_indices(CARD_OPEN).map(|(i, _)| i).collect();

    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(html.len());
            &html[start..end]
        })
        .collect()
}

fn first_capture(pattern: &Regex, html: &str) -> Option<String> {
    pattern
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

impl Extractor for RegexExtractor {
    fn extract_listing(&self, html: &str) -> Vec<ProductSummary> {
        let segments = card_segments(html);

        let products: Vec<ProductSummary> = segments
            .iter()
            .filter_map(|segment| RE_LISTING_CARD.captures(segment))
            .map(|cap| ProductSummary {
                title: cap[3].to_string(),
                price: cap[1].to_string(),
                product_link: self.absolute_link(&cap[2]),
                description: cap[4].to_string(),
                rating: cap[5].to_string(),
            })
            .collect();

        debug!(
            cards = segments.len(),
            products = products.len(),
            "Extracted listing"
        );

        products
    }

    fn extract_detail(&self, html: &str) -> Result<ProductDetail, ExtractError> {
        if !RE_DETAIL_CARD.is_match(html) {
            debug!("Product card section not found in HTML");
            return Err(ExtractError::CardNotFound);
        }

        // Field patterns search the whole document, not just the card
        Ok(ProductDetail {
            price: first_capture(&RE_PRICE, html),
            title: first_capture(&RE_TITLE, html),
            description: first_capture(&RE_DESCRIPTION, html),
            swatches: RE_SWATCH
                .captures_iter(html)
                .map(|cap| cap[1].to_string())
                .collect(),
            rating: first_capture(&RE_REVIEWS, html),
        })
    }
}
