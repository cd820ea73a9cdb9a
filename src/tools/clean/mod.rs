pub mod types;
mod utils;

pub use types::*;
use utils::*;

use crate::error::{CatalogError, Result};
use url::Url;

/// Clean extracted text (surrounding whitespace only).
pub fn clean_text(text: &str) -> String {
    text.trim().to_string()
}

/// Derive a listing id from its URL: the last non-empty path segment, as
/// written in the URL (no percent-encoding applied).
///
/// # Examples
/// ```
/// use sitecat::tools::clean::listing_id;
///
/// let id = listing_id("https://example.com/cars/toyota-corolla/").unwrap();
/// assert_eq!(id, "toyota-corolla");
/// ```
pub fn listing_id(url: &str) -> Result<String> {
    let raw = url.trim();
    let parsed = Url::parse(raw).map_err(|_| CatalogError::InvalidUrl(url.to_string()))?;
    if parsed.cannot_be_a_base() {
        return Err(CatalogError::MissingIdentifier(url.to_string()));
    }
    last_path_segment(raw)
        .map(|s| s.to_string())
        .ok_or_else(|| CatalogError::MissingIdentifier(url.to_string()))
}

/// Human-readable name built from an id, used when a page has no heading.
///
/// # Examples
/// ```
/// use sitecat::tools::clean::name_from_id;
///
/// assert_eq!(name_from_id("toyota-corolla"), "Toyota Corolla");
/// ```
pub fn name_from_id(id: &str) -> String {
    title_case(&replace_separators(id))
}

/// Title-case text: a letter is upper-cased when it follows a non-letter.
pub fn title_case(text: &str) -> String {
    title_case_chars(text)
}

/// Parse a per-day price, or `None` when the text is not a plain amount.
///
/// Currency symbols and thousands separators are stripped first; what is
/// left must be digits with at most one decimal point.
///
/// # Examples
/// ```
/// use sitecat::tools::clean::{parse_price, PriceFormat};
///
/// let fmt = PriceFormat::default();
/// assert_eq!(parse_price("$1,234.50", &fmt), Some(1234.5));
/// assert_eq!(parse_price("contact us", &fmt), None);
/// ```
pub fn parse_price(text: &str, format: &PriceFormat) -> Option<f64> {
    let stripped = strip_price_noise(text.trim(), format);
    if !is_plain_amount(&stripped) {
        return None;
    }
    stripped.parse::<f64>().ok()
}
