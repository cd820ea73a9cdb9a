use super::types::PriceFormat;
use once_cell::sync::Lazy;
use regex::Regex;

// Digits with at most one decimal point, at least one digit.
static PLAIN_AMOUNT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").expect("valid regex"));

pub(super) fn strip_price_noise(text: &str, format: &PriceFormat) -> String {
    let mut out = text.to_string();
    for symbol in format.currency_symbols.iter().filter(|s| !s.is_empty()) {
        out = out.replace(symbol.as_str(), "");
    }
    if !format.thousands_separator.is_empty() {
        out = out.replace(format.thousands_separator.as_str(), "");
    }
    out
}

pub(super) fn is_plain_amount(text: &str) -> bool {
    PLAIN_AMOUNT_REGEX.is_match(text)
}

pub(super) fn replace_separators(id: &str) -> String {
    id.replace('-', " ")
}

/// Last non-empty `/` segment of the raw path, query and fragment dropped.
pub(super) fn last_path_segment(url: &str) -> Option<&str> {
    let end = url.find(|c: char| c == '?' || c == '#').unwrap_or(url.len());
    let without_query = &url[..end];
    let path = match without_query.split_once("://") {
        // skip the authority
        Some((_, rest)) => rest.find('/').map_or("", |i| &rest[i..]),
        None => without_query.split_once(':').map_or(without_query, |(_, p)| p),
    };
    path.split('/').filter(|s| !s.is_empty()).last()
}

pub(super) fn title_case_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if after_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(c);
            after_letter = false;
        }
    }
    out
}
