//! Sitemap Tools

mod utils;

use crate::engine::Fetcher;
use crate::error::Result;
use tracing::{error, info};

/// Resolve a sitemap to its listing URLs, or an empty list on any failure.
///
/// The failure is logged; callers that need the cause use
/// [`try_resolve_sitemap`].
pub fn resolve_sitemap(fetcher: &dyn Fetcher, sitemap_url: &str) -> Vec<String> {
    match try_resolve_sitemap(fetcher, sitemap_url) {
        Ok(urls) => urls,
        Err(e) => {
            error!("Failed to resolve sitemap {}: {}", sitemap_url, e);
            Vec::new()
        }
    }
}

/// Fetch and parse a sitemap, keeping the failure cause.
pub fn try_resolve_sitemap(fetcher: &dyn Fetcher, sitemap_url: &str) -> Result<Vec<String>> {
    info!("Fetching sitemap: {}", sitemap_url);
    let xml = fetcher.fetch(sitemap_url)?;
    let urls = parse_urlset(&xml)?;
    info!("Found {} URLs in sitemap", urls.len());
    Ok(urls)
}

/// Parse a sitemap `urlset` document already in memory.
///
/// # Examples
/// ```
/// use sitecat::tools::sitemap::parse_urlset;
///
/// let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
///   <url><loc>https://example.com/autos/kia-k5/</loc></url>
/// </urlset>"#;
/// assert_eq!(parse_urlset(xml).unwrap(), vec!["https://example.com/autos/kia-k5/"]);
/// ```
pub fn parse_urlset(xml: &str) -> Result<Vec<String>> {
    utils::parse_urlset_document(xml)
}
