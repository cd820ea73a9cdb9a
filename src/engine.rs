use crate::error::{CatalogError, Result};
use crate::tools::extract::ListingExtractor;
use crate::tools::sitemap::resolve_sitemap;
use crate::types::{Catalog, ListingFailure, ListingRecord, RunReport};
use tracing::{debug, info, warn};

/// Source of documents for a run. The HTTP implementation lives in
/// `tools::fetch`; tests plug in in-memory ones.
pub trait Fetcher {
    fn name(&self) -> &'static str;
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Drives one run: resolve the sitemap, then extract every listing in order.
pub struct Engine<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub extractor: &'a ListingExtractor,
}

impl<'a> Engine<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, extractor: &'a ListingExtractor) -> Self {
        Self { fetcher, extractor }
    }

    /// Resolve the sitemap and extract every listing it names.
    ///
    /// Zero discovered URLs aborts the run with [`CatalogError::EmptySitemap`].
    pub fn run(&self, sitemap_url: &str) -> Result<RunReport> {
        debug!("Using fetcher {}", self.fetcher.name());
        let urls = resolve_sitemap(self.fetcher, sitemap_url);
        if urls.is_empty() {
            return Err(CatalogError::EmptySitemap(sitemap_url.to_string()));
        }

        let (catalog, failures) = self.extract_all(&urls, Catalog::new());
        Ok(RunReport {
            discovered: urls.len(),
            catalog,
            failures,
        })
    }

    /// Fetch and extract a single listing.
    pub fn extract_listing(&self, url: &str) -> Result<ListingRecord> {
        let html = self.fetcher.fetch(url)?;
        self.extractor.extract(url, &html)
    }

    /// Extract `urls` in order into `catalog`. A failing URL is logged and
    /// recorded, never fatal.
    pub fn extract_all(&self, urls: &[String], mut catalog: Catalog) -> (Catalog, Vec<ListingFailure>) {
        let mut failures = Vec::new();

        for url in urls {
            match self.extract_listing(url) {
                Ok(record) => {
                    info!("Processed: {} ({})", record.name, record.id);
                    if let Some(previous) = catalog.insert(record) {
                        debug!("Replaced earlier listing with id {} from {}", previous.id, url);
                    }
                }
                Err(e) => {
                    warn!("Failed to process URL {}: {}", url, e);
                    failures.push(ListingFailure {
                        url: url.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        (catalog, failures)
    }
}
