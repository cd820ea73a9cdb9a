use crate::config::ExportConfig;
use crate::engine::{Engine, Fetcher};
use crate::error::Result;
use crate::tools::export::write_catalog;
use crate::tools::extract::ListingExtractor;
use crate::tools::fetch::HttpFetcher;
use crate::types::ExportSummary;
use std::time::Instant;
use tracing::{error, info};

/* ------------ public facade components ------------ */

pub struct Components {
    pub fetcher: Box<dyn Fetcher>,
    pub extractor: ListingExtractor,
}

impl Components {
    /// Real HTTP fetcher plus the extractor described by `cfg`.
    pub fn from_config(cfg: &ExportConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Box::new(HttpFetcher::new(&cfg.fetch)?),
            extractor: ListingExtractor::from_config(cfg)?,
        })
    }

    /// Swap in another fetcher, keeping the configured extractor.
    pub fn with_fetcher(cfg: &ExportConfig, fetcher: Box<dyn Fetcher>) -> Result<Self> {
        Ok(Self {
            fetcher,
            extractor: ListingExtractor::from_config(cfg)?,
        })
    }
}

pub fn make_engine(components: &Components) -> Engine<'_> {
    Engine::new(&*components.fetcher, &components.extractor)
}

/* ------------ export entrypoint ------------ */

/// Run the whole pipeline and write the output document.
///
/// Nothing is written unless the sitemap yielded at least one URL; the
/// document then holds every listing that was extracted.
pub fn export_catalog(cfg: &ExportConfig, components: &Components) -> Result<ExportSummary> {
    let start_time = Instant::now();
    let engine = make_engine(components);

    let report = match engine.run(&cfg.sitemap_url) {
        Ok(report) => report,
        Err(e) => {
            error!(
                "Export aborted after {}ms: {}",
                start_time.elapsed().as_millis(),
                e
            );
            return Err(e);
        }
    };

    write_catalog(&cfg.output_path, &report.catalog)?;
    info!(
        "Catalog written to {} ({} listings, {} skipped) in {}ms",
        cfg.output_path.display(),
        report.catalog.len(),
        report.failures.len(),
        start_time.elapsed().as_millis()
    );

    Ok(ExportSummary {
        sitemap_url: cfg.sitemap_url.clone(),
        discovered: report.discovered,
        exported: report.catalog.len(),
        failed: report.failures,
        output_path: cfg.output_path.clone(),
    })
}
