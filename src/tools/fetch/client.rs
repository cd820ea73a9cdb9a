use super::headers::headers_for_config;
use super::types::FetchConfig;
use crate::error::{CatalogError, Result};
use reqwest::blocking::Client;
use reqwest::redirect;
use std::time::Duration;

const REDIRECT_LIMIT: usize = 10;

/// Build the blocking client used for every fetch in a run.
pub(crate) fn build_client(cfg: &FetchConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .default_headers(headers_for_config(cfg)?)
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true);

    if let Some(ms) = cfg.timeout_ms {
        builder = builder.timeout(Duration::from_millis(ms));
    }

    builder
        .build()
        .map_err(|e| CatalogError::config_error(format!("failed to build http client: {e}")))
}
