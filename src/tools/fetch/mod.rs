mod client;
mod headers;
mod tests;
mod utils;

pub mod types;

pub use types::*;

use crate::engine::Fetcher;
use crate::error::{CatalogError, Result};
use reqwest::blocking::Client;
use utils::check_status;

/// Blocking HTTP fetcher backed by one shared reqwest client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(cfg: &FetchConfig) -> Result<Self> {
        Ok(Self {
            client: client::build_client(cfg)?,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn name(&self) -> &'static str {
        "reqwest-blocking"
    }

    fn fetch(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| CatalogError::fetch_error(url, e))?;
        check_status(url, resp.status())?;
        resp.text().map_err(|e| CatalogError::fetch_error(url, e))
    }
}
