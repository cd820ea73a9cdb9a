use crate::error::{CatalogError, Result};
use crate::tools::clean::PriceFormat;
use crate::tools::extract::ExtractionRules;
use crate::tools::fetch::FetchConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_SITEMAP_URL: &str = "https://www.virtuscarrentalsrl.com/pixad-autos-sitemap.xml";
pub const DEFAULT_OUTPUT_PATH: &str = "virtus_full_catalog.json";
/// Placeholder until listings carry their own category.
pub const DEFAULT_CATEGORY: &str = "Vehículo";

/// Everything one export run needs. Every key is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub sitemap_url: String,
    pub output_path: PathBuf,
    pub category: String,
    pub rules: ExtractionRules,
    pub price: PriceFormat,
    pub fetch: FetchConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sitemap_url: DEFAULT_SITEMAP_URL.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            category: DEFAULT_CATEGORY.into(),
            rules: ExtractionRules::default(),
            price: PriceFormat::default(),
            fetch: FetchConfig::default(),
        }
    }
}

impl ExportConfig {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|e| {
            CatalogError::config_error(format!("cannot open {}: {e}", path.display()))
        })?;
        let cfg: ExportConfig = serde_json::from_reader(file).map_err(|e| {
            CatalogError::config_error(format!("invalid config {}: {e}", path.display()))
        })?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.sitemap_url)
            .map_err(|_| CatalogError::InvalidUrl(self.sitemap_url.clone()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::config_error(format!(
                "sitemap url must be http(s): {}",
                self.sitemap_url
            )));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(CatalogError::config_error("output path cannot be empty"));
        }
        for (field, rule) in self.rules.fields() {
            if rule.selectors.is_empty() {
                return Err(CatalogError::config_error(format!(
                    "rule `{field}` has no selectors"
                )));
            }
        }
        Ok(())
    }
}
