pub mod types;
mod utils;

pub use types::*;
use utils::*;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::tools::clean::{clean_text, listing_id, name_from_id, parse_price, PriceFormat};
use crate::types::ListingRecord;
use scraper::Html;

/// Builds one [`ListingRecord`] from a listing page.
///
/// Rules are compiled once; the extractor is then reused for every page of
/// a run.
#[derive(Debug)]
pub struct ListingExtractor {
    name: CompiledRule,
    image: CompiledRule,
    description: CompiledRule,
    price: CompiledRule,
    category: String,
    price_format: PriceFormat,
}

impl ListingExtractor {
    pub fn new(rules: &ExtractionRules, category: &str, price_format: &PriceFormat) -> Result<Self> {
        Ok(Self {
            name: CompiledRule::compile(&rules.name)?,
            image: CompiledRule::compile(&rules.image)?,
            description: CompiledRule::compile(&rules.description)?,
            price: CompiledRule::compile(&rules.price)?,
            category: category.to_string(),
            price_format: price_format.clone(),
        })
    }

    pub fn from_config(cfg: &ExportConfig) -> Result<Self> {
        Self::new(&cfg.rules, &cfg.category, &cfg.price)
    }

    /// Extract a listing from the HTML fetched at `url`.
    ///
    /// Fails only when no id can be derived from the URL; every other field
    /// degrades to its fallback.
    pub fn extract(&self, url: &str, html: &str) -> Result<ListingRecord> {
        let id = listing_id(url)?;
        let doc = Html::parse_document(html);

        let name = match self.name.value(&doc) {
            Some(text) => clean_text(&text),
            None => name_from_id(&id),
        };
        let image = self.image.value(&doc).unwrap_or_default();
        let description = self
            .description
            .value(&doc)
            .map(|text| clean_text(&text))
            .unwrap_or_default();
        let price_per_day = self
            .price
            .value(&doc)
            .and_then(|text| parse_price(&text, &self.price_format));

        Ok(ListingRecord {
            id,
            name,
            image,
            category: self.category.clone(),
            price_per_day,
            description,
        })
    }
}
