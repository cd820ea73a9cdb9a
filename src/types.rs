use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One extracted vehicle listing.
///
/// Field names on the wire are fixed; downstream importers read them as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Catalog key, derived from the listing URL. Not part of the record body.
    #[serde(skip)]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "imagen")]
    pub image: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "precioPorDia")]
    pub price_per_day: Option<f64>,
    #[serde(rename = "descripcion")]
    pub description: String,
}

/// Listings keyed by id, in the order their URLs were discovered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(pub IndexMap<String, ListingRecord>);

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its id. An existing entry is replaced in place
    /// and returned.
    pub fn insert(&mut self, record: ListingRecord) -> Option<ListingRecord> {
        self.0.insert(record.id.clone(), record)
    }

    pub fn get(&self, id: &str) -> Option<&ListingRecord> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }
}

/// Output document envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub vehicles: Catalog,
}

/// A listing URL that was skipped, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingFailure {
    pub url: String,
    pub reason: String,
}

/// Result of one engine run, before anything is written.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub discovered: usize,
    pub catalog: Catalog,
    pub failures: Vec<ListingFailure>,
}

/// What the facade reports after writing the output document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub sitemap_url: String,
    pub discovered: usize,
    pub exported: usize,
    pub failed: Vec<ListingFailure>,
    pub output_path: PathBuf,
}
