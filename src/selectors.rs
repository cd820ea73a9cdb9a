//! Shared Selectors

use crate::error::{CatalogError, Result};
use scraper::Selector;
use serde::{Deserialize, Serialize};

/// A CSS selector kept as text so rule sets stay plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sel(pub String);

impl Sel {
    pub fn new(s: &str) -> Self {
        Sel(s.to_string())
    }

    pub fn compile(&self) -> Result<Selector> {
        Selector::parse(&self.0).map_err(|e| CatalogError::Selector {
            selector: self.0.clone(),
            reason: e.to_string(),
        })
    }
}

/// Compile a selector chain, preserving order.
pub fn compile_chain(chain: &[Sel]) -> Result<Vec<Selector>> {
    chain.iter().map(Sel::compile).collect()
}
