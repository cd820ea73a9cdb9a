use serde::{Deserialize, Serialize};

/// How prices are written on listing pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceFormat {
    /// Stripped wherever they appear.
    pub currency_symbols: Vec<String>,
    /// Stripped wherever it appears. Empty disables it.
    pub thousands_separator: String,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            currency_symbols: vec!["$".into()],
            thousands_separator: ",".into(),
        }
    }
}
