use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifies the exporter to the sites it reads.
pub const DEFAULT_USER_AGENT: &str = concat!("sitecat/", env!("CARGO_PKG_VERSION"));

/// HTTP settings shared by the sitemap and listing fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    /// Extra request headers, sent on every request.
    pub headers: BTreeMap<String, String>,
    /// Unset leaves the transport default in place.
    pub timeout_ms: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.into(),
            headers: BTreeMap::new(),
            timeout_ms: None,
        }
    }
}
