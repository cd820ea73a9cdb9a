use super::types::FetchConfig;
use crate::error::{CatalogError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

const ACCEPT_VALUE: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE_VALUE: &str = "es-ES,es;q=0.9,en;q=0.8";

/// Build the default header map for every request, including User-Agent.
pub(crate) fn headers_for_config(cfg: &FetchConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));

    // Configured headers override the built-in ones
    for (k, v) in &cfg.headers {
        let name = HeaderName::from_bytes(k.as_bytes())
            .map_err(|e| CatalogError::config_error(format!("bad header name {k}: {e}")))?;
        let value = HeaderValue::from_str(v)
            .map_err(|e| CatalogError::config_error(format!("bad header value for {k}: {e}")))?;
        headers.insert(name, value);
    }

    let agent = HeaderValue::from_str(&cfg.user_agent)
        .map_err(|e| CatalogError::config_error(format!("bad user agent {:?}: {e}", cfg.user_agent)))?;
    headers.insert(USER_AGENT, agent);

    Ok(headers)
}
