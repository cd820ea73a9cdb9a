use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("http status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("malformed sitemap: {0}")]
    Sitemap(String),

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("no listing identifier in url: {0}")]
    MissingIdentifier(String),

    #[error("no listing urls discovered in sitemap {0}")]
    EmptySitemap(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/* Small constructors so call sites stay on one line */
impl CatalogError {
    pub fn fetch_error(url: &str, reason: impl std::fmt::Display) -> Self {
        CatalogError::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn sitemap_error(reason: impl std::fmt::Display) -> Self {
        CatalogError::Sitemap(reason.to_string())
    }

    pub fn config_error(reason: impl Into<String>) -> Self {
        CatalogError::Config(reason.into())
    }

    /// Whether this error aborts the whole run rather than a single listing.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CatalogError::EmptySitemap(_)
                | CatalogError::Config(_)
                | CatalogError::Selector { .. }
                | CatalogError::Io(_)
                | CatalogError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_listing_errors_are_not_fatal() {
        assert!(!CatalogError::fetch_error("https://a.test/x", "boom").is_fatal());
        assert!(!CatalogError::MissingIdentifier("https://a.test/".into()).is_fatal());
        assert!(!CatalogError::Status {
            url: "https://a.test/x".into(),
            status: 404
        }
        .is_fatal());
    }

    #[test]
    fn run_level_errors_are_fatal() {
        assert!(CatalogError::EmptySitemap("https://a.test/sitemap.xml".into()).is_fatal());
        assert!(CatalogError::config_error("bad").is_fatal());
    }

    #[test]
    fn display_names_the_url() {
        let err = CatalogError::Status {
            url: "https://a.test/cars/x/".into(),
            status: 503,
        };
        assert_eq!(err.to_string(), "http status 503 for https://a.test/cars/x/");
    }
}
