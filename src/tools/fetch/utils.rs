use crate::error::{CatalogError, Result};
use reqwest::StatusCode;

/// Reject any non-success status so the caller can skip the URL.
pub(super) fn check_status(url: &str, status: StatusCode) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    Err(CatalogError::Status {
        url: url.to_string(),
        status: status.as_u16(),
    })
}
