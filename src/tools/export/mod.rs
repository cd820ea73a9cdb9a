//! Export Tools


use crate::error::Result;
use crate::types::Catalog;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Borrowed twin of [`crate::types::CatalogDocument`].
#[derive(Serialize)]
struct DocumentRef<'a> {
    vehicles: &'a Catalog,
}

/// Render the catalog document: `{"vehicles": ...}`, four-space indent,
/// non-ASCII characters written as-is.
pub fn render_catalog(catalog: &Catalog) -> Result<String> {
    let doc = DocumentRef { vehicles: catalog };
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    doc.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the catalog document to `path`, replacing any existing file.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    let rendered = render_catalog(catalog)?;
    fs::write(path, rendered)?;
    Ok(())
}
