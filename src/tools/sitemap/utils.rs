use crate::error::{CatalogError, Result};
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

/// Namespace every `url`/`loc` element must be bound to.
pub(super) const SITEMAP_NS: &[u8] = b"http://www.sitemaps.org/schemas/sitemap/0.9";

// Element depths inside the document: root is 1, its children 2.
const URL_DEPTH: usize = 1;
const LOC_DEPTH: usize = 2;

/// Parse a `urlset` document and return its `loc` URLs in document order.
///
/// Only `url` children of the root and their first `loc` child count, both
/// in the sitemap namespace. Entries without a usable `loc` are skipped.
pub(super) fn parse_urlset_document(xml: &str) -> Result<Vec<String>> {
    let mut reader = NsReader::from_str(xml);
    let mut urls = Vec::new();

    let mut depth = 0usize;
    let mut saw_root = false;
    let mut in_url = false;
    let mut in_loc = false;
    let mut loc_text = String::new();
    let mut loc: Option<String> = None;

    loop {
        let (ns, event) = reader
            .read_resolved_event()
            .map_err(CatalogError::sitemap_error)?;
        let in_sitemap_ns = matches!(ns, ResolveResult::Bound(Namespace(n)) if n == SITEMAP_NS);

        match event {
            Event::Start(e) => {
                if depth == 0 {
                    if saw_root {
                        return Err(CatalogError::sitemap_error("multiple root elements"));
                    }
                    saw_root = true;
                }
                let local = e.local_name();
                if depth == URL_DEPTH && in_sitemap_ns && local.as_ref() == b"url" {
                    in_url = true;
                    loc = None;
                } else if depth == LOC_DEPTH
                    && in_url
                    && loc.is_none()
                    && in_sitemap_ns
                    && local.as_ref() == b"loc"
                {
                    in_loc = true;
                    loc_text.clear();
                }
                depth += 1;
            }
            Event::Empty(_) => {
                if depth == 0 {
                    if saw_root {
                        return Err(CatalogError::sitemap_error("multiple root elements"));
                    }
                    saw_root = true;
                }
            }
            Event::Text(e) => {
                let text = e.unescape().map_err(CatalogError::sitemap_error)?;
                if depth == 0 && !text.trim().is_empty() {
                    return Err(CatalogError::sitemap_error("text outside the root element"));
                }
                if in_loc {
                    loc_text.push_str(&text);
                }
            }
            Event::CData(e) => {
                if depth == 0 {
                    return Err(CatalogError::sitemap_error("text outside the root element"));
                }
                if in_loc {
                    loc_text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                let local = e.local_name();
                if in_loc && depth == LOC_DEPTH && local.as_ref() == b"loc" {
                    in_loc = false;
                    loc = Some(loc_text.trim().to_string());
                } else if in_url && depth == URL_DEPTH && local.as_ref() == b"url" {
                    in_url = false;
                    if let Some(found) = loc.take().filter(|l| !l.is_empty()) {
                        urls.push(found);
                    }
                }
            }
            Event::Eof => {
                if !saw_root {
                    return Err(CatalogError::sitemap_error("document has no root element"));
                }
                if depth != 0 {
                    return Err(CatalogError::sitemap_error("unexpected end of document"));
                }
                break;
            }
            _ => {}
        }
    }

    Ok(urls)
}
