//! Tests

#[cfg(test)]
mod tests {
    use crate::api::{self, Components};
    use crate::config::ExportConfig;
    use crate::engine::{Engine, Fetcher};
    use crate::error::{CatalogError, Result};
    use crate::tools::extract::ListingExtractor;
    use crate::types::CatalogDocument;
    use std::collections::HashMap;
    use std::path::Path;

    const SITEMAP_URL: &str = "https://virtus.test/pixad-autos-sitemap.xml";

    /// In-memory site: unknown URLs fail like a refused connection.
    #[derive(Default)]
    struct MemoryFetcher {
        pages: HashMap<String, String>,
    }

    impl MemoryFetcher {
        fn with(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }
    }

    impl Fetcher for MemoryFetcher {
        fn name(&self) -> &'static str {
            "memory"
        }

        fn fetch(&self, url: &str) -> Result<String> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| CatalogError::fetch_error(url, "connection refused"))
        }
    }

    fn sitemap(urls: &[&str]) -> String {
        let entries: String = urls
            .iter()
            .map(|u| format!("  <url><loc>{u}</loc></url>\n"))
            .collect();
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{entries}</urlset>"
        )
    }

    fn listing_page(title: &str, price: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html><body>
  <h1>{title}</h1>
  <img class="wp-post-image" src="https://virtus.test/img/{title}.jpg">
  <span class="precio">{price}</span>
  <div class="entry-content"><p>Vehículo {title} con aire acondicionado.</p></div>
</body></html>"#
        )
    }

    fn three_listing_site() -> MemoryFetcher {
        let a = "https://virtus.test/autos/toyota-corolla/";
        let b = "https://virtus.test/autos/kia-k5/";
        let c = "https://virtus.test/autos/hyundai-tucson/";
        MemoryFetcher::default()
            .with(SITEMAP_URL, &sitemap(&[a, b, c]))
            .with(a, &listing_page("Toyota Corolla", "$1,234.50"))
            // b is missing: its fetch fails
            .with(c, &listing_page("Hyundai Tucson", "Consultar"))
    }

    fn config_for(output: &Path) -> ExportConfig {
        ExportConfig {
            sitemap_url: SITEMAP_URL.into(),
            output_path: output.to_path_buf(),
            ..Default::default()
        }
    }

    fn read_document(path: &Path) -> CatalogDocument {
        let raw = std::fs::read_to_string(path).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_engine_isolates_failing_listing() {
        let fetcher = three_listing_site();
        let extractor = ListingExtractor::from_config(&ExportConfig::default()).unwrap();
        let engine = Engine::new(&fetcher, &extractor);

        let report = engine.run(SITEMAP_URL).unwrap();
        assert_eq!(report.discovered, 3);
        assert_eq!(
            report.catalog.ids().collect::<Vec<_>>(),
            vec!["toyota-corolla", "hyundai-tucson"]
        );
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].url, "https://virtus.test/autos/kia-k5/");
        assert!(report.failures[0].reason.contains("connection refused"));

        let corolla = report.catalog.get("toyota-corolla").unwrap();
        assert_eq!(corolla.price_per_day, Some(1234.5));
        let tucson = report.catalog.get("hyundai-tucson").unwrap();
        assert_eq!(tucson.price_per_day, None);
    }

    #[test]
    fn test_engine_empty_sitemap_is_fatal() {
        let fetcher = MemoryFetcher::default().with(SITEMAP_URL, &sitemap(&[]));
        let extractor = ListingExtractor::from_config(&ExportConfig::default()).unwrap();
        let engine = Engine::new(&fetcher, &extractor);

        let err = engine.run(SITEMAP_URL).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySitemap(ref url) if url == SITEMAP_URL));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_engine_only_empty_locs_is_fatal() {
        let body = "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\
                    <url><loc/></url><url><loc> </loc></url></urlset>";
        let fetcher = MemoryFetcher::default().with(SITEMAP_URL, body);
        let extractor = ListingExtractor::from_config(&ExportConfig::default()).unwrap();

        let err = Engine::new(&fetcher, &extractor).run(SITEMAP_URL).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySitemap(_)));
    }

    #[test]
    fn test_engine_keeps_non_ascii_ids_verbatim() {
        let url = "https://virtus.test/autos/camión-4x4/";
        let fetcher = MemoryFetcher::default()
            .with(SITEMAP_URL, &sitemap(&[url]))
            .with(url, &listing_page("Camión 4x4", "$80"));
        let extractor = ListingExtractor::from_config(&ExportConfig::default()).unwrap();

        let report = Engine::new(&fetcher, &extractor).run(SITEMAP_URL).unwrap();
        assert_eq!(report.catalog.ids().collect::<Vec<_>>(), vec!["camión-4x4"]);
    }

    #[test]
    fn test_engine_duplicate_ids_last_write_wins() {
        let first = "https://virtus.test/autos/kia-k5/";
        let other = "https://virtus.test/autos/toyota-corolla/";
        let second = "https://virtus.test/flota/kia-k5";
        let fetcher = MemoryFetcher::default()
            .with(SITEMAP_URL, &sitemap(&[first, other, second]))
            .with(first, &listing_page("Kia K5 viejo", "$30"))
            .with(other, &listing_page("Toyota Corolla", "$40"))
            .with(second, &listing_page("Kia K5 nuevo", "$35"));
        let extractor = ListingExtractor::from_config(&ExportConfig::default()).unwrap();

        let report = Engine::new(&fetcher, &extractor).run(SITEMAP_URL).unwrap();
        assert_eq!(report.catalog.len(), 2);
        assert_eq!(
            report.catalog.ids().collect::<Vec<_>>(),
            vec!["kia-k5", "toyota-corolla"]
        );
        let kia = report.catalog.get("kia-k5").unwrap();
        assert_eq!(kia.name, "Kia K5 nuevo");
        assert_eq!(kia.price_per_day, Some(35.0));
    }

    #[test]
    fn test_export_writes_only_successful_listings() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("virtus_full_catalog.json");
        let cfg = config_for(&output);
        let components = Components::with_fetcher(&cfg, Box::new(three_listing_site())).unwrap();

        let summary = api::export_catalog(&cfg, &components).unwrap();
        assert_eq!(summary.discovered, 3);
        assert_eq!(summary.exported, 2);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.output_path, output);

        let doc = read_document(&output);
        assert_eq!(
            doc.vehicles.ids().collect::<Vec<_>>(),
            vec!["toyota-corolla", "hyundai-tucson"]
        );
        let corolla = doc.vehicles.get("toyota-corolla").unwrap();
        assert_eq!(corolla.name, "Toyota Corolla");
        assert_eq!(corolla.category, "Vehículo");
        assert_eq!(
            corolla.description,
            "Vehículo Toyota Corolla con aire acondicionado."
        );

        let raw = std::fs::read_to_string(&output).unwrap();
        assert!(raw.contains("\"categoria\": \"Vehículo\""));
        assert!(!raw.contains("\\u00ed"));
    }

    #[test]
    fn test_export_without_urls_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("catalog.json");
        let cfg = config_for(&output);

        for body in [sitemap(&[]), "<urlset".to_string()] {
            let fetcher = MemoryFetcher::default().with(SITEMAP_URL, &body);
            let components = Components::with_fetcher(&cfg, Box::new(fetcher)).unwrap();
            assert!(api::export_catalog(&cfg, &components).is_err());
            assert!(!output.exists());
        }

        // Sitemap fetch itself fails
        let components = Components::with_fetcher(&cfg, Box::new(MemoryFetcher::default())).unwrap();
        let err = api::export_catalog(&cfg, &components).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySitemap(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_export_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("catalog.json");
        let cfg = config_for(&output);

        let components = Components::with_fetcher(&cfg, Box::new(three_listing_site())).unwrap();
        api::export_catalog(&cfg, &components).unwrap();
        let first = std::fs::read(&output).unwrap();

        let components = Components::with_fetcher(&cfg, Box::new(three_listing_site())).unwrap();
        api::export_catalog(&cfg, &components).unwrap();
        let second = std::fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_export_uses_configured_category() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("catalog.json");
        let cfg = ExportConfig {
            category: "Económico".into(),
            ..config_for(&output)
        };
        let components = Components::with_fetcher(&cfg, Box::new(three_listing_site())).unwrap();
        api::export_catalog(&cfg, &components).unwrap();

        let doc = read_document(&output);
        assert!(doc.vehicles.0.values().all(|r| r.category == "Económico"));
    }

    #[test]
    fn test_missing_heading_uses_id_for_name() {
        let url = "https://virtus.test/autos/toyota-corolla/";
        let fetcher = MemoryFetcher::default()
            .with(SITEMAP_URL, &sitemap(&[url]))
            .with(url, "<html><body><p>Sin título</p></body></html>");
        let extractor = ListingExtractor::from_config(&ExportConfig::default()).unwrap();

        let report = Engine::new(&fetcher, &extractor).run(SITEMAP_URL).unwrap();
        assert_eq!(report.catalog.get("toyota-corolla").unwrap().name, "Toyota Corolla");
    }
}
