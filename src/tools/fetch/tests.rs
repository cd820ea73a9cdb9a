#[cfg(test)]
mod tests {
    use crate::engine::Fetcher;
    use crate::error::CatalogError;
    use crate::tools::fetch::headers::headers_for_config;
    use crate::tools::fetch::utils::check_status;
    use crate::tools::fetch::*;
    use reqwest::StatusCode;

    #[test]
    fn default_headers_carry_user_agent() {
        let headers = headers_for_config(&FetchConfig::default()).unwrap();
        assert_eq!(
            headers.get("user-agent").and_then(|v| v.to_str().ok()),
            Some(DEFAULT_USER_AGENT)
        );
        assert!(headers.contains_key("accept"));
    }

    #[test]
    fn configured_headers_override_builtins() {
        let mut cfg = FetchConfig::default();
        cfg.headers.insert("Accept".into(), "application/xml".into());
        cfg.headers.insert("X-Trace".into(), "1".into());

        let headers = headers_for_config(&cfg).unwrap();
        assert_eq!(
            headers.get("accept").and_then(|v| v.to_str().ok()),
            Some("application/xml")
        );
        assert!(headers.contains_key("x-trace"));
    }

    #[test]
    fn bad_header_name_is_config_error() {
        let mut cfg = FetchConfig::default();
        cfg.headers.insert("bad header".into(), "x".into());
        let err = headers_for_config(&cfg).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn bad_user_agent_is_config_error() {
        let cfg = FetchConfig {
            user_agent: "sitecat\n/0.1".into(),
            ..Default::default()
        };
        let err = headers_for_config(&cfg).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
        assert!(HttpFetcher::new(&cfg).is_err());
    }

    #[test]
    fn success_status_passes() {
        assert!(check_status("https://a.test/", StatusCode::OK).is_ok());
        assert!(check_status("https://a.test/", StatusCode::NO_CONTENT).is_ok());
    }

    #[test]
    fn error_status_names_url_and_code() {
        let err = check_status("https://a.test/cars/x/", StatusCode::NOT_FOUND).unwrap_err();
        match err {
            CatalogError::Status { url, status } => {
                assert_eq!(url, "https://a.test/cars/x/");
                assert_eq!(status, 404);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(check_status("https://a.test/", StatusCode::INTERNAL_SERVER_ERROR).is_err());
    }

    #[test]
    fn fetcher_builds_with_timeout() {
        let cfg = FetchConfig {
            timeout_ms: Some(5_000),
            ..Default::default()
        };
        let fetcher = HttpFetcher::new(&cfg).unwrap();
        assert_eq!(fetcher.name(), "reqwest-blocking");
    }

    #[test]
    fn unreachable_host_is_fetch_error() {
        let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
        // Port 9 on localhost: nothing listens, connection is refused.
        let err = fetcher.fetch("http://127.0.0.1:9/sitemap.xml").unwrap_err();
        assert!(matches!(err, CatalogError::Fetch { .. }));
    }
}
