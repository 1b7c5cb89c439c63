//! HTTP Surface Suite
//!
//! Drives the full axum router in-process and checks what visitors get back.

#[cfg(test)]
mod site_route_tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use cv_portfolio::aesthetics::DEFAULT_AESTHETIC_CONFIG;
    use cv_portfolio::{build_router, AppState, SiteConfig};

    fn app_with(config: SiteConfig) -> Router {
        build_router(AppState::new(config).unwrap())
    }

    fn app() -> Router {
        app_with(SiteConfig::default())
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn body_tag(html: &str) -> &str {
        let start = html.find("<body").unwrap();
        let end = start + html[start..].find('>').unwrap();
        &html[start..=end]
    }

    // 1. CV PAGES: plain in every locale, with every feature switched on
    #[tokio::test]
    async fn test_cv_pages_carry_no_fx_classes() {
        for uri in ["/en", "/en/", "/zh-hk", "/zh-hk/"] {
            let (status, html) = fetch(app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            let body = body_tag(&html);
            assert!(body.contains("class=\"page-cv\""), "{}", body);
            assert!(!body.contains(" fx-"), "{}", body);
            assert!(body.contains("--fx-glow:0.00"), "{}", body);
        }
    }

    // 2. ENHANCED PAGES: decorated when the site enables the layer
    #[tokio::test]
    async fn test_enhanced_pages_are_decorated() {
        for uri in ["/en/projects", "/en/projects/pourrice", "/zh-hk/education/"] {
            let (status, html) = fetch(app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            let body = body_tag(&html);
            assert!(body.contains("page-enhanced fx-starfield"), "{}", body);
            assert!(body.contains("--fx-glow:0.50"), "{}", body);
        }
    }

    #[tokio::test]
    async fn test_disabled_layer_leaves_enhanced_pages_plain() {
        let mut config = SiteConfig::default();
        config.aesthetics.enabled = false;
        let (status, html) = fetch(app_with(config), "/en/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body_tag(&html).contains("class=\"page-enhanced\""));
        assert!(!html.contains("class=\"star\""));
    }

    #[tokio::test]
    async fn test_unknown_pages_are_404() {
        for uri in ["/fr", "/en/blog", "/en/projects/no-such-project", "/en/projects/Bad_Slug", "/en/projects-archive"] {
            let (status, html) = fetch(app(), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert!(html.contains("<!DOCTYPE html>"));
        }
    }

    #[tokio::test]
    async fn test_root_redirect_uses_default_locale() {
        let mut config = SiteConfig::default();
        config.default_locale = cv_portfolio::Locale::ZhHk;
        let response = app_with(config)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/zh-hk");
    }

    #[tokio::test]
    async fn test_page_type_api() {
        let cases = [
            ("/api/page-type?path=/en&locale=en", "cv", false),
            ("/api/page-type?path=/en/education/2020&locale=en", "enhanced", true),
            ("/api/page-type?path=/en/about&locale=en", "cv", false),
            ("/api/page-type?path=/zh-hk/projects&locale=en", "cv", false),
        ];
        for (uri, page_type, enhanced) in cases {
            let (status, body) = fetch(app(), uri).await;
            assert_eq!(status, StatusCode::OK);
            let json: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(json["pageType"], page_type, "{}", uri);
            assert_eq!(json["shouldApplyAesthetics"], enhanced, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_aesthetics_api_returns_effective_config() {
        let (_, body) = fetch(app(), "/api/aesthetics?path=/en/projects&locale=en").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::to_value(DEFAULT_AESTHETIC_CONFIG).unwrap());
        assert_eq!(json["intensity"]["motifDensity"], 0.4);

        let (_, body) = fetch(app(), "/api/aesthetics?path=/en&locale=en").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["enabled"], false);
        assert_eq!(json["features"]["starfield"], false);
        assert_eq!(json["intensity"]["scatter"], 0.0);
    }

    #[tokio::test]
    async fn test_page_type_api_requires_params() {
        let (status, _) = fetch(app(), "/api/page-type?path=/en").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
