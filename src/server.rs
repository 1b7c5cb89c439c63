use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::aesthetics::{effective_aesthetics, AestheticConfig, NavigationContext, PageType};
use crate::config::SiteConfig;
use crate::i18n::Locale;
use crate::render::{PageContext, Renderer};
use crate::routes::{SiteRoute, SiteRouter};

struct ServerError(anyhow::Error);

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("Request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": format!("Portfolio Server Error: {}", self.0) })),
        )
            .into_response()
    }
}

impl<E> From<E> for ServerError where E: Into<anyhow::Error> {
    fn from(err: E) -> Self { Self(err.into()) }
}

/// Shared, read-only request state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub renderer: Arc<Renderer>,
    pub router: Arc<SiteRouter>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            renderer: Arc::new(Renderer::new()?),
            router: Arc::new(SiteRouter::new()?),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub path: String,
    pub locale: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTypeResponse {
    pub page_type: PageType,
    pub should_apply_aesthetics: bool,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/health", get(health))
        .route("/api/page-type", get(page_type_handler))
        .route("/api/aesthetics", get(aesthetics_handler))
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr.clone();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Portfolio server listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn accept_language(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok())
}

async fn root_redirect(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    let locale = Locale::negotiate(accept_language(&headers), state.config.default_locale);
    Redirect::temporary(&SiteRoute::Cv.path(locale))
}

async fn health() -> &'static str {
    "OK"
}

async fn page_type_handler(Query(query): Query<PageQuery>) -> Json<PageTypeResponse> {
    let nav = NavigationContext::new(query.path, query.locale);
    let page_type = nav.page_type();
    Json(PageTypeResponse {
        page_type,
        should_apply_aesthetics: page_type.is_enhanced(),
    })
}

async fn aesthetics_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<AestheticConfig> {
    let nav = NavigationContext::new(query.path, query.locale);
    Json(effective_aesthetics(&nav, &state.config.aesthetics))
}

async fn page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, ServerError> {
    let path = uri.path();
    let site = &state.config.aesthetics;

    if let Some((locale, route)) = state.router.resolve(path) {
        let ctx = PageContext::for_route(locale, route, site);
        if let Some(html) = state.renderer.render_route(&ctx)? {
            return Ok(Html(html).into_response());
        }
    }

    // Unknown page: answer in the locale the path names, if any
    let locale = path
        .trim_start_matches('/')
        .split('/')
        .next()
        .and_then(Locale::parse)
        .unwrap_or_else(|| Locale::negotiate(accept_language(&headers), state.config.default_locale));
    let ctx = PageContext::new(locale, None, path, site);
    let html = state.renderer.render_not_found(&ctx)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}
