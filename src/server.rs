//! JSON endpoint in front of a [`ProductSearch`].
//!
//! `/api/search-<source>` and `/api/search` accept every method so the
//! handler can answer preflight and wrong-method requests itself.

use axum::extract::{RawQuery, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{error, info};

use crate::scrapers::ProductSearch;

#[derive(Clone)]
pub struct AppState {
    searcher: Arc<dyn ProductSearch>,
}

pub fn router(searcher: Arc<dyn ProductSearch>) -> Router {
    let source_route = format!("/api/search-{}", searcher.source().key());

    Router::new()
        .route(&source_route, any(handle_search))
        .route("/api/search", any(handle_search))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(AppState { searcher })
}

pub async fn start(bind_addr: &str, searcher: Arc<dyn ProductSearch>) -> anyhow::Result<()> {
    let app = router(searcher);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Search API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// First non-empty `q` in the query string. Repeated keys are allowed and an
/// unparseable query string counts as having no term.
fn search_term(query: Option<&str>) -> Option<String> {
    let pairs: Vec<(String, String)> = query
        .and_then(|raw| serde_urlencoded::from_str(raw).ok())
        .unwrap_or_default();

    pairs
        .into_iter()
        .find(|(key, value)| key == "q" && !value.is_empty())
        .map(|(_, value)| value)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn handle_search(
    method: Method,
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    if method != Method::GET {
        return error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    }

    let term = match search_term(query.as_deref()) {
        Some(term) => term,
        None => return error_response(StatusCode::BAD_REQUEST, "Search term is required"),
    };

    let source = state.searcher.source();
    match state.searcher.search(&term).await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => {
            error!("Error scraping {}: {}", source.display_name(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": format!("Failed to fetch {} products", source.display_name()),
                    "details": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
