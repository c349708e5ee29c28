//! HTTP request handlers.
//!
//! The image handler owns the request policy: color fallback, persist before
//! render, notify after persist, and error containment. Any failure becomes a
//! bare 500 with no partial body and no internal detail.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use tally_core::color::ColorSpec;
use tally_core::error::Result;
use tally_core::render::render_svg;

use crate::app_state::AppState;
use crate::pages;

/// Every request must reach the store, so caching is forbidden outright.
const CACHE_CONTROL_NO_STORE: &str = "max-age=0, no-cache, no-store, must-revalidate";

#[derive(Debug, Deserialize)]
pub struct ColorQuery {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// `GET /:key/count.svg` — increment and render.
pub async fn count_svg(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<ColorQuery>,
) -> Response {
    match serve_count_svg(&state, &key, &query).await {
        Ok(resp) => {
            state
                .metrics()
                .http_requests
                .inc(&[("route", "count_svg"), ("status", "200")]);
            resp
        }
        Err(e) => {
            tracing::error!(%key, code = e.client_code().as_str(), error = %e, "count.svg failed");
            state
                .metrics()
                .http_requests
                .inc(&[("route", "count_svg"), ("status", "500")]);
            internal_error()
        }
    }
}

async fn serve_count_svg(state: &AppState, key: &str, query: &ColorQuery) -> Result<Response> {
    let background = ColorSpec::normalize(
        query.background.as_deref().unwrap_or(""),
        &ColorSpec::default_background(),
    );
    let text = ColorSpec::normalize(
        query.text.as_deref().unwrap_or(""),
        &ColorSpec::default_text(),
    );

    // Persist before render: the image always shows the post-increment value.
    let new_count = state.store().increment_and_get(key).await?;
    state.metrics().counter_increments.inc(&[]);

    tracing::info!(%key, count = new_count, background = %background, text = %text, "hit");

    if let Some(sink) = state.sink() {
        if state.notify_keys().contains(key) {
            state.metrics().notify_attempts.inc(&[]);
            if let Err(e) = sink.notify(key, new_count).await {
                state.metrics().notify_failures.inc(&[]);
                tracing::warn!(%key, error = %e, "notification failed");
            }
        }
    }

    let svg = render_svg(new_count, &background, &text);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, CACHE_CONTROL_NO_STORE),
        ],
        svg,
    )
        .into_response())
}

/// `GET /:key/` — read-only JSON accessor; never increments.
pub async fn count_json(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    match state.store().get(&key).await {
        Ok(count) => {
            state
                .metrics()
                .http_requests
                .inc(&[("route", "count_json"), ("status", "200")]);
            axum::Json(json!({ "key": key, "count": count })).into_response()
        }
        Err(e) => {
            tracing::error!(%key, error = %e, "count lookup failed");
            state
                .metrics()
                .http_requests
                .inc(&[("route", "count_json"), ("status", "500")]);
            internal_error()
        }
    }
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Response {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    axum::Json(json!({
        "status": "ok",
        "store": state.store().kind(),
        "timestamp": ts,
        "if_you_read_this": "VI VON ZULUL",
    }))
    .into_response()
}

/// `GET /` — static informational page.
pub async fn index() -> Html<&'static str> {
    Html(pages::INDEX_HTML)
}

/// `GET /metrics`
pub async fn metrics(State(state): State<AppState>) -> Response {
    (StatusCode::OK, state.metrics().render()).into_response()
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
