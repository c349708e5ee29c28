//! Axum router wiring.
//!
//! Literal routes are registered alongside the `/:key/...` captures; axum
//! prefers the literal match, so `/health` and `/metrics` never count as keys.

use axum::{routing::get, Router};

use crate::{app_state::AppState, http};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::index))
        .route("/health", get(http::health))
        .route("/metrics", get(http::metrics))
        .route("/:key/", get(http::count_json))
        .route("/:key/count.svg", get(http::count_svg))
        .with_state(state)
}
