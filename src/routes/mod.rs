//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser loads `index.html` and the wasm bundle from the static
//! directory, then talks to `/move` and `/reset` on the same origin. Those two
//! endpoints are relayed to the game server; everything else is a file.

pub mod game;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Game relay routes + health check + static client files.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let static_files = ServeDir::new(static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/move", post(game::submit_move))
        .route("/reset", post(game::reset))
        .route("/healthz", get(healthz))
        .with_state(state)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
