//! REST calls to the game server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): [`HttpApi`] returns
//! [`ApiError::Unavailable`]; tests drive the controller through their own
//! [`GameApi`] implementation instead.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so the controller can release its
//! in-flight latch and show a retry prompt instead of stalling silently.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::MoveResponse;
#[cfg(feature = "hydrate")]
use super::types::MoveRequest;

/// Failure talking to the game server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// The two endpoints the board controller consumes.
///
/// Futures are polled on the browser's single UI thread, so they need not be
/// `Send`.
#[allow(async_fn_in_trait)]
pub trait GameApi {
    /// `POST /move` with the clicked column.
    async fn submit_move(&self, column: usize) -> Result<MoveResponse, ApiError>;

    /// `POST /reset`. Only success matters; the body is not inspected.
    async fn reset(&self) -> Result<(), ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// [`GameApi`] over `fetch`, relative to `base` (empty for same-origin).
#[derive(Debug, Clone, Default)]
pub struct HttpApi {
    base: String,
}

/// 2xx, the only statuses treated as an answer from the server.
#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

impl HttpApi {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl GameApi for HttpApi {
    async fn submit_move(&self, column: usize) -> Result<MoveResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&endpoint(&self.base, "/move"))
                .json(&MoveRequest { player_col: column })
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !is_success(resp.status()) {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<MoveResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("move to column {column} skipped outside the browser (base {:?})", self.base);
            Err(ApiError::Unavailable)
        }
    }

    async fn reset(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&endpoint(&self.base, "/reset"))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !is_success(resp.status()) {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("reset skipped outside the browser (base {:?})", self.base);
            Err(ApiError::Unavailable)
        }
    }
}
