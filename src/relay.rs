//! Relay to the external game server.
//!
//! DESIGN
//! ======
//! The host does not play Connect Four. `POST /move` and `POST /reset` are
//! forwarded to `GAME_SERVER_URL`, which owns win detection and the AI. The
//! relay only rejects columns outside the board and re-serializes the typed
//! reply, so a malformed upstream answer becomes a 502 here instead of a
//! confusing board state in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every upstream call is bounded by the configured timeouts; a stalled game
//! server becomes a 504 that the browser turns into a retry prompt.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use axum::http::StatusCode;
use board::consts::COLS;
use client::net::types::{MoveRequest, MoveResponse};

use crate::config::RelayTimeouts;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("column {0} is outside the board")]
    InvalidColumn(usize),
    #[error("game server timed out")]
    Timeout,
    #[error("game server unreachable: {0}")]
    Unreachable(String),
    #[error("game server returned {0}")]
    UpstreamStatus(u16),
    #[error("game server sent an invalid reply: {0}")]
    InvalidReply(String),
    #[error("http client build failed: {0}")]
    ClientBuild(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::InvalidReply(err.to_string())
        } else {
            Self::Unreachable(err.to_string())
        }
    }
}

/// HTTP status the host answers with for a relay failure.
pub fn relay_error_to_status(err: &RelayError) -> StatusCode {
    match err {
        RelayError::InvalidColumn(_) => StatusCode::BAD_REQUEST,
        RelayError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        RelayError::Unreachable(_) | RelayError::UpstreamStatus(_) | RelayError::InvalidReply(_) => {
            StatusCode::BAD_GATEWAY
        }
        RelayError::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct GameRelay {
    http: reqwest::Client,
    base_url: String,
}

impl GameRelay {
    pub fn new(base_url: &str, timeouts: RelayTimeouts) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request)
            .connect_timeout(timeouts.connect)
            .build()
            .map_err(|e| RelayError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward a player move and return the game server's typed reply.
    ///
    /// # Errors
    ///
    /// `InvalidColumn` without contacting upstream for columns past the right
    /// edge; otherwise the upstream failure.
    pub async fn forward_move(&self, request: MoveRequest) -> Result<MoveResponse, RelayError> {
        if request.player_col >= COLS {
            return Err(RelayError::InvalidColumn(request.player_col));
        }

        let response = self.http.post(format!("{}/move", self.base_url)).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::UpstreamStatus(status.as_u16()));
        }

        let text = response.text().await?;
        parse_move_reply(&text)
    }

    /// Forward a reset. The upstream body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the upstream failure.
    pub async fn forward_reset(&self) -> Result<(), RelayError> {
        let response = self.http.post(format!("{}/reset", self.base_url)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::UpstreamStatus(status.as_u16()));
        }
        Ok(())
    }
}

/// Decode the game server's `/move` body.
pub fn parse_move_reply(text: &str) -> Result<MoveResponse, RelayError> {
    serde_json::from_str(text).map_err(|e| RelayError::InvalidReply(e.to_string()))
}
