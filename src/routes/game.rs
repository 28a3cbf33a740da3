//! `POST /move` and `POST /reset`, relayed to the game server.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use client::net::types::MoveRequest;

use crate::relay::relay_error_to_status;
use crate::state::AppState;

/// `POST /move` — forward the player's column, answer with the game server's reply.
pub async fn submit_move(State(state): State<AppState>, payload: Result<Json<MoveRequest>, JsonRejection>) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "malformed move request");
            return (StatusCode::BAD_REQUEST, rejection.body_text()).into_response();
        }
    };

    match state.relay.forward_move(request).await {
        Ok(reply) => {
            tracing::info!(
                player_col = request.player_col,
                ai_col = ?reply.ai_col,
                winner = ?reply.winner,
                "move relayed"
            );
            Json(reply).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, player_col = request.player_col, "move relay failed");
            (relay_error_to_status(&e), e.to_string()).into_response()
        }
    }
}

/// `POST /reset` — clear the game server's board. 204 on success.
pub async fn reset(State(state): State<AppState>) -> Response {
    match state.relay.forward_reset().await {
        Ok(()) => {
            tracing::info!("game reset");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "reset relay failed");
            (relay_error_to_status(&e), e.to_string()).into_response()
        }
    }
}
