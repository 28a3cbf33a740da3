//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no game state of its own; it only holds the relay to the game
//! server, which is the single source of truth for the board.

use std::sync::Arc;

use crate::relay::GameRelay;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<GameRelay>,
}

impl AppState {
    #[must_use]
    pub fn new(relay: GameRelay) -> Self {
        Self { relay: Arc::new(relay) }
    }
}
