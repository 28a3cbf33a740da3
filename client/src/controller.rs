//! Board controller: sequences click → request → response → render.
//!
//! DESIGN
//! ======
//! The controller owns the [`EngineCore`] (grid mirror + game status), a
//! [`GameApi`] and a [`Host`] that presents results. All of it lives on the
//! browser's single UI thread, so state sits in a `RefCell` and every borrow
//! ends before the next `.await`: a network call is the only suspension point
//! and the response continuation runs to completion before any other event.
//!
//! ERROR HANDLING
//! ==============
//! A failed move releases the in-flight latch and asks the player to click
//! again. A failed reset keeps the finished game on screen with the restart
//! button still available.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;

use board::engine::{Action, EngineCore, GameStatus};
use board::grid::{Grid, Piece};

use crate::net::api::GameApi;

const DESYNC_NOTICE: &str = "The board is out of sync with the server. Restart the game to resync.";

/// Presentation sink for the controller.
pub trait Host {
    /// Repaint the whole board.
    fn render(&mut self, grid: &Grid);

    /// Tell the player who won.
    fn announce_winner(&mut self, winner: &str);

    /// Show or hide the restart affordance.
    fn set_restart_visible(&mut self, visible: bool);

    /// Show a status message, or clear it with `None`.
    fn show_notice(&mut self, message: Option<&str>);
}

struct Inner<H> {
    core: EngineCore,
    host: H,
}

impl<H: Host> Inner<H> {
    fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::Placed { row, col, piece } => {
                    log::debug!("{piece} piece landed at row {row}, column {col}");
                    self.host.render(self.core.grid());
                }
                Action::NoPlacement { col, piece } => {
                    log::debug!("{piece} drop into column {col} produced no placement");
                }
                Action::InvalidColumn { raw, piece } => {
                    log::warn!("server sent column {raw} for the {piece} piece; ignored");
                }
                Action::Desync { col, piece, error } => {
                    log::warn!("{piece} piece in column {col} rejected: {error}");
                    self.host.show_notice(Some(DESYNC_NOTICE));
                    self.host.set_restart_visible(true);
                }
                Action::GameOver { winner } => {
                    log::info!("game over: {winner} wins");
                    self.host.announce_winner(&winner);
                    self.host.set_restart_visible(true);
                }
                Action::Cleared => {
                    self.host.render(self.core.grid());
                    self.host.set_restart_visible(false);
                    self.host.show_notice(None);
                }
                Action::Stale => log::debug!("dropping move response from before the last reset"),
            }
        }
    }
}

/// Client-side owner of the board mirror.
pub struct BoardController<A, H> {
    api: A,
    inner: RefCell<Inner<H>>,
}

impl<A: GameApi, H: Host> BoardController<A, H> {
    pub fn new(api: A, host: H) -> Self {
        Self { api, inner: RefCell::new(Inner { core: EngineCore::new(), host }) }
    }

    // --- Queries ---

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.inner.borrow().core.status()
    }

    /// Snapshot of the grid mirror.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.inner.borrow().core.grid().clone()
    }

    /// Whether a move or reset request is outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.inner.borrow().core.is_busy()
    }

    /// Run `f` against the host.
    pub fn with_host<R>(&self, f: impl FnOnce(&H) -> R) -> R {
        f(&self.inner.borrow().host)
    }

    // --- Operations ---

    /// Repaint the board from the current grid.
    pub fn render(&self) {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        inner.host.render(inner.core.grid());
    }

    /// Gravity-drop a piece and repaint if it landed.
    pub fn drop_piece(&self, col: usize, piece: Piece) -> Option<usize> {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        let row = inner.core.drop_piece(col, piece);
        if row.is_some() {
            inner.host.render(inner.core.grid());
        }
        row
    }

    /// Handle a click at horizontal canvas offset `offset_x`.
    ///
    /// Ignored while the game is over or another request is outstanding, and
    /// for clicks outside the board.
    pub async fn handle_board_click(&self, offset_x: f64) {
        let Some(ticket) = self.inner.borrow_mut().core.begin_move(offset_x) else {
            return;
        };
        log::debug!("submitting move in column {}", ticket.column);

        let result = self.api.submit_move(ticket.column).await;

        let mut inner = self.inner.borrow_mut();
        match result {
            Ok(resp) => {
                let actions = inner.core.complete_move(ticket, &resp.into());
                if !matches!(actions.as_slice(), [Action::Stale]) {
                    inner.host.show_notice(None);
                }
                inner.apply(actions);
            }
            Err(err) => {
                log::warn!("move in column {} failed: {err}", ticket.column);
                inner.core.abort_move(ticket);
                inner
                    .host
                    .show_notice(Some(&format!("Move failed ({err}). Click a column to try again.")));
            }
        }
    }

    /// Ask the server to reset, then clear the local board once it confirms.
    pub async fn trigger_reset(&self) {
        if !self.inner.borrow_mut().core.begin_reset() {
            return;
        }
        log::debug!("requesting reset");

        let result = self.api.reset().await;

        let mut inner = self.inner.borrow_mut();
        match result {
            Ok(()) => {
                let actions = inner.core.finish_reset();
                inner.apply(actions);
            }
            Err(err) => {
                log::warn!("reset failed: {err}");
                inner.core.abort_reset();
                inner
                    .host
                    .show_notice(Some(&format!("Restart failed ({err}). Press Restart Game to try again.")));
            }
        }
    }
}
