//! Game state machine behind the board controller.
//!
//! `EngineCore` owns the grid mirror and the game status, and decides which
//! clicks become move requests and how a move response changes the board. It
//! never touches the network or the DOM: every entry point returns plain data
//! ([`MoveTicket`], [`Action`]) that the host acts on, so the whole thing runs
//! under `cargo test` without a browser.
//!
//! STATE MACHINE
//! =============
//! `Active` —(response with a winner)→ `Over` —(reset confirmed)→ `Active`.
//! While a move or reset request is outstanding further clicks are ignored.
//! Every confirmed reset starts a new epoch; move responses that were issued
//! in an older epoch are dropped as [`Action::Stale`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::grid::{Grid, Piece, PlacementError};
use crate::input;

/// Whether the match still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Active,
    Over,
}

/// Proof that a move request was started; hand it back with the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTicket {
    /// Column the player clicked.
    pub column: usize,
    epoch: u64,
}

/// Server reply to a move, in engine terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Display label of the winning side, if the game just ended.
    pub winner: Option<String>,
    /// Column the AI dropped into. Kept signed so malformed replies surface.
    pub ai_col: Option<i64>,
    /// Server-confirmed row of the player's piece (row 0 at top).
    pub player_row: Option<usize>,
    /// Server-confirmed row of the AI's piece (row 0 at top).
    pub ai_row: Option<usize>,
}

/// Work for the host, in the order it must happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A piece landed; repaint.
    Placed { row: usize, col: usize, piece: Piece },
    /// The column was full or past the right edge; nothing changed.
    NoPlacement { col: usize, piece: Piece },
    /// The server named a negative column; nothing changed.
    InvalidColumn { raw: i64, piece: Piece },
    /// A server-confirmed cell cannot exist on the local grid.
    Desync { col: usize, piece: Piece, error: PlacementError },
    /// The game ended; announce and offer a restart.
    GameOver { winner: String },
    /// The board was reset; repaint and hide the restart affordance.
    Cleared,
    /// The response belongs to a game that has since been reset.
    Stale,
}

/// Testable game state, free of browser dependencies.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    grid: Grid,
    status: GameStatus,
    move_in_flight: bool,
    reset_in_flight: bool,
    epoch: u64,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether a move or reset request is outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.move_in_flight || self.reset_in_flight
    }

    // --- Placement ---

    /// Gravity-drop `piece` into `col`. See [`Grid::drop_piece`].
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Option<usize> {
        self.grid.drop_piece(col, piece)
    }

    fn place(&mut self, col: usize, confirmed_row: Option<usize>, piece: Piece) -> Action {
        match confirmed_row {
            Some(row) => match self.grid.place_at(row, col, piece) {
                Ok(()) => Action::Placed { row, col, piece },
                Err(error) => Action::Desync { col, piece, error },
            },
            None => match self.grid.drop_piece(col, piece) {
                Some(row) => Action::Placed { row, col, piece },
                None => Action::NoPlacement { col, piece },
            },
        }
    }

    // --- Moves ---

    /// Turn a board click into a move request.
    ///
    /// Returns `None` when the game is over, another request is outstanding,
    /// or the pointer is outside the board. Otherwise latches the board until
    /// [`complete_move`](Self::complete_move) or [`abort_move`](Self::abort_move).
    pub fn begin_move(&mut self, offset_x: f64) -> Option<MoveTicket> {
        if self.status == GameStatus::Over || self.is_busy() {
            return None;
        }
        let column = input::column_at(offset_x)?;
        self.move_in_flight = true;
        Some(MoveTicket { column, epoch: self.epoch })
    }

    /// Apply the server's answer to a move.
    ///
    /// The player's piece is always placed first. A non-empty winner ends the
    /// game right there and the AI column is not played; otherwise the AI's
    /// piece follows.
    pub fn complete_move(&mut self, ticket: MoveTicket, outcome: &MoveOutcome) -> Vec<Action> {
        if ticket.epoch != self.epoch {
            return vec![Action::Stale];
        }
        self.move_in_flight = false;

        let mut actions = vec![self.place(ticket.column, outcome.player_row, Piece::Red)];

        if let Some(winner) = outcome.winner.as_deref().filter(|w| !w.is_empty()) {
            self.status = GameStatus::Over;
            actions.push(Action::GameOver { winner: winner.to_owned() });
            return actions;
        }

        if let Some(raw) = outcome.ai_col {
            let action = match usize::try_from(raw) {
                Ok(col) => self.place(col, outcome.ai_row, Piece::Yellow),
                Err(_) => Action::InvalidColumn { raw, piece: Piece::Yellow },
            };
            actions.push(action);
        }

        actions
    }

    /// Release the latch after a move request failed.
    pub fn abort_move(&mut self, ticket: MoveTicket) {
        if ticket.epoch == self.epoch {
            self.move_in_flight = false;
        }
    }

    // --- Reset ---

    /// Start a reset. Returns `false` if one is already outstanding.
    pub fn begin_reset(&mut self) -> bool {
        if self.reset_in_flight {
            return false;
        }
        self.reset_in_flight = true;
        true
    }

    /// The server confirmed the reset: empty grid, `Active`, new epoch.
    pub fn finish_reset(&mut self) -> Vec<Action> {
        self.grid.clear();
        self.status = GameStatus::Active;
        self.move_in_flight = false;
        self.reset_in_flight = false;
        self.epoch += 1;
        vec![Action::Cleared]
    }

    /// The reset request failed; keep the current game as-is.
    pub fn abort_reset(&mut self) {
        self.reset_in_flight = false;
    }
}
