//! Shared constants for the board crate.

// ── Dimensions ──────────────────────────────────────────────────

/// Number of rows. Row 0 is the top of the board.
pub const ROWS: usize = 6;

/// Number of columns. Column 0 is the left edge.
pub const COLS: usize = 7;

/// Side length of one square cell, in canvas pixels.
pub const CELL_SIZE: f64 = 100.0;

/// Gap between a cell's edge and the disc painted inside it.
pub const PIECE_INSET: f64 = 10.0;

// ── Colors ──────────────────────────────────────────────────────

/// Board background.
pub const BOARD_FILL: &str = "blue";

/// Fill for a cell with no piece in it.
pub const EMPTY_FILL: &str = "white";

/// Fill for the local player's pieces.
pub const RED_FILL: &str = "red";

/// Fill for the AI's pieces.
pub const YELLOW_FILL: &str = "yellow";
