//! The board grid and the gravity drop rule.
//!
//! Cells are stored row-major with row 0 at the top. Within every column the
//! occupied cells form one contiguous run that starts at the bottom row; both
//! mutators ([`Grid::drop_piece`] and [`Grid::place_at`]) preserve that.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use std::fmt;

use crate::consts::{COLS, RED_FILL, ROWS, YELLOW_FILL};

/// A player's disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    /// The local player.
    Red,
    /// The server-side AI.
    Yellow,
}

impl Piece {
    /// Color tag, also used as the canvas fill.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => RED_FILL,
            Self::Yellow => YELLOW_FILL,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One grid slot: empty or holding a piece.
pub type Cell = Option<Piece>;

/// Why a confirmed placement could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
    #[error("cell ({row}, {col}) has an empty cell below it")]
    Floating { row: usize, col: usize },
}

/// Fixed `ROWS × COLS` board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[Cell; COLS]; ROWS],
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop `piece` into `col` and return the row it landed in.
    ///
    /// Scans from the bottom row upward for the first empty cell. Returns
    /// `None` without touching the grid when `col` is out of range or the
    /// column is full.
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Option<usize> {
        let row = self.landing_row(col)?;
        self.cells[row][col] = Some(piece);
        Some(row)
    }

    /// Place `piece` at a cell the server has already confirmed.
    ///
    /// # Errors
    ///
    /// Rejects cells outside the board, occupied cells, and cells that would
    /// leave a gap below them.
    pub fn place_at(&mut self, row: usize, col: usize, piece: Piece) -> Result<(), PlacementError> {
        if row >= ROWS || col >= COLS {
            return Err(PlacementError::OutOfBounds { row, col });
        }
        if self.cells[row][col].is_some() {
            return Err(PlacementError::Occupied { row, col });
        }
        if row + 1 < ROWS && self.cells[row + 1][col].is_none() {
            return Err(PlacementError::Floating { row, col });
        }
        self.cells[row][col] = Some(piece);
        Ok(())
    }

    /// Row the next piece dropped into `col` would occupy.
    #[must_use]
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_none())
    }

    /// Contents of one cell; `None` for empty or out-of-range cells.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Whether `col` has no empty cell left. Out-of-range columns count as full.
    #[must_use]
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Whether every column is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of cells holding `piece`.
    #[must_use]
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().flatten().filter(|cell| **cell == Some(piece)).count()
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter()
    }
}
