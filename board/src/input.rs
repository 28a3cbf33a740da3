//! Pointer input: maps a click's horizontal offset to a board column.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::{CELL_SIZE, COLS, ROWS};

/// Column under a pointer at horizontal canvas offset `offset_x`.
///
/// Returns `None` for negative, non-finite, or past-the-right-edge offsets.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn column_at(offset_x: f64) -> Option<usize> {
    if !offset_x.is_finite() || offset_x < 0.0 {
        return None;
    }
    let col = (offset_x / CELL_SIZE).floor();
    if col >= COLS as f64 {
        return None;
    }
    Some(col as usize)
}

/// Canvas width in pixels.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn board_width() -> f64 {
    COLS as f64 * CELL_SIZE
}

/// Canvas height in pixels.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn board_height() -> f64 {
    ROWS as f64 * CELL_SIZE
}
