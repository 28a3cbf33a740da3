//! Rendering: paints the whole board to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads the grid and produces pixels; it never mutates game state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The caller (the client's DOM host) logs the failure.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{BOARD_FILL, CELL_SIZE, EMPTY_FILL, PIECE_INSET};
use crate::grid::{Cell, Grid};
use crate::input::{board_height, board_width};

/// Canvas-space center of the cell at (`row`, `col`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cell_center(row: usize, col: usize) -> (f64, f64) {
    (col as f64 * CELL_SIZE + CELL_SIZE / 2.0, row as f64 * CELL_SIZE + CELL_SIZE / 2.0)
}

/// Radius of the disc painted in every cell.
#[must_use]
pub fn piece_radius() -> f64 {
    CELL_SIZE / 2.0 - PIECE_INSET
}

/// Fill color for a cell.
#[must_use]
pub fn cell_fill(cell: Cell) -> &'static str {
    cell.map_or(EMPTY_FILL, |piece| piece.as_str())
}

/// Repaint the full board: background, then one disc per cell.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, grid: &Grid) -> Result<(), JsValue> {
    ctx.set_fill_style_str(BOARD_FILL);
    ctx.fill_rect(0.0, 0.0, board_width(), board_height());

    let radius = piece_radius();
    for (row, cells) in grid.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let (x, y) = cell_center(row, col);
            ctx.begin_path();
            ctx.arc(x, y, radius, 0.0, PI * 2.0)?;
            ctx.set_fill_style_str(cell_fill(*cell));
            ctx.fill();
        }
    }

    Ok(())
}
