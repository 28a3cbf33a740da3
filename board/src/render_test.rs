#![allow(clippy::float_cmp)]

use super::*;
use crate::grid::Piece;

#[test]
fn top_left_cell_center() {
    assert_eq!(cell_center(0, 0), (50.0, 50.0));
}

#[test]
fn bottom_right_cell_center() {
    assert_eq!(cell_center(5, 6), (650.0, 550.0));
}

#[test]
fn radius_leaves_inset_gap() {
    assert_eq!(piece_radius(), 40.0);
}

#[test]
fn fills_follow_cell_contents() {
    assert_eq!(cell_fill(None), "white");
    assert_eq!(cell_fill(Some(Piece::Red)), "red");
    assert_eq!(cell_fill(Some(Piece::Yellow)), "yellow");
}
