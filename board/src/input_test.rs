#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn left_edge_maps_to_first_column() {
    assert_eq!(column_at(0.0), Some(0));
    assert_eq!(column_at(99.9), Some(0));
}

#[test]
fn offsets_divide_by_cell_size() {
    assert_eq!(column_at(100.0), Some(1));
    assert_eq!(column_at(350.0), Some(3));
    assert_eq!(column_at(699.0), Some(6));
}

#[test]
fn right_edge_is_outside_board() {
    assert_eq!(column_at(700.0), None);
    assert_eq!(column_at(10_000.0), None);
}

#[test]
fn negative_offset_is_outside_board() {
    assert_eq!(column_at(-0.5), None);
    assert_eq!(column_at(-100.0), None);
}

#[test]
fn non_finite_offset_is_ignored() {
    assert_eq!(column_at(f64::NAN), None);
    assert_eq!(column_at(f64::INFINITY), None);
}

#[test]
fn board_dimensions_follow_cell_size() {
    assert_eq!(board_width(), 700.0);
    assert_eq!(board_height(), 600.0);
}
