//! King movement rules
//!
//! One square in any direction; never obstructed. Castling is not supported.

use super::{move_deltas, Piece};
use crate::types::Position;

pub(super) fn is_valid_move(king: &Piece, target: Position) -> bool {
    let Some((dr, dc)) = move_deltas(king.square, target) else {
        return false;
    };
    dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0)
}

pub(super) fn candidates(row: i32, col: i32) -> Vec<(i32, i32)> {
    vec![
        (row + 1, col + 1),
        (row + 1, col),
        (row + 1, col - 1),
        (row, col + 1),
        (row, col - 1),
        (row - 1, col + 1),
        (row - 1, col),
        (row - 1, col - 1),
    ]
}
