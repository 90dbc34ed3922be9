//! Knight movement rules
//!
//! Knights move in an L-shape (2 squares one way, 1 square perpendicular) and
//! jump over anything in between, so there is no obstruction check.

use super::{move_deltas, Piece};
use crate::types::Position;

pub(super) fn is_valid_move(knight: &Piece, target: Position) -> bool {
    let Some((dr, dc)) = move_deltas(knight.square, target) else {
        return false;
    };
    matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))
}

pub(super) fn candidates(row: i32, col: i32) -> Vec<(i32, i32)> {
    vec![
        (row + 2, col + 1),
        (row + 2, col - 1),
        (row - 2, col + 1),
        (row - 2, col - 1),
        (row + 1, col + 2),
        (row + 1, col - 2),
        (row - 1, col + 2),
        (row - 1, col - 2),
    ]
}
