//! Bishop movement rules
//!
//! Bishops slide diagonally any number of squares and are blocked by any
//! piece strictly between origin and destination.

use super::sliding::{is_path_clear, rays, DIAGONAL};
use super::{move_deltas, Piece};
use crate::board::Board;
use crate::types::Position;

pub(super) fn is_valid_move(bishop: &Piece, board: &Board, target: Position) -> bool {
    is_diagonal(bishop.square, target) && is_path_clear(board, bishop.square, target)
}

/// |Δrow| == |Δcol| > 0
pub(super) fn is_diagonal(from: Position, to: Position) -> bool {
    match move_deltas(from, to) {
        Some((dr, dc)) => dr.abs() == dc.abs() && dr != 0,
        None => false,
    }
}

pub(super) fn candidates(row: i32, col: i32) -> Vec<(i32, i32)> {
    rays(row, col, &DIAGONAL)
}
