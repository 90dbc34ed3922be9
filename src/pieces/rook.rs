//! Rook movement rules
//!
//! Rooks slide along a rank or file; exactly one of the row/col deltas is
//! zero. Blocked by any piece strictly between origin and destination.

use super::sliding::{is_path_clear, rays, ORTHOGONAL};
use super::{move_deltas, Piece};
use crate::board::Board;
use crate::types::Position;

pub(super) fn is_valid_move(rook: &Piece, board: &Board, target: Position) -> bool {
    is_straight(rook.square, target) && is_path_clear(board, rook.square, target)
}

pub(super) fn is_straight(from: Position, to: Position) -> bool {
    match move_deltas(from, to) {
        Some((dr, dc)) => (dr == 0) != (dc == 0),
        None => false,
    }
}

pub(super) fn candidates(row: i32, col: i32) -> Vec<(i32, i32)> {
    rays(row, col, &ORTHOGONAL)
}
