//! Queen movement rules
//!
//! Queens move like a rook or a bishop; the obstruction rule follows the
//! branch the move falls into.

use super::sliding::is_path_clear;
use super::{bishop, rook, Piece};
use crate::board::Board;
use crate::types::Position;

pub(super) fn is_valid_move(queen: &Piece, board: &Board, target: Position) -> bool {
    let from = queen.square;
    (rook::is_straight(from, target) || bishop::is_diagonal(from, target))
        && is_path_clear(board, from, target)
}

/// Rook rays first, then bishop rays
pub(super) fn candidates(row: i32, col: i32) -> Vec<(i32, i32)> {
    let mut squares = rook::candidates(row, col);
    squares.extend(bishop::candidates(row, col));
    squares
}
