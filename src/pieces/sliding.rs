//! Sliding piece helpers
//!
//! Common functionality for bishops, rooks and queens: obstruction scanning
//! along a straight or diagonal line, and ray enumeration for candidates.

use crate::board::Board;
use crate::types::{pos_to_square, square_to_pos, Position};

/// Max distance a sliding piece can travel on an 8x8 board
const MAX_DISTANCE: i32 = 7;

pub(super) const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(super) const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// True if every square strictly between `from` and `to` is empty
///
/// Assumes `from` and `to` lie on a common rank, file or diagonal.
pub(super) fn is_path_clear(board: &Board, from: Position, to: Position) -> bool {
    let (from_row, from_col) = pos_to_square(from);
    let (to_row, to_col) = pos_to_square(to);
    let dr = (to_row - from_row).signum();
    let dc = (to_col - from_col).signum();

    let mut row = from_row + dr;
    let mut col = from_col + dc;

    while (row, col) != (to_row, to_col) {
        if board.occupied(square_to_pos(row, col)) {
            return false;
        }
        row += dr;
        col += dc;
    }

    true
}

/// Squares along `directions`, interleaved by distance
///
/// For each distance 1..=7, yields one square per direction in order. Squares
/// may fall off the board; callers filter them.
pub(super) fn rays(row: i32, col: i32, directions: &[(i32, i32)]) -> Vec<(i32, i32)> {
    (1..=MAX_DISTANCE)
        .flat_map(|i| directions.iter().map(move |&(dr, dc)| (row + dr * i, col + dc * i)))
        .collect()
}
