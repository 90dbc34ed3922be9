//! Pawn movement rules
//!
//! - **Forward push**: one square towards the opponent, onto an empty square
//! - **Double push**: two squares on the pawn's first move, both squares empty
//! - **Captures**: one square diagonally forward, only onto an enemy piece
//!
//! A pawn never captures straight ahead and never moves diagonally onto an
//! empty square. En passant and promotion are not supported.

use super::{move_deltas, Piece};
use crate::board::Board;
use crate::types::{square_to_pos, Color, Position};

pub(super) fn is_valid_move(pawn: &Piece, board: &Board, target: Position) -> bool {
    let Some((dr, dc)) = move_deltas(pawn.square, target) else {
        return false;
    };
    let direction = pawn.color.pawn_direction();

    // Straight pushes
    if dc == 0 {
        if dr == direction {
            return !has_obstacle(pawn, board, 1);
        }
        if dr == 2 * direction && pawn.first_move {
            return !has_obstacle(pawn, board, 2);
        }
        return false;
    }

    // Diagonal capture; legal target already guarantees the occupant is an enemy
    if dc.abs() == 1 && dr == direction {
        return board.occupied(target);
    }

    false
}

/// Check the squares in front of the pawn, up to `steps` squares ahead
fn has_obstacle(pawn: &Piece, board: &Board, steps: i32) -> bool {
    let direction = pawn.color.pawn_direction();
    let (row, col) = (pawn.row(), pawn.col());
    (1..=steps).any(|step| board.occupied(square_to_pos(row + direction * step, col)))
}

pub(super) fn candidates(color: Color, row: i32, col: i32) -> Vec<(i32, i32)> {
    let direction = color.pawn_direction();
    vec![
        (row + direction * 2, col),
        (row + direction, col),
        (row + direction, col + 1),
        (row + direction, col - 1),
    ]
}
