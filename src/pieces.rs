//! Chess piece movement rules
//!
//! A [`Piece`] is plain data (kind, color, square, first-move flag) owned by
//! the [`Board`] arena and addressed through a [`PieceId`]. Movement rules are
//! dispatched over the closed [`PieceKind`] enum to one module per variant:
//!
//! - `pawn` - forward pushes, double push on first move, diagonal captures
//! - `knight` - L-shaped jumps, never obstructed
//! - `bishop` / `rook` / `queen` - sliding pieces, share `sliding::is_path_clear`
//! - `king` - one step in any direction
//!
//! Every variant answers two questions: is a target geometrically reachable
//! and unobstructed ([`Piece::is_valid_move`]), and which targets are worth
//! trying ([`Piece::possible_moves`]). Both are pure; the only mutating entry
//! point is [`crate::Game::attempt_move`].

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

#[cfg(test)]
mod tests;

use crate::board::Board;
use crate::types::{
    is_valid_pos, pos_to_square, square_to_pos, Color, PieceKind, Position, INVALID_POSITION,
};
use std::fmt;

/// Handle to a piece in the board's arena
///
/// Handles stay valid for the lifetime of the board, including after the
/// piece has been captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub(crate) kind: PieceKind,
    pub(crate) color: Color,
    pub(crate) square: Position,
    pub(crate) first_move: bool,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, color: Color, square: Position) -> Self {
        Self {
            kind,
            color,
            square,
            first_move: true,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Current square; for a captured piece, the square it was taken on
    pub fn square(&self) -> Position {
        self.square
    }

    pub fn row(&self) -> i32 {
        pos_to_square(self.square).0
    }

    pub fn col(&self) -> i32 {
        pos_to_square(self.square).1
    }

    /// True until the piece completes its first move
    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// Check if this piece can move to `target` on `board`
    ///
    /// Combines [`Board::is_legal_target`] (on the board, not own color) with
    /// the variant's geometry and obstruction rules. Does not consider whether
    /// the move would leave the mover's king in check.
    pub fn is_valid_move(&self, board: &Board, target: Position) -> bool {
        if !board.is_legal_target(self, target) {
            return false;
        }

        match self.kind {
            PieceKind::Pawn => pawn::is_valid_move(self, board, target),
            PieceKind::Knight => knight::is_valid_move(self, target),
            PieceKind::Bishop => bishop::is_valid_move(self, board, target),
            PieceKind::Rook => rook::is_valid_move(self, board, target),
            PieceKind::Queen => queen::is_valid_move(self, board, target),
            PieceKind::King => king::is_valid_move(self, target),
        }
    }

    /// Candidate targets for this piece, in variant generation order
    ///
    /// Each square appears at most once. Candidates satisfy
    /// [`Piece::is_valid_move`] but may still be rejected by the self-check
    /// test in [`crate::Game::attempt_move`].
    pub fn possible_moves(&self, board: &Board) -> Vec<Position> {
        let (row, col) = pos_to_square(self.square);
        let candidates = match self.kind {
            PieceKind::Pawn => pawn::candidates(self.color, row, col),
            PieceKind::Knight => knight::candidates(row, col),
            PieceKind::Bishop => bishop::candidates(row, col),
            PieceKind::Rook => rook::candidates(row, col),
            PieceKind::Queen => queen::candidates(row, col),
            PieceKind::King => king::candidates(row, col),
        };

        let mut moves = Vec::new();
        for (r, c) in candidates {
            self.add_if_valid(&mut moves, board, r, c);
        }
        moves
    }

    fn add_if_valid(&self, moves: &mut Vec<Position>, board: &Board, row: i32, col: i32) {
        let pos = square_to_pos(row, col);
        if pos == INVALID_POSITION || moves.contains(&pos) {
            return;
        }
        if self.is_valid_move(board, pos) {
            moves.push(pos);
        }
    }
}

/// Row/col deltas for a move between two on-board squares, or `None`
pub(crate) fn move_deltas(from: Position, to: Position) -> Option<(i32, i32)> {
    (is_valid_pos(from) && is_valid_pos(to)).then(|| crate::types::deltas(from, to))
}
