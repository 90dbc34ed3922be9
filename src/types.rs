//! Type definitions and coordinate mapping for chess game logic
//!
//! Squares are addressed by a linear [`Position`] in `0..64`, laid out
//! row-major (`row * 8 + col`). Row 0 is Black's back rank and row 7 is
//! White's back rank, so White pawns advance towards row 0.
//!
//! Converting an out-of-range `(row, col)` pair yields [`INVALID_POSITION`]
//! instead of panicking; every board query treats that sentinel as a quiet
//! negative result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Linear square index (0-63), or [`INVALID_POSITION`]
pub type Position = i32;

/// Sentinel returned for coordinates that fall off the board
pub const INVALID_POSITION: Position = -1;

pub const NUM_ROWS: i32 = 8;
pub const NUM_COLS: i32 = 8;
pub const NUM_SQUARES: usize = (NUM_ROWS * NUM_COLS) as usize;

/// Convert row and column to linear position (0-63)
///
/// Returns [`INVALID_POSITION`] if either coordinate is off the board.
#[inline]
pub fn square_to_pos(row: i32, col: i32) -> Position {
    if is_valid_square(row, col) {
        row * NUM_COLS + col
    } else {
        INVALID_POSITION
    }
}

/// Convert position to (row, col)
///
/// Callers must check [`is_valid_pos`] first; see [`coords`] for the checked form.
#[inline]
pub fn pos_to_square(pos: Position) -> (i32, i32) {
    (pos / NUM_COLS, pos % NUM_COLS)
}

/// Checked conversion of a position to (row, col)
#[inline]
pub fn coords(pos: Position) -> Option<(i32, i32)> {
    is_valid_pos(pos).then(|| pos_to_square(pos))
}

/// Check if position is within board bounds
#[inline]
pub fn is_valid_pos(pos: Position) -> bool {
    (0..NUM_SQUARES as Position).contains(&pos)
}

/// Check if square coordinates are valid
#[inline]
pub fn is_valid_square(row: i32, col: i32) -> bool {
    (0..NUM_ROWS).contains(&row) && (0..NUM_COLS).contains(&col)
}

/// Signed (row, col) delta from `from` to `to`
///
/// Both positions must be valid.
#[inline]
pub(crate) fn deltas(from: Position, to: Position) -> (i32, i32) {
    let (from_row, from_col) = pos_to_square(from);
    let (to_row, to_col) = pos_to_square(to);
    (to_row - from_row, to_col - from_col)
}

/// Side of the board a piece or player belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step
    pub fn pawn_direction(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Back rank row for this side's initial setup
    pub fn back_row(self) -> i32 {
        match self {
            Color::White => NUM_ROWS - 1,
            Color::Black => 0,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Movement variant of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Standard material value in pawns
    ///
    /// The king has no material value since it is never actually taken.
    pub fn material_value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// Outcome of the game from the point of view of the side to move
///
/// `Stalemate` and `Checkmate` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    Ongoing,
    Stalemate,
    Checkmate,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Ongoing)
    }
}
