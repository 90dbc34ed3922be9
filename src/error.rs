//! Error types for chess rules
//!
//! Provides custom error types for move validation, roster bookkeeping,
//! setup validation and configuration loading.
//!
//! The boolean move operations on [`crate::Game`] never surface these errors;
//! they are thin wrappers over the `try_*` variants that do.

use crate::pieces::PieceId;
use crate::types::{Color, Position};
use thiserror::Error;

/// Errors that can occur in game logic
#[derive(Error, Debug)]
pub enum GameError {
    /// Square index outside 0-63
    #[error("Invalid square index: {square} (must be 0-63)")]
    InvalidSquare { square: Position },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Position },

    /// Piece does not belong to the player trying to move it
    #[error("Piece at square {square} does not belong to {color}")]
    WrongPieceColor { square: Position, color: Color },

    /// Move rejected by the piece's movement rules
    #[error("Illegal move: from square {from} to square {to}")]
    IllegalMove { from: Position, to: Position },

    /// Move would end with the mover's own king attacked
    #[error("Move from square {from} to square {to} leaves the {color} king in check")]
    LeavesKingInCheck {
        from: Position,
        to: Position,
        color: Color,
    },

    /// Piece handle not registered with the expected player
    #[error("Piece {piece} is not in the {color} roster")]
    NotInRoster { piece: PieceId, color: Color },

    /// Setup placement outside the board
    #[error("Invalid placement at row {row}, col {col}")]
    InvalidPlacement { row: i32, col: i32 },

    /// Setup placement on an occupied square
    #[error("Square {square} is already occupied")]
    SquareOccupied { square: Position },

    /// Setup without a king for one side
    #[error("Setup has no {color} king")]
    MissingKing { color: Color },

    /// Setup with more than one king for one side
    #[error("Setup has more than one {color} king")]
    DuplicateKing { color: Color },

    /// Config file I/O error
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config serialization/deserialization error
    #[error("Config serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
