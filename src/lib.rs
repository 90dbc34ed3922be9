//! Chess move validation and game-state detection
//!
//! Rules-only chess: an 8x8 board, the six standard piece kinds, per-piece
//! movement rules, transactional moves that refuse to leave the mover's king
//! in check, single-move undo, and checkmate / stalemate detection by
//! exhaustive search over candidate moves.
//!
//! Castling, en passant, promotion, draw rules, clocks and notation are not
//! supported.
//!
//! # Example
//!
//! ```
//! use chess_rules::{square_to_pos, Game, GameState};
//!
//! let mut game = Game::new();
//! assert!(game.play(square_to_pos(6, 4), square_to_pos(4, 4)));
//! assert_eq!(game.state(), GameState::Ongoing);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod pieces;
pub mod player;
pub mod types;

pub use board::{Board, MoveRecord};
pub use config::{GameConfig, Placement};
pub use error::{GameError, GameResult};
pub use game::Game;
pub use pieces::{Piece, PieceId};
pub use player::Player;
pub use types::{
    coords, is_valid_pos, is_valid_square, pos_to_square, square_to_pos, Color, GameState,
    PieceKind, Position, INVALID_POSITION, NUM_COLS, NUM_ROWS,
};
