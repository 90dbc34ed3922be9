//! Game setup configuration
//!
//! A [`GameConfig`] describes a starting position: which side moves first and
//! where every piece stands. It is plain serde data so positions can be kept
//! in JSON files next to tests or tools.
//!
//! # File Format
//!
//! ```json
//! {
//!   "side_to_move": "black",
//!   "placements": [
//!     { "kind": "king", "color": "white", "row": 7, "col": 4 },
//!     { "kind": "rook", "color": "white", "row": 0, "col": 0 },
//!     { "kind": "king", "color": "black", "row": 0, "col": 7 }
//!   ]
//! }
//! ```
//!
//! Validation (bounds, overlaps, one king per side) happens when the config is
//! turned into a [`crate::Game`] via [`crate::Game::from_config`].

use crate::error::GameResult;
use crate::types::{Color, PieceKind, NUM_COLS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Back rank layout from column 0 to column 7
pub const BACK_RANK: [PieceKind; NUM_COLS as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// One piece in a starting position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: PieceKind,
    pub color: Color,
    pub row: i32,
    pub col: i32,
}

impl Placement {
    pub fn new(kind: PieceKind, color: Color, row: i32, col: i32) -> Self {
        Self {
            kind,
            color,
            row,
            col,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_side_to_move")]
    pub side_to_move: Color,
    pub placements: Vec<Placement>,
}

fn default_side_to_move() -> Color {
    Color::White
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameConfig {
    /// Standard starting arrangement, White to move
    ///
    /// Pawns on the second rank from each side, back rank R N B Q K B N R.
    /// Pieces are listed back rank first, column by column, Black before
    /// White, which fixes the roster order of each player.
    pub fn standard() -> Self {
        let mut placements = Vec::with_capacity(32);
        for color in [Color::Black, Color::White] {
            let back_row = color.back_row();
            let pawn_row = back_row + color.pawn_direction();
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                placements.push(Placement::new(kind, color, back_row, col as i32));
            }
            for col in 0..NUM_COLS {
                placements.push(Placement::new(PieceKind::Pawn, color, pawn_row, col));
            }
        }

        Self {
            side_to_move: Color::White,
            placements,
        }
    }

    /// Config with no pieces, for building custom positions
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            side_to_move,
            placements: Vec::new(),
        }
    }

    /// Builder-style placement
    pub fn with(mut self, kind: PieceKind, color: Color, row: i32, col: i32) -> Self {
        self.placements.push(Placement::new(kind, color, row, col));
        self
    }

    pub fn from_json_str(json: &str) -> GameResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> GameResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!(?path, pieces = config.placements.len(), "Loaded game config");
        Ok(config)
    }

    /// Write the config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> GameResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?)?;
        info!(?path, "Saved game config");
        Ok(())
    }
}
