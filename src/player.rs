//! Per-side bookkeeping: roster, check flag and captured pieces
//!
//! A [`Player`] never owns pieces. Its roster holds [`PieceId`] handles into
//! the [`crate::Board`] arena and must always equal the set of that color's
//! on-board pieces. All roster edits go through [`crate::Game`], which is the
//! single source of truth for capture bookkeeping.

use crate::board::Board;
use crate::error::{GameError, GameResult};
use crate::pieces::PieceId;
use crate::types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: Color,
    checked: bool,
    pieces: Vec<PieceId>,
    /// Opposing pieces this player has taken, oldest first
    captured: Vec<PieceId>,
}

impl Player {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            checked: false,
            pieces: Vec::new(),
            captured: Vec::new(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// True while this player's king is attacked
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub(crate) fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Handles of this player's on-board pieces
    pub fn pieces(&self) -> &[PieceId] {
        &self.pieces
    }

    /// Handles of the opposing pieces this player has captured
    pub fn captured(&self) -> &[PieceId] {
        &self.captured
    }

    pub fn owns(&self, id: PieceId) -> bool {
        self.pieces.contains(&id)
    }

    /// Total material value of the captured pieces
    pub fn captured_material(&self, board: &Board) -> i32 {
        self.captured
            .iter()
            .filter_map(|&id| board.piece(id))
            .map(|piece| piece.kind().material_value())
            .sum()
    }

    pub(crate) fn add_piece(&mut self, id: PieceId) {
        if !self.owns(id) {
            self.pieces.push(id);
        }
    }

    /// Put a piece back at the roster slot it was removed from
    pub(crate) fn restore_piece(&mut self, index: usize, id: PieceId) {
        if self.owns(id) {
            return;
        }
        let index = index.min(self.pieces.len());
        self.pieces.insert(index, id);
    }

    /// Remove a piece from the roster, returning the slot it occupied
    pub(crate) fn remove_piece(&mut self, id: PieceId) -> GameResult<usize> {
        let index = self
            .pieces
            .iter()
            .position(|&owned| owned == id)
            .ok_or_else(|| GameError::NotInRoster {
                piece: id,
                color: self.color,
            })?;
        self.pieces.remove(index);
        Ok(index)
    }

    pub(crate) fn add_captured(&mut self, id: PieceId) {
        self.captured.push(id);
    }

    /// Drop the most recent capture entry for `id`
    pub(crate) fn remove_captured(&mut self, id: PieceId) -> bool {
        match self.captured.iter().rposition(|&taken| taken == id) {
            Some(index) => {
                self.captured.remove(index);
                true
            }
            None => false,
        }
    }
}
