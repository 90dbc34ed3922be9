//! Board state, piece arena and single-ply undo
//!
//! The [`Board`] exclusively owns every [`Piece`] placed on it. Pieces live in
//! an arena (`Vec<Piece>`) and the 8x8 grid stores [`PieceId`] handles into
//! it. A captured piece leaves the grid but stays in the arena, so the one
//! recorded move can be undone.
//!
//! # Derived state
//!
//! The king-square table is re-synchronized on every king relocation
//! (move and undo). It is never an independent source of truth: it must always
//! equal the square of the on-board king of that color.
//!
//! # Undo
//!
//! Only the most recent move can be undone. [`Board::move_piece`] overwrites
//! the single [`MoveRecord`] slot and [`Board::undo_last_move`] clears it, so a
//! second consecutive undo is a no-op.
//!
//! Roster bookkeeping is not done here; the board reports captures and the
//! session layer ([`crate::Game`]) owns all roster edits.

use crate::pieces::{Piece, PieceId};
use crate::types::{is_valid_pos, Color, PieceKind, Position, NUM_SQUARES};
use tracing::warn;

/// Everything needed to revert the most recent move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Square the piece moved from
    pub from: Position,
    /// Square the piece moved to
    pub to: Position,
    pub piece: PieceId,
    pub captured: Option<PieceId>,
    /// The mover's first-move flag before the move
    pub(crate) was_first_move: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<Piece>,
    grid: [Option<PieceId>; NUM_SQUARES],
    king_positions: [Option<Position>; 2],
    last_move: Option<MoveRecord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            pieces: Vec::new(),
            grid: [None; NUM_SQUARES],
            king_positions: [None; 2],
            last_move: None,
        }
    }

    /// Put a new piece on an empty square
    ///
    /// Returns `None` if the square is invalid or occupied. Placing a king
    /// registers its square in the king-square table.
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Position) -> Option<PieceId> {
        if !is_valid_pos(square) || self.occupied(square) {
            return None;
        }

        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece::new(kind, color, square));
        self.grid[square as usize] = Some(id);

        if kind == PieceKind::King {
            self.king_positions[color.index()] = Some(square);
        }

        Some(id)
    }

    /// Piece at `square`, or `None` for empty or invalid squares
    pub fn get(&self, square: Position) -> Option<&Piece> {
        self.piece_id_at(square).and_then(|id| self.piece(id))
    }

    /// Handle of the piece at `square`
    pub fn piece_id_at(&self, square: Position) -> Option<PieceId> {
        if !is_valid_pos(square) {
            return None;
        }
        self.grid[square as usize]
    }

    /// Look up a piece by handle, whether on the board or captured
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    /// True if a piece occupies `square`; false for invalid squares
    pub fn occupied(&self, square: Position) -> bool {
        self.piece_id_at(square).is_some()
    }

    /// True if `id` currently sits on the grid
    pub fn is_on_board(&self, id: PieceId) -> bool {
        self.piece(id)
            .is_some_and(|piece| self.piece_id_at(piece.square) == Some(id))
    }

    /// On-board pieces of one color, in arena order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .map(|(index, piece)| (PieceId(index), piece))
            .filter(move |&(id, piece)| piece.color == color && self.is_on_board(id))
    }

    /// Check if `piece` may end a move on `square`
    ///
    /// True iff the square is on the board and is either empty or holds a
    /// piece of the opposite color.
    pub fn is_legal_target(&self, piece: &Piece, square: Position) -> bool {
        if !is_valid_pos(square) {
            return false;
        }
        match self.get(square) {
            Some(occupant) => occupant.color != piece.color,
            None => true,
        }
    }

    /// Square of the king of `color`, if one is on the board
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.king_positions[color.index()]
    }

    /// The move that [`Board::undo_last_move`] would revert
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Relocate a piece, capturing whatever occupies the destination
    ///
    /// Clears the piece's first-move flag, keeps the king-square table in
    /// sync and overwrites the undo slot. Does not check move legality; see
    /// [`Piece::is_valid_move`]. Returns the captured piece, if any.
    ///
    /// An invalid destination or an off-board piece is logged and ignored.
    pub fn move_piece(&mut self, id: PieceId, new_square: Position) -> Option<PieceId> {
        if !is_valid_pos(new_square) || !self.is_on_board(id) {
            warn!(piece = %id, square = new_square, "Ignoring move of off-board piece or to invalid square");
            return None;
        }

        let piece = &mut self.pieces[id.0];
        let from = piece.square;
        let was_first_move = piece.first_move;
        piece.first_move = false;
        piece.square = new_square;
        let (kind, color) = (piece.kind, piece.color);

        self.grid[from as usize] = None;
        let captured = self.grid[new_square as usize].replace(id);

        if kind == PieceKind::King {
            self.king_positions[color.index()] = Some(new_square);
        }

        self.last_move = Some(MoveRecord {
            from,
            to: new_square,
            piece: id,
            captured,
            was_first_move,
        });

        captured
    }

    /// Revert the most recent move
    ///
    /// Restores the mover to its origin (with its first-move flag), puts any
    /// captured piece back on the destination and re-syncs the king-square
    /// table. Clears the undo slot and returns the reverted record so the
    /// caller can restore rosters. Returns `None` if there is nothing to undo.
    pub fn undo_last_move(&mut self) -> Option<MoveRecord> {
        let record = self.last_move.take()?;

        let piece = &mut self.pieces[record.piece.0];
        piece.square = record.from;
        piece.first_move = record.was_first_move;
        let (kind, color) = (piece.kind, piece.color);

        self.grid[record.to as usize] = record.captured;
        self.grid[record.from as usize] = Some(record.piece);

        if kind == PieceKind::King {
            self.king_positions[color.index()] = Some(record.from);
        }

        Some(record)
    }

    /// Reinstate an undo slot saved before a speculative move
    pub(crate) fn restore_last_move(&mut self, record: Option<MoveRecord>) {
        self.last_move = record;
    }
}
