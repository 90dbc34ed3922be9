//! Game session - board, both players and the side to move
//!
//! [`Game`] is the explicit context that every cross-cutting rule needs: a
//! move by one side must consult the other side's roster to detect checks,
//! and a capture edits the opposing roster. Holding the board and both
//! players in one struct means `&mut Game` is the exclusive lock covering the
//! grid, the king-square table, the undo slot and both rosters for the whole
//! of an [`Game::attempt_move`] or [`Game::is_move_possible`] call.
//!
//! # Move protocol
//!
//! [`Game::attempt_move`] is the only way a move is applied, and it is
//! transactional:
//!
//! 1. Reject (no mutation) if the piece's movement rules forbid the target
//! 2. Apply the move on the board and update rosters and the captured log
//! 3. If any opposing piece now reaches the mover's king, undo and reject
//! 4. Otherwise clear the mover's check flag
//! 5. Flag the opponent as checked if any of the mover's pieces reaches the
//!    opponent's king
//!
//! A rejected attempt leaves the game exactly as it was, including the undo
//! slot of the previous move.
//!
//! # Checkmate and stalemate
//!
//! [`Game::is_move_possible`] is a brute-force existence search: every
//! candidate of every rostered piece is tried with `attempt_move` and reverted.
//! Checkmate is "checked and no move possible", stalemate is "not checked and
//! no move possible".

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::pieces::{Piece, PieceId};
use crate::player::Player;
use crate::types::{
    is_valid_pos, square_to_pos, Color, GameState, PieceKind, Position, INVALID_POSITION,
};
use tracing::{debug, info, warn};


/// Session state needed, on top of the board's record, to revert the last move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UndoContext {
    checked: [bool; 2],
    side_to_move: Color,
    /// Roster slot the captured piece was removed from; `None` if the piece
    /// was never enrolled
    captured_slot: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    side_to_move: Color,
    undo: Option<UndoContext>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move
    pub fn new() -> Self {
        let mut game = Self::empty(Color::White);
        for placement in GameConfig::standard().placements {
            let square = square_to_pos(placement.row, placement.col);
            if game.enroll(placement.kind, placement.color, square).is_none() {
                warn!(?placement, "Skipping standard placement");
            }
        }
        info!("New game set up in standard position");
        game
    }

    /// Build a game from an arbitrary setup
    ///
    /// Every placement must be on the board and on a distinct square, and each
    /// side needs exactly one king. Initial check flags are derived from the
    /// position.
    pub fn from_config(config: &GameConfig) -> GameResult<Self> {
        let mut game = Self::empty(config.side_to_move);

        for placement in &config.placements {
            let (row, col) = (placement.row, placement.col);
            let square = square_to_pos(row, col);
            if !is_valid_pos(square) {
                return Err(GameError::InvalidPlacement { row, col });
            }
            if game.board.occupied(square) {
                return Err(GameError::SquareOccupied { square });
            }
            if placement.kind == PieceKind::King && game.board.king_position(placement.color).is_some() {
                return Err(GameError::DuplicateKing {
                    color: placement.color,
                });
            }
            game.enroll(placement.kind, placement.color, square);
        }

        for color in Color::ALL {
            if game.board.king_position(color).is_none() {
                return Err(GameError::MissingKing { color });
            }
        }

        for color in Color::ALL {
            let checked = game.is_checking(color.opposite());
            game.players[color.index()].set_checked(checked);
        }

        info!(
            pieces = config.placements.len(),
            side_to_move = %config.side_to_move,
            "Game set up from config"
        );
        Ok(game)
    }

    fn empty(side_to_move: Color) -> Self {
        Self {
            board: Board::new(),
            players: [Player::new(Color::White), Player::new(Color::Black)],
            side_to_move,
            undo: None,
        }
    }

    /// Place a piece and register it with its owner's roster
    fn enroll(&mut self, kind: PieceKind, color: Color, square: Position) -> Option<PieceId> {
        let id = self.board.place(kind, color, square)?;
        self.players[color.index()].add_piece(id);
        Some(id)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Material captured by White minus material captured by Black
    pub fn material_balance(&self) -> i32 {
        self.player(Color::White).captured_material(&self.board)
            - self.player(Color::Black).captured_material(&self.board)
    }

    /// Move the `color` piece on `from` to `to`
    ///
    /// Fails without mutation if `from` is empty or holds the other side's
    /// piece; otherwise delegates to [`Game::attempt_move`].
    pub fn move_piece(&mut self, color: Color, from: Position, to: Position) -> bool {
        self.try_move(color, from, to).is_ok()
    }

    /// [`Game::move_piece`] reporting why a move was refused
    pub fn try_move(&mut self, color: Color, from: Position, to: Position) -> GameResult<()> {
        for square in [from, to] {
            if !is_valid_pos(square) {
                return Err(GameError::InvalidSquare { square });
            }
        }

        let id = self
            .board
            .piece_id_at(from)
            .ok_or(GameError::NoPieceAtSquare { square: from })?;
        if self.board.piece(id).map(Piece::color) != Some(color) {
            return Err(GameError::WrongPieceColor {
                square: from,
                color,
            });
        }

        self.try_attempt_move(id, to)
    }

    /// Move for the side to move, then hand the turn to the other side
    pub fn play(&mut self, from: Position, to: Position) -> bool {
        self.try_play(from, to).is_ok()
    }

    pub fn try_play(&mut self, from: Position, to: Position) -> GameResult<()> {
        self.try_move(self.side_to_move, from, to)?;
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }

    /// Transactionally move a piece; true if the move stands
    pub fn attempt_move(&mut self, id: PieceId, target: Position) -> bool {
        self.try_attempt_move(id, target).is_ok()
    }

    /// [`Game::attempt_move`] reporting why a move was refused
    pub fn try_attempt_move(&mut self, id: PieceId, target: Position) -> GameResult<()> {
        let Some(piece) = self.board.piece(id).copied() else {
            return Err(GameError::IllegalMove {
                from: INVALID_POSITION,
                to: target,
            });
        };
        let (mover, from) = (piece.color, piece.square);

        if !self.board.is_on_board(id) || !piece.is_valid_move(&self.board, target) {
            debug!(piece = %piece.kind, color = %mover, from, to = target, "Rejected illegal move");
            return Err(GameError::IllegalMove { from, to: target });
        }

        let saved_record = self.board.last_move().copied();
        let saved_undo = self.undo;
        let checked = [
            self.players[0].is_checked(),
            self.players[1].is_checked(),
        ];

        let captured = self.board.move_piece(id, target);
        let captured_slot = captured.and_then(|taken| self.record_capture(mover, taken));
        self.undo = Some(UndoContext {
            checked,
            side_to_move: self.side_to_move,
            captured_slot,
        });

        if self.is_checking(mover.opposite()) {
            self.undo_last_move();
            self.board.restore_last_move(saved_record);
            self.undo = saved_undo;
            debug!(piece = %piece.kind, color = %mover, from, to = target, "Reverted move leaving own king in check");
            return Err(GameError::LeavesKingInCheck {
                from,
                to: target,
                color: mover,
            });
        }

        self.players[mover.index()].set_checked(false);
        let gives_check = self.is_checking(mover);
        self.players[mover.opposite().index()].set_checked(gives_check);

        debug!(
            piece = %piece.kind,
            color = %mover,
            from,
            to = target,
            capture = captured.is_some(),
            check = gives_check,
            "Move applied"
        );
        Ok(())
    }

    /// Remove a captured piece from its owner's roster and log it for the mover
    ///
    /// Returns the roster slot it was removed from. A piece missing from its
    /// owner's roster is logged and otherwise ignored.
    fn record_capture(&mut self, mover: Color, taken: PieceId) -> Option<usize> {
        self.players[mover.index()].add_captured(taken);
        match self.players[mover.opposite().index()].remove_piece(taken) {
            Ok(slot) => Some(slot),
            Err(err) => {
                warn!(%err, "Capture bookkeeping skipped");
                None
            }
        }
    }

    /// Revert the most recent move
    ///
    /// Restores the board, both rosters, the captured log, both check flags
    /// and the side to move. Only one move is ever undoable; returns false if
    /// there is nothing to undo.
    pub fn undo_last_move(&mut self) -> bool {
        let Some(record) = self.board.undo_last_move() else {
            return false;
        };
        let context = self.undo.take();

        if let (Some(taken), Some(mover)) = (
            record.captured,
            self.board.piece(record.piece).map(Piece::color),
        ) {
            self.players[mover.index()].remove_captured(taken);
            match context.and_then(|ctx| ctx.captured_slot) {
                Some(slot) => self.players[mover.opposite().index()].restore_piece(slot, taken),
                None => warn!(piece = %taken, "Captured piece had no roster entry; roster left unchanged"),
            }
        }

        if let Some(context) = context {
            for color in Color::ALL {
                self.players[color.index()].set_checked(context.checked[color.index()]);
            }
            self.side_to_move = context.side_to_move;
        }

        true
    }

    /// True if any of `color`'s pieces can legally move onto the opposing king
    pub fn is_checking(&self, color: Color) -> bool {
        let Some(king) = self.board.king_position(color.opposite()) else {
            return false;
        };
        self.players[color.index()]
            .pieces()
            .iter()
            .filter_map(|&id| self.board.piece(id))
            .any(|piece| piece.is_valid_move(&self.board, king))
    }

    /// True if `color` has at least one move that does not leave its king in check
    ///
    /// Tries every candidate of every rostered piece, reverting each probe.
    /// The game is left exactly as it was, including the undo slot.
    pub fn is_move_possible(&mut self, color: Color) -> bool {
        let saved_record = self.board.last_move().copied();
        let saved_undo = self.undo;
        let roster = self.players[color.index()].pieces().to_vec();

        for id in roster {
            let Some(piece) = self.board.piece(id) else {
                continue;
            };
            for target in piece.possible_moves(&self.board) {
                if self.try_attempt_move(id, target).is_ok() {
                    self.undo_last_move();
                    self.board.restore_last_move(saved_record);
                    self.undo = saved_undo;
                    debug!(%color, piece = %id, to = target, "Found a legal move");
                    return true;
                }
            }
        }

        debug!(%color, "No legal move available");
        false
    }

    /// Checked with no way out
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.player(color).is_checked() && !self.is_move_possible(color)
    }

    /// Not checked, but no legal move either
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.player(color).is_checked() && !self.is_move_possible(color)
    }

    /// Game state for the side to move
    pub fn state(&mut self) -> GameState {
        let color = self.side_to_move;
        if self.is_move_possible(color) {
            return GameState::Ongoing;
        }

        let state = if self.player(color).is_checked() {
            GameState::Checkmate
        } else {
            GameState::Stalemate
        };
        info!(%color, ?state, "Game over");
        state
    }
}
