//! Unit tests for piece movement rules

use super::*;
use crate::types::{square_to_pos, INVALID_POSITION};

/// Board with the given pieces; returns the board and the handles in order
fn create_test_board(pieces: &[(PieceKind, Color, (i32, i32))]) -> (Board, Vec<PieceId>) {
    let mut board = Board::new();
    let ids = pieces
        .iter()
        .map(|&(kind, color, (row, col))| {
            board
                .place(kind, color, square_to_pos(row, col))
                .expect("test placement should be valid")
        })
        .collect();
    (board, ids)
}

fn piece(board: &Board, id: PieceId) -> Piece {
    *board.piece(id).expect("piece should exist")
}

fn sq(row: i32, col: i32) -> Position {
    square_to_pos(row, col)
}

// ============================================================================
// Pawn
// ============================================================================

#[test]
fn test_pawn_single_and_double_push() {
    //! White pawns move towards row 0; double push only on the first move
    let (board, ids) = create_test_board(&[(PieceKind::Pawn, Color::White, (6, 4))]);
    let pawn = piece(&board, ids[0]);

    assert!(pawn.is_valid_move(&board, sq(5, 4)), "single push");
    assert!(pawn.is_valid_move(&board, sq(4, 4)), "double push on first move");
    assert!(!pawn.is_valid_move(&board, sq(3, 4)), "triple push");
    assert!(!pawn.is_valid_move(&board, sq(7, 4)), "backwards");
    assert!(!pawn.is_valid_move(&board, sq(5, 5)), "diagonal onto empty square");
}

#[test]
fn test_pawn_double_push_needs_first_move() {
    let (mut board, ids) = create_test_board(&[(PieceKind::Pawn, Color::Black, (1, 3))]);
    board.move_piece(ids[0], sq(2, 3));
    let pawn = piece(&board, ids[0]);

    assert!(!pawn.is_first_move());
    assert!(pawn.is_valid_move(&board, sq(3, 3)));
    assert!(!pawn.is_valid_move(&board, sq(4, 3)), "double push after first move");
}

#[test]
fn test_pawn_blocked_straight_ahead() {
    let (board, ids) = create_test_board(&[
        (PieceKind::Pawn, Color::White, (6, 2)),
        (PieceKind::Knight, Color::Black, (5, 2)),
    ]);
    let pawn = piece(&board, ids[0]);

    assert!(!pawn.is_valid_move(&board, sq(5, 2)), "cannot capture straight ahead");
    assert!(!pawn.is_valid_move(&board, sq(4, 2)), "cannot jump over a blocker");
    assert!(pawn.possible_moves(&board).is_empty());
}

#[test]
fn test_pawn_double_push_blocked_on_far_square() {
    let (board, ids) = create_test_board(&[
        (PieceKind::Pawn, Color::Black, (1, 6)),
        (PieceKind::Pawn, Color::White, (3, 6)),
    ]);
    let pawn = piece(&board, ids[0]);

    assert!(pawn.is_valid_move(&board, sq(2, 6)));
    assert!(!pawn.is_valid_move(&board, sq(3, 6)));
}

#[test]
fn test_pawn_diagonal_capture() {
    let (board, ids) = create_test_board(&[
        (PieceKind::Pawn, Color::White, (4, 4)),
        (PieceKind::Bishop, Color::Black, (3, 5)),
        (PieceKind::Rook, Color::White, (3, 3)),
    ]);
    let pawn = piece(&board, ids[0]);

    assert!(pawn.is_valid_move(&board, sq(3, 5)), "enemy on the diagonal");
    assert!(!pawn.is_valid_move(&board, sq(3, 3)), "own piece on the diagonal");
    assert!(!pawn.is_valid_move(&board, sq(5, 5)), "backwards capture");
}

#[test]
fn test_pawn_on_edge_column_and_last_row() {
    //! Candidates falling off the board are dropped, not errors
    let (board, ids) = create_test_board(&[
        (PieceKind::Pawn, Color::White, (0, 0)),
        (PieceKind::Pawn, Color::Black, (6, 7)),
    ]);

    assert!(piece(&board, ids[0]).possible_moves(&board).is_empty());
    assert_eq!(piece(&board, ids[1]).possible_moves(&board), vec![sq(7, 7)]);
}

#[test]
fn test_pawn_possible_moves_from_start() {
    let (board, ids) = create_test_board(&[(PieceKind::Pawn, Color::White, (6, 4))]);
    assert_eq!(piece(&board, ids[0]).possible_moves(&board), vec![36, 44]);
}

// ============================================================================
// Knight
// ============================================================================

#[test]
fn test_knight_l_shapes_only() {
    let (board, ids) = create_test_board(&[(PieceKind::Knight, Color::White, (4, 4))]);
    let knight = piece(&board, ids[0]);

    for (row, col) in [(2, 3), (2, 5), (6, 3), (6, 5), (3, 2), (5, 2), (3, 6), (5, 6)] {
        assert!(knight.is_valid_move(&board, sq(row, col)), "({row}, {col})");
    }
    assert!(!knight.is_valid_move(&board, sq(4, 5)));
    assert!(!knight.is_valid_move(&board, sq(2, 2)));
    assert!(!knight.is_valid_move(&board, sq(4, 4)));
}

#[test]
fn test_knight_jumps_over_pieces() {
    let (board, ids) = create_test_board(&[
        (PieceKind::Knight, Color::Black, (0, 1)),
        (PieceKind::Pawn, Color::Black, (1, 0)),
        (PieceKind::Pawn, Color::Black, (1, 1)),
        (PieceKind::Pawn, Color::Black, (1, 2)),
        (PieceKind::Pawn, Color::Black, (1, 3)),
    ]);
    let knight = piece(&board, ids[0]);

    assert_eq!(knight.possible_moves(&board), vec![sq(2, 2), sq(2, 0)]);
}

#[test]
fn test_knight_corner_does_not_wrap() {
    //! Column arithmetic must not wrap into the neighbouring row
    let (board, ids) = create_test_board(&[(PieceKind::Knight, Color::White, (3, 0))]);
    let knight = piece(&board, ids[0]);

    assert!(!knight.is_valid_move(&board, sq(2, 6)));
    assert_eq!(knight.possible_moves(&board).len(), 4);
}

// ============================================================================
// Sliding pieces
// ============================================================================

#[test]
fn test_bishop_diagonals_and_blocking() {
    let (board, ids) = create_test_board(&[
        (PieceKind::Bishop, Color::White, (4, 4)),
        (PieceKind::Pawn, Color::Black, (2, 2)),
        (PieceKind::Pawn, Color::White, (6, 6)),
    ]);
    let bishop = piece(&board, ids[0]);

    assert!(bishop.is_valid_move(&board, sq(3, 3)));
    assert!(bishop.is_valid_move(&board, sq(2, 2)), "capture the blocker");
    assert!(!bishop.is_valid_move(&board, sq(1, 1)), "beyond the blocker");
    assert!(!bishop.is_valid_move(&board, sq(6, 6)), "own piece");
    assert!(!bishop.is_valid_move(&board, sq(7, 7)), "beyond own piece");
    assert!(!bishop.is_valid_move(&board, sq(4, 6)), "straight line");
}

#[test]
fn test_bishop_start_position_is_boxed_in() {
    let (board, ids) = create_test_board(&[
        (PieceKind::Bishop, Color::White, (7, 5)),
        (PieceKind::Pawn, Color::White, (6, 4)),
        (PieceKind::Pawn, Color::White, (6, 6)),
    ]);
    assert!(piece(&board, ids[0]).possible_moves(&board).is_empty());
}

#[test]
fn test_bishop_long_diagonal_candidates() {
    //! Full distance to the far edge, nearest square first
    let (board, ids) = create_test_board(&[
        (PieceKind::Bishop, Color::White, (7, 5)),
        (PieceKind::Pawn, Color::White, (6, 6)),
    ]);
    assert_eq!(
        piece(&board, ids[0]).possible_moves(&board),
        vec![52, 43, 34, 25, 16]
    );
}

#[test]
fn test_rook_straight_lines_and_blocking() {
    let (board, ids) = create_test_board(&[
        (PieceKind::Rook, Color::Black, (0, 0)),
        (PieceKind::Knight, Color::Black, (0, 3)),
        (PieceKind::Pawn, Color::White, (5, 0)),
    ]);
    let rook = piece(&board, ids[0]);

    assert!(rook.is_valid_move(&board, sq(0, 2)));
    assert!(!rook.is_valid_move(&board, sq(0, 3)), "own piece");
    assert!(!rook.is_valid_move(&board, sq(0, 7)), "blocked by own piece");
    assert!(rook.is_valid_move(&board, sq(5, 0)), "capture");
    assert!(!rook.is_valid_move(&board, sq(6, 0)), "beyond capture");
    assert!(!rook.is_valid_move(&board, sq(1, 1)), "diagonal");

    let mut moves = rook.possible_moves(&board);
    moves.sort_unstable();
    assert_eq!(moves, vec![1, 2, 8, 16, 24, 32, 40]);
}

#[test]
fn test_rook_does_not_wrap_rows() {
    //! Position 7 -> 8 is one index apart but not on the same rank
    let (board, ids) = create_test_board(&[(PieceKind::Rook, Color::White, (0, 7))]);
    assert!(!piece(&board, ids[0]).is_valid_move(&board, sq(1, 0)));
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    let (board, ids) = create_test_board(&[
        (PieceKind::Queen, Color::White, (4, 3)),
        (PieceKind::Pawn, Color::Black, (4, 5)),
    ]);
    let queen = piece(&board, ids[0]);

    assert!(queen.is_valid_move(&board, sq(0, 3)), "file");
    assert!(queen.is_valid_move(&board, sq(4, 5)), "rank capture");
    assert!(!queen.is_valid_move(&board, sq(4, 6)), "blocked rank");
    assert!(queen.is_valid_move(&board, sq(7, 6)), "diagonal");
    assert!(!queen.is_valid_move(&board, sq(2, 4)), "knight shape");

    // Open board minus the two squares behind the pawn
    assert_eq!(queen.possible_moves(&board).len(), 25);
}

#[test]
fn test_queen_candidates_rook_rays_first() {
    let (board, ids) = create_test_board(&[(PieceKind::Queen, Color::Black, (0, 0))]);
    let moves = piece(&board, ids[0]).possible_moves(&board);

    assert_eq!(&moves[..2], &[sq(1, 0), sq(0, 1)]);
    assert_eq!(moves.last(), Some(&sq(7, 7)));
    assert_eq!(moves.len(), 21);
}

// ============================================================================
// King
// ============================================================================

#[test]
fn test_king_single_steps() {
    let (board, ids) = create_test_board(&[
        (PieceKind::King, Color::White, (7, 4)),
        (PieceKind::Pawn, Color::White, (6, 4)),
        (PieceKind::Pawn, Color::Black, (6, 5)),
    ]);
    let king = piece(&board, ids[0]);

    assert!(king.is_valid_move(&board, sq(7, 3)));
    assert!(king.is_valid_move(&board, sq(6, 5)), "capture");
    assert!(!king.is_valid_move(&board, sq(6, 4)), "own piece");
    assert!(!king.is_valid_move(&board, sq(7, 6)), "two squares");
    assert!(!king.is_valid_move(&board, sq(7, 4)), "null move");

    assert_eq!(
        king.possible_moves(&board),
        vec![sq(7, 5), sq(7, 3), sq(6, 5), sq(6, 3)]
    );
}

// ============================================================================
// Shared rules
// ============================================================================

#[test]
fn test_out_of_range_targets_are_invalid_for_every_kind() {
    let kinds = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
    for kind in kinds {
        let (board, ids) = create_test_board(&[(kind, Color::White, (7, 7))]);
        let p = piece(&board, ids[0]);
        for target in [INVALID_POSITION, -9, 64, 71, 100] {
            assert!(!p.is_valid_move(&board, target), "{kind} to {target}");
        }
    }
}

#[test]
fn test_possible_moves_are_valid_and_unique() {
    let (board, ids) = create_test_board(&[
        (PieceKind::Queen, Color::White, (3, 3)),
        (PieceKind::Knight, Color::White, (5, 2)),
        (PieceKind::Rook, Color::Black, (3, 6)),
        (PieceKind::King, Color::Black, (0, 0)),
    ]);

    for id in ids {
        let p = piece(&board, id);
        let moves = p.possible_moves(&board);
        for (index, &target) in moves.iter().enumerate() {
            assert!(p.is_valid_move(&board, target));
            assert!(!moves[..index].contains(&target), "{target} listed twice");
        }
    }
}
