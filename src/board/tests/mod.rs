//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Starting position layout
//! - `make_unmake.rs` - Move validation, execution and undo
//! - `game_end.rs` - Check, checkmate and stalemate detection
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, Color, Move, Square};

/// The starting position with both pawn ranks removed (and logged).
pub(super) fn board_without_pawns() -> Board {
    let mut board = Board::new();
    for file in 0..8 {
        board.remove_piece(Square(1, file));
        board.remove_piece(Square(6, file));
    }
    board
}

pub(super) fn mv(color: Color, from: (usize, usize), to: (usize, usize)) -> Move {
    Move::new(color, Square(from.0, from.1), Square(to.0, to.1))
}
