//! Board representation and rules.
//!
//! An 8x8 grid of optional pieces with an undoable history log. Moves are
//! validated in two stages: structural legality per piece kind
//! ([`Move::is_possible`]), then king safety, checked by making the move,
//! testing for check and taking it back.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Move, Square};
//!
//! let mut board = Board::new();
//! let mv = board
//!     .make_move(Move::new(Color::White, Square(6, 4), Square(4, 4)))
//!     .unwrap();
//! assert!(!mv.is_capture());
//! assert!(board.undo_move().is_ok());
//! assert_eq!(board, Board::new());
//! ```

mod builder;
mod error;
mod layout;
mod make_unmake;
mod movegen;
pub mod prelude;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, LayoutError, MoveError, SquareError};
pub use movegen::GameStatus;
pub use state::Board;
pub use types::{Color, Edit, Move, Piece, PieceKind, Square};
