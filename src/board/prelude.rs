//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, BoardError, Color, Edit, GameStatus, Move, MoveError, Piece, PieceKind,
    Square, SquareError,
};
