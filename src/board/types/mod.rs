//! Core board types.
//!
//! - `PieceKind`, `Color` and `Piece` - piece identity and the has-moved flag
//! - `Square` - (rank, file) cell coordinates
//! - `Move` and `Edit` - requested transitions and history records

mod moves;
mod piece;
mod square;

pub use moves::{Edit, Move};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
