//! Rules engine for a chess variant with cannons and alfils.
//!
//! [`board`] holds the position, validates and executes moves with exact
//! undo, and detects check, checkmate and stalemate. [`session`] wraps a
//! board into a two-player game with a console front end.

#[cfg(feature = "logging")]
macro_rules! diag {
    ($level:ident, $($arg:tt)+) => {
        log::$level!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! diag {
    ($level:ident, $($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

pub(crate) use diag;

pub mod board;
pub mod session;

pub use board::{Board, Color, Move, Piece, PieceKind, Square};
pub use session::{Session, SessionConfig};
