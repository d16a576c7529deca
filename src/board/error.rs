//! Error types for board operations.

use std::fmt;

use super::{Color, Move, Square};

/// Errors raised by board state queries and history operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Undo requested with nothing in the history log
    EmptyHistory,
    /// No king of this color is on the board; check status is undefined
    MissingKing { color: Color },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::EmptyHistory => write!(f, "No move to undo"),
            BoardError::MissingKing { color } => {
                write!(f, "The {color} king is no longer on the board")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Reasons `Board::make_move` rejects a move.
///
/// Every variant except `Board` is an ordinary illegal move and leaves the
/// board untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the source square
    EmptySource { at: Square },
    /// The piece on the source square belongs to the other side
    WrongColor { at: Square },
    /// The piece cannot reach the destination under its movement rule
    Illegal { mv: Move },
    /// Making the move would leave the mover's own king attacked
    LeavesKingInCheck { mv: Move },
    /// The position itself is broken
    Board(BoardError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource { at } => write!(f, "No piece on {at}"),
            MoveError::WrongColor { at } => write!(f, "The piece on {at} does not belong to you"),
            MoveError::Illegal { mv } => write!(f, "Invalid move {mv}"),
            MoveError::LeavesKingInCheck { mv } => {
                write!(f, "Move {mv} would leave your king in check")
            }
            MoveError::Board(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for MoveError {
    fn from(e: BoardError) -> Self {
        MoveError::Board(e)
    }
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Not two integers
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for layout string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout must have exactly 8 rows
    WrongRowCount { found: usize },
    /// Invalid piece character in a row
    InvalidPiece { char: char },
    /// A row describes more or fewer than 8 cells
    WrongRowLength { rank: usize, cells: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRowCount { found } => {
                write!(f, "Layout must have 8 rows, found {found}")
            }
            LayoutError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in layout")
            }
            LayoutError::WrongRowLength { rank, cells } => {
                write!(f, "Rank {rank} describes {cells} cells, expected 8")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
