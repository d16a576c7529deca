//! Text layout notation and the board diagram.
//!
//! A layout is eight `/`-separated rows, rank 0 first. Digits stand for runs
//! of empty cells; letters are pieces (`p r n b q k c a`), uppercase for
//! White. The starting position reads
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.

use std::fmt;
use std::str::FromStr;

use super::error::LayoutError;
use super::{Board, Piece, Square};

impl Board {
    /// Parse a position from layout notation. Every piece starts unmoved
    /// and the history is empty.
    pub fn try_from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (rank, row) in rows.iter().enumerate() {
            let mut file = 0;
            for c in row.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(LayoutError::WrongRowLength {
                        rank,
                        cells: file + 1,
                    });
                }
                board.add_piece(Square(rank, file), piece);
                file += 1;
            }
            if file != 8 {
                return Err(LayoutError::WrongRowLength { rank, cells: file });
            }
        }
        Ok(board)
    }

    /// Convert the piece placement to layout notation.
    #[must_use]
    pub fn to_layout(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in 0..8 {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some(piece) = self.get_piece(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_layout(s)
    }
}

/// Grid diagram with rank indices down the left and file indices along the
/// bottom, `.` for empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..8 {
            write!(f, "{rank} ")?;
            for file in 0..8 {
                let c = self.get_piece(Square(rank, file)).map_or('.', Piece::to_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in 0..8 {
            write!(f, " {file}")?;
        }
        writeln!(f)
    }
}
