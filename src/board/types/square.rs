//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A cell on the board, represented as (rank, file).
///
/// Rank 0 is Black's back rank and rank 7 is White's. Inside the board the
/// coordinates are trusted to be in 0..8; use [`Square::new`] or
/// `TryFrom<(usize, usize)>` on untrusted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = Black's back rank)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Get the square's index (0-63, rank-major)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// Every square on the board, index 0 through 63.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }

    /// Signed (rank, file) delta from `self` to `to`
    #[inline]
    #[must_use]
    pub(crate) const fn delta(self, to: Square) -> (isize, isize) {
        (
            to.0 as isize - self.0 as isize,
            to.1 as isize - self.1 as isize,
        )
    }

    /// Step by a signed offset, `None` if it leaves the board
    #[must_use]
    pub(crate) fn offset(self, d_rank: isize, d_file: isize) -> Option<Square> {
        let rank = self.0.checked_add_signed(d_rank)?;
        let file = self.1.checked_add_signed(d_file)?;
        Square::new(rank, file)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses "rank file" or "rank,file", e.g. `"6 4"` or `"6,4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 2 {
            return Err(invalid());
        }
        let rank = parts[0].parse::<usize>().map_err(|_| invalid())?;
        let file = parts[1].parse::<usize>().map_err(|_| invalid())?;
        Square::try_from((rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_corners() {
        assert_eq!(Square::from_index(0), Square(0, 0));
        assert_eq!(Square::from_index(63), Square(7, 7));
        assert_eq!(Square(6, 4).as_index(), 52);
    }

    #[test]
    fn test_all_yields_sixty_four_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares.last(), Some(&Square(7, 7)));
    }

    #[test]
    fn test_try_from_bounds() {
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::RankOutOfBounds { rank: 8 })
        );
        assert_eq!(
            Square::try_from((0, 9)),
            Err(SquareError::FileOutOfBounds { file: 9 })
        );
        assert_eq!(Square::try_from((3, 3)), Ok(Square(3, 3)));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("6 4".parse::<Square>(), Ok(Square(6, 4)));
        assert_eq!("0,7".parse::<Square>(), Ok(Square(0, 7)));
        assert!("a1".parse::<Square>().is_err());
        assert_eq!(
            "9 1".parse::<Square>(),
            Err(SquareError::RankOutOfBounds { rank: 9 })
        );
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(7, 7).offset(0, 1), None);
        assert_eq!(Square(4, 4).offset(-2, 2), Some(Square(2, 6)));
    }
}
