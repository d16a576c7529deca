//! Move enumeration, check detection and end-of-game detection.
//!
//! Enumeration is brute force: every (source, destination) pair of the 64
//! squares is tried against the movement rules. Check detection asks
//! whether any structurally possible enemy move lands on the king.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, BoardError, Color, Move, PieceKind, Square};

/// Position status for the side about to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// True for checkmate and stalemate
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Square of `color`'s king, found by linear scan.
    pub fn king_square(&self, color: Color) -> Result<Square, BoardError> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(sq, _)| sq)
            .ok_or_else(|| {
                crate::diag!(error, "the {color} king no longer exists");
                BoardError::MissingKing { color }
            })
    }

    fn possible_moves_iter(&self, color: Color) -> impl Iterator<Item = Move> + '_ {
        Square::all()
            .filter(move |&from| self.color_on(from) == Some(color))
            .flat_map(move |from| Square::all().map(move |to| Move::new(color, from, to)))
            .filter(move |mv| mv.is_possible(self))
    }

    /// Every structurally possible move for `color`, ignoring king safety.
    #[must_use]
    pub fn possible_moves(&self, color: Color) -> Vec<Move> {
        self.possible_moves_iter(color).collect()
    }

    /// Is `color`'s king attacked by some possible move of the other side?
    pub fn is_checked(&self, color: Color) -> Result<bool, BoardError> {
        let king = self.king_square(color)?;
        Ok(self
            .possible_moves_iter(color.opponent())
            .any(|mv| mv.to() == king))
    }

    /// Every possible move for `color` that does not leave its king attacked.
    pub fn valid_moves(&mut self, color: Color) -> Result<Vec<Move>, BoardError> {
        self.king_square(color)?;
        let mut valid = Vec::new();
        for mv in self.possible_moves(color) {
            if !self.will_be_checked(mv)? {
                valid.push(mv);
            }
        }
        Ok(valid)
    }

    fn has_valid_move(&mut self, color: Color) -> Result<bool, BoardError> {
        self.king_square(color)?;
        for mv in self.possible_moves(color) {
            if !self.will_be_checked(mv)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// In check with no valid move.
    pub fn is_checkmate(&mut self, color: Color) -> Result<bool, BoardError> {
        Ok(self.is_checked(color)? && !self.has_valid_move(color)?)
    }

    /// Not in check, yet no valid move.
    pub fn is_stalemate(&mut self, color: Color) -> Result<bool, BoardError> {
        Ok(!self.is_checked(color)? && !self.has_valid_move(color)?)
    }

    /// Check, checkmate and stalemate in one pass over the moves.
    pub fn status(&mut self, color: Color) -> Result<GameStatus, BoardError> {
        let checked = self.is_checked(color)?;
        let stuck = !self.has_valid_move(color)?;
        let status = match (checked, stuck) {
            (true, true) => GameStatus::Checkmate,
            (false, true) => GameStatus::Stalemate,
            (true, false) => GameStatus::Check,
            (false, false) => GameStatus::Ongoing,
        };
        if status.is_over() {
            crate::diag!(info, "{color} is in {status}");
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    #[test]
    fn test_missing_king_is_an_error() {
        let mut board = Board::empty();
        board.add_piece(Square(0, 0), Piece::new(Color::White, PieceKind::King));
        assert_eq!(
            board.is_checked(Color::Black),
            Err(BoardError::MissingKing {
                color: Color::Black
            })
        );
        assert!(board.is_checkmate(Color::Black).is_err());
        assert!(board.valid_moves(Color::Black).is_err());
        assert_eq!(board.is_checked(Color::White), Ok(false));
    }

    #[test]
    fn test_start_position_move_counts() {
        let mut board = Board::new();
        // 8 pawns x 2 advances + 2 knights x 2 jumps
        assert_eq!(board.possible_moves(Color::White).len(), 20);
        assert_eq!(board.valid_moves(Color::Black).unwrap().len(), 20);
        assert_eq!(board.status(Color::White), Ok(GameStatus::Ongoing));
    }

    #[test]
    fn test_possible_moves_only_for_requested_color() {
        let board = Board::new();
        assert!(board
            .possible_moves(Color::Black)
            .iter()
            .all(|mv| mv.color() == Color::Black && mv.from().rank() <= 1));
    }
}
