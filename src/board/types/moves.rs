//! Move and edit-record types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// A requested transition of one piece from `from` to `to`.
///
/// `capture` starts out false and is set only when the move is executed and
/// finds an opposing piece on `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    color: Color,
    from: Square,
    to: Square,
    capture: bool,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, from: Square, to: Square) -> Self {
        Move {
            color,
            from,
            to,
            capture: false,
        }
    }

    /// Color of the side making the move
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// True once execution has removed an opposing piece from `to`
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.capture
    }

    #[inline]
    pub(crate) fn set_capture(&mut self, capture: bool) {
        self.capture = capture;
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.capture { 'x' } else { '-' };
        write!(f, "{} {}{}{}", self.color, self.from, sep, self.to)
    }
}

/// One reversible entry of the board's history log.
///
/// A capture is logged as a `Removed` entry for the captured piece followed
/// by the `Moved` entry whose move has `is_capture()` set; undoing the move
/// consumes both.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Edit {
    /// A piece travelled from `mv.from()` to `mv.to()`. `had_moved` is the
    /// mover's `has_moved` flag before the move.
    Moved { mv: Move, had_moved: bool },
    /// The piece at `at` was taken off the board and pushed onto the
    /// removed stack.
    Removed { at: Square },
}
