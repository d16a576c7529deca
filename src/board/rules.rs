//! Structural move legality.
//!
//! A move is structurally possible when it obeys the moving piece's
//! geometry, path and destination-occupancy rules. King safety is not
//! considered here; see `Board::make_move`.

use super::{Board, Color, Move, PieceKind, Square};

/// Movement predicate for one piece kind: can a `color` piece standing on
/// `from` travel to `to` on `board`?
pub(crate) type MoveRule = fn(&Board, Square, Square, Color) -> bool;

impl PieceKind {
    /// The movement predicate for this kind.
    pub(crate) const fn rule(self) -> MoveRule {
        match self {
            PieceKind::Pawn => pawn_move,
            PieceKind::Rook => rook_move,
            PieceKind::Knight => knight_move,
            PieceKind::Bishop => bishop_move,
            PieceKind::Queen => queen_move,
            PieceKind::King => king_move,
            PieceKind::Cannon => cannon_move,
            PieceKind::Alfil => alfil_move,
        }
    }
}

impl Move {
    /// True if the piece on the source square may travel to the
    /// destination under its movement rule.
    ///
    /// Fails when the source is empty or holds a piece of the other color.
    #[must_use]
    pub fn is_possible(&self, board: &Board) -> bool {
        match board.get_piece(self.from()) {
            Some(piece) if piece.color == self.color() => {
                (piece.kind.rule())(board, self.from(), self.to(), self.color())
            }
            _ => false,
        }
    }
}

/// Same rank or same file, and not the same square.
#[inline]
pub(crate) fn is_linear(from: Square, to: Square) -> bool {
    let (dr, df) = from.delta(to);
    (dr == 0) != (df == 0)
}

/// Equal rank and file distance, and not the same square.
#[inline]
pub(crate) fn is_diagonal(from: Square, to: Square) -> bool {
    let (dr, df) = from.delta(to);
    dr != 0 && dr.abs() == df.abs()
}

#[inline]
fn is_l_shape(from: Square, to: Square) -> bool {
    let (dr, df) = from.delta(to);
    matches!((dr.abs(), df.abs()), (2, 1) | (1, 2))
}

/// True if any cell strictly between `from` and `to` is occupied.
///
/// Only meaningful for linear or diagonal pairs; anything else is reported
/// as unblocked.
pub(crate) fn is_path_blocked(board: &Board, from: Square, to: Square) -> bool {
    if !is_linear(from, to) && !is_diagonal(from, to) {
        return false;
    }
    let (dr, df) = from.delta(to);
    let step = (dr.signum(), df.signum());
    let mut current = from;
    loop {
        current = match current.offset(step.0, step.1) {
            Some(sq) => sq,
            None => return false,
        };
        if current == to {
            return false;
        }
        if !board.is_empty(current) {
            return true;
        }
    }
}

#[inline]
fn dest_blocked_by_own(board: &Board, to: Square, color: Color) -> bool {
    board.color_on(to) == Some(color)
}

#[inline]
fn dest_holds_opponent(board: &Board, to: Square, color: Color) -> bool {
    board.color_on(to) == Some(color.opponent())
}

fn knight_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    is_l_shape(from, to) && !dest_blocked_by_own(board, to, color)
}

fn rook_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    is_linear(from, to)
        && !is_path_blocked(board, from, to)
        && !dest_blocked_by_own(board, to, color)
}

fn bishop_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    is_diagonal(from, to)
        && !is_path_blocked(board, from, to)
        && !dest_blocked_by_own(board, to, color)
}

fn queen_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    (is_linear(from, to) || is_diagonal(from, to))
        && !is_path_blocked(board, from, to)
        && !dest_blocked_by_own(board, to, color)
}

fn king_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let (dr, df) = from.delta(to);
    dr.abs() <= 1 && df.abs() <= 1 && !dest_blocked_by_own(board, to, color)
}

/// Linear, and only across at least one occupied cell.
// Quiet moves need a screen too, unlike the xiangqi cannon.
fn cannon_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    is_linear(from, to)
        && is_path_blocked(board, from, to)
        && !dest_blocked_by_own(board, to, color)
}

fn alfil_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let (dr, df) = from.delta(to);
    dr.abs() == 2 && df.abs() == 2 && !dest_blocked_by_own(board, to, color)
}

/// Diagonal single step onto an opposing piece, or a straight advance of
/// one step (two from an unmoved pawn). Straight advances only check the
/// destination for own pieces.
fn pawn_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    if dest_blocked_by_own(board, to, color) {
        return false;
    }
    let forward = color.pawn_direction();
    let (dr, df) = from.delta(to);

    if dr == forward && df.abs() == 1 {
        return dest_holds_opponent(board, to, color);
    }
    if df != 0 {
        return false;
    }
    let has_moved = board.get_piece(from).map_or(true, |p| p.has_moved);
    dr == forward || (!has_moved && dr == 2 * forward)
}
