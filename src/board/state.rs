use super::{Color, Edit, Piece, PieceKind, Square};

/// The 8x8 grid plus the bookkeeping needed to undo every change.
///
/// The grid owns the pieces standing on it; `removed` owns every piece taken
/// off it, in removal order. `history` holds one [`Edit`] per change, oldest
/// first, and each `Edit::Removed` pairs with exactly one entry of `removed`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [[Option<Piece>; 8]; 8],
    pub(crate) removed: Vec<Piece>,
    pub(crate) history: Vec<Edit>,
}

impl Board {
    /// Standard starting position: Black on ranks 0 and 1, White on ranks
    /// 6 and 7.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, kind) in PieceKind::BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                board.cells[color.back_rank()][file] = Some(Piece::new(color, *kind));
                board.cells[color.pawn_start_rank()][file] =
                    Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    /// A board with no pieces and no history.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
            removed: Vec::new(),
            history: Vec::new(),
        }
    }

    /// The piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn get_piece(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.cells[sq.0][sq.1].as_mut()
    }

    /// Place `piece` on `sq`, replacing whatever stood there.
    ///
    /// Scenario setup only: nothing is validated and nothing is logged, so
    /// the placement cannot be undone.
    pub fn add_piece(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.0][sq.1] = Some(piece);
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.0][sq.1].is_none()
    }

    /// Color of the piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get_piece(sq).map(|p| p.color)
    }

    /// Occupied squares with their pieces, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get_piece(sq).map(|p| (sq, p)))
    }

    /// History log, oldest entry first.
    #[must_use]
    pub fn history(&self) -> &[Edit] {
        &self.history
    }

    /// Pieces taken off the board, oldest first.
    #[must_use]
    pub fn removed(&self) -> &[Piece] {
        &self.removed
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
