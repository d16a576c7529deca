use super::{Board, BoardError, Edit, Move, MoveError, Piece, Square};

impl Board {
    /// Validate and commit a move.
    ///
    /// The move must be structurally possible and must not leave the
    /// mover's own king attacked. On success the moved piece is marked as
    /// moved and the committed move is returned with its capture flag set.
    /// On failure the board is unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<Move, MoveError> {
        let from = mv.from();
        let piece = self
            .get_piece(from)
            .ok_or(MoveError::EmptySource { at: from })
            .map_err(rejected)?;
        if piece.color != mv.color() {
            return Err(rejected(MoveError::WrongColor { at: from }));
        }
        if !mv.is_possible(self) {
            return Err(rejected(MoveError::Illegal { mv }));
        }
        if self.will_be_checked(mv).map_err(|e| rejected(e.into()))? {
            return Err(rejected(MoveError::LeavesKingInCheck { mv }));
        }

        let committed = self
            .move_piece(mv)
            .ok_or(MoveError::Illegal { mv })
            .map_err(rejected)?;
        if let Some(moved) = self.piece_mut(committed.to()) {
            moved.has_moved = true;
        }
        crate::diag!(trace, "committed {committed}");
        Ok(committed)
    }

    /// Revert the most recent history entry.
    ///
    /// A bare removal puts the removed piece back. A move puts the piece
    /// back on its source square with its previous has-moved flag, and a
    /// capturing move also restores the captured piece, consuming its
    /// removal entry.
    pub fn undo_move(&mut self) -> Result<Edit, BoardError> {
        self.revert_last().ok_or_else(|| {
            crate::diag!(debug, "undo requested with empty history");
            BoardError::EmptyHistory
        })
    }

    /// Take the piece on `at` off the board and log the removal so it can be
    /// undone on its own. Returns `None` and logs nothing if `at` is empty.
    pub fn remove_piece(&mut self, at: Square) -> Option<Piece> {
        let piece = self.cells[at.0][at.1].take()?;
        self.removed.push(piece);
        self.history.push(Edit::Removed { at });
        Some(piece)
    }

    /// Execute a move without any legality check and log it.
    ///
    /// An opposing piece on the destination is removed first and the move
    /// is flagged as a capture. Returns `None`, changing nothing, if the
    /// source is empty or the destination holds a piece of the mover's own
    /// color. The has-moved flag is left alone.
    pub fn move_piece(&mut self, mut mv: Move) -> Option<Move> {
        let (from, to) = (mv.from(), mv.to());
        let piece = self.get_piece(from)?;
        if from == to || self.color_on(to) == Some(piece.color) {
            return None;
        }

        if self.get_piece(to).is_some() {
            self.remove_piece(to);
            mv.set_capture(true);
        }
        self.cells[from.0][from.1] = None;
        self.cells[to.0][to.1] = Some(piece);
        self.history.push(Edit::Moved {
            mv,
            had_moved: piece.has_moved,
        });
        Some(mv)
    }

    fn revert_last(&mut self) -> Option<Edit> {
        let edit = self.history.pop()?;
        match edit {
            Edit::Removed { at } => {
                self.cells[at.0][at.1] = self.removed.pop();
            }
            Edit::Moved { mv, had_moved } => {
                let (from, to) = (mv.from(), mv.to());
                let mut piece = self.cells[to.0][to.1].take();
                if let Some(p) = piece.as_mut() {
                    p.has_moved = had_moved;
                }
                self.cells[from.0][from.1] = piece;

                if mv.is_capture() {
                    if let Some(Edit::Removed { at }) = self.history.last().copied() {
                        debug_assert_eq!(at, to);
                        self.history.pop();
                        self.cells[at.0][at.1] = self.removed.pop();
                    }
                }
            }
        }
        Some(edit)
    }

    /// Run `f` on the position after `mv`, then take `mv` back.
    ///
    /// `f` only gets shared access, so nothing else can change the board
    /// while the probe is in flight. Returns `None` if `mv` cannot be
    /// executed at all.
    pub(crate) fn probe<R>(&mut self, mv: Move, f: impl FnOnce(&Board) -> R) -> Option<R> {
        self.move_piece(mv)?;
        let result = f(self);
        self.revert_last();
        Some(result)
    }

    /// Would `mv` leave its mover's king attacked?
    pub(crate) fn will_be_checked(&mut self, mv: Move) -> Result<bool, BoardError> {
        let color = mv.color();
        self.probe(mv, |after| after.is_checked(color))
            .unwrap_or(Ok(false))
    }
}

/// Board errors are already logged where they are detected.
fn rejected(err: MoveError) -> MoveError {
    if !matches!(err, MoveError::Board(_)) {
        crate::diag!(debug, "move rejected: {err}");
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, PieceKind};

    #[test]
    fn test_remove_empty_square_logs_nothing() {
        let mut board = Board::empty();
        assert_eq!(board.remove_piece(Square(3, 3)), None);
        assert!(board.history().is_empty());
        assert!(board.removed().is_empty());
    }

    #[test]
    fn test_move_piece_refuses_own_destination() {
        let mut board = Board::new();
        let mv = Move::new(Color::Black, Square(0, 0), Square(1, 0));
        assert_eq!(board.move_piece(mv), None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_probe_leaves_board_untouched() {
        let mut board = Board::new();
        board.remove_piece(Square(1, 4));
        let before = board.clone();
        let mv = Move::new(Color::Black, Square(0, 3), Square(6, 3));
        let seen = board.probe(mv, |after| after.get_piece(Square(6, 3)));
        assert_eq!(
            seen,
            Some(Some(Piece::new(Color::Black, PieceKind::Queen)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_capture_consumes_removal_entry() {
        let mut board = Board::new();
        let mv = Move::new(Color::White, Square(7, 1), Square(1, 2));
        let done = board.move_piece(mv).unwrap();
        assert!(done.is_capture());
        assert_eq!(board.history().len(), 2);
        assert_eq!(board.removed().len(), 1);

        let undone = board.undo_move().unwrap();
        assert!(matches!(undone, Edit::Moved { .. }));
        assert!(board.history().is_empty());
        assert_eq!(board, Board::new());
    }

    #[cfg(feature = "logging")]
    mod logging {
        use std::cell::Cell;
        use std::sync::Once;

        use super::*;

        thread_local! {
            static ERRORS: Cell<usize> = const { Cell::new(0) };
        }

        /// Counts error records per thread, so parallel tests stay apart.
        struct ErrorCounter;

        impl log::Log for ErrorCounter {
            fn enabled(&self, _: &log::Metadata<'_>) -> bool {
                true
            }

            fn log(&self, record: &log::Record<'_>) {
                if record.level() == log::Level::Error {
                    ERRORS.with(|n| n.set(n.get() + 1));
                }
            }

            fn flush(&self) {}
        }

        static LOGGER: ErrorCounter = ErrorCounter;
        static INIT: Once = Once::new();

        fn error_count() -> usize {
            INIT.call_once(|| {
                if log::set_logger(&LOGGER).is_ok() {
                    log::set_max_level(log::LevelFilter::Trace);
                }
            });
            ERRORS.with(Cell::get)
        }

        #[test]
        fn test_missing_king_logged_once_per_rejection() {
            let mut board = Board::empty();
            board.add_piece(Square(4, 4), Piece::new(Color::White, PieceKind::Rook));
            let before = error_count();

            let result = board.make_move(Move::new(Color::White, Square(4, 4), Square(4, 0)));
            assert_eq!(
                result,
                Err(MoveError::Board(BoardError::MissingKing {
                    color: Color::White
                }))
            );
            assert_eq!(error_count() - before, 1);
        }
    }
}
