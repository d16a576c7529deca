//! Game session: one board, whose turn it is, and how the game stands.
//!
//! A `Session` owns its `Board` outright; there is no shared or global game
//! state. The console front end in [`console`] drives a session from text
//! input.

use std::fmt;

use crate::board::{
    Board, BoardError, Color, Edit, GameStatus, LayoutError, Move, MoveError, Square, SquareError,
};

pub mod command;
pub mod console;

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Side that moves first
    pub first_to_move: Color,
    /// Print the board diagram after every move
    pub echo_board: bool,
    /// Starting position in layout notation; `None` for the standard setup
    pub layout: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            first_to_move: Color::White,
            echo_board: true,
            layout: None,
        }
    }
}

/// Errors surfaced to the session driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The game already ended in checkmate or stalemate
    GameOver,
    /// No move of this session to take back
    NothingToUndo,
    /// The move was rejected
    Move(MoveError),
    /// The position is broken (e.g. a king is missing)
    Board(BoardError),
    /// A coordinate outside the board
    Square(SquareError),
    /// The configured starting layout is malformed
    Layout(LayoutError),
    /// Input that is not a command
    Parse { input: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::GameOver => write!(f, "The game is over"),
            SessionError::NothingToUndo => write!(f, "No move to undo"),
            SessionError::Move(e) => write!(f, "{e}"),
            SessionError::Board(e) => write!(f, "{e}"),
            SessionError::Square(e) => write!(f, "{e}"),
            SessionError::Layout(e) => write!(f, "{e}"),
            SessionError::Parse { input } => {
                write!(f, "Cannot read '{input}': enter four integers between 0-7")
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(e) => Some(e),
            SessionError::Board(e) => Some(e),
            SessionError::Square(e) => Some(e),
            SessionError::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for SessionError {
    fn from(e: MoveError) -> Self {
        match e {
            MoveError::Board(e) => SessionError::Board(e),
            e => SessionError::Move(e),
        }
    }
}

impl From<BoardError> for SessionError {
    fn from(e: BoardError) -> Self {
        SessionError::Board(e)
    }
}

impl From<SquareError> for SessionError {
    fn from(e: SquareError) -> Self {
        SessionError::Square(e)
    }
}

impl From<LayoutError> for SessionError {
    fn from(e: LayoutError) -> Self {
        SessionError::Layout(e)
    }
}

/// Result of a committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The move as committed, capture flag included
    pub mv: Move,
    /// Side to move next
    pub next: Color,
    /// Status of `next` after the move
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    to_move: Color,
    status: GameStatus,
    moves_played: usize,
    config: SessionConfig,
}

impl Session {
    /// Start a game from the configured position.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let board = match &config.layout {
            Some(layout) => Board::try_from_layout(layout)?,
            None => Board::new(),
        };
        Session::start(board, config)
    }

    /// Start a game from an existing board.
    pub fn from_board(board: Board, to_move: Color) -> Result<Self, SessionError> {
        let config = SessionConfig {
            first_to_move: to_move,
            ..SessionConfig::default()
        };
        Session::start(board, config)
    }

    /// Both kings must be on the board before the first move.
    fn start(mut board: Board, config: SessionConfig) -> Result<Self, SessionError> {
        for color in Color::BOTH {
            board.king_square(color)?;
        }
        let to_move = config.first_to_move;
        let status = board.status(to_move)?;
        Ok(Session {
            board,
            to_move,
            status,
            moves_played: 0,
            config,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Side whose turn it is
    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Status of the side to move
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves committed in this session and not taken back
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// The checkmating side, once the game ended in checkmate.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        (self.status == GameStatus::Checkmate).then(|| self.to_move.opponent())
    }

    /// Move the side to move's piece from `from` to `to`, pass the turn and
    /// evaluate the position for the next side.
    ///
    /// If the next side's position cannot be evaluated (its king was
    /// taken), the move is taken back and the session is left as it was.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Turn, SessionError> {
        if self.status.is_over() {
            return Err(SessionError::GameOver);
        }
        let mv = self.board.make_move(Move::new(self.to_move, from, to))?;
        let next = self.to_move.opponent();
        let status = match self.board.status(next) {
            Ok(status) => status,
            Err(e) => {
                self.board.undo_move()?;
                return Err(e.into());
            }
        };
        self.moves_played += 1;
        self.to_move = next;
        self.status = status;
        Ok(Turn {
            mv,
            next: self.to_move,
            status: self.status,
        })
    }

    /// Take back the last committed move and give the turn back.
    pub fn undo(&mut self) -> Result<Move, SessionError> {
        if self.moves_played == 0 {
            return Err(SessionError::NothingToUndo);
        }
        let mv = match self.board.undo_move()? {
            Edit::Moved { mv, .. } => mv,
            Edit::Removed { .. } => return Err(SessionError::NothingToUndo),
        };
        self.moves_played -= 1;
        self.to_move = mv.color();
        self.status = self.board.status(self.to_move)?;
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_white_to_move() {
        let session = Session::new(SessionConfig::default()).unwrap();
        assert_eq!(session.to_move(), Color::White);
        assert_eq!(session.status(), GameStatus::Ongoing);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_turn_passes_only_on_success() {
        let mut session = Session::new(SessionConfig::default()).unwrap();
        let err = session.play(Square(1, 0), Square(2, 0)).unwrap_err();
        assert!(matches!(err, SessionError::Move(MoveError::WrongColor { .. })));
        assert_eq!(session.to_move(), Color::White);

        let turn = session.play(Square(6, 4), Square(4, 4)).unwrap();
        assert_eq!(turn.next, Color::Black);
        assert_eq!(session.to_move(), Color::Black);
        assert_eq!(session.moves_played(), 1);
    }

    #[test]
    fn test_undo_gives_turn_back() {
        let mut session = Session::new(SessionConfig::default()).unwrap();
        assert_eq!(session.undo(), Err(SessionError::NothingToUndo));
        session.play(Square(6, 4), Square(4, 4)).unwrap();
        let undone = session.undo().unwrap();
        assert_eq!(undone.color(), Color::White);
        assert_eq!(session.to_move(), Color::White);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_undo_does_not_touch_setup_removals() {
        let mut board = Board::new();
        board.remove_piece(Square(1, 0));
        let mut session = Session::from_board(board.clone(), Color::White).unwrap();
        assert_eq!(session.undo(), Err(SessionError::NothingToUndo));
        assert_eq!(session.board(), &board);
    }

    #[test]
    fn test_bad_layout_is_reported() {
        let config = SessionConfig {
            layout: Some("8/8".to_string()),
            ..SessionConfig::default()
        };
        assert!(matches!(
            Session::new(config),
            Err(SessionError::Layout(LayoutError::WrongRowCount { found: 2 }))
        ));
    }

    #[test]
    fn test_missing_king_of_either_side_refused_up_front() {
        let board = Board::try_from_layout("r7/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(
            Session::from_board(board, Color::White).unwrap_err(),
            SessionError::Board(BoardError::MissingKing {
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_king_capture_is_taken_back() {
        // Black is already in check with White to move.
        let board = Board::try_from_layout("4k3/8/8/8/8/8/8/4R2K").unwrap();
        let mut session = Session::from_board(board.clone(), Color::White).unwrap();

        assert_eq!(
            session.play(Square(7, 4), Square(0, 4)),
            Err(SessionError::Board(BoardError::MissingKing {
                color: Color::Black
            }))
        );
        assert_eq!(session.board(), &board);
        assert!(session.board().history().is_empty());
        assert_eq!(session.to_move(), Color::White);
        assert_eq!(session.moves_played(), 0);
        assert_eq!(session.status(), GameStatus::Ongoing);

        let turn = session.play(Square(7, 7), Square(6, 7)).unwrap();
        assert_eq!(turn.next, Color::Black);
        assert_eq!(session.moves_played(), 1);
    }

    #[test]
    fn test_missing_king_surfaces_as_board_error() {
        let config = SessionConfig {
            layout: Some("8/8/8/8/8/8/8/4K3".to_string()),
            first_to_move: Color::Black,
            ..SessionConfig::default()
        };
        assert_eq!(
            Session::new(config).unwrap_err(),
            SessionError::Board(BoardError::MissingKing {
                color: Color::Black
            })
        );
    }
}
