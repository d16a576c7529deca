//! Line-oriented console front end.
//!
//! Each input line is one command; the reply is written back as text. The
//! loop ends on `quit`, end of input, or when the game is decided.

use std::io::{self, BufRead, Write};

use super::command::{parse_command, Command};
use super::{Session, Turn};
use crate::board::GameStatus;

/// Result of processing one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    /// Keep reading; print the reply (may be empty)
    Reply(String),
    /// The game is decided; print the reply and stop
    Finished(String),
    /// The user asked to stop
    Quit,
}

const HELP: &str = "Enter a move as four integers 0-7: srcRank srcFile destRank destFile.\n\
                    Other commands: undo, board, help, quit.";

pub struct Console {
    session: Session,
}

impl Console {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Console { session }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Prompt for the side to move.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{}'s turn: ", self.session.to_move())
    }

    /// Process a single command line.
    pub fn process_line(&mut self, line: &str) -> LineResult {
        let cmd = match parse_command(line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return LineResult::Reply(String::new()),
            Err(e) => return LineResult::Reply(e.to_string()),
        };

        match cmd {
            Command::Quit => LineResult::Quit,
            Command::Help => LineResult::Reply(HELP.to_string()),
            Command::Board => LineResult::Reply(self.session.board().to_string()),
            Command::Undo => match self.session.undo() {
                Ok(mv) => LineResult::Reply(format!("Took back {mv}")),
                Err(e) => LineResult::Reply(e.to_string()),
            },
            Command::Move { from, to } => match self.session.play(from, to) {
                Ok(turn) => self.report(turn),
                Err(e) => LineResult::Reply(e.to_string()),
            },
        }
    }

    fn report(&self, turn: Turn) -> LineResult {
        let mut reply = format!("Successfully moved {} to {}", turn.mv.from(), turn.mv.to());
        if turn.mv.is_capture() {
            reply.push_str(" (capture)");
        }
        if self.session.config().echo_board {
            reply.push('\n');
            reply.push_str(&self.session.board().to_string());
        }
        match turn.status {
            GameStatus::Ongoing => LineResult::Reply(reply),
            GameStatus::Check => {
                reply.push_str(&format!("\n{} is in check", turn.next));
                LineResult::Reply(reply)
            }
            GameStatus::Checkmate => {
                reply.push_str(&format!("\nCheckmate! {} wins", turn.mv.color()));
                LineResult::Finished(reply)
            }
            GameStatus::Stalemate => {
                reply.push_str("\nStalemate. The game ends in a draw");
                LineResult::Finished(reply)
            }
        }
    }

    /// Drive the session from `input` until it ends, writing replies to
    /// `out`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{HELP}")?;
        if self.session.config().echo_board {
            write!(out, "{}", self.session.board())?;
        }
        write!(out, "{}", self.prompt())?;
        out.flush()?;

        for line in input.lines() {
            match self.process_line(&line?) {
                LineResult::Reply(reply) => {
                    if !reply.is_empty() {
                        writeln!(out, "{reply}")?;
                    }
                }
                LineResult::Finished(reply) => {
                    writeln!(out, "{reply}")?;
                    return Ok(());
                }
                LineResult::Quit => return Ok(()),
            }
            write!(out, "{}", self.prompt())?;
            out.flush()?;
        }
        Ok(())
    }
}
