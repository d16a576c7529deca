//! Console command parsing.

use super::SessionError;
use crate::board::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `srcRank srcFile destRank destFile`
    Move { from: Square, to: Square },
    Undo,
    Board,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, SessionError> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        return Ok(None);
    }

    let cmd = match parts[0].to_ascii_lowercase().as_str() {
        "undo" => Command::Undo,
        "board" => Command::Board,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => {
            if parts.len() != 4 {
                return Err(SessionError::Parse {
                    input: trimmed.to_string(),
                });
            }
            let mut coords = [0usize; 4];
            for (slot, part) in coords.iter_mut().zip(&parts) {
                *slot = part.parse::<usize>().map_err(|_| SessionError::Parse {
                    input: trimmed.to_string(),
                })?;
            }
            Command::Move {
                from: Square::try_from((coords[0], coords[1]))?,
                to: Square::try_from((coords[2], coords[3]))?,
            }
        }
    };

    Ok(Some(cmd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SquareError;

    #[test]
    fn test_parse_move() {
        assert_eq!(
            parse_command("6 4 4 4").unwrap(),
            Some(Command::Move {
                from: Square(6, 4),
                to: Square(4, 4)
            })
        );
        assert_eq!(
            parse_command(" 1,1, 3,1 ").unwrap(),
            Some(Command::Move {
                from: Square(1, 1),
                to: Square(3, 1)
            })
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("undo").unwrap(), Some(Command::Undo));
        assert_eq!(parse_command("BOARD").unwrap(), Some(Command::Board));
        assert_eq!(parse_command("exit").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            parse_command("6 4 8 4"),
            Err(SessionError::Square(SquareError::RankOutOfBounds { rank: 8 }))
        );
        assert!(matches!(
            parse_command("-1 0 0 0"),
            Err(SessionError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert!(matches!(
            parse_command("6 4 4"),
            Err(SessionError::Parse { .. })
        ));
        assert!(matches!(
            parse_command("e2 e4"),
            Err(SessionError::Parse { .. })
        ));
    }
}
