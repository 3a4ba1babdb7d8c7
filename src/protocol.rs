//! FlintOthello - Referee protocol
//!
//! This module implements the line-oriented referee protocol: one command
//! per stdin line, one reply per stdout line.
//!
//! Commands:
//! - `START <C> <T>` - begin a game; `B` means the engine plays Dark, `W`
//!   Light; `T` is the per-move time budget in whole seconds.
//! - `MOVE <board64>` - the current position after the opponent's move; the
//!   engine answers with its own move (or `PASS`).
//! - `STOP` - terminate the session.
//!
//! Every protocol error is terminal: the caller reports it on stderr and
//! exits with a failure status, while `STOP` exits cleanly.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::board::Board;
use crate::deadline::TimedSearch;
use crate::types::{encode_move, Side};

/// Reply sent when the engine has no legal move.
pub const PASS_REPLY: &str = "PASS";

/// A validated referee command.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Start { engine_side: Side, budget_secs: u64 },
    Move(Board),
    Stop,
}

/// The protocol error taxonomy. All variants are fatal for the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    /// Unknown command word or malformed argument list.
    Unsupported(String),
    /// MOVE payload that is not 64 cells over the `0`/`1`/`2` alphabet.
    InvalidMove(String),
    /// START time budget that is not a positive integer.
    InvalidTimeBudget(String),
    /// START while a game is already in progress.
    SessionActive,
    /// MOVE before any START.
    NoSession,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::Unsupported(line) => write!(f, "Unsupported command: {line}"),
            ProtocolError::InvalidMove(payload) => write!(f, "Invalid move: {payload}"),
            ProtocolError::InvalidTimeBudget(value) => {
                write!(f, "Invalid time budget: {value}")
            }
            ProtocolError::SessionActive => write!(f, "START received while a game is active"),
            ProtocolError::NoSession => write!(f, "MOVE received before START"),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Parse one command line into a typed `Command`.
///
/// Token boundaries are any run of whitespace; trailing tokens are
/// rejected. Parsing never panics and never reaches the board or search
/// layers with unvalidated input.
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let mut tokens = line.split_whitespace();
    let head = tokens
        .next()
        .ok_or_else(|| ProtocolError::Unsupported(line.to_string()))?;

    let command = match head {
        "STOP" => Command::Stop,
        "START" => {
            let engine_side = match tokens.next() {
                Some("B") => Side::Dark,
                Some("W") => Side::Light,
                _ => return Err(ProtocolError::Unsupported(line.to_string())),
            };
            let budget = tokens
                .next()
                .ok_or_else(|| ProtocolError::Unsupported(line.to_string()))?;
            let budget_secs: u64 = budget
                .parse()
                .map_err(|_| ProtocolError::InvalidTimeBudget(budget.to_string()))?;
            if budget_secs == 0 {
                return Err(ProtocolError::InvalidTimeBudget(budget.to_string()));
            }
            Command::Start {
                engine_side,
                budget_secs,
            }
        }
        "MOVE" => {
            let payload = tokens
                .next()
                .ok_or_else(|| ProtocolError::InvalidMove(line.to_string()))?;
            let board = Board::from_wire(payload)
                .ok_or_else(|| ProtocolError::InvalidMove(payload.to_string()))?;
            Command::Move(board)
        }
        _ => return Err(ProtocolError::Unsupported(line.to_string())),
    };

    if tokens.next().is_some() {
        return Err(ProtocolError::Unsupported(line.to_string()));
    }
    Ok(command)
}

/// What a handled command asks the I/O loop to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to send (START).
    None,
    /// One response line to send (MOVE).
    Line(String),
    /// Terminate cleanly (STOP).
    Quit,
}

/// Game state owned across turns: the live board, which side the engine
/// plays, and the searcher configured with the per-move budget.
struct Session {
    board: Board,
    engine_side: Side,
    searcher: TimedSearch,
}

/// Protocol handler: owns the optional session and the stdin/stdout loop.
pub struct Protocol {
    session: Option<Session>,
}

impl Protocol {
    pub fn new() -> Protocol {
        Protocol { session: None }
    }

    /// The board as of the engine's last reply, when a game is active.
    pub fn current_board(&self) -> Option<&Board> {
        self.session.as_ref().map(|session| &session.board)
    }

    /// Read commands until STOP, EOF, or a protocol error.
    pub fn run(&mut self) -> Result<(), ProtocolError> {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            match self.handle_line(&line)? {
                Reply::None => {}
                Reply::Line(response) => {
                    println!("{response}");
                    io::stdout().flush().ok();
                }
                Reply::Quit => return Ok(()),
            }
        }
        Ok(())
    }

    /// Handle one command line and produce the reply for the I/O loop.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, ProtocolError> {
        match parse_command(line)? {
            Command::Start {
                engine_side,
                budget_secs,
            } => {
                if self.session.is_some() {
                    return Err(ProtocolError::SessionActive);
                }
                self.session = Some(Session {
                    board: Board::opening(),
                    engine_side,
                    searcher: TimedSearch::new(Duration::from_secs(budget_secs)),
                });
                Ok(Reply::None)
            }
            Command::Move(board) => {
                let session = self.session.as_mut().ok_or(ProtocolError::NoSession)?;
                // The referee's board is authoritative; adopt it before
                // searching.
                session.board = board;
                let result = session.searcher.best_move(&board, session.engine_side);
                match result.best {
                    Some(pos) => {
                        session.board = board.apply_move(pos, session.engine_side);
                        Ok(Reply::Line(encode_move(pos)))
                    }
                    None => Ok(Reply::Line(PASS_REPLY.to_string())),
                }
            }
            Command::Stop => Ok(Reply::Quit),
        }
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Protocol::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_start_black() {
        assert_eq!(
            parse_command("START B 5"),
            Ok(Command::Start {
                engine_side: Side::Dark,
                budget_secs: 5
            })
        );
    }

    #[test]
    fn parse_start_white_with_sloppy_spacing() {
        assert_eq!(
            parse_command("START   W    3"),
            Ok(Command::Start {
                engine_side: Side::Light,
                budget_secs: 3
            })
        );
    }

    #[test]
    fn parse_start_rejects_bad_color() {
        assert!(matches!(
            parse_command("START X 5"),
            Err(ProtocolError::Unsupported(_))
        ));
    }

    #[test]
    fn parse_start_rejects_non_numeric_budget() {
        assert!(matches!(
            parse_command("START B five"),
            Err(ProtocolError::InvalidTimeBudget(_))
        ));
    }

    #[test]
    fn parse_start_rejects_zero_budget() {
        assert!(matches!(
            parse_command("START B 0"),
            Err(ProtocolError::InvalidTimeBudget(_))
        ));
    }

    #[test]
    fn parse_start_rejects_missing_budget() {
        assert!(matches!(
            parse_command("START B"),
            Err(ProtocolError::Unsupported(_))
        ));
    }

    #[test]
    fn parse_move_accepts_a_wire_board() {
        let wire = Board::opening().to_wire();
        assert_eq!(
            parse_command(&format!("MOVE {wire}")),
            Ok(Command::Move(Board::opening()))
        );
    }

    #[test]
    fn parse_move_rejects_short_payload() {
        let wire = Board::opening().to_wire();
        let wire = &wire[..63];
        assert!(matches!(
            parse_command(&format!("MOVE {wire}")),
            Err(ProtocolError::InvalidMove(_))
        ));
    }

    #[test]
    fn parse_move_rejects_bad_symbols() {
        let wire = Board::opening().to_wire().replacen('0', "9", 1);
        assert!(matches!(
            parse_command(&format!("MOVE {wire}")),
            Err(ProtocolError::InvalidMove(_))
        ));
    }

    #[test]
    fn parse_stop() {
        assert_eq!(parse_command("STOP"), Ok(Command::Stop));
    }

    #[test]
    fn parse_rejects_unknown_commands() {
        assert!(matches!(
            parse_command("SOS"),
            Err(ProtocolError::Unsupported(_))
        ));
        assert!(matches!(
            parse_command("STOP now"),
            Err(ProtocolError::Unsupported(_))
        ));
    }

    #[test]
    fn second_start_is_a_session_error() {
        let mut protocol = Protocol::new();
        assert_eq!(protocol.handle_line("START B 5"), Ok(Reply::None));
        assert_eq!(
            protocol.handle_line("START W 3"),
            Err(ProtocolError::SessionActive)
        );
    }

    #[test]
    fn move_before_start_is_rejected() {
        let mut protocol = Protocol::new();
        let wire = Board::opening().to_wire();
        assert_eq!(
            protocol.handle_line(&format!("MOVE {wire}")),
            Err(ProtocolError::NoSession)
        );
    }

    #[test]
    fn stop_quits_with_or_without_a_session() {
        let mut protocol = Protocol::new();
        assert_eq!(protocol.handle_line("STOP"), Ok(Reply::Quit));

        let mut protocol = Protocol::new();
        protocol.handle_line("START B 5").unwrap();
        assert_eq!(protocol.handle_line("STOP"), Ok(Reply::Quit));
    }
}
