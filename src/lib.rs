//! FlintOthello - referee-driven Othello engine
//!
//! An Othello (Reversi) engine that speaks a line-oriented referee protocol
//! over stdin/stdout:
//! - Immutable 8x8 board with flanking move generation
//! - Static evaluation from disc, mobility and corner differentials
//! - Minimax search with alpha-beta pruning
//! - Per-move wall-clock deadline enforced by a cooperative timer thread

pub mod types;
pub mod board;
pub mod evaluation;
pub mod search;
pub mod deadline;
pub mod protocol;
