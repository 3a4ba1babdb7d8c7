//! FlintOthello - Search engine
//!
//! Depth-limited minimax with alpha-beta pruning over immutable board
//! values. Light is the maximizing side, Dark the minimizing side, matching
//! the evaluator's sign convention. The recursion checks a cancellation
//! token at the top of every call, so a deadline can cut the search short
//! while frames above still finish their local comparisons with the
//! children they already evaluated.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::Board;
use crate::evaluation::{evaluate, EvalWeights};
use crate::types::{Position, Side};

/// Cooperative cancellation handle for one search invocation.
///
/// One writer (the deadline timer) sets the flag once; the search reads it
/// repeatedly. Owned per invocation so parallel or repeated searches never
/// share state.
#[derive(Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Outcome of a search: the node's value and, when any legal move exists,
/// the best move found. `best` is `None` at leaf and terminal nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    pub best: Option<Position>,
}

/// Search the full window for the best move for `side`.
///
/// A root with zero legal moves yields `best: None` with the static score,
/// which the protocol layer surfaces as a pass, not an error.
pub fn search(
    board: &Board,
    depth: u32,
    side: Side,
    cancel: &CancelToken,
    weights: &EvalWeights,
) -> SearchResult {
    alphabeta(
        board,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        side,
        cancel,
        weights,
    )
}

/// Recursive alpha-beta minimax.
///
/// Leaf conditions: depth exhausted, cancellation signalled, or no legal
/// move for the side to move (a no-move node terminates the line rather
/// than passing to the opponent).
pub fn alphabeta(
    board: &Board,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    side: Side,
    cancel: &CancelToken,
    weights: &EvalWeights,
) -> SearchResult {
    if depth == 0 || cancel.is_cancelled() {
        return SearchResult {
            score: evaluate(board, weights),
            best: None,
        };
    }

    let moves = board.legal_moves(side);
    if moves.is_empty() {
        return SearchResult {
            score: evaluate(board, weights),
            best: None,
        };
    }

    let mut best_move = None;

    if side == Side::Light {
        // Maximizing. Strict improvement only, so the first move in
        // generation order wins ties.
        let mut best = f64::NEG_INFINITY;
        for mv in moves {
            let child = board.apply_move(mv, side);
            let reply = alphabeta(&child, depth - 1, alpha, beta, side.opponent(), cancel, weights);
            if reply.score > best {
                best = reply.score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        SearchResult {
            score: best,
            best: best_move,
        }
    } else {
        // Minimizing, symmetric.
        let mut best = f64::INFINITY;
        for mv in moves {
            let child = board.apply_move(mv, side);
            let reply = alphabeta(&child, depth - 1, alpha, beta, side.opponent(), cancel, weights);
            if reply.score < best {
                best = reply.score;
                best_move = Some(mv);
            }
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        SearchResult {
            score: best,
            best: best_move,
        }
    }
}
