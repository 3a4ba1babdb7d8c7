//! FlintOthello - Deadline-bounded search
//!
//! Runs one alpha-beta search per move request with a wall-clock budget.
//! A timer thread polls on a short interval and fires the cancellation
//! token exactly once when the budget elapses; the search unwinds
//! cooperatively and returns the best result found so far. The timer is
//! joined before the result is handed back, so no background work outlives
//! a move decision.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::board::Board;
use crate::evaluation::EvalWeights;
use crate::search::{search, CancelToken, SearchResult};
use crate::types::Side;

/// Default ply limit for a move decision.
pub const DEFAULT_DEPTH: u32 = 6;

/// How often the timer thread re-checks the clock.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// A configured searcher: fixed depth budget, per-move time budget, and
/// evaluation weights. One `best_move` call owns one search and one timer.
#[derive(Clone, Debug)]
pub struct TimedSearch {
    pub depth: u32,
    pub budget: Duration,
    pub poll: Duration,
    pub weights: EvalWeights,
}

impl TimedSearch {
    pub fn new(budget: Duration) -> TimedSearch {
        TimedSearch {
            depth: DEFAULT_DEPTH,
            budget,
            poll: POLL_INTERVAL,
            weights: EvalWeights::default(),
        }
    }

    /// Decide a move for `side` on `board` within the time budget.
    ///
    /// Deadline enforcement is cooperative and best-effort: the worst-case
    /// overrun is one poll interval plus the in-flight leaf work when the
    /// flag flips.
    pub fn best_move(&self, board: &Board, side: Side) -> SearchResult {
        let cancel = CancelToken::new();
        let done = Arc::new(AtomicBool::new(false));

        let timer = {
            let cancel = cancel.clone();
            let done = Arc::clone(&done);
            let budget = self.budget;
            let poll = self.poll;
            thread::spawn(move || {
                let start = Instant::now();
                while !done.load(Ordering::Relaxed) {
                    let elapsed = start.elapsed();
                    if elapsed >= budget {
                        cancel.cancel();
                        return;
                    }
                    thread::sleep(poll.min(budget - elapsed));
                }
            })
        };

        let result = search(board, self.depth, side, &cancel, &self.weights);

        done.store(true, Ordering::SeqCst);
        // The timer wakes within one poll interval of `done`; a failed join
        // only means it panicked, which it cannot.
        let _ = timer.join();

        result
    }
}
