//! FlintOthello - Position evaluation
//!
//! Static evaluation of an Othello board from Light's perspective,
//! combining three normalized differentials:
//! - Disc count (material on the board)
//! - Mobility (number of legal moves available to each side)
//! - Corner control (corners can never be flanked back)
//!
//! Each signal is scaled to [-100, 100] as (light - dark) / (light + dark)
//! percent, so the weights decide the balance between them rather than the
//! raw magnitudes of the counts.

use crate::board::Board;
use crate::types::Side;

/// Weights for the three evaluation signals.
///
/// Corner control dominates by default: a corner disc is permanent and
/// anchors stable edges, so it is worth far more than its single-disc
/// material value.
#[derive(Clone, Copy, Debug)]
pub struct EvalWeights {
    pub discs: f64,
    pub mobility: f64,
    pub corners: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            discs: 25.0,
            mobility: 5.0,
            corners: 30.0,
        }
    }
}

/// (light - dark) / (light + dark) * 100, or 0 when both counts are zero.
fn differential(light: u32, dark: u32) -> f64 {
    let total = light + dark;
    if total == 0 {
        return 0.0;
    }
    (light as f64 - dark as f64) / total as f64 * 100.0
}

/// Score the board, Light-positive.
pub fn evaluate(board: &Board, weights: &EvalWeights) -> f64 {
    let discs = differential(board.count(Side::Light), board.count(Side::Dark));

    let mobility = differential(
        board.legal_moves(Side::Light).len() as u32,
        board.legal_moves(Side::Dark).len() as u32,
    );

    let corners = differential(
        board.corner_count(Side::Light),
        board.corner_count(Side::Dark),
    );

    weights.discs * discs + weights.mobility * mobility + weights.corners * corners
}
