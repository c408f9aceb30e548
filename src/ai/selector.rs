// Move selection with controlled randomness
//
// Raw search scores make for a deterministic, exploitable opponent.
// The selector injects two kinds of noise: an occasional deliberate
// blunder (pick any candidate, scores ignored) and a uniform pick
// among near-equal top candidates.

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::MoveCandidate;

/// Candidates within this much of the best score count as equal to it.
pub const SCORE_TOLERANCE: f64 = 0.1;

/// Turns a scored root candidate set into one chosen move. Owns its
/// RNG so two selectors seeded alike choose alike.
#[derive(Debug)]
pub struct MoveSelector {
    randomness: f64,
    rng: StdRng,
}

impl MoveSelector {
    /// `randomness` is the blunder probability, clamped into [0, 1].
    pub fn new(randomness: f64, rng: StdRng) -> Self {
        Self {
            randomness: randomness.clamp(0.0, 1.0),
            rng,
        }
    }

    pub fn from_seed(randomness: f64, seed: u64) -> Self {
        Self::new(randomness, StdRng::seed_from_u64(seed))
    }

    pub fn randomness(&self) -> f64 {
        self.randomness
    }

    /// Pick one move from scored candidates. Empty input yields the
    /// sentinel. With probability `randomness` the pick is uniform
    /// over all candidates regardless of score; otherwise it is
    /// uniform over the candidates within `SCORE_TOLERANCE` of the
    /// best score.
    pub fn select_best_move(&mut self, moves: &[MoveCandidate]) -> MoveCandidate {
        if moves.is_empty() {
            return MoveCandidate::sentinel();
        }

        if self.randomness > 0.0 && self.rng.gen_bool(self.randomness) {
            let pick = self.rng.gen_range(0..moves.len());
            trace!("blunder roll, taking candidate {pick} of {}", moves.len());
            return moves[pick].clone();
        }

        let best = moves
            .iter()
            .map(|m| m.score)
            .fold(f64::NEG_INFINITY, f64::max);
        let near: Vec<&MoveCandidate> = moves
            .iter()
            .filter(|m| (best - m.score).abs() <= SCORE_TOLERANCE)
            .collect();

        match near.len() {
            1 => near[0].clone(),
            n if n > 1 => {
                let pick = self.rng.gen_range(0..n);
                trace!("{n} candidates within tolerance, taking {pick}");
                near[pick].clone()
            }
            _ => {
                // degenerate scores (NaN) defeat the tolerance band;
                // fall back to a descending sort
                let mut sorted = moves.to_vec();
                sorted.sort_by(|a, b| {
                    b.score
                        .partial_cmp(&a.score)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                sorted[0].clone()
            }
        }
    }
}
