// Recursive alpha-beta minimax
//
// Plain minimax with explicit maximizing/minimizing branches rather
// than a negamax fold: the evaluator is asymmetric (always scored for
// the searching side), so the two branches share a window but not a
// sign flip.

use crate::ai::evaluation::Evaluate;
use crate::ai::search::SearchEngine;
use crate::game::{Side, SimState};

impl<E: Evaluate> SearchEngine<E> {
    /// Value of `state` for the searching side `side`, looking
    /// `depth` plies ahead. `maximizing` says whose turn it is:
    /// true = the searching side.
    ///
    /// Exits with a static evaluation when the budget is spent, the
    /// depth is exhausted, the position is terminal (a king is gone),
    /// or the side to move has no candidates. That last case scores
    /// mate-like and stalemate-like positions identically; the engine
    /// deliberately does not tell them apart.
    pub(super) fn minimax(
        &mut self,
        state: &SimState,
        side: Side,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.nodes_evaluated += 1;

        if self.time_exceeded() || depth == 0 || state.is_terminal() {
            return self.evaluator.evaluate(state, side);
        }

        let mover = if maximizing { side } else { side.opposite() };
        let candidates = state.moves_for_side(mover);
        if candidates.is_empty() {
            return self.evaluator.evaluate(state, side);
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for candidate in &candidates {
                if self.time_exceeded() {
                    break;
                }
                let mut child = state.clone();
                child.apply(candidate.from, candidate.to);
                let value = self.minimax(&child, side, depth - 1, alpha, beta, false);
                if value > best {
                    best = value;
                }
                if value > alpha {
                    alpha = value;
                }
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for candidate in &candidates {
                if self.time_exceeded() {
                    break;
                }
                let mut child = state.clone();
                child.apply(candidate.from, candidate.to);
                let value = self.minimax(&child, side, depth - 1, alpha, beta, true);
                if value < best {
                    best = value;
                }
                if value < beta {
                    beta = value;
                }
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
