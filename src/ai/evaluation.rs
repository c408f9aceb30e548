// Position evaluation
// Scores are from the searching side's point of view, higher = better.

use crate::game::{Role, Side, SimState};

/// The evaluation seam the search recursion bottoms out on. Scores
/// must be finite for every position; the search reserves the
/// infinities for its alpha/beta window.
pub trait Evaluate {
    fn evaluate(&self, state: &SimState, side: Side) -> f64;
}

// Material values, centipawn scale
const PAWN_VALUE: f64 = 100.0;
const KNIGHT_VALUE: f64 = 300.0;
const BISHOP_VALUE: f64 = 320.0;
const ROOK_VALUE: f64 = 500.0;
const QUEEN_VALUE: f64 = 900.0;
const KING_VALUE: f64 = 20000.0;

const CENTRALIZATION_WEIGHT: f64 = 2.0;

fn role_value(role: Role) -> f64 {
    match role {
        Role::Pawn => PAWN_VALUE,
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
        Role::King => KING_VALUE,
    }
}

/// Material plus a light centralization term. The king's value is
/// large enough that losing it dominates any positional swing, which
/// is how won positions surface without any checkmate detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl MaterialEvaluator {
    pub fn new() -> Self {
        Self
    }

    fn piece_score(state: &SimState, piece_square: crate::game::Square, role: Role) -> f64 {
        let mut score = role_value(role);
        if role != Role::King {
            let cx = (state.width() as f64 - 1.0) / 2.0;
            let cy = (state.height() as f64 - 1.0) / 2.0;
            let dist = (piece_square.x as f64 - cx)
                .abs()
                .max((piece_square.y as f64 - cy).abs());
            score += (cx.max(cy) - dist) * CENTRALIZATION_WEIGHT;
        }
        score
    }
}

impl Evaluate for MaterialEvaluator {
    fn evaluate(&self, state: &SimState, side: Side) -> f64 {
        let own: f64 = state
            .pieces_of(side)
            .map(|p| Self::piece_score(state, p.square, p.role))
            .sum();
        let theirs: f64 = state
            .pieces_of(side.opposite())
            .map(|p| Self::piece_score(state, p.square, p.role))
            .sum();
        own - theirs
    }
}
