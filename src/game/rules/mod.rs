//! Movement rules.
//!
//! Every piece carries an ordered list of rules; its legal
//! destinations are the union of what each rule produces, enumerated
//! in attachment order. Rules are pure functions of (state, origin,
//! side) with no side effects, which is what makes them safe to
//! attach and detach at runtime and to share between snapshots.
//!
//! The set is a closed enum rather than a trait hierarchy: the game
//! mutates pieces by editing their rule lists, never by introducing
//! rule kinds the engine has not seen before.

mod jumps;
mod pawn;
mod sliding;

use std::sync::Arc;

use once_cell::sync::Lazy;
use smallvec::SmallVec;

use crate::game::piece::{Role, Side};
use crate::game::sim::SimState;
use crate::game::square::Square;

/// Destination list for one rule application. Most rules produce a
/// handful of squares; 16 covers a full-length queen ray on common
/// board sizes without spilling.
pub type Destinations = SmallVec<[Square; 16]>;

pub(crate) const ORTHOGONAL_DIRS: [(i16, i16); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL_DIRS: [(i16, i16); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const KNIGHT_OFFSETS: [(i16, i16); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
pub(crate) const KING_OFFSETS: [(i16, i16); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRule {
    /// Slide along ranks and files, optionally range-limited.
    Line { range: Option<u8> },
    /// Slide along diagonals, optionally range-limited.
    Diagonal { range: Option<u8> },
    /// The eight (1, 2) leaps, jumping over occupants.
    KnightJump,
    /// One step in any of the eight directions.
    KingStep,
    /// One forward step onto an empty square, diagonal forward
    /// captures. Forward is side-relative.
    PawnAdvance,
    /// Fixed-offset leap in all sign/axis symmetries of (dx, dy).
    /// This is the shape mutations attach: (1, 3) camels, (2, 2)
    /// alfils and the like.
    Leap { dx: u8, dy: u8 },
}

impl MoveRule {
    /// All destinations this rule grants a piece of `side` standing on
    /// `origin`. Same-side-occupied squares and obstacle squares are
    /// never returned; sliders stop at the first occupant or obstacle.
    pub fn destinations(&self, state: &SimState, origin: Square, side: Side) -> Destinations {
        match self {
            Self::Line { range } => {
                sliding::ray_destinations(state, origin, side, &ORTHOGONAL_DIRS, *range)
            }
            Self::Diagonal { range } => {
                sliding::ray_destinations(state, origin, side, &DIAGONAL_DIRS, *range)
            }
            Self::KnightJump => jumps::offset_destinations(state, origin, side, &KNIGHT_OFFSETS),
            Self::KingStep => jumps::offset_destinations(state, origin, side, &KING_OFFSETS),
            Self::PawnAdvance => pawn::advance_destinations(state, origin, side),
            Self::Leap { dx, dy } => jumps::leap_destinations(state, origin, side, *dx, *dy),
        }
    }

    /// Canonical shared instance of the unlimited orthogonal slide.
    pub fn line() -> Arc<MoveRule> {
        static RULE: Lazy<Arc<MoveRule>> = Lazy::new(|| Arc::new(MoveRule::Line { range: None }));
        Arc::clone(&RULE)
    }

    /// Canonical shared instance of the unlimited diagonal slide.
    pub fn diagonal() -> Arc<MoveRule> {
        static RULE: Lazy<Arc<MoveRule>> =
            Lazy::new(|| Arc::new(MoveRule::Diagonal { range: None }));
        Arc::clone(&RULE)
    }

    pub fn knight_jump() -> Arc<MoveRule> {
        static RULE: Lazy<Arc<MoveRule>> = Lazy::new(|| Arc::new(MoveRule::KnightJump));
        Arc::clone(&RULE)
    }

    pub fn king_step() -> Arc<MoveRule> {
        static RULE: Lazy<Arc<MoveRule>> = Lazy::new(|| Arc::new(MoveRule::KingStep));
        Arc::clone(&RULE)
    }

    pub fn pawn_advance() -> Arc<MoveRule> {
        static RULE: Lazy<Arc<MoveRule>> = Lazy::new(|| Arc::new(MoveRule::PawnAdvance));
        Arc::clone(&RULE)
    }

    /// The standard rule loadout for a role, before any mutations.
    pub fn standard_for(role: Role) -> Vec<Arc<MoveRule>> {
        match role {
            Role::King => vec![Self::king_step()],
            Role::Queen => vec![Self::line(), Self::diagonal()],
            Role::Rook => vec![Self::line()],
            Role::Bishop => vec![Self::diagonal()],
            Role::Knight => vec![Self::knight_jump()],
            Role::Pawn => vec![Self::pawn_advance()],
        }
    }
}
