use std::sync::Arc;

use crate::game::rules::MoveRule;
use crate::game::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Direction of travel along y for side-relative rules.
    pub fn forward(&self) -> i16 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }
}

/// Piece archetype. Roles carry no movement semantics of their own;
/// movement comes entirely from the rules attached to a piece. The
/// engine only inspects `King` (terminal test); the evaluator uses
/// roles for material values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Role {
    pub fn as_char(&self, side: Side) -> char {
        let c = match self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        };
        match side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }
}

/// Engine-independent snapshot of one piece: role, owning side, the
/// square it stands on, and its attached movement rules in attachment
/// order. Rules are immutable and shared: cloning a snapshot
/// deep-copies the piece data but only bumps the rule refcounts.
#[derive(Debug, Clone)]
pub struct PieceSnapshot {
    pub role: Role,
    pub side: Side,
    pub square: Square,
    pub rules: Vec<Arc<MoveRule>>,
}

impl PieceSnapshot {
    pub fn new(role: Role, side: Side, square: Square, rules: Vec<Arc<MoveRule>>) -> Self {
        Self {
            role,
            side,
            square,
            rules,
        }
    }

    /// A piece carrying the standard rule loadout for its role.
    pub fn with_standard_rules(role: Role, side: Side, square: Square) -> Self {
        Self::new(role, side, square, MoveRule::standard_for(role))
    }
}
