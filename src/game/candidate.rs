use crate::game::piece::PieceSnapshot;
use crate::game::square::Square;

/// One possible move: origin, destination, the piece that would make
/// it, and the score the search assigned to it. Candidates generated
/// at the search root carry the piece snapshot so the caller can
/// execute the move afterwards; the score is set once, for root-level
/// candidates only.
///
/// A candidate without a piece snapshot is the "no move" sentinel:
/// the searched side cannot move. What that means for the game
/// (forfeit, game over) is the caller's call.
#[derive(Debug, Clone)]
pub struct MoveCandidate {
    pub from: Square,
    pub to: Square,
    pub piece: Option<PieceSnapshot>,
    pub score: f64,
}

impl MoveCandidate {
    pub fn new(from: Square, to: Square, piece: Option<PieceSnapshot>) -> Self {
        Self {
            from,
            to,
            piece,
            score: 0.0,
        }
    }

    /// The "no move" sentinel.
    pub fn sentinel() -> Self {
        Self::new(Square::new(0, 0), Square::new(0, 0), None)
    }

    pub fn is_sentinel(&self) -> bool {
        self.piece.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::piece::{PieceSnapshot, Role, Side};

    #[test]
    fn sentinel_has_no_piece() {
        assert!(MoveCandidate::sentinel().is_sentinel());
    }

    #[test]
    fn candidate_with_piece_is_not_sentinel() {
        let piece =
            PieceSnapshot::with_standard_rules(Role::Pawn, Side::White, Square::new(1, 1));
        let candidate =
            MoveCandidate::new(Square::new(1, 1), Square::new(1, 2), Some(piece));
        assert!(!candidate.is_sentinel());
    }
}
