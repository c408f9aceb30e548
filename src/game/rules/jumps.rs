use smallvec::SmallVec;

use crate::game::piece::Side;
use crate::game::sim::SimState;
use crate::game::square::Square;

use super::Destinations;

/// Single-step/leap destinations: each offset lands directly, jumping
/// over anything in between. Obstacle squares and same-side occupants
/// are excluded; enemy occupants are captures.
pub(super) fn offset_destinations(
    state: &SimState,
    origin: Square,
    side: Side,
    offsets: &[(i16, i16)],
) -> Destinations {
    let mut out = Destinations::new();
    for &(dx, dy) in offsets {
        let target = match origin.offset(dx, dy, state.width(), state.height()) {
            Some(sq) => sq,
            None => continue,
        };
        if state.is_obstacle(target) {
            continue;
        }
        match state.piece_at(target) {
            Some(occupant) if occupant.side == side => continue,
            _ => out.push(target),
        }
    }
    out
}

/// Destinations for a generic (dx, dy) leaper: every sign/axis
/// symmetry of the offset, deduplicated when the offset is symmetric
/// or has a zero component.
pub(super) fn leap_destinations(
    state: &SimState,
    origin: Square,
    side: Side,
    dx: u8,
    dy: u8,
) -> Destinations {
    let (dx, dy) = (dx as i16, dy as i16);
    let mut offsets: SmallVec<[(i16, i16); 8]> = SmallVec::new();
    for &(ox, oy) in &[
        (dx, dy),
        (dy, dx),
        (dy, -dx),
        (dx, -dy),
        (-dx, -dy),
        (-dy, -dx),
        (-dy, dx),
        (-dx, dy),
    ] {
        if !offsets.contains(&(ox, oy)) {
            offsets.push((ox, oy));
        }
    }
    offset_destinations(state, origin, side, &offsets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::piece::{PieceSnapshot, Role};
    use crate::game::rules::{KING_OFFSETS, KNIGHT_OFFSETS};

    #[test]
    fn knight_jumps_over_occupants() {
        let mut state = SimState::empty(8, 8);
        // box the knight in completely
        for &(dx, dy) in &KING_OFFSETS {
            let sq = Square::new(4, 4).offset(dx, dy, 8, 8).unwrap();
            state.place(PieceSnapshot::with_standard_rules(Role::Pawn, Side::White, sq));
        }
        let dests = offset_destinations(&state, Square::new(4, 4), Side::White, &KNIGHT_OFFSETS);
        assert_eq!(dests.len(), 8);
    }

    #[test]
    fn king_step_excludes_friendly_and_obstacles() {
        let mut state = SimState::empty(8, 8);
        state.place(PieceSnapshot::with_standard_rules(
            Role::Pawn,
            Side::White,
            Square::new(4, 5),
        ));
        state.set_obstacle(Square::new(5, 5));
        let dests = offset_destinations(&state, Square::new(4, 4), Side::White, &KING_OFFSETS);
        assert_eq!(dests.len(), 6);
        assert!(!dests.contains(&Square::new(4, 5)));
        assert!(!dests.contains(&Square::new(5, 5)));
    }

    #[test]
    fn corner_clips_offsets() {
        let state = SimState::empty(8, 8);
        let dests = offset_destinations(&state, Square::new(0, 0), Side::White, &KNIGHT_OFFSETS);
        assert_eq!(dests.len(), 2);
    }

    #[test]
    fn leaper_symmetries_dedup() {
        let state = SimState::empty(9, 9);
        // (2, 2) has four distinct symmetries, not eight
        let dests = leap_destinations(&state, Square::new(4, 4), Side::White, 2, 2);
        assert_eq!(dests.len(), 4);
        // (1, 3) has the full eight
        let dests = leap_destinations(&state, Square::new(4, 4), Side::White, 1, 3);
        assert_eq!(dests.len(), 8);
    }

    #[test]
    fn leaper_may_capture_enemy() {
        let mut state = SimState::empty(8, 8);
        state.place(PieceSnapshot::with_standard_rules(
            Role::Pawn,
            Side::Black,
            Square::new(6, 6),
        ));
        let dests = leap_destinations(&state, Square::new(4, 4), Side::White, 2, 2);
        assert!(dests.contains(&Square::new(6, 6)));
    }
}
