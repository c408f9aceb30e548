use crate::game::piece::Side;
use crate::game::sim::SimState;
use crate::game::square::Square;

use super::Destinations;

/// One forward step onto an empty square, plus diagonal forward
/// captures. Forward is side-relative. No double step and no
/// promotion: role changes are the mutation system's business, not a
/// movement rule's.
pub(super) fn advance_destinations(state: &SimState, origin: Square, side: Side) -> Destinations {
    let mut out = Destinations::new();
    let dir = side.forward();

    if let Some(ahead) = origin.offset(0, dir, state.width(), state.height()) {
        if !state.is_obstacle(ahead) && state.piece_at(ahead).is_none() {
            out.push(ahead);
        }
    }
    for dx in [-1, 1] {
        let target = match origin.offset(dx, dir, state.width(), state.height()) {
            Some(sq) => sq,
            None => continue,
        };
        if state.is_obstacle(target) {
            continue;
        }
        if let Some(occupant) = state.piece_at(target) {
            if occupant.side != side {
                out.push(target);
            }
        }
    }

    out
}
