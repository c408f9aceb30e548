use crate::game::piece::Side;
use crate::game::sim::SimState;
use crate::game::square::Square;

use super::Destinations;

/// Walk rays from `origin` in each direction, collecting empty squares
/// and the first enemy occupant. A ray ends at the board edge, at an
/// obstacle, at a same-side piece, or after `range` steps.
pub(super) fn ray_destinations(
    state: &SimState,
    origin: Square,
    side: Side,
    dirs: &[(i16, i16)],
    range: Option<u8>,
) -> Destinations {
    let mut out = Destinations::new();
    let max_steps = range.unwrap_or(u8::MAX);

    for &(dx, dy) in dirs {
        let mut current = origin;
        let mut steps = 0u8;
        while steps < max_steps {
            current = match current.offset(dx, dy, state.width(), state.height()) {
                Some(sq) => sq,
                None => break,
            };
            if state.is_obstacle(current) {
                break;
            }
            match state.piece_at(current) {
                Some(occupant) if occupant.side == side => break,
                Some(_) => {
                    out.push(current);
                    break;
                }
                None => out.push(current),
            }
            steps += 1;
        }
    }

    out
}
