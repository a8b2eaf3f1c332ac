//! Random computer opponent.

use crate::games::grid::{MoveSet, Position};
use rand::Rng;
use tracing::{debug, instrument};

/// Picks a playable position uniformly at random.
///
/// Every member of the move set is legal, so no validation or retry is
/// needed. Returns `None` only when nothing is left to play.
#[instrument(skip_all, fields(remaining = moves.len()))]
pub fn pick_move<R: Rng + ?Sized>(moves: &MoveSet, rng: &mut R) -> Option<Position> {
    let pick = moves.choose(rng);
    debug!(?pick, "Computer chose position");
    pick
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::grid::Dimensions;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_pick_is_always_playable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut moves = MoveSet::full(Dimensions::square(3));
        while let Some(pos) = pick_move(&moves, &mut rng) {
            assert!(moves.remove(pos));
        }
        assert!(moves.is_empty());
    }

    #[test]
    fn test_same_seed_same_pick() {
        let moves = MoveSet::full(Dimensions::new(3, 4));
        let a = pick_move(&moves, &mut StdRng::seed_from_u64(5));
        let b = pick_move(&moves, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
