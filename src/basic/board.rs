use itertools::Itertools;
use rand::Rng;
use std::collections::HashSet;

use crate::basic::{GridDim, GridPoint};

/// Pick a cell uniformly at random among those not in `occupied_cells`,
/// None if the board is full
pub fn random_free_spot(
    occupied_cells: &HashSet<GridPoint>,
    board_dim: GridDim,
    rng: &mut impl Rng,
) -> Option<GridPoint> {
    let free_spaces = board_dim.area().checked_sub(occupied_cells.len())?;
    if free_spaces == 0 {
        return None;
    }

    // the k-th free cell is found by skipping over every occupied
    // cell whose index is at most k (indices visited in increasing order)
    let mut new_idx = rng.gen_range(0..free_spaces);
    for idx in occupied_cells
        .iter()
        .map(|pos| board_dim.index_of(*pos))
        .sorted_unstable()
    {
        if idx <= new_idx {
            new_idx += 1;
        }
    }

    debug_assert!(new_idx < board_dim.area());
    Some(board_dim.point_at(new_idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_never_returns_occupied() {
        let board_dim = GridDim::new(5, 5);
        let mut rng = StdRng::seed_from_u64(7);
        let occupied: HashSet<_> = (0..5)
            .map(|col| GridPoint::new(2, col))
            .chain([GridPoint::new(0, 0), GridPoint::new(4, 4)])
            .collect();

        for _ in 0..500 {
            let spot = random_free_spot(&occupied, board_dim, &mut rng).expect("board not full");
            assert!(board_dim.contains(spot), "{:?} outside of board", spot);
            assert!(!occupied.contains(&spot), "{:?} is occupied", spot);
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let board_dim = GridDim::new(3, 3);
        let free = GridPoint::new(1, 2);
        let occupied: HashSet<_> = (0..9)
            .map(|idx| board_dim.point_at(idx))
            .filter(|pos| *pos != free)
            .collect();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            assert_eq!(random_free_spot(&occupied, board_dim, &mut rng), Some(free));
        }
    }

    #[test]
    fn test_full_board() {
        let board_dim = GridDim::new(2, 2);
        let occupied: HashSet<_> = (0..4).map(|idx| board_dim.point_at(idx)).collect();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(random_free_spot(&occupied, board_dim, &mut rng), None);
    }

    #[test]
    fn test_every_free_cell_reachable() {
        let board_dim = GridDim::new(3, 3);
        let occupied: HashSet<_> = [GridPoint::new(0, 0), GridPoint::new(1, 1)].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<_> = (0..2000)
            .filter_map(|_| random_free_spot(&occupied, board_dim, &mut rng))
            .collect();
        assert_eq!(seen.len(), 7);
    }
}
