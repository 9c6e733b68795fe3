//! Border walls and randomized internal barriers.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;

use crate::types::Cell;

use super::HERO_SPAWN;
use super::seed::random_in;

const VERTICAL_BARRIERS: usize = 3;
const HORIZONTAL_BARRIERS: usize = 3;
const L_BARRIERS: usize = 2;
const L_ARM_LENGTH: i32 = 3;

/// Cells that are never walled so the hero always spawns with a free neighbour.
pub const SPAWN_CLEARANCE: [Cell; 3] = [
    HERO_SPAWN,
    Cell::new(HERO_SPAWN.col, HERO_SPAWN.row + 1),
    Cell::new(HERO_SPAWN.col + 1, HERO_SPAWN.row),
];

pub(super) fn internal_barriers(rng: &mut ChaCha8Rng, width: i32, height: i32) -> BTreeSet<Cell> {
    let mut walls = BTreeSet::new();

    for _ in 0..VERTICAL_BARRIERS {
        let col = random_in(rng, 3, width - 4);
        let start_row = random_in(rng, 2, height - 6);
        let length = random_in(rng, 3, 5);
        walls.extend(
            (start_row..start_row + length)
                .take_while(|&row| row < height - 1)
                .map(|row| Cell::new(col, row)),
        );
    }

    for _ in 0..HORIZONTAL_BARRIERS {
        let start_col = random_in(rng, 2, width - 6);
        let row = random_in(rng, 3, height - 4);
        let length = random_in(rng, 3, 5);
        walls.extend(
            (start_col..start_col + length)
                .take_while(|&col| col < width - 1)
                .map(|col| Cell::new(col, row)),
        );
    }

    for _ in 0..L_BARRIERS {
        let corner_col = random_in(rng, 4, width - 5);
        let corner_row = random_in(rng, 4, height - 5);
        for offset in 0..L_ARM_LENGTH {
            walls.insert(Cell::new(corner_col + offset, corner_row));
            walls.insert(Cell::new(corner_col, corner_row + offset));
        }
    }

    for cell in SPAWN_CLEARANCE {
        walls.remove(&cell);
    }
    walls
}
