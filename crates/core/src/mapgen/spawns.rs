//! Enemy and treasure placement. Every search is bounded; running out of
//! attempts yields fewer entities instead of an error.

use rand_chacha::ChaCha8Rng;

use crate::config::SimConfig;
use crate::state::Map;
use crate::types::Cell;

use super::HERO_SPAWN;
use super::model::EnemySpawn;
use super::seed::random_cell;

/// Draws up to `attempts` cells from the given ranges and returns the first one
/// `accept` keeps.
pub(super) fn sample_cell(
    rng: &mut ChaCha8Rng,
    attempts: u32,
    cols: (i32, i32),
    rows: (i32, i32),
    mut accept: impl FnMut(Cell) -> bool,
) -> Option<Cell> {
    (0..attempts).map(|_| random_cell(rng, cols, rows)).find(|&cell| accept(cell))
}

pub(super) fn place_enemies(
    rng: &mut ChaCha8Rng,
    map: &Map,
    config: &SimConfig,
) -> Vec<EnemySpawn> {
    let (width, height) = (map.width, map.height);
    let mut spawns = Vec::with_capacity(config.enemy_count);

    for _ in 0..config.enemy_count {
        let Some(spawn) = sample_cell(
            rng,
            config.enemy_spawn_attempts,
            (5, width - 2),
            (3, height - 2),
            |cell| !map.is_wall(cell) && cell != HERO_SPAWN,
        ) else {
            continue;
        };

        let mut patrol_route = vec![spawn];
        for _ in 0..config.patrol_waypoints {
            if let Some(waypoint) = sample_cell(
                rng,
                config.waypoint_attempts,
                (3, width - 2),
                (3, height - 2),
                |cell| !map.is_wall(cell),
            ) {
                patrol_route.push(waypoint);
            }
        }
        spawns.push(EnemySpawn { patrol_route });
    }
    spawns
}

pub(super) fn place_treasures(rng: &mut ChaCha8Rng, map: &Map, config: &SimConfig) -> Vec<Cell> {
    let mut cells: Vec<Cell> = Vec::with_capacity(config.treasure_count);
    let mut attempts = 0;
    while cells.len() < config.treasure_count && attempts < config.treasure_attempts {
        let cell = random_cell(rng, (2, map.width - 3), (2, map.height - 3));
        if !map.is_wall(cell) && cell != HERO_SPAWN && !cells.contains(&cell) {
            cells.push(cell);
        }
        attempts += 1;
    }
    cells
}
