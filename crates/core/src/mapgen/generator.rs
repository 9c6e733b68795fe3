//! Level generation orchestration: border, barriers, then spawns.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use tracing::debug;

use crate::config::SimConfig;
use crate::state::Map;

use super::HERO_SPAWN;
use super::barriers::internal_barriers;
use super::model::GeneratedLevel;
use super::spawns::{place_enemies, place_treasures};

pub struct LevelGenerator<'a> {
    config: &'a SimConfig,
    level_seed: u64,
}

impl<'a> LevelGenerator<'a> {
    pub fn new(config: &'a SimConfig, level_seed: u64) -> Self {
        Self { config, level_seed }
    }

    pub fn generate(&self) -> GeneratedLevel {
        let mut rng = ChaCha8Rng::seed_from_u64(self.level_seed);
        let (width, height) = (self.config.grid.width, self.config.grid.height);

        let mut map = Map::bordered(width, height);
        map.walls.extend(internal_barriers(&mut rng, width, height));

        let enemy_spawns = place_enemies(&mut rng, &map, self.config);
        let treasure_cells = place_treasures(&mut rng, &map, self.config);

        debug!(
            level_seed = self.level_seed,
            walls = map.walls.len(),
            enemies = enemy_spawns.len(),
            treasures = treasure_cells.len(),
            "generated level"
        );

        GeneratedLevel {
            level_seed: self.level_seed,
            map,
            hero_spawn: HERO_SPAWN,
            enemy_spawns,
            treasure_cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use proptest::prelude::*;
    use xxhash_rust::xxh3::xxh3_64;

    use super::*;
    use crate::mapgen::SPAWN_CLEARANCE;
    use crate::types::{Cell, Direction};

    fn reachable_from(map: &Map, start: Cell) -> BTreeSet<Cell> {
        let mut seen = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(cell) = queue.pop_front() {
            for direction in Direction::ALL {
                let next = cell.step(direction);
                if map.is_open(next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    #[test]
    fn same_seed_produces_byte_identical_levels() {
        let config = SimConfig::default();
        let a = LevelGenerator::new(&config, 123_456).generate();
        let b = LevelGenerator::new(&config, 123_456).generate();
        assert_eq!(xxh3_64(&a.canonical_bytes()), xxh3_64(&b.canonical_bytes()));
    }

    #[test]
    fn different_seeds_produce_different_levels() {
        let config = SimConfig::default();
        let a = LevelGenerator::new(&config, 1).generate();
        let b = LevelGenerator::new(&config, 2).generate();
        assert_ne!(a.canonical_bytes(), b.canonical_bytes());
    }

    #[test]
    fn hero_spawn_always_has_an_open_neighbour() {
        let config = SimConfig::default();
        for seed in 0..100 {
            let level = LevelGenerator::new(&config, seed).generate();
            let reachable = reachable_from(&level.map, level.hero_spawn);
            assert!(reachable.len() > 1, "seed {seed}: hero boxed in");
        }
    }

    #[test]
    fn zero_budgets_degrade_without_failing() {
        let config = SimConfig {
            enemy_spawn_attempts: 0,
            treasure_attempts: 0,
            ..SimConfig::default()
        };
        let level = LevelGenerator::new(&config, 77).generate();
        assert!(level.enemy_spawns.is_empty());
        assert!(level.treasure_cells.is_empty());
        assert!(level.is_degraded(&config));
    }

    proptest! {
        #[test]
        fn generated_levels_keep_border_and_spawn_clearance(
            seed in any::<u64>(),
            width in 10..40i32,
            height in 10..30i32,
        ) {
            let mut config = SimConfig::default();
            config.grid.width = width;
            config.grid.height = height;
            let level = LevelGenerator::new(&config, seed).generate();
            let map = &level.map;

            for col in 0..width {
                prop_assert!(map.is_wall(Cell::new(col, 0)));
                prop_assert!(map.is_wall(Cell::new(col, height - 1)));
            }
            for row in 0..height {
                prop_assert!(map.is_wall(Cell::new(0, row)));
                prop_assert!(map.is_wall(Cell::new(width - 1, row)));
            }
            for cell in SPAWN_CLEARANCE {
                prop_assert!(!map.is_wall(cell));
            }
            prop_assert!(map.walls.iter().all(|&cell| map.in_bounds(cell)));

            prop_assert!(level.enemy_spawns.len() <= config.enemy_count);
            for spawn in &level.enemy_spawns {
                let cell = spawn.spawn().expect("generated routes start at the spawn cell");
                prop_assert!(map.is_open(cell));
                prop_assert_ne!(cell, level.hero_spawn);
                prop_assert!(spawn.patrol_route.iter().all(|&cell| map.is_open(cell)));
            }

            prop_assert!(level.treasure_cells.len() <= config.treasure_count);
            let distinct: BTreeSet<Cell> = level.treasure_cells.iter().copied().collect();
            prop_assert_eq!(distinct.len(), level.treasure_cells.len());
            for &cell in &level.treasure_cells {
                prop_assert!(map.is_open(cell));
                prop_assert_ne!(cell, level.hero_spawn);
            }
        }
    }
}
