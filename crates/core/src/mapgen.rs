//! Procedural level generation split into coherent submodules.

pub mod model;

mod barriers;
mod generator;
mod seed;
mod spawns;

use crate::config::SimConfig;
use crate::types::Cell;

pub use barriers::SPAWN_CLEARANCE;
pub use generator::LevelGenerator;
pub use model::{EnemySpawn, GeneratedLevel};
pub use seed::derive_level_seed;

pub const HERO_SPAWN: Cell = Cell::new(1, 1);

pub fn generate_level(config: &SimConfig, level_seed: u64) -> GeneratedLevel {
    LevelGenerator::new(config, level_seed).generate()
}
