//! Shared fixtures for the `game` submodule test suites.
//! Levels here are hand-built so tests do not depend on generator output.

use super::*;
use crate::audio::CueRecorder;
use crate::mapgen::{EnemySpawn, HERO_SPAWN};
use crate::state::Map;

/// Frame time long enough to finish any single-cell move at the default speed.
pub(super) const FULL_STEP_DT: f32 = 1.0;

pub(super) fn open_level(enemy_routes: Vec<Vec<Cell>>, treasures: Vec<Cell>) -> GeneratedLevel {
    let config = SimConfig::default();
    GeneratedLevel {
        level_seed: 0,
        map: Map::bordered(config.grid.width, config.grid.height),
        hero_spawn: HERO_SPAWN,
        enemy_spawns: enemy_routes
            .into_iter()
            .map(|patrol_route| EnemySpawn { patrol_route })
            .collect(),
        treasure_cells: treasures,
    }
}

pub(super) fn playing_game(level: &GeneratedLevel) -> Game<CueRecorder> {
    let mut game = Game::with_audio(SimConfig::default(), 1, CueRecorder::default())
        .expect("default config is valid");
    game.install_level(level);
    game
}

/// Moves the hero one cell and ticks until the move has landed.
pub(super) fn step_hero(game: &mut Game<CueRecorder>, direction: Direction) -> MoveOutcome {
    let outcome = game.request_move(direction);
    game.tick(FULL_STEP_DT);
    outcome
}
