//! Public data models for generated levels.

use crate::config::SimConfig;
use crate::state::Map;
use crate::types::Cell;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemySpawn {
    /// Spawn cell first, then any waypoints that were found.
    pub patrol_route: Vec<Cell>,
}

impl EnemySpawn {
    /// `None` for an empty hand-built route.
    pub fn spawn(&self) -> Option<Cell> {
        self.patrol_route.first().copied()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLevel {
    pub level_seed: u64,
    pub map: Map,
    pub hero_spawn: Cell,
    pub enemy_spawns: Vec<EnemySpawn>,
    pub treasure_cells: Vec<Cell>,
}

impl GeneratedLevel {
    /// Fewer enemies or treasures than configured because placement ran out of attempts.
    pub fn is_degraded(&self, config: &SimConfig) -> bool {
        self.enemy_spawns.len() < config.enemy_count
            || self.treasure_cells.len() < config.treasure_count
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.level_seed.to_le_bytes());
        bytes.extend(self.map.width.to_le_bytes());
        bytes.extend(self.map.height.to_le_bytes());

        bytes.extend((self.map.walls.len() as u32).to_le_bytes());
        for wall in &self.map.walls {
            push_cell(&mut bytes, *wall);
        }
        push_cell(&mut bytes, self.hero_spawn);

        bytes.extend((self.enemy_spawns.len() as u32).to_le_bytes());
        for spawn in &self.enemy_spawns {
            bytes.extend((spawn.patrol_route.len() as u32).to_le_bytes());
            for waypoint in &spawn.patrol_route {
                push_cell(&mut bytes, *waypoint);
            }
        }

        bytes.extend((self.treasure_cells.len() as u32).to_le_bytes());
        for cell in &self.treasure_cells {
            push_cell(&mut bytes, *cell);
        }
        bytes
    }
}

fn push_cell(bytes: &mut Vec<u8>, cell: Cell) {
    bytes.extend(cell.col.to_le_bytes());
    bytes.extend(cell.row.to_le_bytes());
}
