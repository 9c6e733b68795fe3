use std::collections::BTreeSet;

use slotmap::SlotMap;

use crate::animation::{Animator, FRAMES_PER_CYCLE, TREASURE_FRAME_SECS};
use crate::config::SimConfig;
use crate::mapgen::GeneratedLevel;
use crate::motion::ActorMotion;
use crate::patrol::Patrol;
use crate::types::*;

/// Grid bounds plus the impassable cells. Immutable for the lifetime of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    pub width: i32,
    pub height: i32,
    pub walls: BTreeSet<Cell>,
}

impl Map {
    /// An open grid with only the perimeter walled off.
    pub fn bordered(width: i32, height: i32) -> Self {
        let mut walls = BTreeSet::new();
        for col in 0..width {
            walls.insert(Cell::new(col, 0));
            walls.insert(Cell::new(col, height - 1));
        }
        for row in 0..height {
            walls.insert(Cell::new(0, row));
            walls.insert(Cell::new(width - 1, row));
        }
        Self { width, height, walls }
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.row >= 0 && cell.col < self.width && cell.row < self.height
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// In bounds and not a wall.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_wall(cell)
    }
}

#[derive(Clone, Debug)]
pub struct Hero {
    pub motion: ActorMotion,
    pub health: u32,
    pub score: u32,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub id: EnemyId,
    pub motion: ActorMotion,
    pub patrol: Patrol,
}

#[derive(Clone, Debug)]
pub struct Treasure {
    pub cell: Cell,
    collected: bool,
    pub animation: Animator,
}

impl Treasure {
    pub fn new(cell: Cell) -> Self {
        Self {
            cell,
            collected: false,
            animation: Animator::new(FRAMES_PER_CYCLE, TREASURE_FRAME_SECS),
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Flips `collected` once. Returns whether this call did the flip.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }
}

/// One play-through: every entity lives here and is dropped on restart.
pub struct Session {
    pub map: Map,
    pub hero: Hero,
    pub enemies: SlotMap<EnemyId, Enemy>,
    pub treasures: Vec<Treasure>,
    pub state: SessionState,
    pub game_over_timer: f32,
}

impl Session {
    pub fn from_level(level: &GeneratedLevel, config: &SimConfig) -> Self {
        let mut session = Self::empty(level.map.clone(), level.hero_spawn, config);
        for spawn in &level.enemy_spawns {
            session.add_enemy(spawn.patrol_route.clone(), config);
        }
        session.treasures = level.treasure_cells.iter().copied().map(Treasure::new).collect();
        session
    }

    pub fn empty(map: Map, hero_spawn: Cell, config: &SimConfig) -> Self {
        Self {
            map,
            hero: Hero {
                motion: actor_motion(hero_spawn, config),
                health: config.hero_health,
                score: 0,
            },
            enemies: SlotMap::with_key(),
            treasures: Vec::new(),
            state: SessionState::Menu,
            game_over_timer: 0.0,
        }
    }

    /// Places an enemy at the first cell of `route`. An empty route places nothing.
    pub fn add_enemy(&mut self, route: Vec<Cell>, config: &SimConfig) -> Option<EnemyId> {
        let spawn = *route.first()?;
        let patrol = Patrol::new(route, config.patrol_delay)?;
        let motion = actor_motion(spawn, config);
        Some(self.enemies.insert_with_key(|id| Enemy { id, motion, patrol }))
    }

    pub fn treasures_collected(&self) -> usize {
        self.treasures.iter().filter(|treasure| treasure.is_collected()).count()
    }

    pub fn all_treasures_collected(&self) -> bool {
        self.treasures.iter().all(Treasure::is_collected)
    }
}

fn actor_motion(cell: Cell, config: &SimConfig) -> ActorMotion {
    ActorMotion::at_rest(cell, config.grid.cell_size, config.move_speed, config.arrival_threshold)
}
