use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EnemyId;
}

/// Discrete grid coordinate. `col` grows rightward, `row` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        Self { col: self.col + dc, row: self.row + dr }
    }

    pub fn to_pixel(self, cell_size: f32) -> PixelPos {
        PixelPos { x: self.col as f32 * cell_size, y: self.row as f32 * cell_size }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: f32,
    pub y: f32,
}

impl PixelPos {
    pub fn distance_to(self, other: PixelPos) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Menu,
    Playing,
    GameOver,
    Victory,
}

impl SessionState {
    pub fn is_finished(self) -> bool {
        matches!(self, SessionState::GameOver | SessionState::Victory)
    }
}

/// Result of a hero move request. Everything except `Accepted` is ignored input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted(Cell),
    Busy,
    Blocked,
    NotPlaying,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    SessionStarted { level_seed: u64, enemies: usize, treasures: usize },
    GenerationDegraded { enemies: usize, treasures: usize },
    HeroMoved { to: Cell },
    EnemyPatrolled { enemy: EnemyId, to: Cell },
    TreasureCollected { cell: Cell, score: u32 },
    HeroCaught { enemy: EnemyId, cell: Cell },
    Victory { score: u32 },
    ReturnedToMenu,
}
