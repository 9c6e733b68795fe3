//! Grid dimensions and simulation tunables supplied by the host at construction.

use serde::{Deserialize, Serialize};

/// Smallest grid edge that still leaves room for the obstacle and spawn margins.
pub const MIN_GRID_EDGE: i32 = 10;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must be at least {min}x{min} cells, got {width}x{height}", min = MIN_GRID_EDGE)]
    GridTooSmall { width: i32, height: i32 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("failed to parse config: {0}")]
    Parse(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { width: 25, height: 18, cell_size: 32.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub grid: GridConfig,
    /// Pixels per second.
    pub move_speed: f32,
    /// Seconds an idle enemy waits before heading to its next waypoint.
    pub patrol_delay: f32,
    pub hero_health: u32,
    pub enemy_count: usize,
    pub enemy_spawn_attempts: u32,
    pub patrol_waypoints: usize,
    pub waypoint_attempts: u32,
    pub treasure_count: usize,
    pub treasure_attempts: u32,
    pub treasure_score: u32,
    pub game_over_delay: f32,
    /// Distance in pixels under which an in-flight move snaps to its target.
    pub arrival_threshold: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            move_speed: 120.0,
            patrol_delay: 1.5,
            hero_health: 3,
            enemy_count: 3,
            enemy_spawn_attempts: 20,
            patrol_waypoints: 3,
            waypoint_attempts: 10,
            treasure_count: 5,
            treasure_attempts: 50,
            treasure_score: 10,
            game_over_delay: 2.0,
            arrival_threshold: 2.0,
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width < MIN_GRID_EDGE || self.grid.height < MIN_GRID_EDGE {
            return Err(ConfigError::GridTooSmall {
                width: self.grid.width,
                height: self.grid.height,
            });
        }
        for (field, value) in [
            ("cell_size", self.grid.cell_size),
            ("move_speed", self.move_speed),
            ("patrol_delay", self.patrol_delay),
            ("arrival_threshold", self.arrival_threshold),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.hero_health == 0 {
            return Err(ConfigError::NotPositive { field: "hero_health", value: 0.0 });
        }
        Ok(())
    }
}
