pub mod animation;
pub mod audio;
pub mod config;
pub mod game;
pub mod journal;
pub mod mapgen;
pub mod motion;
pub mod patrol;
pub mod replay;
pub mod state;
pub mod types;

pub use audio::{AudioCue, AudioSink, CueRecorder, SilentAudio};
pub use config::{ConfigError, GridConfig, SimConfig};
pub use game::{EnemyView, Game, HeroView, Snapshot, TreasureView};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use mapgen::{EnemySpawn, GeneratedLevel, HERO_SPAWN};
pub use replay::{ReplayError, ReplayResult, replay_journal};
pub use state::{Map, Session};
pub use types::*;
