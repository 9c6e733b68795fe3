//! Rebuilds a game from an input journal and reapplies every recorded input.

use crate::config::ConfigError;
use crate::game::Game;
use crate::journal::{InputJournal, JOURNAL_FORMAT_VERSION};
use crate::types::SessionState;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ReplayError {
    #[error("unsupported journal format version {0}")]
    UnsupportedVersion(u16),
    #[error("journal config is invalid: {0}")]
    InvalidConfig(#[from] ConfigError),
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_state: SessionState,
    pub final_score: u32,
    pub treasures_collected: usize,
    pub final_tick: u64,
    pub final_snapshot_hash: u64,
}

pub fn replay_journal(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion(journal.format_version));
    }
    let mut game = Game::new(journal.config.clone(), journal.seed)?;
    if !journal.sound_enabled {
        game.set_sound_enabled(false);
    }
    for record in &journal.inputs {
        game.apply_input(&record.payload);
    }

    Ok(ReplayResult {
        final_state: game.state(),
        final_score: game.session().hero.score,
        treasures_collected: game.treasures_collected(),
        final_tick: game.current_tick(),
        final_snapshot_hash: game.snapshot_hash(),
    })
}
