use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::types::Direction;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Every host input a game received, in order, plus what is needed to rebuild it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub config: SimConfig,
    /// Sound setting the recorded game started with.
    #[serde(default = "sound_on")]
    pub sound_enabled: bool,
    pub inputs: Vec<InputRecord>,
}

fn sound_on() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputPayload {
    Start,
    Move(Direction),
    Acknowledge,
    Tick { dt: f32 },
    SoundEnabled(bool),
}

impl InputJournal {
    pub fn new(seed: u64, config: SimConfig) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            seed,
            config,
            sound_enabled: true,
            inputs: Vec::new(),
        }
    }

    pub fn append(&mut self, payload: InputPayload) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, payload });
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_assigns_sequential_numbers() {
        let mut journal = InputJournal::new(7, SimConfig::default());
        journal.append(InputPayload::Start);
        journal.append(InputPayload::Tick { dt: 0.016 });
        journal.append(InputPayload::Move(Direction::Left));
        let seqs: Vec<u64> = journal.inputs.iter().map(|record| record.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
    }

    #[test]
    fn json_round_trip_preserves_tick_deltas_exactly() {
        let mut journal = InputJournal::new(99, SimConfig::default());
        journal.append(InputPayload::Tick { dt: 1.0 / 60.0 });
        let decoded = InputJournal::from_json(&journal.to_json().expect("serialize"))
            .expect("deserialize");
        assert_eq!(decoded, journal);
    }

    #[test]
    fn journals_without_a_sound_setting_default_to_sound_on() {
        let raw = r#"{"format_version":1,"seed":5,"config":{},"inputs":[]}"#;
        let journal = InputJournal::from_json(raw).expect("older journals still parse");
        assert!(journal.sound_enabled);
        assert_eq!(journal.config, SimConfig::default());
    }
}
