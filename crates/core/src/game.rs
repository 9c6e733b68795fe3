use std::mem;

use tracing::debug;

use crate::audio::{AudioCue, AudioSink, SilentAudio};
use crate::config::{ConfigError, SimConfig};
use crate::journal::{InputJournal, InputPayload};
use crate::mapgen::{GeneratedLevel, derive_level_seed, generate_level};
use crate::state::Session;
use crate::types::*;

mod engine;
mod hash;
mod snapshot;

#[cfg(test)]
mod test_support;

pub use snapshot::{EnemyView, HeroView, Snapshot, TreasureView};

/// Owns the current session and routes host commands into it. One instance per
/// process; every start replaces the session wholesale.
pub struct Game<A: AudioSink = SilentAudio> {
    config: SimConfig,
    run_seed: u64,
    sessions_started: u64,
    tick: u64,
    session: Session,
    log: Vec<LogEvent>,
    audio: A,
    sound_enabled: bool,
    journal: Option<InputJournal>,
}

impl Game<SilentAudio> {
    pub fn new(config: SimConfig, run_seed: u64) -> Result<Self, ConfigError> {
        Self::with_audio(config, run_seed, SilentAudio)
    }
}

impl<A: AudioSink> Game<A> {
    pub fn with_audio(config: SimConfig, run_seed: u64, audio: A) -> Result<Self, ConfigError> {
        config.validate()?;
        let level = generate_level(&config, derive_level_seed(run_seed, 0));
        let session = Session::from_level(&level, &config);
        Ok(Self {
            config,
            run_seed,
            sessions_started: 0,
            tick: 0,
            session,
            log: Vec::new(),
            audio,
            sound_enabled: true,
            journal: None,
        })
    }

    /// Starts capturing every host input. Only a fresh game can be recorded, since
    /// replay rebuilds from the seed and config alone.
    pub fn start_recording(&mut self) -> CommandOutcome {
        if self.tick != 0 || self.sessions_started != 0 || self.session.state != SessionState::Menu
        {
            return CommandOutcome::Ignored;
        }
        let mut journal = InputJournal::new(self.run_seed, self.config.clone());
        journal.sound_enabled = self.sound_enabled;
        self.journal = Some(journal);
        CommandOutcome::Applied
    }

    pub fn journal(&self) -> Option<&InputJournal> {
        self.journal.as_ref()
    }

    pub fn take_journal(&mut self) -> Option<InputJournal> {
        self.journal.take()
    }

    /// Menu -> Playing with a freshly generated level. Ignored in any other state.
    pub fn request_start(&mut self) -> CommandOutcome {
        self.record(InputPayload::Start);
        if self.session.state != SessionState::Menu {
            return CommandOutcome::Ignored;
        }

        self.sessions_started += 1;
        let level_seed = derive_level_seed(self.run_seed, self.sessions_started);
        let level = generate_level(&self.config, level_seed);
        self.begin_session(&level);
        CommandOutcome::Applied
    }

    /// Installs a hand-built level as a Playing session. Hand-built levels are not
    /// reproducible from a journal, so recording stops here.
    pub fn install_level(&mut self, level: &GeneratedLevel) {
        self.journal = None;
        self.begin_session(level);
    }

    pub fn request_move(&mut self, direction: Direction) -> MoveOutcome {
        self.record(InputPayload::Move(direction));
        if self.session.state != SessionState::Playing {
            return MoveOutcome::NotPlaying;
        }
        let hero = &mut self.session.hero;
        if hero.motion.is_moving() {
            return MoveOutcome::Busy;
        }
        let target = hero.motion.cell().step(direction);
        if !self.session.map.is_open(target) {
            return MoveOutcome::Blocked;
        }
        if !hero.motion.move_to(target) {
            return MoveOutcome::Busy;
        }
        self.log.push(LogEvent::HeroMoved { to: target });
        self.cue(AudioCue::StepLoopStart);
        MoveOutcome::Accepted(target)
    }

    /// GameOver | Victory -> Menu. Ignored in any other state.
    pub fn request_acknowledge(&mut self) -> CommandOutcome {
        self.record(InputPayload::Acknowledge);
        if !self.session.state.is_finished() {
            return CommandOutcome::Ignored;
        }
        self.session.state = SessionState::Menu;
        self.log.push(LogEvent::ReturnedToMenu);
        self.cue(AudioCue::MusicStop);
        debug!(tick = self.tick, "returned to menu");
        CommandOutcome::Applied
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.record(InputPayload::SoundEnabled(enabled));
        if enabled == self.sound_enabled {
            return;
        }
        if enabled {
            self.sound_enabled = true;
            if self.session.state == SessionState::Playing {
                self.cue(AudioCue::MusicStart);
            }
        } else {
            self.cue(AudioCue::StepLoopStop);
            self.cue(AudioCue::MusicStop);
            self.sound_enabled = false;
        }
    }

    /// Dispatches a journaled input to the matching command.
    pub fn apply_input(&mut self, payload: &InputPayload) {
        match *payload {
            InputPayload::Start => {
                self.request_start();
            }
            InputPayload::Move(direction) => {
                self.request_move(direction);
            }
            InputPayload::Acknowledge => {
                self.request_acknowledge();
            }
            InputPayload::Tick { dt } => self.tick(dt),
            InputPayload::SoundEnabled(enabled) => self.set_sound_enabled(enabled),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn state(&self) -> SessionState {
        self.session.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// Hands every logged event to the caller and empties the log.
    pub fn drain_log(&mut self) -> Vec<LogEvent> {
        mem::take(&mut self.log)
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn treasures_collected(&self) -> usize {
        self.session.treasures_collected()
    }

    pub fn treasures_total(&self) -> usize {
        self.session.treasures.len()
    }

    fn begin_session(&mut self, level: &GeneratedLevel) {
        let mut session = Session::from_level(level, &self.config);
        session.state = SessionState::Playing;
        self.session = session;

        let enemies = self.session.enemies.len();
        let treasures = self.session.treasures.len();
        self.log.push(LogEvent::SessionStarted { level_seed: level.level_seed, enemies, treasures });
        if level.is_degraded(&self.config) {
            self.log.push(LogEvent::GenerationDegraded { enemies, treasures });
        }
        self.cue(AudioCue::MusicStart);
        debug!(level_seed = level.level_seed, enemies, treasures, "session started");
    }

    fn record(&mut self, payload: InputPayload) {
        if let Some(journal) = self.journal.as_mut() {
            journal.append(payload);
        }
    }

    fn cue(&mut self, cue: AudioCue) {
        if self.sound_enabled {
            self.audio.cue(cue);
        }
    }
}
