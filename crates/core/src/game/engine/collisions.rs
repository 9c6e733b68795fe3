//! Hero-vs-enemy and hero-vs-treasure resolution plus the victory check.
//! Everything here compares committed grid cells, never pixel positions.

use super::*;

impl<A: AudioSink> Game<A> {
    /// Ends the session on the first enemy (in spawn order) sharing the hero's cell.
    pub(super) fn resolve_enemy_contact(&mut self) -> bool {
        let hero_cell = self.session.hero.motion.cell();
        if self.session.hero.health == 0 {
            return false;
        }
        let Some(enemy) = self
            .session
            .enemies
            .values()
            .find(|enemy| enemy.motion.cell() == hero_cell)
            .map(|enemy| enemy.id)
        else {
            return false;
        };

        self.session.hero.health = 0;
        self.session.state = SessionState::GameOver;
        self.session.game_over_timer = self.config.game_over_delay;
        self.log.push(LogEvent::HeroCaught { enemy, cell: hero_cell });
        self.cue(AudioCue::StepLoopStop);
        self.cue(AudioCue::Hit);
        self.cue(AudioCue::MusicStop);
        debug!(tick = self.tick, ?hero_cell, "hero caught");
        true
    }

    pub(super) fn collect_treasures(&mut self, dt: f32) {
        let hero_cell = self.session.hero.motion.cell();
        let mut collected = Vec::new();
        for treasure in &mut self.session.treasures {
            if treasure.is_collected() {
                continue;
            }
            treasure.animation.update(dt);
            if treasure.cell == hero_cell && treasure.collect() {
                collected.push(treasure.cell);
            }
        }

        for cell in collected {
            let hero = &mut self.session.hero;
            hero.score = hero.score.saturating_add(self.config.treasure_score);
            let score = hero.score;
            self.log.push(LogEvent::TreasureCollected { cell, score });
            self.cue(AudioCue::Collect);
        }
    }

    /// An empty treasure list counts as fully collected.
    pub(super) fn check_victory(&mut self) {
        if !self.session.all_treasures_collected() {
            return;
        }
        self.session.state = SessionState::Victory;
        let score = self.session.hero.score;
        self.log.push(LogEvent::Victory { score });
        self.cue(AudioCue::StepLoopStop);
        self.cue(AudioCue::MusicStop);
        debug!(tick = self.tick, score, "victory");
    }
}
