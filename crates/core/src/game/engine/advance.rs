//! Per-tick simulation step.

use super::*;
use crate::motion::MotionStep;

impl<A: AudioSink> Game<A> {
    /// Advances the simulation by `dt` seconds. Only Playing sessions move;
    /// GameOver just runs its informational countdown.
    pub fn tick(&mut self, dt: f32) {
        self.record(InputPayload::Tick { dt });
        self.tick += 1;
        match self.session.state {
            SessionState::Playing => self.advance_playing(dt),
            SessionState::GameOver => {
                self.session.game_over_timer = (self.session.game_over_timer - dt).max(0.0);
            }
            SessionState::Menu | SessionState::Victory => {}
        }
    }

    fn advance_playing(&mut self, dt: f32) {
        let mut cues = Vec::new();
        if self.session.hero.motion.advance(dt) == MotionStep::Arrived {
            cues.push(AudioCue::StepLoopStop);
        }

        let mut patrolled = Vec::new();
        for enemy in self.session.enemies.values_mut() {
            if enemy.motion.advance(dt) == MotionStep::Arrived {
                cues.push(AudioCue::StepLoopStop);
            }
            if let Some(target) = enemy.patrol.step(&mut enemy.motion, dt) {
                cues.push(AudioCue::StepLoopStart);
                patrolled.push(LogEvent::EnemyPatrolled { enemy: enemy.id, to: target });
            }
        }
        self.log.extend(patrolled);
        for cue in cues {
            self.cue(cue);
        }

        if self.resolve_enemy_contact() {
            return;
        }
        self.collect_treasures(dt);
        self.check_victory();
    }
}
