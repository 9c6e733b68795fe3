//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from simulation control code.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::motion::ActorMotion;

impl<A: AudioSink> Game<A> {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.run_seed);
        hasher.write_u64(self.tick);
        hasher.write_u64(self.sessions_started);
        hasher.write_u8(match self.session.state {
            SessionState::Menu => 0,
            SessionState::Playing => 1,
            SessionState::GameOver => 2,
            SessionState::Victory => 3,
        });
        hasher.write_u32(self.session.game_over_timer.to_bits());

        for wall in &self.session.map.walls {
            write_cell(&mut hasher, *wall);
        }

        let hero = &self.session.hero;
        write_motion(&mut hasher, &hero.motion);
        hasher.write_u32(hero.health);
        hasher.write_u32(hero.score);

        for enemy in self.session.enemies.values() {
            write_motion(&mut hasher, &enemy.motion);
            hasher.write_usize(enemy.patrol.index());
            hasher.write_u32(enemy.patrol.idle_timer().to_bits());
        }
        for treasure in &self.session.treasures {
            write_cell(&mut hasher, treasure.cell);
            hasher.write_u8(u8::from(treasure.is_collected()));
        }
        hasher.finish()
    }
}

fn write_cell(hasher: &mut Xxh3, cell: Cell) {
    hasher.write_i32(cell.col);
    hasher.write_i32(cell.row);
}

fn write_motion(hasher: &mut Xxh3, motion: &ActorMotion) {
    write_cell(hasher, motion.cell());
    hasher.write_u32(motion.pixel().x.to_bits());
    hasher.write_u32(motion.pixel().y.to_bits());
    hasher.write_u8(u8::from(motion.is_moving()));
}
