//! Read-only views of the session for rendering hosts.

use std::collections::BTreeSet;

use super::*;
use crate::motion::AnimationPhase;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroView {
    pub cell: Cell,
    pub pixel: PixelPos,
    pub health: u32,
    pub score: u32,
    pub moving: bool,
    pub animation: AnimationPhase,
    pub frame: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyView {
    pub id: EnemyId,
    pub cell: Cell,
    pub pixel: PixelPos,
    pub moving: bool,
    pub animation: AnimationPhase,
    pub frame: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreasureView {
    pub cell: Cell,
    pub collected: bool,
    pub frame: usize,
}

#[derive(Clone, Debug)]
pub struct Snapshot<'a> {
    pub state: SessionState,
    pub width: i32,
    pub height: i32,
    pub cell_size: f32,
    pub walls: &'a BTreeSet<Cell>,
    pub hero: HeroView,
    pub enemies: Vec<EnemyView>,
    pub treasures: Vec<TreasureView>,
    pub game_over_timer: f32,
}

impl<A: AudioSink> Game<A> {
    pub fn snapshot(&self) -> Snapshot<'_> {
        let session = &self.session;
        let hero = &session.hero;
        let (hero_animation, hero_frame) = hero.motion.animation();
        Snapshot {
            state: session.state,
            width: session.map.width,
            height: session.map.height,
            cell_size: self.config.grid.cell_size,
            walls: &session.map.walls,
            hero: HeroView {
                cell: hero.motion.cell(),
                pixel: hero.motion.pixel(),
                health: hero.health,
                score: hero.score,
                moving: hero.motion.is_moving(),
                animation: hero_animation,
                frame: hero_frame,
            },
            enemies: session
                .enemies
                .values()
                .map(|enemy| {
                    let (animation, frame) = enemy.motion.animation();
                    EnemyView {
                        id: enemy.id,
                        cell: enemy.motion.cell(),
                        pixel: enemy.motion.pixel(),
                        moving: enemy.motion.is_moving(),
                        animation,
                        frame,
                    }
                })
                .collect(),
            treasures: session
                .treasures
                .iter()
                .map(|treasure| TreasureView {
                    cell: treasure.cell,
                    collected: treasure.is_collected(),
                    frame: treasure.animation.current_frame(),
                })
                .collect(),
            game_over_timer: session.game_over_timer,
        }
    }
}
