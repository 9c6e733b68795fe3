//! Smooth pixel interpolation of an actor between two grid cells.
//!
//! Collision and AI only ever look at `cell`, which is committed the moment a
//! move is accepted. The pixel position trails behind for rendering.

use crate::animation::{
    ACTOR_IDLE_FRAME_SECS, ACTOR_MOVING_FRAME_SECS, Animator, FRAMES_PER_CYCLE,
};
use crate::types::{Cell, PixelPos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionStep {
    Resting,
    InFlight,
    Arrived,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Moving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActorMotion {
    cell: Cell,
    pixel: PixelPos,
    target_pixel: PixelPos,
    moving: bool,
    speed: f32,
    cell_size: f32,
    arrival_threshold: f32,
    idle_animation: Animator,
    moving_animation: Animator,
}

impl ActorMotion {
    pub fn at_rest(cell: Cell, cell_size: f32, speed: f32, arrival_threshold: f32) -> Self {
        let pixel = cell.to_pixel(cell_size);
        Self {
            cell,
            pixel,
            target_pixel: pixel,
            moving: false,
            speed,
            cell_size,
            arrival_threshold,
            idle_animation: Animator::new(FRAMES_PER_CYCLE, ACTOR_IDLE_FRAME_SECS),
            moving_animation: Animator::new(FRAMES_PER_CYCLE, ACTOR_MOVING_FRAME_SECS),
        }
    }

    /// Commits `target` as the logical cell and starts interpolating towards it.
    /// Returns `false` without touching any state while a move is in flight.
    /// The caller is responsible for bounds and wall checks.
    pub fn move_to(&mut self, target: Cell) -> bool {
        if self.moving {
            return false;
        }
        self.cell = target;
        self.target_pixel = target.to_pixel(self.cell_size);
        self.moving = true;
        true
    }

    pub fn advance(&mut self, dt: f32) -> MotionStep {
        if !self.moving {
            self.idle_animation.update(dt);
            return MotionStep::Resting;
        }
        self.moving_animation.update(dt);

        let dx = self.target_pixel.x - self.pixel.x;
        let dy = self.target_pixel.y - self.pixel.y;
        let distance = dx.hypot(dy);
        let travel = self.speed * dt;
        // A step that reaches or passes the target lands exactly on it.
        if distance < self.arrival_threshold || travel >= distance {
            self.pixel = self.target_pixel;
            self.moving = false;
            return MotionStep::Arrived;
        }
        self.pixel.x += dx / distance * travel;
        self.pixel.y += dy / distance * travel;
        MotionStep::InFlight
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn pixel(&self) -> PixelPos {
        self.pixel
    }

    pub fn target_pixel(&self) -> PixelPos {
        self.target_pixel
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn animation(&self) -> (AnimationPhase, usize) {
        if self.moving {
            (AnimationPhase::Moving, self.moving_animation.current_frame())
        } else {
            (AnimationPhase::Idle, self.idle_animation.current_frame())
        }
    }
}
