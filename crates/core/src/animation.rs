//! Frame-cycling timers that renderers read to pick sprites.

pub const ACTOR_IDLE_FRAME_SECS: f32 = 0.8;
pub const ACTOR_MOVING_FRAME_SECS: f32 = 0.2;
pub const TREASURE_FRAME_SECS: f32 = 0.5;
pub const FRAMES_PER_CYCLE: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct Animator {
    frame_count: usize,
    frame_duration: f32,
    current_frame: usize,
    frame_timer: f32,
}

impl Animator {
    pub fn new(frame_count: usize, frame_duration: f32) -> Self {
        Self { frame_count: frame_count.max(1), frame_duration, current_frame: 0, frame_timer: 0.0 }
    }

    pub fn update(&mut self, dt: f32) {
        self.frame_timer += dt;
        if self.frame_timer >= self.frame_duration {
            self.frame_timer = 0.0;
            self.current_frame = (self.current_frame + 1) % self.frame_count;
        }
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Seconds spent on the current frame.
    pub fn frame_timer(&self) -> f32 {
        self.frame_timer
    }
}
