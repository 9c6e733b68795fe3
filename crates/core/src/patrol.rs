//! Timer-driven waypoint cycling for idle enemies.

use crate::motion::ActorMotion;
use crate::types::Cell;

#[derive(Clone, Debug, PartialEq)]
pub struct Patrol {
    route: Vec<Cell>,
    index: usize,
    idle_timer: f32,
    delay: f32,
}

impl Patrol {
    /// `None` for an empty route; every patrol has at least one waypoint.
    pub fn new(route: Vec<Cell>, delay: f32) -> Option<Self> {
        if route.is_empty() {
            return None;
        }
        Some(Self { route, index: 0, idle_timer: 0.0, delay })
    }

    pub fn route(&self) -> &[Cell] {
        &self.route
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn idle_timer(&self) -> f32 {
        self.idle_timer
    }

    /// Runs after the enemy's motion has advanced for this tick. Returns the cell
    /// the enemy started moving towards, if any.
    pub fn step(&mut self, motion: &mut ActorMotion, dt: f32) -> Option<Cell> {
        if motion.is_moving() {
            return None;
        }
        self.idle_timer += dt;
        if self.idle_timer < self.delay {
            return None;
        }
        self.idle_timer = 0.0;
        let target = self.route[self.index];
        self.index = (self.index + 1) % self.route.len();
        // A waypoint equal to the current cell is reached without moving.
        if target == motion.cell() {
            return None;
        }
        motion.move_to(target).then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::MotionStep;

    fn motion_at(cell: Cell) -> ActorMotion {
        ActorMotion::at_rest(cell, 32.0, 120.0, 2.0)
    }

    #[test]
    fn waits_for_delay_before_first_move() {
        let spawn = Cell::new(5, 5);
        let mut motion = motion_at(spawn);
        let mut patrol = Patrol::new(vec![spawn, Cell::new(7, 5)], 1.5).expect("non-empty");

        assert_eq!(patrol.step(&mut motion, 1.0), None);
        assert_eq!(patrol.idle_timer(), 1.0);
        // First waypoint is the spawn itself, so the cycle advances in place.
        assert_eq!(patrol.step(&mut motion, 0.5), None);
        assert_eq!(patrol.index(), 1);
        assert_eq!(patrol.idle_timer(), 0.0);

        patrol.step(&mut motion, 1.0);
        assert_eq!(patrol.step(&mut motion, 0.5), Some(Cell::new(7, 5)));
        assert_eq!(motion.cell(), Cell::new(7, 5));
        assert_eq!(patrol.index(), 0);
    }

    #[test]
    fn timer_is_frozen_while_moving() {
        let mut motion = motion_at(Cell::new(2, 2));
        let mut patrol = Patrol::new(vec![Cell::new(4, 2)], 1.5).expect("non-empty");
        assert_eq!(patrol.step(&mut motion, 2.0), Some(Cell::new(4, 2)));
        assert!(motion.is_moving());
        assert_eq!(patrol.step(&mut motion, 5.0), None);
        assert_eq!(patrol.idle_timer(), 0.0);
    }

    #[test]
    fn single_waypoint_route_never_leaves_spawn() {
        let spawn = Cell::new(3, 8);
        let mut motion = motion_at(spawn);
        let mut patrol = Patrol::new(vec![spawn], 1.5).expect("non-empty");
        for _ in 0..1_000 {
            assert_eq!(motion.advance(0.1), MotionStep::Resting);
            assert_eq!(patrol.step(&mut motion, 0.1), None);
            assert_eq!(motion.cell(), spawn);
        }
    }

    #[test]
    fn empty_route_is_rejected() {
        assert!(Patrol::new(Vec::new(), 1.5).is_none());
    }
}
