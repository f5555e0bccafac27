#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for integer grid-race kinematics."]
#![doc = ""]
#![doc = "This crate provides the racer's pose and velocity types together with the"]
#![doc = "two-phase accelerate/decelerate velocity planner used to chase objective"]
#![doc = "points on a square track grid."]

use core::fmt;
use libm::sqrt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position `(x, y)` on the track grid, in whole cells.
///
/// Poses are plain signed coordinates: a racer that overshoots the track
/// edge holds a pose outside `[0, size)` until the server rules on the move.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pose {
    /// Grid x coordinate (cells).
    pub x: i32,
    /// Grid y coordinate (cells).
    pub y: i32,
}

impl Pose {
    /// Construct a new pose.
    ///
    /// # Arguments
    ///
    /// * `x`: Grid x coordinate in cells.
    /// * `y`: Grid y coordinate in cells.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Pose { x, y }
    }

    /// The pose reached by applying `velocity` for one tick.
    ///
    /// # Arguments
    ///
    /// * `velocity`: Per-tick displacement to apply.
    ///
    /// # Returns
    ///
    /// The translated pose.
    #[must_use]
    pub fn translate(self, velocity: Velocity) -> Self {
        Pose {
            x: self.x + velocity.vx,
            y: self.y + velocity.vy,
        }
    }

    /// Euclidean distance between two poses, in cells.
    ///
    /// # Arguments
    ///
    /// * `other`: The pose to measure against.
    ///
    /// # Returns
    ///
    /// The straight-line distance as `f64`.
    #[must_use]
    pub fn distance_to(self, other: Pose) -> f64 {
        let dx = (self.x as i64 - other.x as i64) as f64;
        let dy = (self.y as i64 - other.y as i64) as f64;
        sqrt(dx * dx + dy * dy)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

/// A per-tick velocity `(vx, vy)` in cells per tick.
///
/// Magnitude is unbounded: the planner only ever nudges each axis by ±1 per
/// tick, but nothing clamps the accumulated speed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Velocity {
    /// Velocity along the x axis (cells per tick).
    pub vx: i32,
    /// Velocity along the y axis (cells per tick).
    pub vy: i32,
}

impl Velocity {
    /// Construct a new velocity.
    ///
    /// # Arguments
    ///
    /// * `vx`: Velocity along the x axis (cells per tick).
    /// * `vy`: Velocity along the y axis (cells per tick).
    #[must_use]
    pub const fn new(vx: i32, vy: i32) -> Self {
        Velocity { vx, vy }
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(vx: {}, vy: {})", self.vx, self.vy)
    }
}

/// The racer's kinematic state: where it is and how fast it moves.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Racer {
    /// Current position on the grid.
    pub pose: Pose,
    /// Current per-tick velocity.
    pub velocity: Velocity,
}

impl Racer {
    /// Construct a racer standing still at `pose`.
    ///
    /// # Arguments
    ///
    /// * `pose`: Starting position.
    #[must_use]
    pub const fn new(pose: Pose) -> Self {
        Racer {
            pose,
            velocity: Velocity::new(0, 0),
        }
    }

    /// Integrate one tick of motion: `pose += velocity`.
    pub fn advance(&mut self) {
        self.pose = self.pose.translate(self.velocity);
    }
}

impl fmt::Display for Racer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pose: {}, velocity: {}", self.pose, self.velocity)
    }
}

/// Two-phase velocity planner.
///
/// Each tick the planner compares the racer's distance to the current target
/// against its distance to the previously reached one. While the racer is
/// still nearer the old point it keeps building speed toward the new target;
/// once the new target is the closer of the two it eases off, bleeding one
/// cell per tick off each axis. A bang-bang rule with relative distance as
/// the overshoot proxy; there is no mass or friction model.
pub struct VelocityController;

impl VelocityController {
    /// Plan the next velocity for one tick.
    ///
    /// # Arguments
    ///
    /// * `racer`: Current kinematic state.
    /// * `target`: The objective point being chased.
    /// * `previous`: The objective point reached before `target` (the
    ///   racer's starting pose until the first checkpoint).
    ///
    /// # Returns
    ///
    /// The updated velocity. Deterministic in its inputs.
    #[must_use]
    pub fn step(racer: &Racer, target: Pose, previous: Pose) -> Velocity {
        let to_target = racer.pose.distance_to(target);
        let to_previous = racer.pose.distance_to(previous);

        if to_previous < to_target {
            Self::accelerate(racer, target)
        } else {
            Self::decelerate(racer, target)
        }
    }

    /// Speed up toward `target`: each axis gains one cell per tick in the
    /// direction of the target. An axis already aligned with the target is
    /// left untouched.
    ///
    /// # Arguments
    ///
    /// * `racer`: Current kinematic state.
    /// * `target`: The objective point being chased.
    ///
    /// # Returns
    ///
    /// The updated velocity.
    #[must_use]
    pub fn accelerate(racer: &Racer, target: Pose) -> Velocity {
        let v = racer.velocity;
        Velocity {
            vx: v.vx + (target.x - racer.pose.x).signum(),
            vy: v.vy + (target.y - racer.pose.y).signum(),
        }
    }

    /// Ease off: the mirror of [`VelocityController::accelerate`]. Each axis
    /// loses one cell per tick in the direction of the target; aligned axes
    /// are left untouched.
    ///
    /// # Arguments
    ///
    /// * `racer`: Current kinematic state.
    /// * `target`: The objective point being chased.
    ///
    /// # Returns
    ///
    /// The updated velocity.
    #[must_use]
    pub fn decelerate(racer: &Racer, target: Pose) -> Velocity {
        let v = racer.velocity;
        Velocity {
            vx: v.vx - (target.x - racer.pose.x).signum(),
            vy: v.vy - (target.y - racer.pose.y).signum(),
        }
    }
}
