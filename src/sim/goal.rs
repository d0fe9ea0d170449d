//! Goal marker: concentric disks cycling through random colors
//!
//! A fixed ring of colors is shifted outward every `step` seconds, with the
//! newest color entering at index 0 (the smallest, topmost disk).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::consts::GOAL_STEP;

/// Number of nested disks
pub const GOAL_RING_LEN: usize = 10;

/// One filled disk of the goal marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRing {
    /// Anchor position (world space)
    pub pos: Vec2,
    /// Radius of the outermost disk
    pub radius: f32,
    /// Seconds between shifts
    pub step: f32,
    /// Accumulated time not yet consumed by shifts
    pub counter: f32,
    /// Ring colors, newest first
    pub cols: [Color; GOAL_RING_LEN],
}

impl GoalRing {
    /// New ring with all colors zeroed
    ///
    /// A non-positive or non-finite `step` falls back to the default period.
    pub fn new(pos: Vec2, radius: f32, step: f32) -> Self {
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            log::warn!("Goal step {} is not positive, using {}", step, GOAL_STEP);
            GOAL_STEP
        };
        Self {
            pos,
            radius,
            step,
            counter: 0.0,
            cols: [Color::BLACK; GOAL_RING_LEN],
        }
    }

    /// Advance the ring by `dt` seconds, returning the number of shifts
    ///
    /// Every shift in one call inserts the same `new_color`. Only whole steps
    /// strictly exceeded by the counter are consumed, so a counter landing
    /// exactly on a step boundary keeps one step pending.
    pub fn update(&mut self, dt: f32, new_color: Color) -> u32 {
        self.counter += dt;
        if !(self.step > 0.0) || !(self.counter > self.step) {
            return 0;
        }

        let steps = ((self.counter / self.step).ceil() - 1.0).max(1.0);
        self.counter = (self.counter - steps * self.step).clamp(0.0, self.step);

        // Past a full ring every slot holds the new color
        let shifts = steps as u32;
        let visible = (shifts as usize).min(GOAL_RING_LEN);
        self.cols.copy_within(0..GOAL_RING_LEN - visible, visible);
        self.cols[..visible].fill(new_color);

        shifts
    }

    /// Disks in draw order: largest (index 9) first, newest color last
    pub fn disks(&self) -> [Disk; GOAL_RING_LEN] {
        std::array::from_fn(|n| {
            let i = GOAL_RING_LEN - 1 - n;
            Disk {
                center: self.pos,
                radius: (i + 1) as f32 * self.radius / GOAL_RING_LEN as f32,
                color: self.cols[i],
            }
        })
    }
}
