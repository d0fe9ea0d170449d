//! Animation state machine driven by the physics snapshot
//!
//! Each frame the actor's ground flag and velocity select one of three
//! states, and the state selects a frame from the animation table:
//! - Idle: the single front-facing frame
//! - Running: cycles through the run frames over time
//! - Jumping: indexed by vertical velocity (rising poses first)

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::physics::ActorState;
use super::rect::Rect;
use crate::strict_sign;

/// Source rectangle of a frame on the sprite sheet
pub type FrameId = Rect;

/// Names used by the sprite-sheet loader
pub const FRONT_ANIM: &str = "Front";
pub const RUN_ANIM: &str = "Run";
pub const JUMP_ANIM: &str = "Jump";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    #[error("animation '{0}' not found on sprite sheet")]
    MissingAnimation(String),
    #[error("animation '{0}' has no frames")]
    EmptyAnimation(String),
}

/// Behavior state of the actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimState {
    #[default]
    Idle,
    Running,
    Jumping,
}

impl AnimState {
    /// Pick a state from the ground flag and speed (first match wins)
    pub fn classify(ground: bool, speed: f32) -> Self {
        if !ground {
            AnimState::Jumping
        } else if speed == 0.0 {
            AnimState::Idle
        } else {
            AnimState::Running
        }
    }
}

/// Next state for `actor`, and whether the state counter resets
pub fn transition(prev: AnimState, actor: &ActorState) -> (AnimState, bool) {
    let next = AnimState::classify(actor.ground, actor.speed());
    (next, next != prev)
}

/// Frames for each animation, all non-empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationTable {
    pub front: FrameId,
    pub run: Vec<FrameId>,
    pub jump: Vec<FrameId>,
}

impl AnimationTable {
    pub fn new(
        front: FrameId,
        run: Vec<FrameId>,
        jump: Vec<FrameId>,
    ) -> Result<Self, AnimationError> {
        if run.is_empty() {
            return Err(AnimationError::EmptyAnimation(RUN_ANIM.to_string()));
        }
        if jump.is_empty() {
            return Err(AnimationError::EmptyAnimation(JUMP_ANIM.to_string()));
        }
        Ok(Self { front, run, jump })
    }

    /// Build from named animations as produced by a sprite-sheet loader
    ///
    /// The idle pose is the first "Front" frame.
    pub fn from_named(mut anims: HashMap<String, Vec<FrameId>>) -> Result<Self, AnimationError> {
        let mut take = |name: &str| {
            anims
                .remove(name)
                .ok_or_else(|| AnimationError::MissingAnimation(name.to_string()))
        };
        let front = take(FRONT_ANIM)?
            .first()
            .copied()
            .ok_or_else(|| AnimationError::EmptyAnimation(FRONT_ANIM.to_string()))?;
        let run = take(RUN_ANIM)?;
        let jump = take(JUMP_ANIM)?;
        Self::new(front, run, jump)
    }

    /// Synthetic sheet: one row per animation, square cells of `cell` units
    pub fn grid(cell: f32, run_frames: usize, jump_frames: usize) -> Self {
        let row = |y: usize, count: usize| -> Vec<FrameId> {
            (0..count.max(1))
                .map(|x| {
                    let min = Vec2::new(x as f32, y as f32) * cell;
                    Rect::from_corners(min, min + Vec2::splat(cell))
                })
                .collect()
        };
        let front = row(0, 1)[0];
        Self {
            front,
            run: row(1, run_frames),
            jump: row(2, jump_frames),
        }
    }

    /// Cyclic run frame for time spent running
    pub fn run_index(&self, counter: f32, rate: f32) -> usize {
        let len = self.run.len() as i64;
        let i = (counter / rate).floor() as i64;
        i.rem_euclid(len) as usize
    }

    /// Jump frame for vertical velocity: `jump_speed` maps to the first frame,
    /// fast falls to the last
    pub fn jump_index(&self, vel_y: f32, jump_speed: f32) -> usize {
        let len = self.jump.len();
        let i = ((-vel_y / jump_speed + 1.0) / 2.0 * len as f32).round();
        if i.is_nan() || i < 0.0 {
            0
        } else {
            (i as usize).min(len - 1)
        }
    }
}

/// Where and how to draw the actor's current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    /// Source rectangle on the sprite sheet
    pub frame: FrameId,
    /// Destination box (the actor's rect)
    pub dest: Rect,
    /// Scale from frame size to destination size
    pub scale: Vec2,
    /// Mirror horizontally
    pub flip_x: bool,
}

/// Tracks animation state, time in state, facing and current frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animator {
    pub table: AnimationTable,
    /// Seconds per running frame
    pub rate: f32,
    pub state: AnimState,
    /// Seconds since entering `state`
    pub counter: f32,
    /// +1 right, -1 left; keeps the last nonzero direction
    pub facing: f32,
    pub frame: FrameId,
}

impl Animator {
    pub fn new(table: AnimationTable, rate: f32) -> Self {
        let frame = table.front;
        Self {
            table,
            rate,
            state: AnimState::Idle,
            counter: 0.0,
            facing: 1.0,
            frame,
        }
    }

    /// Advance by `dt` using the post-physics actor snapshot
    pub fn update(&mut self, dt: f32, actor: &ActorState, jump_speed: f32) {
        let (next, reset) = transition(self.state, actor);
        if reset {
            log::trace!("Animation {:?} -> {:?}", self.state, next);
            self.state = next;
            self.counter = 0.0;
        } else {
            self.counter += dt;
        }

        self.frame = match self.state {
            AnimState::Idle => self.table.front,
            AnimState::Running => self.table.run[self.table.run_index(self.counter, self.rate)],
            AnimState::Jumping => self.table.jump[self.table.jump_index(actor.vel.y, jump_speed)],
        };

        if let Some(dir) = strict_sign(actor.vel.x) {
            self.facing = dir;
        }
    }

    /// Placement of the current frame over the actor's rect
    pub fn sprite(&self, actor: &ActorState) -> SpriteDraw {
        let frame_size = self.frame.size();
        let dest = actor.rect;
        let scale = if frame_size.x > 0.0 && frame_size.y > 0.0 {
            dest.size() / frame_size
        } else {
            Vec2::ONE
        };
        SpriteDraw {
            frame: self.frame,
            dest,
            scale,
            flip_x: self.facing < 0.0,
        }
    }
}
