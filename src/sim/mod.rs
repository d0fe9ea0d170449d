//! Per-frame simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the frame's dt
//! - Seeded RNG only
//! - Platforms checked in level order
//! - No rendering or platform dependencies

pub mod animation;
pub mod color;
pub mod goal;
pub mod level;
pub mod physics;
pub mod rect;
pub mod tick;

pub use animation::{AnimState, AnimationError, AnimationTable, Animator, FrameId, SpriteDraw, transition};
pub use color::{Color, ColorGenerator, normalize_rgb};
pub use goal::{Disk, GOAL_RING_LEN, GoalRing};
pub use level::{Level, Platform};
pub use physics::{ActorPhysics, ActorState, PhysicsEvents, PhysicsParams, lands_on};
pub use rect::Rect;
pub use tick::{FrameInput, Session, tick};
