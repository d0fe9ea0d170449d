//! Super Gopher - simulation core of a small 2D side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Per-frame simulation (actor physics, animation state, goal ring)
//! - `renderer`: Backend-agnostic draw description (vertices, sprite placement)
//! - `tuning`: Data-driven physics/animation constants

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration applied to the actor (units/s², negative = down)
    pub const GRAVITY: f32 = -300.0;
    /// Horizontal speed while a direction is held
    pub const RUN_SPEED: f32 = 64.0;
    /// Upward velocity applied on jump
    pub const JUMP_SPEED: f32 = 192.0;

    /// Actor half extents (12x14 box centered on the origin)
    pub const ACTOR_HALF_WIDTH: f32 = 6.0;
    pub const ACTOR_HALF_HEIGHT: f32 = 7.0;

    /// Seconds per running animation frame
    pub const RUN_FRAME_RATE: f32 = 1.0 / 10.0;

    /// Goal ring defaults
    pub const GOAL_POS: (f32, f32) = (70.0, 40.0);
    pub const GOAL_RADIUS: f32 = 10.0;
    /// Seconds between color shifts
    pub const GOAL_STEP: f32 = 1.0 / 7.0;

    /// dt is divided by this while slow motion is held
    pub const SLOW_MOTION_FACTOR: f32 = 8.0;
    /// Fraction of the camera offset left after one second of easing
    pub const CAMERA_SMOOTHING: f32 = 1.0 / 128.0;

    /// Default window size the canvas is fitted into
    pub const WINDOW_WIDTH: f32 = 1024.0;
    pub const WINDOW_HEIGHT: f32 = 768.0;

    /// Visible world area (centered on the camera)
    pub const VIEW_WIDTH: f32 = 160.0;
    pub const VIEW_HEIGHT: f32 = 120.0;
}

/// Frame-rate independent exponential ease of `from` toward `to`
///
/// `smoothing` is the fraction of the remaining distance left after one second.
#[inline]
pub fn ease_toward(from: Vec2, to: Vec2, smoothing: f32, dt: f32) -> Vec2 {
    from.lerp(to, 1.0 - smoothing.powf(dt))
}

/// Sign of `x` as ±1, or `None` for exact zero
#[inline]
pub fn strict_sign(x: f32) -> Option<f32> {
    if x > 0.0 {
        Some(1.0)
    } else if x < 0.0 {
        Some(-1.0)
    } else {
        None
    }
}
