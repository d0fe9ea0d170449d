//! Per-frame session update
//!
//! One call to [`tick`] per rendered frame, in a fixed order: camera easing,
//! slow-motion scaling, restart, physics, goal ring, then animation.

use glam::Vec2;

use super::animation::{AnimationTable, Animator};
use super::color::ColorGenerator;
use super::goal::GoalRing;
use super::level::Level;
use super::physics::{ActorPhysics, PhysicsEvents};
use crate::Tuning;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Wall-clock seconds since the previous frame
    pub dt: f32,
    /// x: held left/right (-1, 0, +1), y: jump pressed this frame (0 or 1)
    pub control: Vec2,
    /// Slow motion held
    pub slow_motion: bool,
    /// Restart pressed this frame
    pub restart: bool,
}

/// Everything owned by a running level
#[derive(Debug, Clone)]
pub struct Session {
    pub tuning: Tuning,
    pub level: Level,
    pub physics: ActorPhysics,
    pub animator: Animator,
    pub goal: GoalRing,
    pub colors: ColorGenerator,
    /// Camera center (world space)
    pub camera: Vec2,
    /// Frames simulated so far
    pub frame_count: u64,
    /// Simulated seconds (after slow-motion scaling)
    pub sim_time: f32,
}

impl Session {
    /// Start a session on the built-in level
    pub fn new(tuning: Tuning, table: AnimationTable) -> Self {
        let mut colors = ColorGenerator::seeded(tuning.seed);
        let level = Level::default_level(&mut colors);
        Self::with_level(tuning, table, level, colors)
    }

    pub fn with_level(
        tuning: Tuning,
        table: AnimationTable,
        level: Level,
        colors: ColorGenerator,
    ) -> Self {
        log::info!(
            "Session start: {} platforms, seed {}",
            level.platforms.len(),
            tuning.seed
        );
        let physics = ActorPhysics::new(tuning.physics, level.spawn);
        let animator = Animator::new(table, tuning.run_frame_rate);
        let goal = GoalRing::new(tuning.goal_pos, tuning.goal_radius, tuning.goal_step);
        Self {
            camera: physics.state.rect.center(),
            tuning,
            level,
            physics,
            animator,
            goal,
            colors,
            frame_count: 0,
            sim_time: 0.0,
        }
    }

    /// Put the actor back at the level spawn, at rest
    pub fn restart(&mut self) {
        self.physics.restart(self.level.spawn);
        log::info!("Level restart after {} frames", self.frame_count);
    }
}

/// Clamp wall-clock dt to a usable non-negative value
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

/// Advance the session by one frame
pub fn tick(session: &mut Session, input: &FrameInput) -> PhysicsEvents {
    let mut dt = sanitize_dt(input.dt);

    // Camera follows in wall-clock time
    session.camera = crate::ease_toward(
        session.camera,
        session.physics.state.rect.center(),
        session.tuning.camera_smoothing,
        dt,
    );

    // Same scaled dt for every simulation consumer
    if input.slow_motion {
        dt /= session.tuning.slow_motion_factor;
    }

    if input.restart {
        session.restart();
    }

    let events = session
        .physics
        .update(dt, input.control, &session.level.platforms);

    let color = session.colors.generate();
    session.goal.update(dt, color);

    session
        .animator
        .update(dt, &session.physics.state, session.physics.params.jump_speed);

    session.frame_count += 1;
    session.sim_time += dt;

    events
}
