//! Actor physics: gravity, run/jump control and landing on platforms
//!
//! Explicit Euler, one step per frame. Platforms only stop downward motion;
//! there is no wall or ceiling resolution.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::Platform;
use super::rect::Rect;
use crate::consts::*;

/// Movement constants for the actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Vertical acceleration (negative = downward)
    pub gravity: f32,
    /// Horizontal speed magnitude while a direction is held
    pub run_speed: f32,
    /// Vertical velocity set on jump
    pub jump_speed: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            run_speed: RUN_SPEED,
            jump_speed: JUMP_SPEED,
        }
    }
}

/// Snapshot of the actor after a physics step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorState {
    pub rect: Rect,
    pub vel: Vec2,
    /// Resting on a platform this frame
    pub ground: bool,
}

impl ActorState {
    /// Actor at rest in `rect`
    pub fn at_rest(rect: Rect) -> Self {
        Self {
            rect,
            vel: Vec2::ZERO,
            ground: false,
        }
    }

    /// Magnitude of the velocity vector
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// What happened during one physics step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhysicsEvents {
    /// Ground flag went from false to true
    pub landed: bool,
    /// Jump velocity was applied
    pub jumped: bool,
}

/// Landing test for one platform against an already displaced actor rect
///
/// Requires horizontal overlap, the actor's bottom at or below the platform
/// top, and the bottom no further below the top than this frame's vertical
/// displacement (`vel_y * dt`, negative when falling).
pub fn lands_on(rect: &Rect, vel_y: f32, dt: f32, platform: &Rect) -> bool {
    if !rect.overlaps_horizontally(platform) {
        return false;
    }
    let top = platform.max.y;
    !(rect.min.y > top || rect.min.y < top + vel_y * dt)
}

/// Same rect with its bottom edge placed exactly at `y`
fn snap_bottom_to(rect: &Rect, y: f32) -> Rect {
    let height = rect.height();
    Rect {
        min: Vec2::new(rect.min.x, y),
        max: Vec2::new(rect.max.x, y + height),
    }
}

/// Owns the actor state and advances it each frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorPhysics {
    pub params: PhysicsParams,
    pub state: ActorState,
}

impl ActorPhysics {
    pub fn new(params: PhysicsParams, rect: Rect) -> Self {
        Self {
            params,
            state: ActorState::at_rest(rect),
        }
    }

    /// Advance by `dt` seconds
    ///
    /// `control.x` picks run direction by sign, `control.y > 0` requests a jump
    /// (honored only when landed this frame).
    pub fn update(&mut self, dt: f32, control: Vec2, platforms: &[Platform]) -> PhysicsEvents {
        let params = self.params;
        let state = &mut self.state;
        let was_on_ground = state.ground;

        // Controls set horizontal speed directly
        state.vel.x = match crate::strict_sign(control.x) {
            Some(dir) => dir * params.run_speed,
            None => 0.0,
        };

        state.vel.y += params.gravity * dt;
        state.rect = state.rect.moved(state.vel * dt);

        state.ground = false;
        if state.vel.y <= 0.0 {
            for platform in platforms {
                if !lands_on(&state.rect, state.vel.y, dt, &platform.rect) {
                    continue;
                }
                state.vel.y = 0.0;
                state.rect = snap_bottom_to(&state.rect, platform.rect.max.y);
                state.ground = true;
            }
        }

        let mut events = PhysicsEvents {
            landed: state.ground && !was_on_ground,
            jumped: false,
        };

        if state.ground && control.y > 0.0 {
            state.vel.y = params.jump_speed;
            events.jumped = true;
        }

        if events.landed {
            log::debug!("Landed at ({:.2}, {:.2})", state.rect.min.x, state.rect.min.y);
        }
        if events.jumped {
            log::debug!("Jump from y={:.2}", state.rect.min.y);
        }

        events
    }

    /// Replace the actor state: placed at `spawn`, velocity zeroed
    pub fn restart(&mut self, spawn: Rect) {
        self.state = ActorState::at_rest(spawn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::color::Color;
    use proptest::prelude::*;

    fn platform(x0: f32, y0: f32, x1: f32, y1: f32) -> Platform {
        Platform {
            rect: Rect::new(x0, y0, x1, y1),
            color: Color::WHITE,
        }
    }

    fn actor(rect: Rect, vel: Vec2, ground: bool) -> ActorPhysics {
        let mut physics = ActorPhysics::new(PhysicsParams::default(), rect);
        physics.state.vel = vel;
        physics.state.ground = ground;
        physics
    }

    #[test]
    fn test_horizontal_velocity_is_set_not_accumulated() {
        let mut p = actor(Rect::new(0.0, 0.0, 1.0, 1.0), Vec2::new(500.0, 0.0), false);

        p.update(0.01, Vec2::new(1.0, 0.0), &[]);
        assert_eq!(p.state.vel.x, RUN_SPEED);

        p.update(0.01, Vec2::new(-0.2, 0.0), &[]);
        assert_eq!(p.state.vel.x, -RUN_SPEED);

        p.update(0.01, Vec2::ZERO, &[]);
        assert_eq!(p.state.vel.x, 0.0);
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut p = actor(Rect::new(0.0, 0.0, 1.0, 1.0), Vec2::ZERO, false);
        p.update(0.1, Vec2::ZERO, &[]);
        assert!((p.state.vel.y - -30.0).abs() < 1e-4);
        p.update(0.1, Vec2::ZERO, &[]);
        assert!((p.state.vel.y - -60.0).abs() < 1e-4);
        assert!(!p.state.ground);
    }

    #[test]
    fn test_landing_snaps_to_platform_top() {
        let mut p = actor(Rect::new(0.0, 0.0, 1.0, 1.0), Vec2::new(0.0, -50.0), false);
        let platforms = [platform(-10.0, -1.4, 10.0, -0.4)];

        let events = p.update(0.02, Vec2::ZERO, &platforms);

        assert_eq!(p.state.vel.y, 0.0);
        assert!(p.state.ground);
        assert_eq!(p.state.rect.min.y, -0.4);
        assert!((p.state.rect.height() - 1.0).abs() < 1e-5);
        assert!(events.landed);
    }

    #[test]
    fn test_jump_sets_exact_velocity() {
        for dt in [0.001, 0.016, 0.05] {
            let mut p = actor(Rect::new(0.0, 0.0, 1.0, 1.0), Vec2::ZERO, true);
            let platforms = [platform(-10.0, -1.0, 10.0, 0.0)];

            let events = p.update(dt, Vec2::new(0.0, 1.0), &platforms);
            assert_eq!(p.state.vel.y, JUMP_SPEED);
            assert!(events.jumped);
        }
    }

    #[test]
    fn test_no_jump_in_air() {
        let mut p = actor(Rect::new(0.0, 10.0, 1.0, 11.0), Vec2::ZERO, false);
        let events = p.update(0.016, Vec2::new(0.0, 1.0), &[]);
        assert!(!events.jumped);
        assert!(p.state.vel.y < 0.0);
    }

    #[test]
    fn test_ascending_actor_passes_through() {
        let mut p = actor(Rect::new(0.0, -1.0, 1.0, 0.0), Vec2::new(0.0, 100.0), false);
        let platforms = [platform(-10.0, -0.5, 10.0, 0.0)];
        p.update(0.01, Vec2::ZERO, &platforms);
        assert!(!p.state.ground);
        assert!(p.state.vel.y > 0.0);
    }

    #[test]
    fn test_no_horizontal_overlap_no_landing() {
        let mut p = actor(Rect::new(20.0, 0.0, 21.0, 1.0), Vec2::new(0.0, -50.0), false);
        let platforms = [platform(-10.0, -1.4, 10.0, -0.4)];
        p.update(0.02, Vec2::ZERO, &platforms);
        assert!(!p.state.ground);
    }

    #[test]
    fn test_lands_on_boundaries() {
        let plat = Rect::new(0.0, -1.0, 10.0, 0.0);

        // Bottom exactly on top
        assert!(lands_on(&Rect::new(1.0, 0.0, 2.0, 1.0), 0.0, 0.016, &plat));
        // Bottom above top
        assert!(!lands_on(&Rect::new(1.0, 0.01, 2.0, 1.01), -10.0, 0.016, &plat));
        // Bottom exactly one frame of displacement below top
        assert!(lands_on(&Rect::new(1.0, -1.0, 2.0, 0.0), -2.0, 0.5, &plat));
        // Further below than one frame of travel: already under the platform
        assert!(!lands_on(&Rect::new(1.0, -1.5, 2.0, -0.5), -2.0, 0.5, &plat));
        // Touching edge horizontally
        assert!(!lands_on(&Rect::new(10.0, 0.0, 11.0, 1.0), -1.0, 0.016, &plat));
    }

    #[test]
    fn test_resting_actor_stays_grounded() {
        let platforms = [platform(-100.0, -11.0, 300.0, -10.0)];
        let mut p = actor(Rect::new(-6.0, -10.0, 6.0, 4.0), Vec2::ZERO, true);

        for _ in 0..120 {
            p.update(1.0 / 60.0, Vec2::new(1.0, 0.0), &platforms);
            assert!(p.state.ground);
            assert_eq!(p.state.vel.y, 0.0);
            assert_eq!(p.state.rect.min.y, -10.0);
        }
    }

    #[test]
    fn test_last_platform_wins() {
        // Two platforms both caught this frame; snap follows list order
        let platforms = [platform(-5.0, -1.0, 5.0, -0.5), platform(-5.0, -1.0, 5.0, -0.3)];
        let mut p = actor(Rect::new(0.0, 0.0, 1.0, 1.0), Vec2::new(0.0, -50.0), false);
        p.update(0.02, Vec2::ZERO, &platforms);
        assert!(p.state.ground);
        assert_eq!(p.state.rect.min.y, -0.3);
    }

    #[test]
    fn test_restart_replaces_state() {
        let mut p = actor(Rect::new(30.0, 30.0, 42.0, 44.0), Vec2::new(64.0, -80.0), true);
        p.restart(Rect::new(-6.0, -7.0, 6.0, 7.0));
        assert_eq!(p.state.rect, Rect::new(-6.0, -7.0, 6.0, 7.0));
        assert_eq!(p.state.vel, Vec2::ZERO);
        assert!(!p.state.ground);
    }

    proptest! {
        #[test]
        fn ground_implies_rest_or_jump(
            controls in proptest::collection::vec((-1i8..=1, 0i8..=1), 1..200),
            dt in 0.001f32..0.05,
        ) {
            let platforms = [platform(-1000.0, -11.0, 100.0, -10.0), platform(150.0, -11.0, 300.0, -10.0)];
            let mut p = ActorPhysics::new(PhysicsParams::default(), Rect::new(-6.0, -7.0, 6.0, 7.0));

            for (cx, cy) in controls {
                let events = p.update(dt, Vec2::new(cx as f32, cy as f32), &platforms);
                let s = p.state;
                prop_assert!(s.rect.min.x <= s.rect.max.x && s.rect.min.y <= s.rect.max.y);
                if s.ground {
                    if events.jumped {
                        prop_assert_eq!(s.vel.y, JUMP_SPEED);
                    } else {
                        prop_assert_eq!(s.vel.y, 0.0);
                    }
                }
                prop_assert!(s.vel.x.abs() == RUN_SPEED || s.vel.x == 0.0);
            }
        }
    }
}
