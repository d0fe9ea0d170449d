//! Data-driven game constants
//!
//! Loaded from JSON; any missing field takes its built-in default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::physics::PhysicsParams;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value: {0}")]
    Invalid(&'static str),
}

/// Physics, animation and presentation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub physics: PhysicsParams,
    /// Seconds per running animation frame
    pub run_frame_rate: f32,

    // === Goal ring ===
    pub goal_pos: Vec2,
    pub goal_radius: f32,
    /// Seconds between goal color shifts
    pub goal_step: f32,

    // === Presentation ===
    /// dt divisor while slow motion is held
    pub slow_motion_factor: f32,
    /// Fraction of camera lag left after one second (0-1]
    pub camera_smoothing: f32,

    /// Seed for the color generator
    pub seed: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            physics: PhysicsParams::default(),
            run_frame_rate: RUN_FRAME_RATE,

            goal_pos: Vec2::new(GOAL_POS.0, GOAL_POS.1),
            goal_radius: GOAL_RADIUS,
            goal_step: GOAL_STEP,

            slow_motion_factor: SLOW_MOTION_FACTOR,
            camera_smoothing: CAMERA_SMOOTHING,

            seed: 0,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read tuning from a JSON file
    pub fn read(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load tuning from `path`, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({})", e);
                Self::default()
            }
        }
    }

    /// Reject values that would stall or break the frame loop
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.run_frame_rate > 0.0) {
            return Err(TuningError::Invalid("run_frame_rate must be positive"));
        }
        if !(self.goal_step > 0.0) {
            return Err(TuningError::Invalid("goal_step must be positive"));
        }
        if !(self.slow_motion_factor > 0.0) {
            return Err(TuningError::Invalid("slow_motion_factor must be positive"));
        }
        if !(self.camera_smoothing > 0.0 && self.camera_smoothing <= 1.0) {
            return Err(TuningError::Invalid("camera_smoothing must be in (0, 1]"));
        }
        if !(self.physics.jump_speed != 0.0 && self.physics.jump_speed.is_finite()) {
            return Err(TuningError::Invalid("jump_speed must be nonzero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.physics.gravity, -300.0);
        assert_eq!(tuning.physics.run_speed, 64.0);
        assert_eq!(tuning.physics.jump_speed, 192.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning = Tuning::from_json(r#"{ "physics": { "gravity": -150.0 }, "seed": 9 }"#).unwrap();
        assert_eq!(tuning.physics.gravity, -150.0);
        assert_eq!(tuning.physics.jump_speed, JUMP_SPEED);
        assert_eq!(tuning.goal_step, GOAL_STEP);
        assert_eq!(tuning.seed, 9);
    }

    #[test]
    fn test_json_round_trip() {
        let mut tuning = Tuning::default();
        tuning.goal_radius = 20.0;
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "goal_step": 0.0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "camera_smoothing": 2.0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(Tuning::from_json("{ nope"), Err(TuningError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let tuning = Tuning::load("/nonexistent/super-gopher/tuning.json");
        assert_eq!(tuning, Tuning::default());
    }
}
