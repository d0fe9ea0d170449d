//! Static level geometry
//!
//! A level is an ordered list of platforms plus the actor's spawn box. The
//! list is read-only for the whole session.

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorGenerator};
use super::rect::Rect;
use crate::consts::*;

/// A static collision surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub color: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Platforms in collision/draw order
    pub platforms: Vec<Platform>,
    /// Actor box at level start
    pub spawn: Rect,
}

impl Level {
    pub fn new(platforms: Vec<Platform>, spawn: Rect) -> Self {
        Self { platforms, spawn }
    }

    /// Actor box centered on the origin
    pub fn default_spawn() -> Rect {
        Rect::new(
            -ACTOR_HALF_WIDTH,
            -ACTOR_HALF_HEIGHT,
            ACTOR_HALF_WIDTH,
            ACTOR_HALF_HEIGHT,
        )
    }

    /// Built-in test level, platform colors drawn from `colors`
    pub fn default_level<R: rand::Rng>(colors: &mut ColorGenerator<R>) -> Self {
        let rects = [
            Rect::new(-1000.0, -11.0, 100.0, -10.0),
            Rect::new(150.0, -11.0, 300.0, -10.0),
            Rect::new(270.0, -30.0, 400.0, -29.0),
            Rect::new(-10.0, 1.5, 20.0, 2.0),
            Rect::new(40.0, 10.0, 60.0, 12.0),
            Rect::new(40.0, 10.0, 60.0, 12.0),
        ];
        let platforms = rects
            .into_iter()
            .map(|rect| Platform {
                rect,
                color: colors.generate(),
            })
            .collect();

        Self::new(platforms, Self::default_spawn())
    }
}
