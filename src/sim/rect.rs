//! Axis-aligned rectangle geometry
//!
//! Used for the actor's collision box, platforms and sprite-sheet frames.
//! Rectangles are values: moving one produces a new rectangle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box with `min <= max` on both axes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Build a rectangle from two opposite corners (in any order)
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::from_corners(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Translate by `delta`
    #[inline]
    pub fn moved(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// True if the horizontal extents overlap (shared edges don't count)
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        !(self.max.x <= other.min.x || self.min.x >= other.max.x)
    }
}
