//! Random unit-length colors
//!
//! The generator owns a seeded RNG so every color sequence is reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Normalized RGB color
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Euclidean length of the (r, g, b) vector
    pub fn length(&self) -> f32 {
        (self.r * self.r + self.g * self.g + self.b * self.b).sqrt()
    }

    /// RGBA array with full alpha (vertex color layout)
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

/// Scale (r, g, b) to unit length, `None` for the zero vector
pub fn normalize_rgb(r: f32, g: f32, b: f32) -> Option<Color> {
    let length = (r * r + g * g + b * b).sqrt();
    if length == 0.0 || !length.is_finite() {
        return None;
    }
    Some(Color::rgb(r / length, g / length, b / length))
}

/// Produces uniformly sampled colors of unit length
#[derive(Debug, Clone)]
pub struct ColorGenerator<R = Pcg32> {
    rng: R,
}

impl ColorGenerator<Pcg32> {
    /// Generator backed by a PCG stream seeded from `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> ColorGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Sample three values in [0, 1) and normalize, resampling the zero vector
    pub fn generate(&mut self) -> Color {
        loop {
            let r: f32 = self.rng.random();
            let g: f32 = self.rng.random();
            let b: f32 = self.rng.random();
            if let Some(color) = normalize_rgb(r, g, b) {
                return color;
            }
        }
    }
}
