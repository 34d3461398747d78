//! Scalar fields that drive organic variation.
//!
//! All fields are pure functions of their parameters and coordinates; the
//! generator memoizes them, but nothing here keeps state.

mod flow;
mod fractal;
mod trig;

pub use flow::{FlowField, FlowSample};
pub use fractal::{julia, mandelbrot, sierpinski, FractalField, JULIA_C, MAX_ITERATIONS, SCALE_STEP};
pub use trig::TrigNoise;

use serde::{Deserialize, Serialize};

/// Trait for 2D scalar fields.
pub trait Noise2D {
    /// Sample the field at a given 2D coordinate.
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Sample and remap from [-1, 1] to [0, 1].
    fn sample_01(&self, x: f64, y: f64) -> f64 {
        (self.sample(x, y) + 1.0) * 0.5
    }
}

/// Octave parameters for [`TrigNoise`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseParams {
    /// Base frequency of the first octave.
    #[serde(default = "default_frequency")]
    pub frequency: f64,
    /// Number of octaves to sum.
    #[serde(default = "default_octaves")]
    pub octaves: u32,
    /// Amplitude multiplier per octave.
    #[serde(default = "default_persistence")]
    pub persistence: f64,
    /// Frequency multiplier per octave.
    #[serde(default = "default_lacunarity")]
    pub lacunarity: f64,
}

fn default_frequency() -> f64 {
    1.0
}

fn default_octaves() -> u32 {
    4
}

fn default_persistence() -> f64 {
    0.5
}

fn default_lacunarity() -> f64 {
    2.0
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
            octaves: default_octaves(),
            persistence: default_persistence(),
            lacunarity: default_lacunarity(),
        }
    }
}

impl NoiseParams {
    /// Same parameters at a different base frequency.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Same parameters with a different octave count.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Bit-exact cache key.
    pub(crate) fn key_bits(&self) -> [u64; 4] {
        [
            self.frequency.to_bits(),
            self.octaves as u64,
            self.persistence.to_bits(),
            self.lacunarity.to_bits(),
        ]
    }
}
