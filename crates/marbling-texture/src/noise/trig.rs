//! Multi-octave trigonometric noise.
//!
//! Each octave averages four phase-shifted sine/cosine cross terms. Octaves
//! are accumulated like FBM: amplitude scales by `persistence`, frequency by
//! `lacunarity`, and the sum is normalized by the total amplitude.

use super::{Noise2D, NoiseParams};

/// Value returned before any octave has been accumulated.
const INITIAL_ACCUMULATOR: f64 = 0.0;

/// Trigonometric noise field.
#[derive(Debug, Clone, Copy)]
pub struct TrigNoise {
    params: NoiseParams,
    /// Phase offset; distinct phases give distinct fields.
    phase: f64,
}

impl TrigNoise {
    /// Create a field with the given parameters and phase.
    pub fn new(params: NoiseParams, phase: f64) -> Self {
        Self { params, phase }
    }

    /// Derive a phase in [0, 2π) from a seed.
    pub fn phase_for_seed(seed: u32) -> f64 {
        (seed as f64 / u32::MAX as f64) * std::f64::consts::TAU
    }

    fn octave(&self, x: f64, y: f64, frequency: f64) -> f64 {
        let p = self.phase;
        let fx = x * frequency;
        let fy = y * frequency;

        let t1 = (fx + p).sin() * (fy + p * 0.5).cos();
        let t2 = ((fx + fy) * 0.7 + p * 1.3).sin() * ((fx - fy) * 0.9).cos();
        let t3 = (fx * 1.7 - p).cos() * (fy * 1.3 + p * 0.3).sin();
        let t4 = (fx * 0.5 + 1.7).sin() * (fy * 2.3 + p * 2.1).sin();

        (t1 + t2 + t3 + t4) * 0.25
    }
}

impl Noise2D for TrigNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        if self.params.octaves == 0 {
            return INITIAL_ACCUMULATOR;
        }

        let mut total = INITIAL_ACCUMULATOR;
        let mut amplitude = 1.0;
        let mut frequency = self.params.frequency;
        let mut max_value = 0.0;

        for _ in 0..self.params.octaves {
            total += self.octave(x, y, frequency) * amplitude;
            max_value += amplitude;
            amplitude *= self.params.persistence;
            frequency *= self.params.lacunarity;
        }

        if max_value == 0.0 {
            return INITIAL_ACCUMULATOR;
        }
        total / max_value
    }
}
