//! Escape-time and iterated-map fractals blended into one pattern value.

use super::Noise2D;
use crate::rng::DeterministicRng;

/// Iteration cap for the escape-time fractals.
pub const MAX_ITERATIONS: u32 = 50;

/// Squared escape radius.
const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Constant `c` of the Julia set.
pub const JULIA_C: (f64, f64) = (-0.7, 0.27);

/// Sampling scale multiplier between consecutive depth levels.
pub const SCALE_STEP: f64 = 12.0;

/// Points folded per Sierpinski sample.
const SIERPINSKI_STEPS: u32 = 16;

/// Grid resolution of the Sierpinski membership test.
const SIERPINSKI_GRID: f64 = 8.0;

const SIERPINSKI_VERTICES: [(f64, f64); 3] = [(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)];

fn escape_time(mut zx: f64, mut zy: f64, cx: f64, cy: f64) -> f64 {
    let mut iterations = 0;
    while zx * zx + zy * zy <= ESCAPE_RADIUS_SQ && iterations < MAX_ITERATIONS {
        let next_x = zx * zx - zy * zy + cx;
        zy = 2.0 * zx * zy + cy;
        zx = next_x;
        iterations += 1;
    }
    iterations as f64 / MAX_ITERATIONS as f64
}

/// Mandelbrot escape time for `c = (x, y)`, in [0, 1].
pub fn mandelbrot(x: f64, y: f64) -> f64 {
    escape_time(0.0, 0.0, x, y)
}

/// Julia escape time for `z0 = (x, y)` and `c = JULIA_C`, in [0, 1].
pub fn julia(x: f64, y: f64) -> f64 {
    escape_time(x, y, JULIA_C.0, JULIA_C.1)
}

/// Chaos-game fold toward three contraction vertices (weight 1/3 each).
///
/// Returns the fraction of folded points landing on the Sierpinski lattice,
/// in [0, 1]. All randomness comes from `rng`.
pub fn sierpinski(x: f64, y: f64, rng: &mut DeterministicRng) -> f64 {
    let mut px = x.rem_euclid(1.0);
    let mut py = y.rem_euclid(1.0);
    let mut hits = 0;

    for _ in 0..SIERPINSKI_STEPS {
        let (vx, vy) = SIERPINSKI_VERTICES[rng.gen_range(0..SIERPINSKI_VERTICES.len())];
        px = (px + vx) * 0.5;
        py = (py + vy) * 0.5;

        let gx = (px * SIERPINSKI_GRID) as u32;
        let gy = (py * SIERPINSKI_GRID) as u32;
        if gx & gy == 0 {
            hits += 1;
        }
    }

    hits as f64 / SIERPINSKI_STEPS as f64
}

/// Recursive blend of Mandelbrot, Julia and Sierpinski samples.
///
/// Level `i` samples at `scale * 12^i` with weight `1 / (i + 1)`. Scaled
/// coordinates are wrapped into the Mandelbrot bounding box so deep levels
/// still land on structure.
#[derive(Debug, Clone, Copy)]
pub struct FractalField {
    depth: u32,
    scale: f64,
    seed: u32,
}

impl FractalField {
    pub fn new(depth: u32, scale: f64, seed: u32) -> Self {
        Self { depth, scale, seed }
    }

    /// Largest value [`Noise2D::sample`] can return: the harmonic sum of
    /// the level weights.
    pub fn max_value(&self) -> f64 {
        (0..self.depth).map(|level| 1.0 / (level + 1) as f64).sum()
    }
}

impl Noise2D for FractalField {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut level_scale = self.scale;

        for level in 0..self.depth {
            let cx = (x * level_scale).rem_euclid(3.0) - 2.0;
            let cy = (y * level_scale).rem_euclid(3.0) - 1.5;

            let mut rng =
                DeterministicRng::new(DeterministicRng::derive_point_seed(self.seed, x, y, level));
            let value = (mandelbrot(cx, cy)
                + julia(cx * 0.75, cy)
                + sierpinski(x * level_scale, y * level_scale, &mut rng))
                / 3.0;

            total += value / (level + 1) as f64;
            level_scale *= SCALE_STEP;
        }

        total
    }

    fn sample_01(&self, x: f64, y: f64) -> f64 {
        let max = self.max_value();
        if max == 0.0 {
            return 0.0;
        }
        (self.sample(x, y) / max).clamp(0.0, 1.0)
    }
}
