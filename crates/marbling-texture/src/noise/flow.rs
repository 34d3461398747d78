//! Noise-derived vector field used to bend flow patterns.

use super::{Noise2D, NoiseParams, TrigNoise};

/// Offset separating the strength channel from the angle channel.
const STRENGTH_OFFSET: (f64, f64) = (17.3, -5.1);

/// One sample of the flow field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSample {
    /// Direction in radians.
    pub angle: f64,
    /// Magnitude in [0, 1].
    pub strength: f64,
}

impl FlowSample {
    /// Unit-length displacement scaled by strength.
    pub fn displacement(&self) -> (f64, f64) {
        (
            self.angle.cos() * self.strength,
            self.angle.sin() * self.strength,
        )
    }
}

/// Flow field over normalized coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FlowField {
    noise: TrigNoise,
    scale: f64,
}

impl FlowField {
    pub fn new(params: NoiseParams, phase: f64, scale: f64) -> Self {
        Self {
            noise: TrigNoise::new(params, phase),
            scale,
        }
    }

    pub fn sample(&self, x: f64, y: f64) -> FlowSample {
        let sx = x * self.scale;
        let sy = y * self.scale;
        FlowSample {
            angle: self.noise.sample(sx, sy) * std::f64::consts::PI * 2.0,
            strength: self
                .noise
                .sample_01(sy + STRENGTH_OFFSET.0, sx + STRENGTH_OFFSET.1)
                .clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_sample_deterministic() {
        let field = FlowField::new(NoiseParams::default(), 0.7, 3.0);
        assert_eq!(field.sample(0.3, 0.6), field.sample(0.3, 0.6));
    }

    #[test]
    fn test_flow_strength_range() {
        let field = FlowField::new(NoiseParams::default(), 1.1, 4.0);
        for i in 0..100 {
            let s = field.sample(i as f64 * 0.01, 1.0 - i as f64 * 0.01);
            assert!((0.0..=1.0).contains(&s.strength));
            let (dx, dy) = s.displacement();
            assert!((dx * dx + dy * dy).sqrt() <= 1.0 + 1e-9);
        }
    }
}
