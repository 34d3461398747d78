//! Layered swirls: a ring and rotating arms per layer.

use std::ops::RangeInclusive;

use super::Primitive;
use crate::color::Color;
use crate::frame::{normalize_degrees, Frame};
use crate::gradient::{ColorStop, Gradient, RadialShape, StopColor};
use crate::rng::DeterministicRng;

/// Swirls per texture.
pub const SWIRL_COUNT: RangeInclusive<usize> = 4..=13;
const LAYER_COUNT: RangeInclusive<usize> = 1..=3;
const ROTATIONS: RangeInclusive<u32> = 2..=5;

const RING_ALPHA: f64 = 0.18;
const ARM_ALPHA: f64 = 0.08;

#[derive(Debug, Clone, PartialEq)]
pub struct Swirl {
    pub center: (f64, f64),
    pub radius: f64,
    /// Number of arms around the center.
    pub rotations: u32,
    pub start_angle: f64,
    pub layers: Vec<SwirlLayer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwirlLayer {
    pub radius_multiplier: f64,
    /// Alpha multiplier applied once per layer index.
    pub intensity_falloff: f64,
    /// Extra rotation per layer, in arm widths.
    pub rotation_speed: f64,
    /// Brightness shift of the tint, in [-0.15, 0.15].
    pub color_variation: f64,
}

/// Generate 4 to 13 swirls with 1 to 3 layers each.
pub fn generate_swirls(rng: &mut DeterministicRng, frame: &Frame) -> Vec<Swirl> {
    let count = rng.gen_count(SWIRL_COUNT);
    (0..count)
        .map(|_| {
            let center = (
                rng.gen_f64() * frame.width(),
                rng.gen_f64() * frame.height(),
            );
            let radius = rng.gen_between(0.1, 0.3) * frame.min_side();
            let rotations = rng.gen_range(ROTATIONS);
            let start_angle = rng.gen_f64() * 360.0;

            let layer_count = rng.gen_count(LAYER_COUNT);
            let layers = (0..layer_count)
                .map(|_| SwirlLayer {
                    radius_multiplier: rng.gen_between(0.6, 1.4),
                    intensity_falloff: rng.gen_between(0.4, 0.9),
                    rotation_speed: rng.gen_between(0.5, 2.0),
                    color_variation: rng.gen_signed_f64() * 0.15,
                })
                .collect();

            Swirl {
                center,
                radius,
                rotations,
                start_angle,
                layers,
            }
        })
        .collect()
}

impl Swirl {
    fn ring(&self, frame: &Frame, layer: &SwirlLayer, color: Color, alpha: f64) -> Gradient {
        let radius = self.radius * layer.radius_multiplier;
        Gradient::radial(
            RadialShape::Ellipse {
                rx: frame.pct_x(radius),
                ry: frame.pct_y(radius),
            },
            frame.pct(self.center.0, self.center.1),
            vec![
                ColorStop::at(StopColor::Transparent, 65.0),
                ColorStop::at(StopColor::tint(color, alpha), 85.0),
                ColorStop::at(StopColor::Transparent, 100.0),
            ],
        )
    }

    fn arms(
        &self,
        frame: &Frame,
        index: usize,
        layer: &SwirlLayer,
        color: Color,
        alpha: f64,
    ) -> Gradient {
        let rotations = self.rotations.max(1);
        let sector = 360.0 / rotations as f64;
        let from = self.start_angle + index as f64 * layer.rotation_speed * sector;

        let clear = StopColor::Transparent;
        let peak = StopColor::tint(color, alpha);
        let mut stops = Vec::with_capacity(rotations as usize * 3);
        for arm in 0..rotations {
            let base = arm as f64 * sector;
            stops.push(ColorStop::at_deg(clear, base));
            stops.push(ColorStop::at_deg(peak, base + sector * 0.25));
            stops.push(ColorStop::at_deg(clear, base + sector * 0.5));
        }

        Gradient::conic(
            normalize_degrees(from),
            frame.pct(self.center.0, self.center.1),
            stops,
        )
    }
}

impl Primitive for Swirl {
    fn layers(&self, frame: &Frame, tint: Color) -> Vec<Gradient> {
        let mut layers = Vec::with_capacity(self.layers.len() * 2);
        for (index, layer) in self.layers.iter().enumerate() {
            let color = tint.shift(layer.color_variation);
            let falloff = layer.intensity_falloff.powi(index as i32);
            layers.push(self.ring(frame, layer, color, RING_ALPHA * falloff));
            layers.push(self.arms(frame, index, layer, color, ARM_ALPHA * falloff));
        }
        layers
    }
}
