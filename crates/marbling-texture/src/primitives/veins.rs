//! Branching veins.

use std::ops::RangeInclusive;

use super::{advance, Primitive};
use crate::color::Color;
use crate::frame::Frame;
use crate::gradient::{Gradient, StopColor};
use crate::rng::DeterministicRng;

/// Veins per texture.
pub const VEIN_COUNT: RangeInclusive<usize> = 6..=17;
const BRANCH_COUNT: RangeInclusive<usize> = 2..=5;

/// Width of the soft halo relative to the vein core.
const HALO_WIDTH: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Vein {
    pub start: (f64, f64),
    pub length: f64,
    /// Direction in degrees.
    pub angle: f64,
    pub thickness: f64,
    pub intensity: f64,
    pub branches: Vec<VeinBranch>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VeinBranch {
    /// Fraction along the parent vein where the branch forks.
    pub offset: f64,
    pub angle: f64,
    pub length: f64,
    pub thickness: f64,
    pub intensity: f64,
}

/// Generate 6 to 17 veins with 2 to 5 branches each.
pub fn generate_veins(rng: &mut DeterministicRng, frame: &Frame) -> Vec<Vein> {
    let count = rng.gen_count(VEIN_COUNT);
    (0..count)
        .map(|_| {
            let start = (
                rng.gen_f64() * frame.width(),
                rng.gen_f64() * frame.height(),
            );
            let length = rng.gen_between(0.3, 0.8) * frame.diagonal();
            let angle = rng.gen_f64() * 360.0;
            let thickness = rng.gen_between(0.005, 0.025) * frame.min_side();
            let intensity = rng.gen_between(0.15, 0.45);

            let branch_count = rng.gen_count(BRANCH_COUNT);
            let branches = (0..branch_count)
                .map(|_| VeinBranch {
                    offset: rng.gen_between(0.2, 0.9),
                    angle: angle + rng.gen_signed_f64() * 50.0,
                    length: length * rng.gen_between(0.2, 0.5),
                    thickness: thickness * rng.gen_between(0.3, 0.7),
                    intensity: intensity * rng.gen_between(0.5, 0.9),
                })
                .collect();

            Vein {
                start,
                length,
                angle,
                thickness,
                intensity,
                branches,
            }
        })
        .collect()
}

impl Primitive for Vein {
    fn layers(&self, frame: &Frame, tint: Color) -> Vec<Gradient> {
        let vein_color = tint.lighten(0.6);
        let mid = advance(self.start, self.angle, self.length * 0.5);

        let mut layers = Vec::with_capacity(2 + self.branches.len());
        layers.push(frame.stroke(
            mid.0,
            mid.1,
            self.angle,
            self.thickness * HALO_WIDTH,
            StopColor::tint(vein_color, self.intensity * 0.3),
        ));
        layers.push(frame.stroke(
            mid.0,
            mid.1,
            self.angle,
            self.thickness,
            StopColor::tint(vein_color, self.intensity),
        ));

        for branch in &self.branches {
            let fork = advance(self.start, self.angle, self.length * branch.offset);
            let branch_mid = advance(fork, branch.angle, branch.length * 0.5);
            layers.push(frame.stroke(
                branch_mid.0,
                branch_mid.1,
                branch.angle,
                branch.thickness,
                StopColor::tint(vein_color, branch.intensity),
            ));
        }

        layers
    }
}
