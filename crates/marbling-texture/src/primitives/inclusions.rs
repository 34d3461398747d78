//! Dark mineral inclusions.

use std::ops::RangeInclusive;

use super::Primitive;
use crate::color::Color;
use crate::frame::Frame;
use crate::gradient::{ColorStop, Gradient, RadialShape, StopColor};
use crate::rng::DeterministicRng;

/// Inclusions per texture.
pub const INCLUSION_COUNT: RangeInclusive<usize> = 3..=10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InclusionShape {
    Circular,
    /// Vertical radius is `aspect` times the horizontal one.
    Elliptical { aspect: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inclusion {
    pub position: (f64, f64),
    pub size: f64,
    pub opacity: f64,
    pub shape: InclusionShape,
}

/// Generate 3 to 10 inclusions, half circular and half elliptical on average.
pub fn generate_inclusions(rng: &mut DeterministicRng, frame: &Frame) -> Vec<Inclusion> {
    let count = rng.gen_count(INCLUSION_COUNT);
    (0..count)
        .map(|_| {
            let position = (
                rng.gen_f64() * frame.width(),
                rng.gen_f64() * frame.height(),
            );
            let size = rng.gen_between(0.01, 0.04) * frame.min_side();
            let opacity = rng.gen_between(0.1, 0.35);
            let shape = if rng.gen_bool(0.5) {
                InclusionShape::Circular
            } else {
                InclusionShape::Elliptical {
                    aspect: rng.gen_between(0.4, 0.9),
                }
            };
            Inclusion {
                position,
                size,
                opacity,
                shape,
            }
        })
        .collect()
}

impl Primitive for Inclusion {
    fn layers(&self, frame: &Frame, tint: Color) -> Vec<Gradient> {
        let ry = match self.shape {
            InclusionShape::Circular => self.size,
            InclusionShape::Elliptical { aspect } => self.size * aspect,
        };
        let dark = tint.darken(0.6);
        vec![Gradient::radial(
            RadialShape::Ellipse {
                rx: frame.pct_x(self.size),
                ry: frame.pct_y(ry),
            },
            frame.pct(self.position.0, self.position.1),
            vec![
                ColorStop::at(StopColor::tint(dark, self.opacity), 0.0),
                ColorStop::at(StopColor::tint(dark, self.opacity * 0.5), 50.0),
                ColorStop::at(StopColor::Transparent, 100.0),
            ],
        )]
    }
}
