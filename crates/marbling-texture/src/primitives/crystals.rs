//! Crystalline highlights with faceted glints.

use std::ops::RangeInclusive;

use super::{advance, Primitive};
use crate::color::Color;
use crate::frame::Frame;
use crate::gradient::{ColorStop, Gradient, RadialShape, StopColor};
use crate::rng::DeterministicRng;

/// Crystals per texture.
pub const CRYSTAL_COUNT: RangeInclusive<usize> = 10..=29;
const FACET_COUNT: RangeInclusive<usize> = 2..=5;

#[derive(Debug, Clone, PartialEq)]
pub struct Crystal {
    pub position: (f64, f64),
    pub size: f64,
    pub brightness: f64,
    pub facets: Vec<Facet>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    pub angle: f64,
    pub length: f64,
    pub brightness: f64,
}

/// Generate 10 to 29 crystals with 2 to 5 facets each.
pub fn generate_crystals(rng: &mut DeterministicRng, frame: &Frame) -> Vec<Crystal> {
    let count = rng.gen_count(CRYSTAL_COUNT);
    (0..count)
        .map(|_| {
            let position = (
                rng.gen_f64() * frame.width(),
                rng.gen_f64() * frame.height(),
            );
            let size = rng.gen_between(0.005, 0.03) * frame.min_side();
            let brightness = rng.gen_between(0.3, 0.9);

            let facet_count = rng.gen_count(FACET_COUNT);
            let facets = (0..facet_count)
                .map(|_| Facet {
                    angle: rng.gen_f64() * 360.0,
                    length: size * rng.gen_between(0.5, 1.5),
                    brightness: brightness * rng.gen_between(0.4, 1.0),
                })
                .collect();

            Crystal {
                position,
                size,
                brightness,
                facets,
            }
        })
        .collect()
}

fn ellipse(frame: &Frame, radius: f64) -> RadialShape {
    RadialShape::Ellipse {
        rx: frame.pct_x(radius),
        ry: frame.pct_y(radius),
    }
}

impl Primitive for Crystal {
    fn layers(&self, frame: &Frame, tint: Color) -> Vec<Gradient> {
        let glow = StopColor::tint(tint.lighten(0.7), self.brightness * 0.5);
        let mut layers = Vec::with_capacity(1 + self.facets.len());
        layers.push(Gradient::radial(
            ellipse(frame, self.size),
            frame.pct(self.position.0, self.position.1),
            vec![
                ColorStop::at(StopColor::tint(Color::white(), self.brightness), 0.0),
                ColorStop::at(glow, 40.0),
                ColorStop::at(StopColor::Transparent, 100.0),
            ],
        ));

        for facet in &self.facets {
            let tip = advance(self.position, facet.angle, facet.length);
            layers.push(Gradient::spot(
                ellipse(frame, facet.length * 0.3),
                frame.pct(tip.0, tip.1),
                StopColor::tint(Color::white(), facet.brightness),
                100.0,
            ));
        }

        layers
    }
}
