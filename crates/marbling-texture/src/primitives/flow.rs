//! Flow lines that bend along a noise-driven vector field.

use std::ops::RangeInclusive;

use super::{advance, Primitive};
use crate::color::Color;
use crate::frame::Frame;
use crate::gradient::{Gradient, RadialShape, StopColor};
use crate::noise::FlowSample;
use crate::rng::DeterministicRng;

/// Flow patterns per texture.
pub const FLOW_COUNT: RangeInclusive<usize> = 8..=22;
const CONTROL_POINT_COUNT: RangeInclusive<usize> = 3..=7;

/// How strongly the field turns the path at each control point.
const BEND: f64 = 0.25;
/// Stroke thickness as a fraction of the shorter side.
const STROKE_WIDTH: f64 = 0.006;

#[derive(Debug, Clone, PartialEq)]
pub struct FlowPattern {
    pub start: (f64, f64),
    /// Path length as a fraction of the diagonal.
    pub length_fraction: f64,
    pub points: Vec<ControlPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoint {
    pub position: (f64, f64),
    pub intensity: f64,
}

/// Generate 8 to 22 flow patterns with 3 to 7 control points each.
///
/// `field` is sampled at normalized coordinates (x / width, y / height).
pub fn generate_flow_patterns<F>(
    rng: &mut DeterministicRng,
    frame: &Frame,
    mut field: F,
) -> Vec<FlowPattern>
where
    F: FnMut(f64, f64) -> FlowSample,
{
    let count = rng.gen_count(FLOW_COUNT);
    (0..count)
        .map(|_| {
            let start = (
                rng.gen_f64() * frame.width(),
                rng.gen_f64() * frame.height(),
            );
            let length_fraction = rng.gen_between(0.2, 0.6);
            let point_count = rng.gen_count(CONTROL_POINT_COUNT);
            let step = length_fraction * frame.diagonal() / (point_count - 1) as f64;

            let mut heading = rng.gen_f64() * 360.0;
            let mut position = start;
            let mut points = Vec::with_capacity(point_count);
            for _ in 0..point_count {
                let flow = field(position.0 / frame.width(), position.1 / frame.height());
                points.push(ControlPoint {
                    position,
                    intensity: rng.gen_between(0.05, 0.2) * (0.5 + 0.5 * flow.strength),
                });
                heading += flow.angle.to_degrees() * BEND;
                position = advance(position, heading, step);
            }

            FlowPattern {
                start,
                length_fraction,
                points,
            }
        })
        .collect()
}

/// Direction in degrees from `a` to `b`.
fn direction(a: (f64, f64), b: (f64, f64)) -> f64 {
    (b.0 - a.0).atan2(-(b.1 - a.1)).to_degrees()
}

impl Primitive for FlowPattern {
    fn layers(&self, frame: &Frame, tint: Color) -> Vec<Gradient> {
        let color = tint.lighten(0.3);
        let thickness = frame.min_side() * STROKE_WIDTH;
        let mut layers = Vec::with_capacity(self.points.len() * 2);

        for pair in self.points.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let mid = (
                (a.position.0 + b.position.0) * 0.5,
                (a.position.1 + b.position.1) * 0.5,
            );
            layers.push(frame.stroke(
                mid.0,
                mid.1,
                direction(a.position, b.position),
                thickness,
                StopColor::tint(color, (a.intensity + b.intensity) * 0.5),
            ));
        }

        let spot_radius = self.length_fraction * frame.diagonal() * 0.05;
        for point in &self.points {
            layers.push(Gradient::spot(
                RadialShape::Ellipse {
                    rx: frame.pct_x(spot_radius),
                    ry: frame.pct_y(spot_radius),
                },
                frame.pct(point.position.0, point.position.1),
                StopColor::tint(color, point.intensity),
                100.0,
            ));
        }

        layers
    }
}
