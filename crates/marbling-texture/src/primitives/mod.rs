//! Randomly parameterized marble features.
//!
//! Each family has a `generate_*` function that draws a random count of
//! structures from a [`DeterministicRng`](crate::rng::DeterministicRng), and
//! a [`Primitive`] impl that turns one structure into gradient layers.
//! Positions and lengths are in pixels of the target [`Frame`].

mod crystals;
mod flow;
mod inclusions;
mod stress;
mod swirls;
mod veins;

pub use crystals::{generate_crystals, Crystal, Facet, CRYSTAL_COUNT};
pub use flow::{generate_flow_patterns, ControlPoint, FlowPattern, FLOW_COUNT};
pub use inclusions::{generate_inclusions, Inclusion, InclusionShape, INCLUSION_COUNT};
pub use stress::{
    generate_stress_patterns, StressBranch, StressPattern, SubBranch, VeinEdge, STRESS_COUNT,
};
pub use swirls::{generate_swirls, Swirl, SwirlLayer, SWIRL_COUNT};
pub use veins::{generate_veins, Vein, VeinBranch, VEIN_COUNT};

use crate::color::Color;
use crate::frame::Frame;
use crate::gradient::Gradient;

/// A structure that can paint itself as gradient layers.
pub trait Primitive {
    /// Layers for this structure, back to front.
    fn layers(&self, frame: &Frame, tint: Color) -> Vec<Gradient>;
}

/// Flatten the layers of every structure in order.
pub fn layers_of<P: Primitive>(items: &[P], frame: &Frame, tint: Color) -> Vec<Gradient> {
    items
        .iter()
        .flat_map(|item| item.layers(frame, tint))
        .collect()
}

/// Unit step for a direction in degrees (0deg up, 90deg right, y down).
#[inline]
pub(crate) fn heading(angle: f64) -> (f64, f64) {
    let rad = angle.to_radians();
    (rad.sin(), -rad.cos())
}

/// Move `distance` pixels from `point` toward `angle`.
#[inline]
pub(crate) fn advance(point: (f64, f64), angle: f64, distance: f64) -> (f64, f64) {
    let (dx, dy) = heading(angle);
    (point.0 + dx * distance, point.1 + dy * distance)
}
