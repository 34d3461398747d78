//! Stress cracks with forking branches and zigzag vein edges.

use std::ops::RangeInclusive;

use super::{advance, Primitive};
use crate::color::Color;
use crate::frame::Frame;
use crate::gradient::{ColorStop, Gradient, RadialShape, StopColor};
use crate::rng::DeterministicRng;

/// Stress patterns per texture.
pub const STRESS_COUNT: RangeInclusive<usize> = 2..=7;
const BRANCH_COUNT: RangeInclusive<usize> = 1..=3;
const SUB_BRANCH_COUNT: RangeInclusive<usize> = 1..=2;
const EDGE_POINT_COUNT: RangeInclusive<usize> = 2..=5;

const CRACK_ALPHA: f64 = 0.35;

#[derive(Debug, Clone, PartialEq)]
pub struct StressPattern {
    pub start: (f64, f64),
    pub length: f64,
    pub angle: f64,
    pub thickness: f64,
    pub branches: Vec<StressBranch>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StressBranch {
    /// Fraction along the crack where the branch forks.
    pub offset: f64,
    pub angle: f64,
    pub length: f64,
    pub thickness: f64,
    pub sub_branches: Vec<SubBranch>,
    pub vein_edges: Vec<VeinEdge>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubBranch {
    /// Fraction along the parent branch.
    pub offset: f64,
    pub angle: f64,
    pub length: f64,
    pub thickness: f64,
}

/// One point of the zigzag edge running beside a branch.
#[derive(Debug, Clone, PartialEq)]
pub struct VeinEdge {
    /// Fraction along the parent branch.
    pub position: f64,
    /// Perpendicular offset in pixels (signed).
    pub offset: f64,
    /// 0 = soft falloff, 1 = hard edge.
    pub sharpness: f64,
}

/// Generate 2 to 7 stress patterns.
pub fn generate_stress_patterns(rng: &mut DeterministicRng, frame: &Frame) -> Vec<StressPattern> {
    let count = rng.gen_count(STRESS_COUNT);
    (0..count)
        .map(|_| {
            let start = (
                rng.gen_f64() * frame.width(),
                rng.gen_f64() * frame.height(),
            );
            let length = rng.gen_between(0.2, 0.6) * frame.diagonal();
            let angle = rng.gen_f64() * 360.0;
            let thickness = rng.gen_between(0.002, 0.008) * frame.min_side();

            let branch_count = rng.gen_count(BRANCH_COUNT);
            let branches = (0..branch_count)
                .map(|_| generate_branch(rng, angle, length, thickness))
                .collect();

            StressPattern {
                start,
                length,
                angle,
                thickness,
                branches,
            }
        })
        .collect()
}

fn generate_branch(
    rng: &mut DeterministicRng,
    parent_angle: f64,
    parent_length: f64,
    parent_thickness: f64,
) -> StressBranch {
    let angle = parent_angle + rng.gen_signed_f64() * 70.0;
    let length = parent_length * rng.gen_between(0.2, 0.5);
    let thickness = parent_thickness * rng.gen_between(0.4, 0.8);

    let sub_count = rng.gen_count(SUB_BRANCH_COUNT);
    let sub_branches = (0..sub_count)
        .map(|_| SubBranch {
            offset: rng.gen_between(0.2, 0.8),
            angle: angle + rng.gen_signed_f64() * 60.0,
            length: length * rng.gen_between(0.2, 0.5),
            thickness: thickness * rng.gen_between(0.4, 0.8),
        })
        .collect();

    let edge_count = rng.gen_count(EDGE_POINT_COUNT);
    let vein_edges = (0..edge_count)
        .map(|_| VeinEdge {
            position: rng.gen_f64(),
            offset: rng.gen_signed_f64() * thickness * 4.0,
            sharpness: rng.gen_between(0.3, 1.0),
        })
        .collect();

    StressBranch {
        offset: rng.gen_between(0.1, 0.9),
        angle,
        length,
        thickness,
        sub_branches,
        vein_edges,
    }
}

impl Primitive for StressPattern {
    fn layers(&self, frame: &Frame, tint: Color) -> Vec<Gradient> {
        let crack = tint.darken(0.4);
        let mid = advance(self.start, self.angle, self.length * 0.5);
        let mut layers = vec![frame.stroke(
            mid.0,
            mid.1,
            self.angle,
            self.thickness,
            StopColor::tint(crack, CRACK_ALPHA),
        )];

        for branch in &self.branches {
            let fork = advance(self.start, self.angle, self.length * branch.offset);
            let branch_mid = advance(fork, branch.angle, branch.length * 0.5);
            layers.push(frame.stroke(
                branch_mid.0,
                branch_mid.1,
                branch.angle,
                branch.thickness,
                StopColor::tint(crack, CRACK_ALPHA * 0.8),
            ));

            for sub in &branch.sub_branches {
                let sub_fork = advance(fork, branch.angle, branch.length * sub.offset);
                let sub_mid = advance(sub_fork, sub.angle, sub.length * 0.5);
                layers.push(frame.stroke(
                    sub_mid.0,
                    sub_mid.1,
                    sub.angle,
                    sub.thickness,
                    StopColor::tint(crack, CRACK_ALPHA * 0.6),
                ));
            }

            for edge in &branch.vein_edges {
                let along = advance(fork, branch.angle, branch.length * edge.position);
                let point = advance(along, branch.angle + 90.0, edge.offset);
                let radius = branch.thickness * 2.0;
                let color = StopColor::tint(crack, CRACK_ALPHA * edge.sharpness);
                layers.push(Gradient::radial(
                    RadialShape::Ellipse {
                        rx: frame.pct_x(radius),
                        ry: frame.pct_y(radius),
                    },
                    frame.pct(point.0, point.1),
                    vec![
                        ColorStop::at(color, 0.0),
                        ColorStop::at(color, edge.sharpness * 60.0),
                        ColorStop::at(StopColor::Transparent, 100.0),
                    ],
                ));
            }
        }

        layers
    }
}

impl StressPattern {
    /// Number of layers [`Primitive::layers`] emits for this pattern.
    pub fn layer_count(&self) -> usize {
        1 + self
            .branches
            .iter()
            .map(|b| 1 + b.sub_branches.len() + b.vein_edges.len())
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_counts_in_range() {
        let frame = Frame::new(250.0, 250.0);
        for seed in 0..100 {
            let patterns = generate_stress_patterns(&mut DeterministicRng::new(seed), &frame);
            assert!(STRESS_COUNT.contains(&patterns.len()));
            for pattern in &patterns {
                assert!(BRANCH_COUNT.contains(&pattern.branches.len()));
                for branch in &pattern.branches {
                    assert!(SUB_BRANCH_COUNT.contains(&branch.sub_branches.len()));
                    assert!(EDGE_POINT_COUNT.contains(&branch.vein_edges.len()));
                    for edge in &branch.vein_edges {
                        assert!((0.3..=1.0).contains(&edge.sharpness));
                        assert!(edge.offset.abs() <= branch.thickness * 4.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_stress_layer_count() {
        let frame = Frame::new(100.0, 80.0);
        let patterns = generate_stress_patterns(&mut DeterministicRng::new(21), &frame);
        for pattern in &patterns {
            let layers = pattern.layers(&frame, Color::rgb(0.9, 0.6, 0.1));
            assert_eq!(layers.len(), pattern.layer_count());
            assert_eq!(layers[0].kind_name(), "linear");
        }
    }
}
