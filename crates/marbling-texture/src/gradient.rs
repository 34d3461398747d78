//! Structured gradient layers and their stylesheet serialization.
//!
//! Primitives build [`Gradient`] values; strings are only produced at the
//! boundary via [`Display`](std::fmt::Display) and [`join_layers`].

use std::fmt;

use crate::color::Color;

/// Color of a single stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopColor {
    /// Literal hex color such as `#1e3a8a`.
    Hex(&'static str),
    /// Color with alpha in [0, 1].
    Rgba(Color, f64),
    Transparent,
}

impl StopColor {
    /// Tinted stop with the alpha clamped to [0, 1].
    pub fn tint(color: Color, alpha: f64) -> Self {
        StopColor::Rgba(color, alpha.clamp(0.0, 1.0))
    }

    pub fn alpha(&self) -> f64 {
        match self {
            StopColor::Hex(_) => 1.0,
            StopColor::Rgba(_, a) => *a,
            StopColor::Transparent => 0.0,
        }
    }
}

/// Where along the gradient a stop sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopPosition {
    Percent(f64),
    Degrees(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub color: StopColor,
    pub position: StopPosition,
}

impl ColorStop {
    pub fn at(color: StopColor, percent: f64) -> Self {
        Self {
            color,
            position: StopPosition::Percent(percent),
        }
    }

    pub fn at_deg(color: StopColor, degrees: f64) -> Self {
        Self {
            color,
            position: StopPosition::Degrees(degrees),
        }
    }
}

/// Ending shape of a radial gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadialShape {
    Circle,
    /// Explicit radii as percentages of the box.
    Ellipse { rx: f64, ry: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    /// Angle in degrees, 0deg pointing up.
    Linear { angle: f64 },
    /// Center in percent of the box.
    Radial { shape: RadialShape, at: (f64, f64) },
    /// Start angle in degrees, center in percent of the box.
    Conic { from: f64, at: (f64, f64) },
}

/// One background layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub kind: GradientKind,
    pub stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn linear(angle: f64, stops: Vec<ColorStop>) -> Self {
        Self {
            kind: GradientKind::Linear { angle },
            stops,
        }
    }

    pub fn radial(shape: RadialShape, at: (f64, f64), stops: Vec<ColorStop>) -> Self {
        Self {
            kind: GradientKind::Radial { shape, at },
            stops,
        }
    }

    pub fn conic(from: f64, at: (f64, f64), stops: Vec<ColorStop>) -> Self {
        Self {
            kind: GradientKind::Conic { from, at },
            stops,
        }
    }

    /// Linear gradient that is transparent except for a band of `color`
    /// centered at `center` percent with half-width `half_width` percent.
    pub fn band(angle: f64, center: f64, half_width: f64, color: StopColor) -> Self {
        let half_width = half_width.max(0.01);
        Self::linear(
            angle,
            vec![
                ColorStop::at(StopColor::Transparent, center - half_width),
                ColorStop::at(color, center),
                ColorStop::at(StopColor::Transparent, center + half_width),
            ],
        )
    }

    /// Radial spot fading from `color` at the center to transparent at `radius`.
    pub fn spot(shape: RadialShape, at: (f64, f64), color: StopColor, radius: f64) -> Self {
        Self::radial(
            shape,
            at,
            vec![
                ColorStop::at(color, 0.0),
                ColorStop::at(StopColor::Transparent, radius.max(0.01)),
            ],
        )
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            GradientKind::Linear { .. } => "linear",
            GradientKind::Radial { .. } => "radial",
            GradientKind::Conic { .. } => "conic",
        }
    }
}

/// Format a number with at most two decimals and no trailing zeros.
pub(crate) fn fmt_num(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let rounded = (value * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{:.2}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn fmt_alpha(alpha: f64) -> String {
    let alpha = if alpha.is_finite() {
        alpha.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let text = format!("{:.3}", alpha);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() {
        "0".to_string()
    } else {
        text.to_string()
    }
}

impl fmt::Display for StopColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopColor::Hex(hex) => f.write_str(hex),
            StopColor::Rgba(color, alpha) => {
                let [r, g, b] = color.to_rgb8();
                write!(f, "rgba({}, {}, {}, {})", r, g, b, fmt_alpha(*alpha))
            }
            StopColor::Transparent => f.write_str("transparent"),
        }
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            StopPosition::Percent(p) => write!(f, "{} {}%", self.color, fmt_num(p)),
            StopPosition::Degrees(d) => write!(f, "{} {}deg", self.color, fmt_num(d)),
        }
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            GradientKind::Linear { angle } => {
                write!(f, "linear-gradient({}deg", fmt_num(angle))?;
            }
            GradientKind::Radial { shape, at } => {
                f.write_str("radial-gradient(")?;
                match shape {
                    RadialShape::Circle => f.write_str("circle")?,
                    RadialShape::Ellipse { rx, ry } => {
                        let (rx, ry) = (fmt_num(rx.max(0.0)), fmt_num(ry.max(0.0)));
                        write!(f, "ellipse {}% {}%", rx, ry)?;
                    }
                }
                write!(f, " at {}% {}%", fmt_num(at.0), fmt_num(at.1))?;
            }
            GradientKind::Conic { from, at } => {
                write!(
                    f,
                    "conic-gradient(from {}deg at {}% {}%",
                    fmt_num(from),
                    fmt_num(at.0),
                    fmt_num(at.1)
                )?;
            }
        }
        for stop in &self.stops {
            write!(f, ", {}", stop)?;
        }
        f.write_str(")")
    }
}

/// Serialize layers as a comma-joined layered-background value.
pub fn join_layers(layers: &[Gradient]) -> String {
    layers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fmt_num_trims() {
        assert_eq!(fmt_num(50.0), "50");
        assert_eq!(fmt_num(12.5), "12.5");
        assert_eq!(fmt_num(3.14159), "3.14");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(fmt_num(f64::NAN), "0");
    }

    #[test]
    fn test_linear_serialization() {
        let g = Gradient::linear(
            135.0,
            vec![
                ColorStop::at(StopColor::Hex("#1e3a8a"), 0.0),
                ColorStop::at(StopColor::Hex("#3b82f6"), 50.0),
            ],
        );
        assert_eq!(
            g.to_string(),
            "linear-gradient(135deg, #1e3a8a 0%, #3b82f6 50%)"
        );
    }

    #[test]
    fn test_radial_serialization() {
        let g = Gradient::spot(
            RadialShape::Ellipse { rx: 10.0, ry: 4.5 },
            (25.0, 75.0),
            StopColor::tint(Color::from_rgb8([255, 0, 0]), 0.5),
            30.0,
        );
        assert_eq!(
            g.to_string(),
            "radial-gradient(ellipse 10% 4.5% at 25% 75%, rgba(255, 0, 0, 0.5) 0%, transparent 30%)"
        );
    }

    #[test]
    fn test_conic_serialization() {
        let g = Gradient::conic(
            45.0,
            (50.0, 50.0),
            vec![
                ColorStop::at_deg(StopColor::Transparent, 0.0),
                ColorStop::at_deg(StopColor::tint(Color::white(), 0.25), 90.0),
            ],
        );
        assert_eq!(
            g.to_string(),
            "conic-gradient(from 45deg at 50% 50%, transparent 0deg, rgba(255, 255, 255, 0.25) 90deg)"
        );
    }

    #[test]
    fn test_band_stops() {
        let g = Gradient::band(90.0, 40.0, 2.0, StopColor::Transparent);
        assert_eq!(g.stops.len(), 3);
        assert_eq!(g.stops[0].position, StopPosition::Percent(38.0));
        assert_eq!(g.stops[2].position, StopPosition::Percent(42.0));
    }

    #[test]
    fn test_tint_clamps_alpha() {
        assert_eq!(StopColor::tint(Color::white(), 3.0).alpha(), 1.0);
        assert_eq!(StopColor::tint(Color::white(), -1.0).alpha(), 0.0);
    }

    #[test]
    fn test_join_layers() {
        let a = Gradient::band(0.0, 50.0, 1.0, StopColor::Transparent);
        let b = Gradient::spot(RadialShape::Circle, (1.0, 2.0), StopColor::Transparent, 5.0);
        let joined = join_layers(&[a.clone(), b.clone()]);
        assert_eq!(joined, format!("{}, {}", a, b));
        assert_eq!(join_layers(&[]), "");
    }
}
