//! Target box geometry: converts pixel placements into gradient percentages.

use crate::gradient::{Gradient, StopColor};

/// Pixel dimensions of the element a texture is painted on.
///
/// Dimensions below one pixel (including zero, negative and non-finite
/// values) are clamped to one, which yields degenerate but valid layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    width: f64,
    height: f64,
}

impl Frame {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Length of the diagonal in pixels.
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Shorter side in pixels.
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Horizontal pixel offset as a percentage of the width.
    pub fn pct_x(&self, x: f64) -> f64 {
        x * 100.0 / self.width
    }

    /// Vertical pixel offset as a percentage of the height.
    pub fn pct_y(&self, y: f64) -> f64 {
        y * 100.0 / self.height
    }

    /// Pixel point as a percentage position.
    pub fn pct(&self, x: f64, y: f64) -> (f64, f64) {
        (self.pct_x(x), self.pct_y(y))
    }

    /// Length of a linear gradient line at `angle` degrees.
    pub fn line_length(&self, angle: f64) -> f64 {
        let rad = angle.to_radians();
        (self.width * rad.sin().abs() + self.height * rad.cos().abs()).max(1.0)
    }

    /// Position of pixel point `(x, y)` along the gradient line at `angle`
    /// degrees, as a percentage (0% at the start edge, 100% at the end edge).
    pub fn project(&self, x: f64, y: f64, angle: f64) -> f64 {
        let rad = angle.to_radians();
        let dx = x - self.width * 0.5;
        let dy = y - self.height * 0.5;
        let along = dx * rad.sin() - dy * rad.cos();
        (along / self.line_length(angle) + 0.5) * 100.0
    }

    /// Thin stroke through `(x, y)` running in direction `direction` degrees.
    ///
    /// The stroke is a band of a linear gradient whose axis is perpendicular
    /// to the stroke direction.
    pub fn stroke(
        &self,
        x: f64,
        y: f64,
        direction: f64,
        thickness: f64,
        color: StopColor,
    ) -> Gradient {
        let axis = direction + 90.0;
        let center = self.project(x, y, axis);
        let half_width = thickness.max(0.0) * 0.5 / self.line_length(axis) * 100.0;
        Gradient::band(normalize_degrees(axis), center, half_width, color)
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value >= 1.0 {
        value
    } else {
        1.0
    }
}

/// Wrap an angle into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    if angle.is_finite() {
        angle.rem_euclid(360.0)
    } else {
        0.0
    }
}
