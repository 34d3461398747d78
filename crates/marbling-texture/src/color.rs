//! Color palette and color utilities for marble synthesis.

use std::fmt;
use std::str::FromStr;

use crate::error::TextureError;

/// RGB color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Create a new color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create from 8-bit RGB.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0] as f64 / 255.0,
            g: rgb[1] as f64 / 255.0,
            b: rgb[2] as f64 / 255.0,
        }
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
        ]
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Linearly interpolate between two colors.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Mix toward white by `amount`.
    pub fn lighten(&self, amount: f64) -> Color {
        self.lerp(&Color::white(), amount)
    }

    /// Mix toward black by `amount`.
    pub fn darken(&self, amount: f64) -> Color {
        self.lerp(&Color::black(), amount)
    }

    /// Shift each channel by `delta` (in 0..1 units), clamped.
    pub fn shift(&self, delta: f64) -> Color {
        Color::rgb(self.r + delta, self.g + delta, self.b + delta).clamp()
    }
}

/// The fixed set of marble tints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarbleColor {
    #[default]
    Blue,
    Green,
    Purple,
    Red,
    Yellow,
    Orange,
}

impl MarbleColor {
    /// Every supported color, in display order.
    pub const ALL: [MarbleColor; 6] = [
        MarbleColor::Blue,
        MarbleColor::Green,
        MarbleColor::Purple,
        MarbleColor::Red,
        MarbleColor::Yellow,
        MarbleColor::Orange,
    ];

    /// Resolve an identifier, falling back to [`MarbleColor::Blue`] when it is
    /// not recognized.
    pub fn resolve(id: &str) -> MarbleColor {
        match id.parse() {
            Ok(color) => color,
            Err(_) => {
                tracing::debug!(color = id, "unknown marble color, using blue");
                MarbleColor::default()
            }
        }
    }

    /// Lowercase identifier.
    pub fn name(&self) -> &'static str {
        match self {
            MarbleColor::Blue => "blue",
            MarbleColor::Green => "green",
            MarbleColor::Purple => "purple",
            MarbleColor::Red => "red",
            MarbleColor::Yellow => "yellow",
            MarbleColor::Orange => "orange",
        }
    }

    /// Base RGB triple used for every tinted layer.
    pub fn base_rgb(&self) -> [u8; 3] {
        match self {
            MarbleColor::Blue => [59, 130, 246],
            MarbleColor::Green => [16, 185, 129],
            MarbleColor::Purple => [139, 92, 246],
            MarbleColor::Red => [239, 68, 68],
            MarbleColor::Yellow => [245, 158, 11],
            MarbleColor::Orange => [249, 115, 22],
        }
    }

    /// Base color as a [`Color`].
    pub fn base_color(&self) -> Color {
        Color::from_rgb8(self.base_rgb())
    }

    /// Hex stops of the base gradient: dark, mid, deep.
    pub fn base_stops(&self) -> [&'static str; 3] {
        match self {
            MarbleColor::Blue => ["#1e3a8a", "#3b82f6", "#1e40af"],
            MarbleColor::Green => ["#064e3b", "#10b981", "#065f46"],
            MarbleColor::Purple => ["#4c1d95", "#8b5cf6", "#5b21b6"],
            MarbleColor::Red => ["#7f1d1d", "#ef4444", "#991b1b"],
            MarbleColor::Yellow => ["#78350f", "#f59e0b", "#92400e"],
            MarbleColor::Orange => ["#7c2d12", "#f97316", "#9a3412"],
        }
    }
}

impl fmt::Display for MarbleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarbleColor {
    type Err = TextureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        MarbleColor::ALL
            .into_iter()
            .find(|color| color.name() == id)
            .ok_or_else(|| TextureError::UnknownColor(s.to_string()))
    }
}
