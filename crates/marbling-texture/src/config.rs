//! Generator configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TextureError;
use crate::noise::NoiseParams;

/// Default base seed ("MARB" in ASCII).
pub const DEFAULT_SEED: u32 = 0x4d41_5242;
/// Default capacity of each memoization cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;
/// Default box used when rendering stylesheet rules.
pub const DEFAULT_STYLE_BOX: [f64; 2] = [400.0, 400.0];

/// Upper bounds accepted by [`TextureConfig::validate`].
pub const MAX_FRACTAL_LAYERS: u32 = 16;
pub const MAX_FRACTAL_DEPTH: u32 = 8;
pub const MAX_SPECKLE_GRID: u32 = 64;
pub const MAX_OCTAVES: u32 = 16;

/// Tunables for a [`TextureGenerator`](crate::TextureGenerator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextureConfig {
    /// Base seed; every layer is derived from it.
    #[serde(default = "default_seed")]
    pub seed: u32,
    /// Maximum entries held by each of the noise, fractal and flow caches.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// Parameters used for speckle and flow-field noise.
    #[serde(default)]
    pub noise: NoiseParams,
    /// Number of fractal overlays painted after the base gradient.
    #[serde(default = "default_fractal_layers")]
    pub fractal_layers: u32,
    /// Recursive scale levels summed per fractal sample.
    #[serde(default = "default_fractal_depth")]
    pub fractal_depth: u32,
    /// Speckle candidates per axis (the grid is `n x n`).
    #[serde(default = "default_speckle_grid")]
    pub speckle_grid: u32,
    /// Noise weight a speckle candidate must exceed to be emitted.
    #[serde(default = "default_speckle_threshold")]
    pub speckle_threshold: f64,
    /// Width and height used by `generate_style_rules`.
    #[serde(default = "default_style_box")]
    pub style_box: [f64; 2],
}

fn default_seed() -> u32 {
    DEFAULT_SEED
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

fn default_fractal_layers() -> u32 {
    3
}

fn default_fractal_depth() -> u32 {
    3
}

fn default_speckle_grid() -> u32 {
    6
}

fn default_speckle_threshold() -> f64 {
    0.15
}

fn default_style_box() -> [f64; 2] {
    DEFAULT_STYLE_BOX
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            cache_capacity: default_cache_capacity(),
            noise: NoiseParams::default(),
            fractal_layers: default_fractal_layers(),
            fractal_depth: default_fractal_depth(),
            speckle_grid: default_speckle_grid(),
            speckle_threshold: default_speckle_threshold(),
            style_box: default_style_box(),
        }
    }
}

impl TextureConfig {
    /// Default config with a specific seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse a config from JSON text and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, TextureError> {
        let config: TextureConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, TextureError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), TextureError> {
        if self.cache_capacity == 0 {
            return Err(TextureError::InvalidConfig(
                "cache_capacity must be at least 1".to_string(),
            ));
        }
        if self.fractal_depth == 0 {
            return Err(TextureError::InvalidConfig(
                "fractal_depth must be at least 1".to_string(),
            ));
        }
        if self.noise.octaves == 0 {
            return Err(TextureError::InvalidConfig(
                "noise.octaves must be at least 1".to_string(),
            ));
        }
        let bounded = [
            ("fractal_layers", self.fractal_layers, MAX_FRACTAL_LAYERS),
            ("fractal_depth", self.fractal_depth, MAX_FRACTAL_DEPTH),
            ("speckle_grid", self.speckle_grid, MAX_SPECKLE_GRID),
            ("noise.octaves", self.noise.octaves, MAX_OCTAVES),
        ];
        for (name, value, max) in bounded {
            if value > max {
                return Err(TextureError::InvalidConfig(format!(
                    "{} must be at most {}, got {}",
                    name, max, value
                )));
            }
        }
        let finite = [
            ("noise.frequency", self.noise.frequency),
            ("noise.persistence", self.noise.persistence),
            ("noise.lacunarity", self.noise.lacunarity),
            ("speckle_threshold", self.speckle_threshold),
            ("style_box[0]", self.style_box[0]),
            ("style_box[1]", self.style_box[1]),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(TextureError::InvalidConfig(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if self.noise.frequency <= 0.0 {
            return Err(TextureError::InvalidConfig(format!(
                "noise.frequency must be positive, got {}",
                self.noise.frequency
            )));
        }
        Ok(())
    }
}
