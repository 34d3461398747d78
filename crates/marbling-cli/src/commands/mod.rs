//! CLI command implementations

pub mod colors;
pub mod css;
pub mod inspect;
pub mod texture;

use std::path::Path;

use anyhow::{Context, Result};
use marbling_texture::{TextureConfig, TextureGenerator};

/// Build a generator from an optional JSON config and an optional seed override.
pub fn load_generator(config_path: Option<&str>, seed: Option<u32>) -> Result<TextureGenerator> {
    let mut config = match config_path {
        Some(path) => TextureConfig::from_json_file(Path::new(path))
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => TextureConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    tracing::debug!(seed = config.seed, "building texture generator");
    Ok(TextureGenerator::with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_generator_defaults() {
        let generator = load_generator(None, None).unwrap();
        assert_eq!(generator.config(), &TextureConfig::default());
    }

    #[test]
    fn test_seed_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marble.json");
        std::fs::write(&path, r#"{"seed": 5, "fractal_layers": 2}"#).unwrap();

        let generator = load_generator(path.to_str(), Some(11)).unwrap();
        assert_eq!(generator.seed(), 11);
        assert_eq!(generator.config().fractal_layers, 2);
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"cache_capacity": 0}"#).unwrap();

        let err = load_generator(path.to_str(), None).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to load config"));
        assert!(message.contains("cache_capacity"));
    }
}
