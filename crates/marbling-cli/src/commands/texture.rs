//! Texture command implementation
//!
//! Prints the background and overlay layer lists for one texture.

use anyhow::{Context, Result};
use marbling_texture::{LayerGroup, TextureGenerator};
use serde::Serialize;
use std::process::ExitCode;

use super::load_generator;

/// JSON form of a rendered texture.
#[derive(Debug, Serialize)]
struct TextureReport<'a> {
    color: &'static str,
    seed: u32,
    width: f64,
    height: f64,
    background: String,
    overlay: String,
    groups: &'a [LayerGroup],
}

/// Run the texture command
///
/// # Arguments
/// * `color` - Color identifier (unknown values fall back to blue)
/// * `width` / `height` - Target box in pixels
/// * `config` - Optional JSON config path
/// * `seed` - Optional seed override
/// * `json` - Emit a JSON report instead of plain text
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    color: &str,
    width: f64,
    height: f64,
    config: Option<&str>,
    seed: Option<u32>,
    json: bool,
) -> Result<ExitCode> {
    let mut generator = load_generator(config, seed)?;
    let output = render(&mut generator, color, width, height, json)?;
    println!("{}", output);
    Ok(ExitCode::SUCCESS)
}

/// Render one texture as text or JSON.
pub fn render(
    generator: &mut TextureGenerator,
    color: &str,
    width: f64,
    height: f64,
    json: bool,
) -> Result<String> {
    let texture = generator.generate(color, width, height);

    if json {
        let report = TextureReport {
            color: texture.color.name(),
            seed: generator.seed(),
            width,
            height,
            background: texture.background_css(),
            overlay: texture.overlay_css(),
            groups: &texture.groups,
        };
        return serde_json::to_string_pretty(&report).context("Failed to serialize texture");
    }

    Ok(format!(
        "background: {}\noverlay: {}",
        texture.background_css(),
        texture.overlay_css()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_render_text() {
        let mut generator = TextureGenerator::new(1);
        let output = render(&mut generator, "blue", 100.0, 100.0, false).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let head = "background: linear-gradient(135deg, #1e3a8a";
        assert!(lines[0].starts_with(head));
        assert!(lines[1].starts_with("overlay: "));
    }

    #[test]
    fn test_render_json() {
        let mut generator = TextureGenerator::new(2);
        let output = render(&mut generator, "unknown", 64.0, 32.0, true).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["color"], "blue");
        assert_eq!(value["seed"], 2);
        assert_eq!(value["width"], 64.0);
        assert!(value["background"].as_str().unwrap().contains("#1e3a8a"));
        assert_eq!(value["groups"][0]["name"], "base");
        assert_eq!(value["groups"][0]["surface"], "background");
        assert_eq!(value["groups"][0]["layers"], 1);
    }
}
