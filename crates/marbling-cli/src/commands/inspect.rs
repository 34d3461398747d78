//! Inspect command implementation
//!
//! Shows how many layers each feature family contributes and how the caches
//! were used.

use anyhow::Result;
use colored::Colorize;
use marbling_texture::{CacheReport, CacheStats, Surface, Texture};
use std::process::ExitCode;

use super::load_generator;

/// Run the inspect command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    color: &str,
    width: f64,
    height: f64,
    config: Option<&str>,
    seed: Option<u32>,
) -> Result<ExitCode> {
    let mut generator = load_generator(config, seed)?;
    let texture = generator.generate(color, width, height);

    println!(
        "{} {} ({}x{}, seed {})",
        "Inspecting:".cyan().bold(),
        texture.color,
        width,
        height,
        generator.seed()
    );
    println!();

    for line in group_lines(&texture) {
        if line.is_empty() || line.starts_with(' ') {
            println!("{}", line);
        } else {
            println!("{}", line.bold());
        }
    }

    println!("{}", "Caches:".bold());
    for line in cache_lines(&generator.cache_stats()) {
        println!("{}", line);
    }

    Ok(ExitCode::SUCCESS)
}

/// Per-surface totals followed by one indented line per layer group.
pub fn group_lines(texture: &Texture) -> Vec<String> {
    let mut lines = Vec::new();
    for surface in [Surface::Background, Surface::Overlay] {
        let (title, total) = match surface {
            Surface::Background => ("Background", texture.background.len()),
            Surface::Overlay => ("Overlay", texture.overlay.len()),
        };
        lines.push(format!("{}: {}", title, total));
        for group in texture.groups.iter().filter(|g| g.surface == surface) {
            lines.push(format!("  -> {:<11} {}", group.name, group.layers));
        }
        lines.push(String::new());
    }
    lines
}

/// One line per cache: entries, capacity, hits and misses.
pub fn cache_lines(report: &CacheReport) -> Vec<String> {
    [
        ("noise", &report.noise),
        ("fractal", &report.fractal),
        ("flow", &report.flow),
    ]
    .iter()
    .map(|(name, stats)| cache_line(name, stats))
    .collect()
}

fn cache_line(name: &str, stats: &CacheStats) -> String {
    format!(
        "  {}: {}/{} entries, {} hits, {} misses",
        name, stats.entries, stats.capacity, stats.hits, stats.misses
    )
}
