//! Colors command implementation
//!
//! Lists the supported color identifiers.

use anyhow::Result;
use colored::Colorize;
use marbling_texture::MarbleColor;
use std::process::ExitCode;

/// Run the colors command
pub fn run() -> Result<ExitCode> {
    println!("{}", "Marble colors".cyan().bold());
    for line in color_lines() {
        println!("  {}", line);
    }
    Ok(ExitCode::SUCCESS)
}

/// One uncolored line per identifier, default first.
pub fn color_lines() -> Vec<String> {
    MarbleColor::ALL
        .iter()
        .map(|color| {
            let [r, g, b] = color.base_rgb();
            let default = if *color == MarbleColor::default() {
                " (default)"
            } else {
                ""
            };
            format!(
                "{:<8} rgb({}, {}, {})  {}{}",
                color.name(),
                r,
                g,
                b,
                color.base_stops().join(" "),
                default
            )
        })
        .collect()
}
