//! Css command implementation
//!
//! Renders stylesheet rules for a marble class.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use super::load_generator;

/// Run the css command
///
/// # Arguments
/// * `color` - Color identifier (unknown values fall back to blue)
/// * `class` - Class name for the generated selectors
/// * `config` - Optional JSON config path
/// * `seed` - Optional seed override
/// * `output` - Output file path (default: stdout)
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    color: &str,
    class: &str,
    config: Option<&str>,
    seed: Option<u32>,
    output: Option<&str>,
) -> Result<ExitCode> {
    let mut generator = load_generator(config, seed)?;
    let rules = generator.generate_style_rules(color, class);

    match output {
        Some(path) => {
            fs::write(path, &rules).with_context(|| format!("Failed to write to: {}", path))?;
            println!("{} Wrote rules to: {}", "SUCCESS".green().bold(), path);
        }
        None => print!("{}", rules),
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_rules_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marble.css");
        let path_str = path.to_str().unwrap();

        let code = run("green", "tile", None, Some(3), Some(path_str)).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let css = fs::read_to_string(&path).unwrap();
        let head = ".tile {\n  background: linear-gradient(135deg, #064e3b";
        assert!(css.starts_with(head));
        assert!(css.contains(".tile::before {"));
    }

    #[test]
    fn test_unwritable_output_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("marble.css");
        let err = run("blue", "x", None, None, path.to_str()).unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
