//! Marbling CLI - Command-line interface for procedural marble textures
//!
//! This binary renders marble textures as stylesheet gradient layers, either
//! as raw layer lists or as ready-to-paste class rules.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// Use modules from the library crate
use marbling_cli::commands;

/// Marbling - Procedural marble textures as layered gradients
#[derive(Parser)]
#[command(name = "marbling")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the background and overlay layer lists for one texture
    Texture {
        /// Color identifier (blue, green, purple, red, yellow, orange)
        #[arg(short, long, default_value = "blue")]
        color: String,

        /// Target width in pixels
        #[arg(long, default_value_t = 400.0)]
        width: f64,

        /// Target height in pixels
        #[arg(long, default_value_t = 400.0)]
        height: f64,

        /// Seed override
        #[arg(short, long)]
        seed: Option<u32>,

        /// Path to a JSON generator config
        #[arg(long)]
        config: Option<String>,

        /// Output a machine-readable JSON report
        #[arg(long)]
        json: bool,
    },

    /// Render stylesheet rules for a marble class
    Css {
        /// Color identifier (blue, green, purple, red, yellow, orange)
        #[arg(short, long, default_value = "blue")]
        color: String,

        /// Class name for the generated selectors
        #[arg(long, default_value = "marble")]
        class: String,

        /// Seed override
        #[arg(short, long)]
        seed: Option<u32>,

        /// Path to a JSON generator config
        #[arg(long)]
        config: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the supported color identifiers
    Colors,

    /// Show per-family layer counts and cache usage for one texture
    Inspect {
        /// Color identifier (blue, green, purple, red, yellow, orange)
        #[arg(short, long, default_value = "blue")]
        color: String,

        /// Target width in pixels
        #[arg(long, default_value_t = 400.0)]
        width: f64,

        /// Target height in pixels
        #[arg(long, default_value_t = 400.0)]
        height: f64,

        /// Seed override
        #[arg(short, long)]
        seed: Option<u32>,

        /// Path to a JSON generator config
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Texture {
            color,
            width,
            height,
            seed,
            config,
            json,
        } => commands::texture::run(&color, width, height, config.as_deref(), seed, json),
        Commands::Css {
            color,
            class,
            seed,
            config,
            output,
        } => commands::css::run(&color, &class, config.as_deref(), seed, output.as_deref()),
        Commands::Colors => commands::colors::run(),
        Commands::Inspect {
            color,
            width,
            height,
            seed,
            config,
        } => commands::inspect::run(&color, width, height, config.as_deref(), seed),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
