//! Marbling CLI library.
//!
//! Command implementations behind the `marbling` binary: rendering textures
//! and stylesheet rules, listing colors and inspecting layer composition.

pub mod commands;
