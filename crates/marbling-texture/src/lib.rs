//! Marbling texture synthesis.
//!
//! This crate generates decorative marble backgrounds as layered stylesheet
//! gradients. A texture is a base gradient plus randomly parameterized veins,
//! swirls, flow lines, inclusions, crystals and stress cracks, split into a
//! background stack and an overlay stack.
//!
//! # Example
//!
//! ```
//! use marbling_texture::TextureGenerator;
//!
//! let mut generator = TextureGenerator::new(42);
//! let texture = generator.generate_texture("blue", 400.0, 300.0);
//! assert!(texture.background.contains("#1e3a8a"));
//! assert!(!texture.overlay.is_empty());
//!
//! let css = generator.generate_style_rules("purple", "hero");
//! assert!(css.contains(".hero::before"));
//! ```
//!
//! # Determinism
//!
//! - All randomness comes from a PCG32 stream derived from the base seed
//! - Each generation call gets its own derived seed, so a fresh generator
//!   with the same seed replays the same sequence of textures
//! - The fractal field seeds its Sierpinski walk from the sample point, so
//!   memoized values are pure functions of their keys
//!
//! Unknown color identifiers fall back to blue; generation never fails.

pub mod cache;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod generate;
pub mod gradient;
pub mod noise;
pub mod primitives;
pub mod rng;

// Re-export main types for convenience
pub use cache::{CacheStats, MemoCache};
pub use color::{Color, MarbleColor};
pub use config::TextureConfig;
pub use error::TextureError;
pub use frame::Frame;
pub use generate::{
    base_gradient, CacheReport, GeneratedTexture, LayerGroup, Surface, Texture, TextureGenerator,
};
pub use gradient::{join_layers, ColorStop, Gradient, GradientKind, RadialShape, StopColor};
pub use noise::{julia, mandelbrot, FlowSample, NoiseParams};
pub use primitives::{
    generate_crystals, generate_flow_patterns, generate_inclusions, generate_stress_patterns,
    generate_swirls, generate_veins, Primitive,
};
pub use rng::DeterministicRng;
