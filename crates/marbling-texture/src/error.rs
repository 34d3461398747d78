//! Error types for the marbling texture crate.
//!
//! Texture synthesis itself never fails; these errors only surface from
//! strict color parsing and from loading or validating a [`TextureConfig`].
//!
//! [`TextureConfig`]: crate::config::TextureConfig

use thiserror::Error;

/// Errors produced outside of the (infallible) generation path.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("unknown marble color: {0:?}")]
    UnknownColor(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
