//! Errors raised while reading route shapes

use thiserror::Error;

/// A route shape document could not be parsed
///
/// Only syntax and type errors end up here. Missing fields never do: every
/// shape field has a default.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("invalid route shape JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid route shape TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
