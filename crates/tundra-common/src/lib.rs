//! tundra-common: Shared building blocks for the tundra crates.
//!
//! This crate contains functionality used by both the pipeline authoring
//! library (tundra) and the container-build CLI (tundra-cli):
//!
//! - `config/` - Component identifiers, YAML helpers, and environment
//!   variable interpolation
//! - `error` - Common error types

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::{ComponentKey, InterpolationResult, interpolate, is_yaml_file, read_interpolated};
pub use error::ConfigError;
