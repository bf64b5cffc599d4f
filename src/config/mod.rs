//! Configuration module for the image-renamer.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, InputConfig, RenameConfig, DEFAULT_CANDIDATES};
pub use validation::{normalize_extension, validate_config, MAX_WORKERS, MIN_WORKERS};
