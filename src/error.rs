//! Error types for the image-renamer application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Input errors
    #[error("No text file found. Tried: {0}")]
    TextFileNotFound(String),

    #[error("Failed to read text file {path}: {source}")]
    TextFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No item names found in {0}. Please check your text file.")]
    NoItemNames(PathBuf),

    // Rename errors
    #[error("Failed to list source directory {path}: {source}")]
    SourceDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No images were renamed ({failed} of {total} copies failed)")]
    NothingRenamed { total: usize, failed: usize },

    #[error("Copy task failed: {0}")]
    Copy(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}
