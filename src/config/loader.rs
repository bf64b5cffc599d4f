//! Configuration structures and loading logic.

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub rename: RenameConfig,
}

/// Where item names come from.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Explicit path to the names file. Auto-discovered when unset.
    #[serde(default)]
    pub text_file: Option<PathBuf>,

    /// Filenames probed in the working directory, in order.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            text_file: None,
            candidates: default_candidates(),
        }
    }
}

/// Batch rename options.
#[derive(Debug, Clone, Deserialize)]
pub struct RenameConfig {
    /// Directory containing the original images.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Directory where renamed copies are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Image extension to match and to give the copies.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Number of concurrent copy workers.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            extension: default_extension(),
            workers: default_workers(),
        }
    }
}

/// Candidate names file list, probed when no text file is given.
pub const DEFAULT_CANDIDATES: [&str; 4] = ["paste.txt", "paste", "item_names.txt", "items.txt"];

fn default_candidates() -> Vec<String> {
    DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect()
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("original_images")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("renamed_images")
}

fn default_extension() -> String {
    ".png".to_string()
}

fn default_workers() -> usize {
    4
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration if the file exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            tracing::debug!("Loading configuration from {}", path.display());
            Self::load(path)
        } else {
            tracing::debug!(
                "No configuration file at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }
}
