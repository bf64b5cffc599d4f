//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Minimum number of copy workers.
pub const MIN_WORKERS: usize = 1;

/// Maximum number of copy workers.
pub const MAX_WORKERS: usize = 64;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_workers(config.rename.workers)?;
    normalize_extension(&config.rename.extension)?;
    validate_candidates(&config.input.candidates)?;

    Ok(())
}

/// Validate the copy worker count.
pub fn validate_workers(workers: usize) -> Result<()> {
    if !(MIN_WORKERS..=MAX_WORKERS).contains(&workers) {
        return Err(Error::ConfigValidation {
            field: "workers".to_string(),
            message: format!(
                "Worker count must be between {} and {} (got {})",
                MIN_WORKERS, MAX_WORKERS, workers
            ),
        });
    }

    Ok(())
}

/// Normalize an image extension to its lowercase, dot-prefixed form.
///
/// `png`, `.png` and `.PNG` all become `.png`.
pub fn normalize_extension(extension: &str) -> Result<String> {
    let trimmed = extension.trim();
    let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);

    if bare.is_empty() {
        return Err(Error::ConfigValidation {
            field: "extension".to_string(),
            message: "Extension cannot be empty".to_string(),
        });
    }

    if bare.contains('/') || bare.contains('\\') || bare.contains('\0') {
        return Err(Error::ConfigValidation {
            field: "extension".to_string(),
            message: format!("Extension '{}' contains invalid characters", extension),
        });
    }

    Ok(format!(".{}", bare.to_lowercase()))
}

/// Validate the names file candidate list.
pub fn validate_candidates(candidates: &[String]) -> Result<()> {
    if candidates.iter().all(|c| c.trim().is_empty()) {
        return Err(Error::ConfigValidation {
            field: "candidates".to_string(),
            message: "At least one text file candidate is required".to_string(),
        });
    }

    Ok(())
}
