//! Names file discovery.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Return the first candidate that exists as a file in `dir`.
pub fn locate_text_file<S: AsRef<str>>(dir: &Path, candidates: &[S]) -> Option<PathBuf> {
    let found = candidates
        .iter()
        .map(|c| c.as_ref().trim())
        .filter(|c| !c.is_empty())
        .enumerate()
        .map(|(i, c)| (i, dir.join(c)))
        .find(|(_, path)| path.is_file());

    match found {
        Some((0, path)) => Some(path),
        Some((_, path)) => {
            tracing::info!("Using {} as the text file", path.display());
            Some(path)
        }
        None => None,
    }
}

/// Resolve the names file: an explicit path wins, otherwise probe the candidates.
pub fn resolve_text_file<S: AsRef<str>>(
    explicit: Option<&Path>,
    dir: &Path,
    candidates: &[S],
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    locate_text_file(dir, candidates).ok_or_else(|| {
        let tried: Vec<&str> = candidates
            .iter()
            .map(|c| c.as_ref().trim())
            .filter(|c| !c.is_empty())
            .collect();
        Error::TextFileNotFound(tried.join(", "))
    })
}
