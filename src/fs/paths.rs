//! Directory listing and management.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::naming::has_extension;

/// Ensure a directory exists, creating it and its parents if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Check whether two paths name the same existing file or directory.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        if let (Ok(ma), Ok(mb)) = (std::fs::metadata(a), std::fs::metadata(b)) {
            return ma.dev() == mb.dev() && ma.ino() == mb.ino();
        }
    }

    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// List the files in `dir` whose name ends with `extension`, sorted by filename.
pub fn list_images(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| Error::SourceDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut images: Vec<(String, PathBuf)> = Vec::new();

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let filename = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::warn!("Skipping file with non UTF-8 name: {:?}", raw);
                continue;
            }
        };

        if has_extension(&filename, extension) {
            images.push((filename, path));
        }
    }

    images.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(images.into_iter().map(|(_, path)| path).collect())
}
