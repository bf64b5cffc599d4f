//! Pairing of sorted images with item names.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::fs::naming::{destination_filename, sanitize_item_name};

/// A single copy to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameTask {
    /// 1-based position in the plan.
    pub position: usize,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub original_name: String,
    pub sanitized_name: String,
}

impl RenameTask {
    /// Filename of the source image.
    pub fn source_filename(&self) -> String {
        file_name_lossy(&self.source)
    }

    /// Filename of the destination copy.
    pub fn destination_filename(&self) -> String {
        file_name_lossy(&self.destination)
    }
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Ordered rename tasks plus what reconciliation dropped.
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    pub tasks: Vec<RenameTask>,
    /// Names without a matching image.
    pub names_dropped: usize,
    /// Images left untouched for lack of a name.
    pub images_dropped: usize,
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Pair `images` (already sorted) with `names` by position.
///
/// The longer side is truncated with a warning.
pub fn build_plan(
    images: &[PathBuf],
    names: &[String],
    output_dir: &Path,
    extension: &str,
) -> RenamePlan {
    let count = images.len().min(names.len());

    if images.len() < names.len() {
        tracing::warn!(
            "Only {} images found, but {} item names provided",
            images.len(),
            names.len()
        );
    } else if images.len() > names.len() {
        tracing::warn!(
            "{} images found, but only {} item names provided. The last {} images will not be renamed",
            images.len(),
            names.len(),
            images.len() - names.len()
        );
    }

    let tasks = images
        .iter()
        .zip(names.iter())
        .enumerate()
        .map(|(i, (source, name))| {
            let sanitized_name = sanitize_item_name(name);
            if sanitized_name != *name {
                tracing::debug!("Sanitized '{}' to '{}'", name, sanitized_name);
            }
            let destination = output_dir.join(destination_filename(name, extension));

            RenameTask {
                position: i + 1,
                source: source.clone(),
                destination,
                original_name: name.clone(),
                sanitized_name,
            }
        })
        .collect();

    RenamePlan {
        tasks,
        names_dropped: names.len() - count,
        images_dropped: images.len() - count,
    }
}
