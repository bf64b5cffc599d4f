//! Batch renaming of images.
//!
//! This module provides:
//! - Positional pairing of sorted images with item names
//! - Concurrent copying through a bounded worker pool
//! - Run outcome and JSON reporting

pub mod copy;
pub mod outcome;
pub mod plan;

use std::path::PathBuf;

pub use copy::{copy_with_metadata, execute_plan};
pub use outcome::{EntryStatus, RenameOutcome, RenameReport, ReportEntry, TaskResult};
pub use plan::{build_plan, RenamePlan, RenameTask};

use crate::config::{normalize_extension, RenameConfig};
use crate::error::Result;
use crate::fs::{ensure_dir, is_same_file, list_images};
use crate::output::create_item_bar;

/// Inputs of a batch rename.
#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Normalized extension, e.g. `.png`.
    pub extension: String,
    pub workers: usize,
    /// Show a progress bar and per-file lines.
    pub show_progress: bool,
}

impl RenameOptions {
    /// Build options from the rename configuration.
    pub fn from_config(config: &RenameConfig, show_progress: bool) -> Result<Self> {
        Ok(Self {
            source_dir: config.source_dir.clone(),
            output_dir: config.output_dir.clone(),
            extension: normalize_extension(&config.extension)?,
            workers: config.workers,
            show_progress,
        })
    }
}

/// List the source images and pair them with `names`, without copying anything.
pub fn plan_renames(options: &RenameOptions, names: &[String]) -> Result<RenamePlan> {
    if is_same_file(&options.source_dir, &options.output_dir) {
        tracing::warn!(
            "Output directory {} is the source directory; names matching an existing image will not be copied",
            options.output_dir.display()
        );
    }

    let images = list_images(&options.source_dir, &options.extension)?;
    tracing::info!("Found {} images in the source directory", images.len());

    Ok(build_plan(
        &images,
        names,
        &options.output_dir,
        &options.extension,
    ))
}

/// Copy each source image to the output directory under its item name.
pub async fn rename_images(options: &RenameOptions, names: &[String]) -> Result<RenameOutcome> {
    ensure_dir(&options.output_dir)?;

    let plan = plan_renames(options, names)?;
    if plan.is_empty() {
        return Ok(RenameOutcome {
            names_dropped: plan.names_dropped,
            images_dropped: plan.images_dropped,
            ..Default::default()
        });
    }

    let progress = options
        .show_progress
        .then(|| create_item_bar(plan.len() as u64, "Copying"));

    let outcome = execute_plan(&plan, options.workers, progress.as_ref()).await;

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    Ok(outcome)
}
