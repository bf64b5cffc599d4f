//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Image renamer CLI.
#[derive(Parser, Debug)]
#[command(
    name = "image-renamer",
    version,
    about = "Copy images under names read from a text file",
    long_about = "Pairs the images of a directory, sorted by filename, with item names read from a text file \
                  and copies each image into the output directory under its item name.\n\n\
                  Names are read from `item = \"NAME\"` entries, or one per line when there are none."
)]
pub struct Args {
    /// Text file with item names. Auto-discovered when omitted.
    #[arg(long = "text-file")]
    pub text_file: Option<PathBuf>,

    /// Directory containing the original images [default: original_images].
    #[arg(long = "source-dir")]
    pub source_dir: Option<PathBuf>,

    /// Directory where renamed copies are written [default: renamed_images].
    #[arg(long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Image file extension [default: .png].
    #[arg(long)]
    pub extension: Option<String>,

    /// Number of concurrent copy workers [default: 4].
    #[arg(long)]
    pub workers: Option<usize>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "renamer.toml", env = "IMAGE_RENAMER_CONFIG")]
    pub config: PathBuf,

    /// Show the planned renames without copying anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON report of the run to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Hide per-file lines and the progress bar.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short)]
    pub verbose: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(text_file) = &self.text_file {
            config.input.text_file = Some(text_file.clone());
        }

        if let Some(source_dir) = &self.source_dir {
            config.rename.source_dir = source_dir.clone();
        }

        if let Some(output_dir) = &self.output_dir {
            config.rename.output_dir = output_dir.clone();
        }

        if let Some(extension) = &self.extension {
            config.rename.extension = extension.clone();
        }

        if let Some(workers) = self.workers {
            config.rename.workers = workers;
        }
    }
}
