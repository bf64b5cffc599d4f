//! Image Renamer - copy a directory of images under names read from a text file.
//!
//! Images in the source directory are sorted by filename and paired, by position,
//! with item names extracted from a text file. Each image is copied into the
//! output directory as `<item name><extension>`; originals are never touched.
//!
//! # Features
//!
//! - `item = "NAME"` entries or a plain one-name-per-line list
//! - Automatic discovery of the names file
//! - Filename sanitization
//! - Concurrent copies through a bounded worker pool
//! - Dry runs and JSON reports
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use image_renamer::{extract_item_names, rename_images, Config, RenameOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default(Path::new("renamer.toml"))?;
//!     let names = extract_item_names(Path::new("items.txt"));
//!     let options = RenameOptions::from_config(&config.rename, false)?;
//!
//!     let outcome = rename_images(&options, &names).await?;
//!     println!("{}/{} renamed", outcome.succeeded(), outcome.total);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod names;
pub mod output;
pub mod rename;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use names::{extract_item_names, resolve_text_file, NameFormat};
pub use rename::{rename_images, RenameOptions, RenameOutcome, RenamePlan, RenameTask};
