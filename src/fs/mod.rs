//! Filesystem module.
//!
//! Provides:
//! - Directory listing and management
//! - Filename generation from item names

pub mod naming;
pub mod paths;

pub use naming::{destination_filename, has_extension, sanitize_item_name, FORBIDDEN_CHARS};
pub use paths::{ensure_dir, is_same_file, list_images};
