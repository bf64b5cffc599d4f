//! Item name input.
//!
//! Provides:
//! - Names file discovery
//! - Structured and plain-list name extraction

pub mod extractor;
pub mod locator;

pub use extractor::{
    extract_item_names, parse_item_names, try_extract_item_names, ExtractedNames, NameFormat,
};
pub use locator::{locate_text_file, resolve_text_file};
