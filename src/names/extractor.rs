//! Item name extraction from text files.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Pattern for the structured `item = "NAME"` format.
static ITEM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"item\s*=\s*"(.*?)""#).expect("item pattern is valid"));

/// Textual format a names file was parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameFormat {
    /// One or more `item = "NAME"` occurrences.
    Structured,
    /// One name per non-empty line.
    PlainList,
}

impl fmt::Display for NameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameFormat::Structured => write!(f, "structured"),
            NameFormat::PlainList => write!(f, "plain list"),
        }
    }
}

/// Names parsed from a text file, in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedNames {
    pub format: NameFormat,
    pub names: Vec<String>,
}

impl ExtractedNames {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Parse item names from file content.
///
/// Structured matches win; the plain list is only used when there are none.
pub fn parse_item_names(content: &str) -> ExtractedNames {
    let structured: Vec<String> = ITEM_PATTERN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    if !structured.is_empty() {
        return ExtractedNames {
            format: NameFormat::Structured,
            names: structured,
        };
    }

    let names = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    ExtractedNames {
        format: NameFormat::PlainList,
        names,
    }
}

/// Read and parse a names file.
pub fn try_extract_item_names(path: &Path) -> Result<ExtractedNames> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::TextFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_item_names(&content))
}

/// Extract item names from a text file.
///
/// Read failures are logged and yield an empty list.
pub fn extract_item_names(path: &Path) -> Vec<String> {
    match try_extract_item_names(path) {
        Ok(extracted) => {
            tracing::debug!(
                "Parsed {} as {} format",
                path.display(),
                extracted.format
            );
            tracing::info!("Found {} item names in the text file", extracted.len());
            extracted.names
        }
        Err(e) => {
            tracing::error!("{}", e);
            Vec::new()
        }
    }
}
