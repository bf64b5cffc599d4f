//! Filename generation from item names.

/// Characters that cannot appear in a filename on common filesystems.
pub const FORBIDDEN_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Replace characters that are illegal in filenames with an underscore.
pub fn sanitize_item_name(name: &str) -> String {
    name.chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Build the destination filename for an item: `<sanitized name><extension>`.
pub fn destination_filename(name: &str, extension: &str) -> String {
    format!("{}{}", sanitize_item_name(name), extension)
}

/// Check whether a filename ends with `extension`, ignoring case.
pub fn has_extension(filename: &str, extension: &str) -> bool {
    filename
        .to_lowercase()
        .ends_with(&extension.to_lowercase())
}
