//! Shared helpers for tree rendering

use std::io;
use std::path::{Component, Path, PathBuf};

const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a size in bytes using 1024-based units, e.g. `1.5 KB`.
///
/// The value is rounded to two decimals and always keeps at least one
/// (`1.0 KB`, `512.0 B`). Zero is special-cased to `0 B`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut scale: u64 = 1;
    while unit + 1 < UNITS.len() && bytes / scale >= 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = bytes as f64 / scale as f64;
    // Round through the decimal representation, then print the shortest form.
    let rounded: f64 = format!("{:.2}", value).parse().unwrap_or(value);
    format!("{:?} {}", rounded, UNITS[unit])
}

/// Name shown for an entry or the root header: the final path segment,
/// or the whole path when there is none (e.g. `/`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Make `path` absolute and resolve `.` and `..` lexically, without
/// following symlinks.
pub fn absolute_root(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
