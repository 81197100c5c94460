//! Per-directory traversal state

/// Pointer for every entry that has a following sibling.
pub const BRANCH: &str = "├── ";
/// Pointer for the last entry of a directory.
pub const LAST_BRANCH: &str = "└── ";
/// Prefix extension below an entry that has following siblings.
pub const VERTICAL: &str = "│   ";
/// Prefix extension below the last entry of a directory.
pub const BLANK: &str = "    ";

/// Position of one directory in the walk.
///
/// A child context is derived for each descent; the parent's is left as is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderContext {
    pub prefix: String,
    pub depth: usize,
}

impl RenderContext {
    /// Context for the root directory.
    pub fn root() -> Self {
        Self::default()
    }

    /// Context for descending into an entry of this directory.
    pub fn child(&self, is_last: bool) -> Self {
        let extension = if is_last { BLANK } else { VERTICAL };
        Self {
            prefix: format!("{}{}", self.prefix, extension),
            depth: self.depth + 1,
        }
    }
}

/// Pointer glyph for the entry at `index` out of `total`.
pub fn pointer(index: usize, total: usize) -> &'static str {
    if index + 1 == total { LAST_BRANCH } else { BRANCH }
}
