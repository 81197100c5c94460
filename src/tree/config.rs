//! Configuration types for the tree renderer

/// Order in which the entries of one directory are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryOrder {
    /// Whatever order the filesystem enumerates them in. Platform dependent.
    #[default]
    Native,
    /// Byte-wise by file name.
    Name,
}

/// Configuration for one render. Never mutated once rendering starts.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Append the formatted size to file entries
    pub show_size: bool,
    /// Stop descending once the current depth reaches this value
    pub depth_limit: Option<usize>,
    pub colorize: bool,
    /// Prefix each entry with its `ls -l` style mode string
    pub include_permissions: bool,
    /// Bare names skipped at every level
    pub ignore_dirs: Vec<String>,
    pub order: EntryOrder,
}

impl RenderConfig {
    /// Check if directories at `depth` are listed but not descended into.
    pub fn at_depth_limit(&self, depth: usize) -> bool {
        self.depth_limit.is_some_and(|max| depth >= max)
    }
}
