//! Directory tree rendering
//!
//! `TreeRenderer` walks a directory through a `FileSystem` and streams one
//! line per entry to a `TreeOutput`, in depth-first pre-order. Memory use is
//! O(depth): no tree is ever built.

mod config;
mod filter;
mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use config::{EntryOrder, RenderConfig};
pub use filter::IgnoreFilter;
pub use traversal::{BLANK, BRANCH, LAST_BRANCH, RenderContext, VERTICAL};
pub use utils::{absolute_root, display_name, format_size};
pub use walker::{RenderSummary, TreeOutput, TreeRenderer};
