//! dirtree - print a directory as a tree, with optional sizes, permissions and colors

pub mod error;
pub mod fs;
pub mod output;
pub mod timing;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::RenderError;
pub use fs::{FileSystem, RealFs, format_mode};
pub use output::{Line, Span, TreeFormatter};
pub use timing::timed;
pub use tree::{
    EntryOrder, IgnoreFilter, RenderConfig, RenderSummary, TreeOutput, TreeRenderer, format_size,
};
