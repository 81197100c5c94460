//! Output sinks for rendered trees

mod line;
mod tree;

pub use line::{Line, Span};
pub use tree::TreeFormatter;
