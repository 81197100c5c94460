//! TreeRenderer - walks a directory and streams one line per entry

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use termcolor::Color;

use crate::error::RenderError;
use crate::fs::{FileSystem, RealFs};
use crate::output::{Line, Span};

use super::config::{EntryOrder, RenderConfig};
use super::filter::IgnoreFilter;
use super::traversal::{LAST_BRANCH, RenderContext, pointer};
use super::utils::{display_name, format_size};

const DIR_COLOR: Color = Color::Blue;
const FILE_COLOR: Color = Color::Green;
const SIZE_COLOR: Color = Color::Yellow;
const ERROR_COLOR: Color = Color::Red;

const PERMISSION_DENIED: &str = "[Permission Denied]";

/// Receives rendered lines in traversal order.
pub trait TreeOutput {
    fn output_line(&mut self, line: &Line) -> io::Result<()>;

    /// Called once after the last line of a successful render.
    fn finish(&mut self, summary: &RenderSummary) -> io::Result<()> {
        let _ = summary;
        Ok(())
    }
}

/// Collects lines in memory.
impl TreeOutput for Vec<Line> {
    fn output_line(&mut self, line: &Line) -> io::Result<()> {
        self.push(line.clone());
        Ok(())
    }
}

/// Counts of what a render emitted, excluding the root header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub directories: usize,
    pub files: usize,
    /// Directories whose contents were replaced by a placeholder
    pub denied: usize,
}

impl RenderSummary {
    /// Number of entry lines, i.e. everything but the header and placeholders.
    pub fn entries(&self) -> usize {
        self.directories + self.files
    }
}

/// Depth-first, pre-order tree renderer.
///
/// Nothing is cached between calls: every directory is listed again each
/// time it is rendered.
pub struct TreeRenderer<F = RealFs> {
    config: RenderConfig,
    filter: IgnoreFilter,
    fs: F,
}

impl TreeRenderer<RealFs> {
    pub fn new(config: RenderConfig) -> Self {
        Self::with_fs(config, RealFs)
    }
}

impl<F: FileSystem> TreeRenderer<F> {
    pub fn with_fs(config: RenderConfig, fs: F) -> Self {
        let filter = IgnoreFilter::new(config.ignore_dirs.iter().cloned());
        Self { config, filter, fs }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `root` as a header line followed by its tree.
    pub fn render<O: TreeOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<RenderSummary, RenderError> {
        if !self.fs.is_directory(root) {
            return Err(RenderError::NotADirectory(root.to_path_buf()));
        }

        output.output_line(&Line::plain(display_name(root)))?;

        let mut summary = RenderSummary::default();
        self.render_dir(root, &RenderContext::root(), output, &mut summary)?;
        output.finish(&summary)?;
        Ok(summary)
    }

    fn render_dir<O: TreeOutput>(
        &self,
        path: &Path,
        ctx: &RenderContext,
        output: &mut O,
        summary: &mut RenderSummary,
    ) -> Result<(), RenderError> {
        let mut names = match self.fs.list_entries(path) {
            Ok(names) => names,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                log::warn!("permission denied: {}", path.display());
                summary.denied += 1;
                let text = format!("{}{}{}", ctx.prefix, LAST_BRANCH, PERMISSION_DENIED);
                output.output_line(&Line::new(vec![Span::colored(
                    text,
                    self.color(ERROR_COLOR),
                )]))?;
                return Ok(());
            }
            Err(source) => {
                return Err(RenderError::ReadDir {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        self.filter.retain_visible(&mut names);
        if self.config.order == EntryOrder::Name {
            names.sort();
        }

        let total = names.len();
        for (i, name) in names.iter().enumerate() {
            let entry_path = path.join(name);
            let is_dir = self.fs.is_directory(&entry_path);
            let pointer = pointer(i, total);

            let mut spans = vec![Span::plain(format!("{}{}", ctx.prefix, pointer))];
            spans.extend(self.entry_label(&entry_path, name, is_dir)?);
            output.output_line(&Line::new(spans))?;

            if !is_dir {
                summary.files += 1;
                continue;
            }

            summary.directories += 1;
            if self.config.at_depth_limit(ctx.depth) {
                continue;
            }

            log::debug!("descending into {}", entry_path.display());
            let child = ctx.child(pointer == LAST_BRANCH);
            self.render_dir(&entry_path, &child, output, summary)?;
        }

        Ok(())
    }

    /// Display name of one entry: optional mode prefix, the bare name, and
    /// for files an optional size suffix in its own color.
    fn entry_label(
        &self,
        path: &Path,
        name: &OsStr,
        is_dir: bool,
    ) -> Result<Vec<Span>, RenderError> {
        let metadata_err = |source: io::Error| RenderError::Metadata {
            path: path.to_path_buf(),
            source,
        };

        let mut label = name.to_string_lossy().into_owned();
        if self.config.include_permissions {
            let mode = self.fs.permission_string(path).map_err(metadata_err)?;
            label = format!("{} {}", mode, label);
        }

        let entry_color = self.color(if is_dir { DIR_COLOR } else { FILE_COLOR });
        let mut spans = vec![Span::colored(label, entry_color)];

        if self.config.show_size && !is_dir {
            let size = self.fs.file_size(path).map_err(metadata_err)?;
            spans.push(Span::colored(
                format!(" ({})", format_size(size)),
                self.color(SIZE_COLOR),
            ));
        }

        Ok(spans)
    }

    fn color(&self, color: Color) -> Option<Color> {
        self.config.colorize.then_some(color)
    }
}
