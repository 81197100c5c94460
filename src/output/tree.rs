//! Line-oriented tree formatter
//!
//! `TreeFormatter` writes each rendered line straight to its writer as it
//! arrives, so output appears in traversal order with nothing buffered
//! beyond the writer itself.

use std::io::{self, Write};

use termcolor::{ColorSpec, WriteColor};

use crate::tree::{RenderSummary, TreeOutput};

use super::line::Line;

/// Writes lines to any `WriteColor` sink: a terminal stream, an ANSI-coded
/// file, or a plain buffer.
pub struct TreeFormatter<W: WriteColor> {
    writer: W,
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: WriteColor> TreeOutput for TreeFormatter<W> {
    fn output_line(&mut self, line: &Line) -> io::Result<()> {
        for span in &line.spans {
            match span.color {
                Some(color) => {
                    self.writer.set_color(ColorSpec::new().set_fg(Some(color)))?;
                    write!(self.writer, "{}", span.text)?;
                    self.writer.reset()?;
                }
                None => write!(self.writer, "{}", span.text)?,
            }
        }
        writeln!(self.writer)
    }

    fn finish(&mut self, _summary: &RenderSummary) -> io::Result<()> {
        self.writer.flush()
    }
}
