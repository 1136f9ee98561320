/*!
 * Paginated text rendering.
 *
 * Two formatting modes share one page geometry:
 * - `Plain`: transcript lines drawn verbatim, one per row
 * - `Structured`: markdown-like summary lines with bold headings,
 *   indented bullets and word wrapping
 *
 * Rendering is split into a layout pass (`layout`) and a drawing pass (`pdf`).
 */

use log::debug;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::errors::RenderError;

pub mod layout;
pub mod pdf;
pub mod wrap;

pub use layout::{FontWeight, Layout, LineKind, Page, PlacedLine};

/// Formatting policy for a line sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Plain,
    Structured,
}

impl RenderMode {
    fn title(self) -> &'static str {
        match self {
            RenderMode::Plain => "Transcript",
            RenderMode::Structured => "Summary",
        }
    }
}

/// A generated PDF, held in memory until handed to the caller
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    bytes: Vec<u8>,
    page_count: usize,
    file_name: String,
}

impl RenderedDocument {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Suggested download name, e.g. `transcript.pdf`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Write the document to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }

    /// Write the document to a transient `.pdf` file removed when the handle drops
    pub fn write_temp(&self) -> Result<NamedTempFile, RenderError> {
        let mut file = tempfile::Builder::new()
            .prefix("yt2pdf-")
            .suffix(".pdf")
            .tempfile()?;
        std::io::Write::write_all(&mut file, &self.bytes)?;
        Ok(file)
    }
}

/// Compute the layout of `lines` in the given mode
pub fn layout_lines<S: AsRef<str>>(lines: &[S], mode: RenderMode) -> Layout {
    match mode {
        RenderMode::Plain => layout::layout_plain(lines),
        RenderMode::Structured => layout::layout_structured(lines),
    }
}

/// Render `lines` to a PDF named `file_name`
pub fn render_lines<S: AsRef<str>>(
    lines: &[S],
    mode: RenderMode,
    file_name: &str,
) -> Result<RenderedDocument, RenderError> {
    let layout = layout_lines(lines, mode);
    let bytes = pdf::write_pdf(&layout, mode.title())?;
    debug!(
        "Rendered {} ({:?}): {} lines on {} page(s), {} bytes",
        file_name,
        mode,
        layout.line_count(),
        layout.page_count(),
        bytes.len()
    );
    Ok(RenderedDocument {
        bytes,
        page_count: layout.page_count(),
        file_name: file_name.to_string(),
    })
}

/// Render raw transcript lines as `transcript.pdf`
pub fn render_transcript<S: AsRef<str>>(lines: &[S]) -> Result<RenderedDocument, RenderError> {
    render_lines(lines, RenderMode::Plain, "transcript.pdf")
}

/// Render a markdown summary as `summary.pdf`, one input line per `\n`
pub fn render_summary(summary: &str) -> Result<RenderedDocument, RenderError> {
    let lines: Vec<&str> = summary.split('\n').collect();
    render_lines(&lines, RenderMode::Structured, "summary.pdf")
}
