/*!
 * Page layout for rendered documents.
 *
 * Layout is computed without touching the PDF backend so pagination,
 * indentation and font weight can be inspected directly. Coordinates are
 * PDF points with the origin at the bottom-left corner of a US letter page.
 */

use super::wrap::wrap_words;

/// US letter width in points
pub const PAGE_WIDTH: f32 = 612.0;
/// US letter height in points
pub const PAGE_HEIGHT: f32 = 792.0;
/// Distance from the top edge to the first line
pub const TOP_MARGIN: f32 = 40.0;
/// Left edge of normal text
pub const NORMAL_INDENT: f32 = 40.0;
/// Left edge of bullet items
pub const BULLET_INDENT: f32 = NORMAL_INDENT + 20.0;
/// Font size for both modes
pub const FONT_SIZE: f32 = 12.0;

pub const PLAIN_LINE_HEIGHT: f32 = 15.0;
pub const PLAIN_BOTTOM_MARGIN: f32 = 40.0;

pub const STRUCTURED_LINE_HEIGHT: f32 = 18.0;
pub const STRUCTURED_BOTTOM_MARGIN: f32 = 60.0;
/// Character budget for wrapped structured lines
pub const WRAP_WIDTH: usize = 90;

/// Vertical position of the first line on every page
pub const FIRST_LINE_Y: f32 = PAGE_HEIGHT - TOP_MARGIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// A line of text at its final position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub weight: FontWeight,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

/// The full document layout; always at least one page
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub pages: Vec<Page>,
}

impl Layout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All placed lines in drawing order
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }
}

/// How a trimmed structured line is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty line: vertical space only
    Blank,
    /// `#` heading or `**` bold paragraph
    Heading,
    /// `-` or `*` list item
    Bullet,
    Paragraph,
}

impl LineKind {
    pub fn weight(self) -> FontWeight {
        match self {
            LineKind::Heading => FontWeight::Bold,
            _ => FontWeight::Regular,
        }
    }

    pub fn indent(self) -> f32 {
        match self {
            LineKind::Bullet => BULLET_INDENT,
            _ => NORMAL_INDENT,
        }
    }
}

/// Classify an already trimmed line. `**` is checked before `*`.
pub fn classify_line(line: &str) -> LineKind {
    if line.is_empty() {
        LineKind::Blank
    } else if line.starts_with('#') || line.starts_with("**") {
        LineKind::Heading
    } else if line.starts_with('-') || line.starts_with('*') {
        LineKind::Bullet
    } else {
        LineKind::Paragraph
    }
}

/// Tracks the vertical cursor and opens pages as lines are placed
struct Paginator {
    pages: Vec<Page>,
    y: f32,
    bottom_margin: f32,
}

impl Paginator {
    fn new(bottom_margin: f32) -> Self {
        Self {
            pages: vec![Page::default()],
            y: FIRST_LINE_Y,
            bottom_margin,
        }
    }

    fn place(&mut self, text: String, x: f32, weight: FontWeight, advance: f32) {
        if self.y < self.bottom_margin {
            self.pages.push(Page::default());
            self.y = FIRST_LINE_Y;
        }
        let y = self.y;
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(PlacedLine { text, x, y, weight });
        }
        self.y -= advance;
    }

    fn skip(&mut self, dy: f32) {
        self.y -= dy;
    }

    fn finish(self) -> Layout {
        Layout { pages: self.pages }
    }
}

/// Lay out transcript lines verbatim, one per row, no wrapping
pub fn layout_plain<S: AsRef<str>>(lines: &[S]) -> Layout {
    let mut paginator = Paginator::new(PLAIN_BOTTOM_MARGIN);
    for line in lines {
        paginator.place(
            line.as_ref().to_string(),
            NORMAL_INDENT,
            FontWeight::Regular,
            PLAIN_LINE_HEIGHT,
        );
    }
    paginator.finish()
}

/// Lay out markdown-like lines with weight, indent and wrapping rules
pub fn layout_structured<S: AsRef<str>>(lines: &[S]) -> Layout {
    let mut paginator = Paginator::new(STRUCTURED_BOTTOM_MARGIN);
    for line in lines {
        let line = line.as_ref().trim();
        let kind = classify_line(line);
        if kind == LineKind::Blank {
            paginator.skip(STRUCTURED_LINE_HEIGHT / 2.0);
            continue;
        }
        for wrapped in wrap_words(line, WRAP_WIDTH) {
            paginator.place(wrapped, kind.indent(), kind.weight(), STRUCTURED_LINE_HEIGHT);
        }
    }
    paginator.finish()
}
