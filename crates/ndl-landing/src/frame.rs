#![forbid(unsafe_code)]

//! Line-oriented render target.
//!
//! `Model::view()` writes styled [`Line`]s into a [`Frame`]. The frame is as
//! tall as the content; the host presents only the window starting at
//! [`Frame::scroll`]. Every pushed line is clipped to the frame width, so no
//! line ever exceeds `width()` display cells.
//!
//! Widths are measured per grapheme cluster with `unicode-width`, so accented
//! titles and wide glyphs clip on cell boundaries.

use bitflags::bitflags;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of `text` in terminal cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).map(grapheme_width).sum()
}

#[inline]
fn grapheme_width(grapheme: &str) -> usize {
    UnicodeWidthStr::width(grapheme)
}

/// Longest prefix of `text` that fits in `max_width` cells.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme_width(grapheme);
        if current_width + w > max_width {
            break;
        }
        result.push_str(grapheme);
        current_width += w;
    }
    result
}

/// Clip `text` to `max_width`, ending with `ellipsis` when anything was cut.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_width: usize, ellipsis: &str) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    let ellipsis_width = display_width(ellipsis);
    if ellipsis_width >= max_width {
        return truncate_to_width(text, max_width);
    }
    let mut out = truncate_to_width(text, max_width - ellipsis_width);
    out.truncate(out.trim_end().len());
    out.push_str(ellipsis);
    out
}

/// Greedy word wrap to `width` cells. Words wider than a line are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in text.split_whitespace() {
        let mut word = word.to_string();
        let mut word_width = display_width(&word);
        while word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let head = truncate_to_width(&word, width);
            // A single grapheme wider than the line cannot be split further.
            if head.is_empty() {
                break;
            }
            word = word[head.len()..].to_string();
            word_width = display_width(&word);
            lines.push(head);
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(&word);
        current_width += word_width;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Terminal colors used by the page palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Terminal default.
    Reset,
    /// ANSI black.
    Black,
    /// ANSI white.
    White,
    /// ANSI grey.
    Grey,
    /// ANSI yellow.
    Yellow,
    /// ANSI cyan.
    Cyan,
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

bitflags! {
    /// Text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold weight.
        const BOLD      = 0b0000_0001;
        /// Faint/dim.
        const DIM       = 0b0000_0010;
        /// Italic.
        const ITALIC    = 0b0000_0100;
        /// Underlined.
        const UNDERLINE = 0b0000_1000;
        /// Swapped foreground/background.
        const REVERSE   = 0b0001_0000;
    }
}

/// Foreground, background and attributes for a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color; `None` inherits.
    pub fg: Option<Color>,
    /// Background color; `None` inherits.
    pub bg: Option<Color>,
    /// Attributes.
    pub flags: StyleFlags,
}

impl Style {
    /// Unstyled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            flags: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add bold.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.flags = self.flags.union(StyleFlags::BOLD);
        self
    }

    /// Add dim.
    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.flags = self.flags.union(StyleFlags::DIM);
        self
    }

    /// Add italic.
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.flags = self.flags.union(StyleFlags::ITALIC);
        self
    }

    /// Add underline.
    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.flags = self.flags.union(StyleFlags::UNDERLINE);
        self
    }

    /// Add reverse video.
    #[must_use]
    pub const fn reverse(mut self) -> Self {
        self.flags = self.flags.union(StyleFlags::REVERSE);
        self
    }

    /// Whether `flag` is set.
    #[must_use]
    pub const fn has(&self, flag: StyleFlags) -> bool {
        self.flags.contains(flag)
    }
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// The text.
    pub text: String,
    /// Its style.
    pub style: Style,
}

impl Span {
    /// Unstyled span.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::styled(text, Style::new())
    }

    /// Styled span.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Display width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        display_width(&self.text)
    }
}

/// One row of spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    /// Empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Single unstyled span.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::from_spans(vec![Span::raw(text)])
    }

    /// Single styled span.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::from_spans(vec![Span::styled(text, style)])
    }

    /// From prepared spans.
    #[must_use]
    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Append a span (builder pattern).
    #[must_use]
    pub fn with(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    /// Append a span.
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// The spans.
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Display width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Text without styling.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Clip to `max_width` cells, dropping spans past the edge.
    #[must_use]
    pub fn truncated(self, max_width: usize) -> Self {
        if self.width() <= max_width {
            return self;
        }
        let mut remaining = max_width;
        let mut spans = Vec::with_capacity(self.spans.len());
        for span in self.spans {
            if remaining == 0 {
                break;
            }
            let w = span.width();
            if w <= remaining {
                remaining -= w;
                spans.push(span);
            } else {
                let text = truncate_to_width(&span.text, remaining);
                remaining = 0;
                spans.push(Span::styled(text, span.style));
            }
        }
        Self { spans }
    }

    /// Left-pad so the line is centered in `width` cells.
    #[must_use]
    pub fn centered(mut self, width: usize) -> Self {
        let w = self.width();
        if w < width {
            let pad = (width - w) / 2;
            if pad > 0 {
                self.spans.insert(0, Span::raw(" ".repeat(pad)));
            }
        }
        self
    }
}

/// A full render pass: page content plus the scroll position to present.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u16,
    height: u16,
    lines: Vec<Line>,
    scroll: usize,
}

impl Frame {
    /// Create an empty frame for a `width` x `height` viewport.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            lines: Vec::new(),
            scroll: 0,
        }
    }

    /// Viewport width in cells.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Viewport height in rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Append a line, clipped to the frame width.
    pub fn push(&mut self, line: Line) {
        self.lines.push(line.truncated(usize::from(self.width)));
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.lines.push(Line::new());
    }

    /// Append `text` word-wrapped to the frame width with one style.
    pub fn push_wrapped(&mut self, text: &str, style: Style, indent: usize) {
        let width = usize::from(self.width).saturating_sub(indent);
        let pad = " ".repeat(indent);
        for row in wrap(text, width) {
            self.push(Line::from_spans(vec![Span::raw(pad.clone()), Span::styled(row, style)]));
        }
    }

    /// All content lines.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of content lines.
    #[must_use]
    pub fn content_height(&self) -> usize {
        self.lines.len()
    }

    /// Largest useful scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(usize::from(self.height))
    }

    /// Request that presentation start at `row` (clamped on read).
    pub fn set_scroll(&mut self, row: usize) {
        self.scroll = row;
    }

    /// Effective scroll offset.
    #[must_use]
    pub fn scroll(&self) -> usize {
        self.scroll.min(self.max_scroll())
    }

    /// Lines inside the viewport.
    #[must_use]
    pub fn visible(&self) -> &[Line] {
        let start = self.scroll();
        let end = (start + usize::from(self.height)).min(self.lines.len());
        &self.lines[start..end]
    }

    /// Whole content as plain text, one line per row.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.plain_text());
            out.push('\n');
        }
        out
    }
}
