//! Terminal rendering of a highlighted document
//!
//! [`TerminalSurface`] is a [`StyleSink`]: it remembers applied spans in
//! application order and paints the document with crossterm styling, last
//! applied span winning wherever spans overlap.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, ContentStyle, Print, PrintStyledContent, StyledContent,
};
use unicode_width::UnicodeWidthStr;

use crate::error::{EditorError, Result};
use crate::search::FindState;
use crate::syntax::{resolve, Category, Color, Span, Style, StyleSink};

/// A terminal-backed display surface
#[derive(Debug, Default)]
pub struct TerminalSurface {
    /// Applied spans, oldest first
    applied: Vec<Span>,
    /// Search matches to paint over the syntax styling
    search: Vec<(usize, usize)>,
    /// Index of the current search match
    current_match: Option<usize>,
    /// Whether to paint the line-number gutter
    pub show_line_numbers: bool,
}

impl StyleSink for TerminalSurface {
    fn clear_style(&mut self, category: Category) {
        self.applied.retain(|span| span.category != category);
    }

    fn apply_style(&mut self, category: Category, start: usize, end: usize) {
        self.applied.push(Span::new(category, start, end));
    }
}

impl TerminalSurface {
    pub fn new(show_line_numbers: bool) -> Self {
        Self {
            show_line_numbers,
            ..Default::default()
        }
    }

    /// Spans currently applied, in application order
    pub fn applied(&self) -> &[Span] {
        &self.applied
    }

    /// Take the search matches to highlight from `find`
    pub fn set_search(&mut self, find: &FindState) {
        self.search = find.matches().to_vec();
        self.current_match = find.current_index();
    }

    /// Drop all search styling
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.current_match = None;
    }

    /// Style of every character of `text`
    fn char_styles(&self, len: usize) -> Vec<Style> {
        let mut styles = vec![Style::default(); len];
        for run in resolve(&self.applied, len) {
            styles[run.start..run.end].fill(run.style());
        }
        for (idx, &(start, end)) in self.search.iter().enumerate() {
            let end = end.min(len);
            if start >= end {
                continue;
            }
            let style = if Some(idx) == self.current_match {
                Style::bg(Color::Yellow).with_bold()
            } else {
                Style::bg(Color::BrightBlack)
            };
            for slot in &mut styles[start..end] {
                slot.bg = style.bg;
                slot.bold |= style.bold;
            }
        }
        styles
    }

    /// Paint `text` to `out`
    pub fn paint(&self, text: &str, out: &mut impl Write) -> Result<()> {
        let write_err = |e| EditorError::io("write output", e);
        let chars: Vec<char> = text.chars().collect();
        let styles = self.char_styles(chars.len());
        let line_count = text.split('\n').count();
        let gutter = line_count.to_string().len().max(3);

        let mut line_no = 1;
        if self.show_line_numbers {
            paint_gutter(out, line_no, gutter).map_err(write_err)?;
        }

        let mut segment = String::new();
        let mut segment_style = Style::default();
        for (ch, style) in chars.iter().zip(styles.iter()) {
            if *ch == '\n' {
                flush_segment(out, &mut segment, segment_style).map_err(write_err)?;
                queue!(out, Print('\n')).map_err(write_err)?;
                line_no += 1;
                if self.show_line_numbers {
                    paint_gutter(out, line_no, gutter).map_err(write_err)?;
                }
                continue;
            }
            if *style != segment_style {
                flush_segment(out, &mut segment, segment_style).map_err(write_err)?;
                segment_style = *style;
            }
            segment.push(*ch);
        }
        flush_segment(out, &mut segment, segment_style).map_err(write_err)?;
        out.flush().map_err(write_err)
    }
}

fn paint_gutter(out: &mut impl Write, line_no: usize, width: usize) -> std::io::Result<()> {
    let mut style = ContentStyle::new();
    style.attributes.set(Attribute::Dim);
    queue!(
        out,
        PrintStyledContent(StyledContent::new(style, format!("{:>width$} ", line_no, width = width)))
    )
}

fn flush_segment(out: &mut impl Write, segment: &mut String, style: Style) -> std::io::Result<()> {
    if segment.is_empty() {
        return Ok(());
    }
    let text = std::mem::take(segment);
    if style.is_default() {
        queue!(out, Print(text))
    } else {
        queue!(out, PrintStyledContent(StyledContent::new(content_style(style), text)))
    }
}

/// Convert a style to its crossterm form
pub fn content_style(style: Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    content.foreground_color = term_color(style.fg);
    content.background_color = term_color(style.bg);
    if style.bold {
        content.attributes.set(Attribute::Bold);
    }
    if style.italic {
        content.attributes.set(Attribute::Italic);
    }
    if style.underline {
        content.attributes.set(Attribute::Underlined);
    }
    if style.reverse {
        content.attributes.set(Attribute::Reverse);
    }
    content
}

fn term_color(color: Color) -> Option<TermColor> {
    Some(match color {
        Color::Default => return None,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::White => TermColor::Grey,
        Color::BrightBlack => TermColor::DarkGrey,
        Color::BrightRed => TermColor::Red,
        Color::BrightGreen => TermColor::Green,
        Color::BrightYellow => TermColor::Yellow,
        Color::BrightBlue => TermColor::Blue,
        Color::BrightMagenta => TermColor::Magenta,
        Color::BrightCyan => TermColor::Cyan,
        Color::BrightWhite => TermColor::White,
    })
}

/// Terminal column of the character at `char_col` in `line`
pub fn display_column(line: &str, char_col: usize) -> usize {
    let end = line
        .char_indices()
        .nth(char_col)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    line[..end].width()
}
