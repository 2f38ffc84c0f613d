//! Document store - the text being edited plus position helpers

use std::fmt::Write;

/// The text of the open document
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Full document text
    text: String,
    /// Whether the text has unsaved changes
    modified: bool,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document holding `text`, unmodified
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            modified: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole text
    pub fn replace_all(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.modified = true;
    }

    /// Replace the whole text with freshly loaded content
    pub fn load(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.modified = false;
    }

    pub fn clear(&mut self) {
        self.load(String::new());
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of lines; an empty document has one
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Get a line by index, without its newline
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.text.split('\n').nth(idx)
    }

    /// Convert a character offset to a 0-based (line, column) position
    ///
    /// Offsets past the end clamp to the end of the document.
    pub fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for ch in self.text.chars().take(offset) {
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Convert a 0-based (line, column) position to a character offset
    ///
    /// Returns None if the line does not exist. Columns past the end of the
    /// line clamp to the end of the line.
    pub fn position_to_offset(&self, line: usize, col: usize) -> Option<usize> {
        let mut offset = 0;
        for (idx, text) in self.text.split('\n').enumerate() {
            let len = text.chars().count();
            if idx == line {
                return Some(offset + col.min(len));
            }
            offset += len + 1;
        }
        None
    }

    /// Gutter text: one number per line, each followed by a newline
    pub fn line_numbers(&self) -> String {
        let mut out = String::new();
        for n in 1..=self.line_count() {
            let _ = writeln!(out, "{}", n);
        }
        out
    }

    /// Width of the line-number gutter in columns
    pub fn gutter_width(&self) -> usize {
        self.line_count().to_string().len().max(3)
    }
}
