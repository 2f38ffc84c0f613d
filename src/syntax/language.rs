//! Language definitions for syntax highlighting
//!
//! A [`LanguageDefinition`] is an ordered rule table. Highlighting runs every
//! rule over the whole document in table order and concatenates the results;
//! a rule later in the table overrides earlier ones wherever their spans
//! overlap once the spans are applied in sequence.

use super::rules::PatternRule;
use super::style::Span;
use super::tokens::Category;

/// A complete language definition for syntax highlighting
pub struct LanguageDefinition {
    /// Language name (e.g., "Python")
    pub name: String,
    /// File extensions without the dot (e.g., ["py", "pyw"])
    pub extensions: Vec<String>,
    /// Rules in application order (later rules win on overlap)
    pub rules: Vec<PatternRule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_string());
    }

    /// Append a rule; it takes precedence over every rule added before it
    pub fn add_rule(&mut self, rule: PatternRule) {
        self.rules.push(rule);
    }

    /// Highlight a whole document
    ///
    /// Returns spans in rule order, left to right within each rule. The
    /// result depends only on `text` and the rule table.
    pub fn highlight(&self, text: &str) -> Vec<Span> {
        let mut state = HighlightState::new(text);
        for rule in &self.rules {
            rule.scan(text, &mut |category, start, end| state.push(category, start, end));
        }
        state.finish()
    }
}

/// Scratch state for one highlighting pass
///
/// Rules report byte ranges; they are converted to character offsets in a
/// single sweep over the text once every rule has run.
struct HighlightState<'a> {
    text: &'a str,
    raw: Vec<(Category, usize, usize)>,
}

impl<'a> HighlightState<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, raw: Vec::new() }
    }

    fn push(&mut self, category: Category, start: usize, end: usize) {
        if start < end {
            self.raw.push((category, start, end));
        }
    }

    fn finish(self) -> Vec<Span> {
        if self.text.is_ascii() {
            return self
                .raw
                .into_iter()
                .map(|(category, start, end)| Span::new(category, start, end))
                .collect();
        }

        let mut boundaries: Vec<usize> = self
            .raw
            .iter()
            .flat_map(|&(_, start, end)| [start, end])
            .collect();
        boundaries.sort_unstable();
        boundaries.dedup();

        let mut chars = Vec::with_capacity(boundaries.len());
        let mut next = boundaries.iter().peekable();
        for (char_idx, (byte_idx, _)) in self.text.char_indices().enumerate() {
            while next.peek().is_some_and(|&&b| b <= byte_idx) {
                next.next();
                chars.push(char_idx);
            }
            if next.peek().is_none() {
                break;
            }
        }
        let total = self.text.chars().count();
        while next.next().is_some() {
            chars.push(total);
        }

        let to_char = |byte: usize| -> usize {
            boundaries
                .binary_search(&byte)
                .map(|i| chars[i])
                .unwrap_or(total)
        };

        self.raw
            .into_iter()
            .map(|(category, start, end)| Span::new(category, to_char(start), to_char(end)))
            .collect()
    }
}
