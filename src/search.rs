//! Literal find with a cycling current match

/// Find every occurrence of `term` in `text`
///
/// Literal and case-sensitive. Matches are reported left to right as
/// half-open character ranges; the search resumes at the end of each match
/// so matches never overlap. An empty term finds nothing.
pub fn find(text: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return Vec::new();
    }

    let term_chars = term.chars().count();
    let mut matches = Vec::new();
    let mut char_pos = 0;
    let mut byte_pos = 0;
    for (byte_idx, _) in text.match_indices(term) {
        char_pos += text[byte_pos..byte_idx].chars().count();
        matches.push((char_pos, char_pos + term_chars));
        char_pos += term_chars;
        byte_pos = byte_idx + term.len();
    }
    matches
}

/// Find state for one document
#[derive(Debug, Clone, Default)]
pub struct FindState {
    /// Current search term (empty when inactive)
    term: String,
    /// Matches of the term, in document order
    matches: Vec<(usize, usize)>,
    /// Index into `matches` of the current match
    current: usize,
}

impl FindState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `text` for `term`, making the first match current
    ///
    /// Returns the number of matches. An empty term leaves the state
    /// untouched and returns 0.
    pub fn search(&mut self, text: &str, term: &str) -> usize {
        if term.is_empty() {
            return 0;
        }
        self.term = term.to_string();
        self.matches = find(text, term);
        self.current = 0;
        self.matches.len()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn matches(&self) -> &[(usize, usize)] {
        &self.matches
    }

    pub fn count(&self) -> usize {
        self.matches.len()
    }

    /// Whether a search with at least one match is in progress
    pub fn is_active(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.is_active().then_some(self.current)
    }

    pub fn current(&self) -> Option<(usize, usize)> {
        self.matches.get(self.current).copied()
    }

    /// Move to the next match, wrapping to the first after the last
    pub fn next(&mut self) -> Option<(usize, usize)> {
        if self.matches.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.matches.len();
        self.current()
    }

    /// Move to the previous match, wrapping to the last before the first
    pub fn previous(&mut self) -> Option<(usize, usize)> {
        if self.matches.is_empty() {
            return None;
        }
        let len = self.matches.len();
        self.current = (self.current + len - 1) % len;
        self.current()
    }

    /// Drop the term and all matches
    pub fn cancel(&mut self) {
        self.term.clear();
        self.matches.clear();
        self.current = 0;
    }
}
