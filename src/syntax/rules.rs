//! Pattern rules for syntax highlighting
//!
//! A rule scans the whole document and reports every range it tags. Rules
//! never look at each other's output; overlap is settled later by the order
//! rules are applied in.

use regex::Regex;

use super::tokens::Category;
use crate::error::Result;

/// How a rule turns regex matches into tagged ranges
enum Matcher {
    /// The whole match, or one capture group of it, gets the rule category
    Pattern { regex: Regex, group: Option<usize> },
    /// Group 1 is an introducer keyword, group 2 the name it introduces
    Definition {
        regex: Regex,
        keyword: Category,
        keyword_len: Option<usize>,
    },
    /// Group 1 is an identifier directly followed by `=` (but not `==`)
    Assignment { regex: Regex },
}

/// A single rule in a language's ordered rule table
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Category assigned to the matched (or introduced) text
    pub category: Category,
    matcher: Matcher,
}

impl PatternRule {
    /// Create a rule tagging every match of `pattern`
    pub fn new(name: &str, pattern: &str, category: Category) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            category,
            matcher: Matcher::Pattern {
                regex: Regex::new(pattern)?,
                group: None,
            },
        })
    }

    /// Create a rule tagging only one capture group of each match
    pub fn with_group(name: &str, pattern: &str, group: usize, category: Category) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            category,
            matcher: Matcher::Pattern {
                regex: Regex::new(pattern)?,
                group: Some(group),
            },
        })
    }

    /// Create a whole-word rule from a literal word set
    pub fn words<I, S>(name: &str, words: I, category: Category) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternation = words
            .into_iter()
            .map(|w| regex::escape(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join("|");
        // An empty set must match nothing rather than every word boundary
        let pattern = if alternation.is_empty() {
            r"[^\s\S]".to_string()
        } else {
            format!(r"\b(?:{})\b", alternation)
        };
        Self::new(name, &pattern, category)
    }

    /// Create a rule for `<keyword> <name>` constructs
    ///
    /// The pattern must have two groups: the introducer keyword and the
    /// introduced name. The keyword is tagged `keyword`; when `keyword_len`
    /// is set, its span is that many characters from the keyword start no
    /// matter how long the matched keyword actually is.
    pub fn definition(
        name: &str,
        pattern: &str,
        keyword: Category,
        keyword_len: Option<usize>,
        category: Category,
    ) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            category,
            matcher: Matcher::Definition {
                regex: Regex::new(pattern)?,
                keyword,
                keyword_len,
            },
        })
    }

    /// Create the assignment-target heuristic rule
    pub fn assignment(name: &str, category: Category) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            category,
            matcher: Matcher::Assignment {
                regex: Regex::new(r"\b(\w+)[ \t]*=")?,
            },
        })
    }

    /// Find the first match in text starting at byte position
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        let mut found = None;
        self.scan_from(text, start, &mut |_, s, e| {
            if found.is_none() {
                found = Some((s, e));
            }
        });
        found
    }

    /// Report every range this rule tags, as byte offsets, left to right
    pub fn scan(&self, text: &str, emit: &mut dyn FnMut(Category, usize, usize)) {
        self.scan_from(text, 0, emit);
    }

    fn scan_from(&self, text: &str, start: usize, emit: &mut dyn FnMut(Category, usize, usize)) {
        if start >= text.len() {
            return;
        }
        match &self.matcher {
            Matcher::Pattern { regex, group: None } => {
                let mut pos = start;
                while let Some(m) = regex.find_at(text, pos) {
                    if m.start() < m.end() {
                        emit(self.category, m.start(), m.end());
                    }
                    pos = next_search_start(text, m.start(), m.end());
                    if pos > text.len() {
                        break;
                    }
                }
            }
            Matcher::Pattern { regex, group: Some(group) } => {
                let mut pos = start;
                while let Some(caps) = regex.captures_at(text, pos) {
                    let Some(whole) = caps.get(0) else { break };
                    if let Some(m) = caps.get(*group) {
                        if m.start() < m.end() {
                            emit(self.category, m.start(), m.end());
                        }
                    }
                    pos = next_search_start(text, whole.start(), whole.end());
                    if pos > text.len() {
                        break;
                    }
                }
            }
            Matcher::Definition { regex, keyword, keyword_len } => {
                let mut pos = start;
                while let Some(caps) = regex.captures_at(text, pos) {
                    let Some(whole) = caps.get(0) else { break };
                    if let Some(kw) = caps.get(1) {
                        let end = match keyword_len {
                            Some(len) => advance_chars(text, kw.start(), *len),
                            None => kw.end(),
                        };
                        if kw.start() < end {
                            emit(*keyword, kw.start(), end);
                        }
                    }
                    if let Some(ident) = caps.get(2) {
                        if ident.start() < ident.end() {
                            emit(self.category, ident.start(), ident.end());
                        }
                    }
                    pos = next_search_start(text, whole.start(), whole.end());
                    if pos > text.len() {
                        break;
                    }
                }
            }
            Matcher::Assignment { regex } => {
                let mut pos = start;
                while let Some(caps) = regex.captures_at(text, pos) {
                    let Some(whole) = caps.get(0) else { break };
                    let is_comparison = text[whole.end()..].starts_with('=');
                    if !is_comparison {
                        if let Some(ident) = caps.get(1) {
                            emit(self.category, ident.start(), ident.end());
                        }
                    }
                    pos = next_search_start(text, whole.start(), whole.end());
                    if pos > text.len() {
                        break;
                    }
                }
            }
        }
    }
}

/// Where the next search begins: the end of the previous match, stepping past
/// one character when the match was empty so the scan always advances
fn next_search_start(text: &str, start: usize, end: usize) -> usize {
    if end > start {
        return end;
    }
    match text[end..].chars().next() {
        Some(c) => end + c.len_utf8(),
        None => text.len() + 1,
    }
}

/// Byte offset `count` characters after `start`, clamped to the text end
fn advance_chars(text: &str, start: usize, count: usize) -> usize {
    text[start..]
        .char_indices()
        .nth(count)
        .map(|(i, _)| start + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(rule: &PatternRule, text: &str) -> Vec<(Category, usize, usize)> {
        let mut out = Vec::new();
        rule.scan(text, &mut |c, s, e| out.push((c, s, e)));
        out
    }

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new("number", r"\d+", Category::String).unwrap();
        assert_eq!(rule.find_at("abc 123 def", 0), Some((4, 7)));
        assert_eq!(rule.find_at("abc 123 def", 5), Some((5, 7)));
        assert_eq!(rule.find_at("no numbers", 0), None);
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        assert!(PatternRule::new("broken", r"(unclosed", Category::String).is_err());
    }

    #[test]
    fn test_words_are_whole_word_and_non_overlapping() {
        let rule = PatternRule::words("kw", ["in", "import"], Category::Keyword).unwrap();
        let spans = collect(&rule, "import inside in");
        assert_eq!(
            spans,
            vec![(Category::Keyword, 0, 6), (Category::Keyword, 14, 16)]
        );
    }

    #[test]
    fn test_words_escape_literals() {
        let rule = PatternRule::words("kw", ["a.b"], Category::Keyword).unwrap();
        assert_eq!(collect(&rule, "axb a.b").len(), 1);
    }

    #[test]
    fn test_empty_word_set_matches_nothing() {
        let rule = PatternRule::words("none", Vec::<String>::new(), Category::Keyword).unwrap();
        assert!(collect(&rule, "anything at all").is_empty());
    }

    #[test]
    fn test_capture_group() {
        let rule = PatternRule::with_group("call", r"(\w+)\(", 1, Category::Function).unwrap();
        assert_eq!(collect(&rule, "f(x) + g(y)"), vec![
            (Category::Function, 0, 1),
            (Category::Function, 7, 8),
        ]);
    }

    #[test]
    fn test_definition_fixed_keyword_len() {
        let rule = PatternRule::definition(
            "import",
            r"\b(import|from)[ \t]+(\w+)",
            Category::Import,
            Some(6),
            Category::Variable,
        )
        .unwrap();
        assert_eq!(collect(&rule, "import os"), vec![
            (Category::Import, 0, 6),
            (Category::Variable, 7, 9),
        ]);
        // "from" is shorter than six characters; the span still is six
        assert_eq!(collect(&rule, "from os import path"), vec![
            (Category::Import, 0, 6),
            (Category::Variable, 5, 7),
            (Category::Import, 8, 14),
            (Category::Variable, 15, 19),
        ]);
    }

    #[test]
    fn test_assignment_skips_comparison() {
        let rule = PatternRule::assignment("variable", Category::Variable).unwrap();
        assert_eq!(collect(&rule, "x = 1"), vec![(Category::Variable, 0, 1)]);
        assert!(collect(&rule, "if x == 1:").is_empty());
        assert!(collect(&rule, "a <= b").is_empty());
        assert_eq!(collect(&rule, "count=count+1"), vec![(Category::Variable, 0, 5)]);
    }
}
