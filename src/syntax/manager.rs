//! Syntax highlighting manager
//!
//! Maps file names to language definitions and runs full-document
//! highlighting. Nothing is cached between calls: every call rescans the
//! whole text.

use std::collections::HashMap;
use std::path::Path;

use super::builtin;
use super::language::LanguageDefinition;
use super::resolve::{apply_spans, StyleSink};
use super::style::Span;
use crate::error::Result;

/// Language used when a document has no file name yet
pub const DEFAULT_LANGUAGE: &str = "Python";

/// Main syntax highlighting manager
pub struct SyntaxManager {
    /// Loaded language definitions
    languages: HashMap<String, LanguageDefinition>,
    /// Extension to language name mapping
    extension_map: HashMap<String, String>,
    /// Whether syntax highlighting is enabled
    pub enabled: bool,
}

impl SyntaxManager {
    /// Create a manager with the built-in languages
    pub fn new() -> Result<Self> {
        Self::with_builtins(&[])
    }

    /// Create a manager whose built-in name lists are extended with `extra`
    pub fn with_builtins(extra: &[String]) -> Result<Self> {
        let mut manager = Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
            enabled: true,
        };
        for lang in builtin::all_languages(extra)? {
            manager.add_language(lang);
        }
        Ok(manager)
    }

    /// Add a language definition, replacing any with the same name
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let name = lang.name.clone();
        for ext in &lang.extensions {
            self.extension_map.insert(ext.to_lowercase(), name.clone());
        }
        self.languages.insert(name, lang);
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<&str> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(|s| s.as_str())
    }

    /// Get a language definition by name
    pub fn get_language(&self, name: &str) -> Option<&LanguageDefinition> {
        self.languages.get(name)
    }

    /// Language for a document: detected from its file name, or the default
    /// language when it has none. A file with an unknown extension gets no
    /// highlighting.
    pub fn language_for(&self, filename: Option<&Path>) -> Option<&LanguageDefinition> {
        let name = match filename {
            Some(path) => self.detect_language(path)?,
            None => DEFAULT_LANGUAGE,
        };
        self.languages.get(name)
    }

    /// Highlight `text` as the document stored at `filename`
    ///
    /// Returns an empty list when highlighting is off or no language applies.
    pub fn highlight(&self, filename: Option<&Path>, text: &str) -> Vec<Span> {
        if !self.enabled {
            return Vec::new();
        }
        self.language_for(filename)
            .map(|lang| lang.highlight(text))
            .unwrap_or_default()
    }

    /// Re-highlight `text` and repaint `sink` from scratch
    pub fn render_into(&self, filename: Option<&Path>, text: &str, sink: &mut dyn StyleSink) -> Vec<Span> {
        let spans = self.highlight(filename, text);
        apply_spans(&spans, sink);
        spans
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Toggle syntax highlighting on/off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}
