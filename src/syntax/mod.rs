//! Syntax highlighting
//!
//! This module provides a rule-table highlighter:
//! - Categories and their default styles
//! - Ordered pattern rules and language definitions
//! - Last-write-wins overlap resolution
//! - A manager mapping file names to languages

mod style;
mod tokens;
mod rules;
mod language;
mod manager;
mod resolve;
mod builtin;

pub use style::{Color, Span, Style};
pub use tokens::Category;
pub use rules::PatternRule;
pub use language::LanguageDefinition;
pub use manager::{SyntaxManager, DEFAULT_LANGUAGE};
pub use resolve::{apply_spans, resolve, StyleSink};
pub use builtin::{python_language, KEYWORDS, PYTHON_BUILTINS, PYTHON_VERSION, SPECIAL_KEYWORDS};
