//! Built-in language definitions

mod python;

pub use python::{python_language, KEYWORDS, PYTHON_BUILTINS, PYTHON_VERSION, SPECIAL_KEYWORDS};

use super::language::LanguageDefinition;
use crate::error::Result;

/// Get all built-in language definitions
pub fn all_languages(extra_builtins: &[String]) -> Result<Vec<LanguageDefinition>> {
    Ok(vec![python_language(extra_builtins)?])
}
