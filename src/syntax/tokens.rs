//! Lexical categories for syntax highlighting
//!
//! The category set is closed. Each category has a fixed name used by
//! styling layers and a default terminal style.

use super::style::{Color, Style};

/// Lexical categories recognised by the highlighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Reserved words (def, import, while, ...)
    Keyword,
    /// Control-flow and literal keywords styled apart from the rest
    SpecialKeyword,
    /// Quoted string literals
    String,
    /// Line comments
    Comment,
    /// Names introduced by a function definition
    Function,
    /// Import introducers
    Import,
    /// Names introduced by a class definition
    Class,
    /// Assignment targets and imported module names
    Variable,
    /// Names built into the language runtime
    BuiltinFunction,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 9] = [
        Category::Keyword,
        Category::SpecialKeyword,
        Category::String,
        Category::Comment,
        Category::Function,
        Category::Import,
        Category::Class,
        Category::Variable,
        Category::BuiltinFunction,
    ];

    /// Get the default style for this category
    pub fn default_style(&self) -> Style {
        match self {
            Category::Keyword => Style::fg(Color::Magenta).with_bold(),
            Category::SpecialKeyword => Style::fg(Color::BrightMagenta).with_bold(),
            Category::String => Style::fg(Color::Green),
            Category::Comment => Style::fg(Color::BrightBlack).with_italic(),
            Category::Function => Style::fg(Color::Blue),
            Category::Import => Style::fg(Color::BrightBlue),
            Category::Class => Style::fg(Color::Yellow).with_bold(),
            Category::Variable => Style::fg(Color::Cyan),
            Category::BuiltinFunction => Style::fg(Color::BrightCyan),
        }
    }

    /// The fixed interoperability name of this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::SpecialKeyword => "specialKeyword",
            Category::String => "string",
            Category::Comment => "comment",
            Category::Function => "function",
            Category::Import => "import",
            Category::Class => "class",
            Category::Variable => "variable",
            Category::BuiltinFunction => "builtinFunction",
        }
    }

    /// Parse a category from its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.name() == name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
