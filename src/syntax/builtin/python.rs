//! Python language definition

use crate::error::Result;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::Category;

/// Python release the keyword and built-in name lists were taken from
pub const PYTHON_VERSION: &str = "3.12";

/// Reserved words
pub const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Keywords re-tagged with their own category on top of [`KEYWORDS`]
pub const SPECIAL_KEYWORDS: &[&str] = &[
    "return", "True", "False", "if", "not", "and", "or", "pass", "in", "for", "while",
];

/// Names bound in the `builtins` module, minus dunders and the keyword constants
pub const PYTHON_BUILTINS: &[&str] = &[
    // functions
    "abs", "aiter", "all", "anext", "any", "ascii", "bin", "breakpoint", "callable", "chr",
    "compile", "copyright", "credits", "delattr", "dir", "divmod", "eval", "exec", "exit",
    "format", "getattr", "globals", "hasattr", "hash", "help", "hex", "id", "input",
    "isinstance", "issubclass", "iter", "len", "license", "locals", "max", "min", "next",
    "oct", "open", "ord", "pow", "print", "quit", "repr", "round", "setattr", "sorted", "sum",
    "vars",
    // types
    "bool", "bytearray", "bytes", "classmethod", "complex", "dict", "enumerate", "filter",
    "float", "frozenset", "int", "list", "map", "memoryview", "object", "property", "range",
    "reversed", "set", "slice", "staticmethod", "str", "super", "tuple", "type", "zip",
    // constants
    "Ellipsis", "NotImplemented",
    // exceptions
    "ArithmeticError", "AssertionError", "AttributeError", "BaseException",
    "BaseExceptionGroup", "BlockingIOError", "BrokenPipeError", "BufferError", "BytesWarning",
    "ChildProcessError", "ConnectionAbortedError", "ConnectionError", "ConnectionRefusedError",
    "ConnectionResetError", "DeprecationWarning", "EOFError", "EncodingWarning",
    "EnvironmentError", "Exception", "ExceptionGroup", "FileExistsError", "FileNotFoundError",
    "FloatingPointError", "FutureWarning", "GeneratorExit", "IOError", "ImportError",
    "ImportWarning", "IndentationError", "IndexError", "InterruptedError", "IsADirectoryError",
    "KeyError", "KeyboardInterrupt", "LookupError", "MemoryError", "ModuleNotFoundError",
    "NameError", "NotADirectoryError", "NotImplementedError", "OSError", "OverflowError",
    "PendingDeprecationWarning", "PermissionError", "ProcessLookupError", "RecursionError",
    "ReferenceError", "ResourceWarning", "RuntimeError", "RuntimeWarning",
    "StopAsyncIteration", "StopIteration", "SyntaxError", "SyntaxWarning", "SystemError",
    "SystemExit", "TabError", "TimeoutError", "TypeError", "UnboundLocalError",
    "UnicodeDecodeError", "UnicodeEncodeError", "UnicodeError", "UnicodeTranslateError",
    "UnicodeWarning", "UserWarning", "ValueError", "Warning", "ZeroDivisionError",
];

/// Create the Python language definition
///
/// `extra_builtins` is appended to [`PYTHON_BUILTINS`].
pub fn python_language(extra_builtins: &[String]) -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new("Python");
    lang.add_extension("py");
    lang.add_extension("pyw");
    lang.add_extension("pyi");

    lang.add_rule(PatternRule::new("comment", r"#.*", Category::Comment)?);
    lang.add_rule(PatternRule::words("keyword", KEYWORDS, Category::Keyword)?);
    lang.add_rule(PatternRule::words("special_keyword", SPECIAL_KEYWORDS, Category::SpecialKeyword)?);
    // No escapes and no triple quotes: a string ends at the next matching quote
    lang.add_rule(PatternRule::new("string", r#"".*?"|'.*?'"#, Category::String)?);
    lang.add_rule(PatternRule::definition(
        "function",
        r"\b(def)[ \t]+(\w+)",
        Category::Keyword,
        None,
        Category::Function,
    )?);
    // Introducer span is always six characters, even for `from`
    lang.add_rule(PatternRule::definition(
        "import",
        r"\b(import|from)[ \t]+(\w+)",
        Category::Import,
        Some(6),
        Category::Variable,
    )?);
    lang.add_rule(PatternRule::definition(
        "class",
        r"\b(class)[ \t]+(\w+)",
        Category::Keyword,
        Some(5),
        Category::Class,
    )?);

    let builtins = PYTHON_BUILTINS
        .iter()
        .copied()
        .chain(extra_builtins.iter().map(String::as_str));
    lang.add_rule(PatternRule::words("builtin", builtins, Category::BuiltinFunction)?);
    lang.add_rule(PatternRule::assignment("variable", Category::Variable)?);

    Ok(lang)
}
