//! Run the current file with an external interpreter

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::error::{EditorError, Result};
use crate::files::has_extension;

/// Placeholder reported when a run prints nothing
pub const NO_OUTPUT: &str = "(No output)";

/// Runs source files through an interpreter
#[derive(Debug, Clone)]
pub struct Runner {
    /// Interpreter program name or path
    pub interpreter: String,
    /// Extension (without the dot) a file must have to be run
    pub extension: String,
}

impl Runner {
    pub fn new(interpreter: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
            extension: extension.into(),
        }
    }

    /// Check that `path` may be run, without starting anything
    pub fn validate(&self, path: &Path) -> Result<()> {
        if has_extension(path, std::slice::from_ref(&self.extension)) {
            Ok(())
        } else {
            Err(EditorError::Validation(format!(
                "Only .{} files can be run: {}",
                self.extension,
                path.display()
            )))
        }
    }

    /// Locate the interpreter on PATH
    pub fn resolve_interpreter(&self) -> Result<PathBuf> {
        which::which(&self.interpreter)
            .map_err(|e| EditorError::Process(format!("{}: {}", self.interpreter, e)))
    }

    /// Run `path` and return its combined output
    ///
    /// Blocks until the interpreter exits. The path is the interpreter's
    /// only argument. Stdout comes first, then stderr.
    pub fn run(&self, path: &Path) -> Result<String> {
        self.validate(path)?;
        let program = self.resolve_interpreter()?;

        let output = Command::new(program)
            .arg(path)
            .output()
            .map_err(|e| EditorError::Process(e.to_string()))?;

        let combined = combine_output(&output);
        if output.status.success() {
            Ok(combined)
        } else {
            Err(EditorError::ProcessExit {
                code: output.status.code().unwrap_or(-1),
                output: combined,
            })
        }
    }
}

/// Join stdout and stderr into one blob
fn combine_output(output: &Output) -> String {
    let mut result = String::new();
    if !output.stdout.is_empty() {
        result.push_str(&String::from_utf8_lossy(&output.stdout));
    }
    if !output.stderr.is_empty() {
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(&String::from_utf8_lossy(&output.stderr));
    }
    if result.is_empty() {
        NO_OUTPUT.to_string()
    } else {
        result
    }
}
