//! Error types for Local Code

use thiserror::Error;

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Editor error types
///
/// Every variant renders as a single human-readable message; that message is
/// all a user ever sees of a failure.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Failed to {action}: {source}")]
    Io {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run file: {0}")]
    Process(String),

    #[error("Process exited with status {code}:\n{output}")]
    ProcessExit { code: i32, output: String },

    #[error("{0}")]
    Validation(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Message(String),
}

impl EditorError {
    /// Wrap an I/O error with the action that failed (e.g. "save file")
    pub fn io(action: &'static str, source: std::io::Error) -> Self {
        EditorError::Io { action, source }
    }

    /// Whether this error came from the filesystem
    pub fn is_io(&self) -> bool {
        matches!(self, EditorError::Io { .. })
    }

    /// Whether this error came from launching or running a process
    pub fn is_process(&self) -> bool {
        matches!(self, EditorError::Process(_) | EditorError::ProcessExit { .. })
    }

    /// Whether this error rejected the request before doing any work
    pub fn is_validation(&self) -> bool {
        matches!(self, EditorError::Validation(_))
    }
}

impl From<std::io::Error> for EditorError {
    fn from(source: std::io::Error) -> Self {
        EditorError::io("access file", source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_message_names_action() {
        let err = EditorError::io("save file", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "Failed to save file: denied");
        assert!(err.is_io());
    }

    #[test]
    fn test_classification() {
        assert!(EditorError::Process("boom".into()).is_process());
        assert!(EditorError::ProcessExit { code: 1, output: String::new() }.is_process());
        assert!(EditorError::Validation("nope".into()).is_validation());
        assert!(!EditorError::Message("x".into()).is_io());
    }
}
