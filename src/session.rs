//! Editor session - the state one editor window works on
//!
//! Holds the open document, the file and folder it came from, find state and
//! the status message. Every user action goes through a method here; failed
//! actions leave the session usable and are turned into a message by
//! [`Session::report`].

use std::path::{Path, PathBuf};

use crate::buffer::Document;
use crate::config::Config;
use crate::error::Result;
use crate::files;
use crate::runner::Runner;
use crate::search::FindState;
use crate::syntax::{Span, StyleSink, SyntaxManager};

/// Editor session state
pub struct Session {
    /// The open document
    pub document: Document,
    /// File the document was loaded from or saved to
    current_file: Option<PathBuf>,
    /// Folder opened for browsing
    current_folder: Option<PathBuf>,
    /// Find state for the document
    pub find: FindState,
    /// Syntax highlighting
    pub syntax: SyntaxManager,
    /// Settings
    pub config: Config,
    /// Last status or error message
    message: Option<String>,
}

impl Session {
    /// Create a session with an empty, unnamed document
    pub fn new(config: Config) -> Result<Self> {
        let mut syntax = SyntaxManager::with_builtins(&config.extra_builtins)?;
        syntax.enabled = config.highlighting;
        Ok(Self {
            document: Document::new(),
            current_file: None,
            current_folder: None,
            find: FindState::new(),
            syntax,
            config,
            message: None,
        })
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn current_folder(&self) -> Option<&Path> {
        self.current_folder.as_deref()
    }

    pub fn set_folder(&mut self, path: impl Into<PathBuf>) {
        self.current_folder = Some(path.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Convert a result into an optional value, recording any error as the
    /// status message
    pub fn report<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.message = Some(e.to_string());
                None
            }
        }
    }

    /// Replace the document text, as an edit
    pub fn edit(&mut self, text: impl Into<String>) {
        self.document.replace_all(text);
        self.refresh_find();
    }

    /// Create `path` from the new-file template and open it
    pub fn new_file(&mut self, path: &Path) -> Result<()> {
        let content = files::new_file(path, &self.config.new_file_template)?;
        self.load(path, content);
        Ok(())
    }

    /// Open `path` into the document
    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        let content = files::open_file(path)?;
        self.load(path, content);
        Ok(())
    }

    fn load(&mut self, path: &Path, content: String) {
        self.document.load(content);
        self.current_file = Some(path.to_path_buf());
        self.find.cancel();
        self.message = Some(format!("Opened {}", path.display()));
    }

    /// Save to the current file; does nothing when there is none
    pub fn save(&mut self) -> Result<()> {
        let Some(path) = self.current_file.clone() else {
            return Ok(());
        };
        self.write_to(&path)
    }

    /// Save to `path` and make it the current file
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        self.write_to(path)?;
        self.current_file = Some(path.to_path_buf());
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<()> {
        files::save(path, self.document.text())?;
        self.document.set_modified(false);
        self.message = Some(format!(
            "Wrote {} lines to {}",
            self.document.line_count(),
            path.display()
        ));
        Ok(())
    }

    /// Rename `path` to `new_name` in its directory, following the current
    /// file if that is what moved
    pub fn rename(&mut self, path: &Path, new_name: &str) -> Result<PathBuf> {
        let new_path = files::rename(path, new_name)?;
        if self.current_file.as_deref() == Some(path) {
            self.current_file = Some(new_path.clone());
        }
        Ok(new_path)
    }

    /// Rename the current file
    pub fn rename_current(&mut self, new_name: &str) -> Result<Option<PathBuf>> {
        match self.current_file.clone() {
            Some(path) => self.rename(&path, new_name).map(Some),
            None => Ok(None),
        }
    }

    /// Delete `path`; if it was the current file the document is cleared
    pub fn delete(&mut self, path: &Path) -> Result<()> {
        files::delete(path)?;
        if self.current_file.as_deref() == Some(path) {
            self.document.clear();
            self.current_file = None;
            self.find.cancel();
        }
        Ok(())
    }

    /// Open `path` if it is an openable file, saving the current one first
    ///
    /// Returns whether `path` was opened.
    pub fn select(&mut self, path: &Path) -> Result<bool> {
        if !files::is_openable(path, &self.config.openable_extensions) {
            return Ok(false);
        }
        self.save()?;
        self.open_file(path)?;
        Ok(true)
    }

    /// Highlight the whole document
    pub fn highlight(&self) -> Vec<Span> {
        self.syntax
            .highlight(self.current_file.as_deref(), self.document.text())
    }

    /// Highlight the whole document and repaint `sink`
    pub fn render_into(&self, sink: &mut dyn StyleSink) -> Vec<Span> {
        self.syntax
            .render_into(self.current_file.as_deref(), self.document.text(), sink)
    }

    /// Search the document; returns the number of matches
    pub fn find(&mut self, term: &str) -> usize {
        let count = self.find.search(self.document.text(), term);
        if !term.is_empty() {
            self.message = Some(format!("{} matches for {:?}", count, term));
        }
        count
    }

    pub fn find_next(&mut self) -> Option<(usize, usize)> {
        self.find.next()
    }

    pub fn find_previous(&mut self) -> Option<(usize, usize)> {
        self.find.previous()
    }

    pub fn cancel_find(&mut self) {
        self.find.cancel();
    }

    /// Re-run an active search after the text changed
    fn refresh_find(&mut self) {
        if !self.find.term().is_empty() {
            let term = self.find.term().to_string();
            self.find.search(self.document.text(), &term);
        }
    }

    /// Runner configured for this session
    pub fn runner(&self) -> Runner {
        Runner::new(&self.config.interpreter, &self.config.source_extension)
    }

    /// Run the current file and return its output
    ///
    /// Without a current file there is nothing to run and the result is None.
    pub fn run(&mut self) -> Result<Option<String>> {
        let Some(path) = self.current_file.clone() else {
            return Ok(None);
        };
        self.runner().run(&path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn session() -> Session {
        Session::new(Config::default()).unwrap()
    }

    #[test]
    fn test_new_file_opens_template() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.py");
        let mut s = session();
        s.new_file(&path).unwrap();
        assert_eq!(s.document.text(), crate::config::DEFAULT_TEMPLATE);
        assert_eq!(s.current_file(), Some(path.as_path()));
        assert!(!s.document.is_modified());
    }

    #[test]
    fn test_edit_and_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.py");
        fs::write(&path, "old").unwrap();
        let mut s = session();
        s.open_file(&path).unwrap();
        s.edit("x = 1\n");
        assert!(s.document.is_modified());
        s.save().unwrap();
        assert!(!s.document.is_modified());
        assert_eq!(fs::read_to_string(&path).unwrap(), "x = 1\n");
        assert!(s.message().unwrap().starts_with("Wrote 2 lines"));
    }

    #[test]
    fn test_save_without_file_is_noop() {
        let mut s = session();
        s.edit("text");
        s.save().unwrap();
        assert!(s.document.is_modified());
    }

    #[test]
    fn test_save_as_sets_current_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("b.py");
        let mut s = session();
        s.edit("print(1)");
        s.save_as(&path).unwrap();
        assert_eq!(s.current_file(), Some(path.as_path()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "print(1)");
    }

    #[test]
    fn test_rename_follows_current_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.py");
        fs::write(&path, "").unwrap();
        let mut s = session();
        s.open_file(&path).unwrap();
        let new = s.rename_current("b.py").unwrap().unwrap();
        assert_eq!(s.current_file(), Some(new.as_path()));
        assert_eq!(new, dir.path().join("b.py"));
    }

    #[test]
    fn test_rename_other_file_keeps_current() {
        let dir = tempdir().unwrap();
        let current = dir.path().join("a.py");
        let other = dir.path().join("c.py");
        fs::write(&current, "").unwrap();
        fs::write(&other, "").unwrap();
        let mut s = session();
        s.open_file(&current).unwrap();
        s.rename(&other, "d.py").unwrap();
        assert_eq!(s.current_file(), Some(current.as_path()));
    }

    #[test]
    fn test_delete_current_clears_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.py");
        fs::write(&path, "data").unwrap();
        let mut s = session();
        s.open_file(&path).unwrap();
        s.delete(&path).unwrap();
        assert!(s.document.is_empty());
        assert_eq!(s.current_file(), None);
    }

    #[test]
    fn test_failure_becomes_message_and_session_survives() {
        let dir = tempdir().unwrap();
        let mut s = session();
        let result = s.open_file(&dir.path().join("missing.py"));
        assert_eq!(s.report(result), None);
        assert!(s.message().unwrap().starts_with("Failed to open file"));

        s.edit("still usable");
        assert_eq!(s.document.text(), "still usable");
    }

    #[test]
    fn test_select_saves_then_opens() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.py");
        let second = dir.path().join("second.txt");
        let skipped = dir.path().join("image.png");
        fs::write(&first, "").unwrap();
        fs::write(&second, "second").unwrap();
        fs::write(&skipped, "").unwrap();

        let mut s = session();
        s.open_file(&first).unwrap();
        s.edit("changed");
        assert!(!s.select(&skipped).unwrap());
        assert!(s.select(&second).unwrap());
        assert_eq!(fs::read_to_string(&first).unwrap(), "changed");
        assert_eq!(s.document.text(), "second");
    }

    #[test]
    fn test_find_cycles_and_cancels() {
        let mut s = session();
        s.edit("foofoobar");
        assert_eq!(s.find("foo"), 2);
        assert_eq!(s.find.current(), Some((0, 3)));
        assert_eq!(s.find_next(), Some((3, 6)));
        assert_eq!(s.find_next(), Some((0, 3)));
        s.cancel_find();
        assert!(s.find.matches().is_empty());
    }

    #[test]
    fn test_edit_refreshes_search() {
        let mut s = session();
        s.edit("a a");
        s.find("a");
        s.edit("a a a");
        assert_eq!(s.find.count(), 3);
    }

    #[test]
    fn test_run_rejects_non_source_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "").unwrap();
        let mut s = session();
        s.open_file(&path).unwrap();
        assert!(s.run().unwrap_err().is_validation());
    }

    #[test]
    fn test_run_without_file() {
        let mut s = session();
        assert_eq!(s.run().unwrap(), None);
    }

    #[test]
    fn test_highlight_uses_file_language() {
        let dir = tempdir().unwrap();
        let txt = dir.path().join("notes.txt");
        fs::write(&txt, "import os").unwrap();
        let mut s = session();
        s.edit("import os");
        assert!(!s.highlight().is_empty());
        s.open_file(&txt).unwrap();
        assert!(s.highlight().is_empty());
    }

    #[test]
    fn test_highlighting_disabled_by_config() {
        let config = Config {
            highlighting: false,
            ..Config::default()
        };
        let mut s = Session::new(config).unwrap();
        s.edit("def f(): pass");
        assert!(s.highlight().is_empty());
    }
}
