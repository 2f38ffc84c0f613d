//! File operations: new, open, save, rename, delete
//!
//! Thin wrappers over `std::fs` that tag each failure with the action the
//! user attempted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EditorError, Result};

/// Create (or truncate) `path` with `template`, then read it back
pub fn new_file(path: &Path, template: &str) -> Result<String> {
    fs::write(path, template).map_err(|e| EditorError::io("create new file", e))?;
    fs::read_to_string(path).map_err(|e| EditorError::io("create new file", e))
}

/// Read a whole file as text
pub fn open_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| EditorError::io("open file", e))
}

/// Write `text` to `path`, replacing its contents
pub fn save(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| EditorError::io("save file", e))
}

/// Rename `old` to `new_name` within the same directory
///
/// Returns the new path.
pub fn rename(old: &Path, new_name: &str) -> Result<PathBuf> {
    if new_name.is_empty() || new_name.contains(['/', '\\']) {
        return Err(EditorError::Validation(format!("Invalid name: {:?}", new_name)));
    }
    let new_path = old
        .parent()
        .map(|parent| parent.join(new_name))
        .unwrap_or_else(|| PathBuf::from(new_name));
    fs::rename(old, &new_path).map_err(|e| EditorError::io("rename", e))?;
    Ok(new_path)
}

/// Delete a file or an empty directory
pub fn delete(path: &Path) -> Result<()> {
    let result = if path.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| EditorError::io("delete", e))
}

/// Whether `path` is a regular file with one of `extensions`
pub fn is_openable(path: &Path, extensions: &[String]) -> bool {
    path.is_file() && has_extension(path, extensions)
}

/// Whether `path` ends in one of `extensions` (compared without the dot)
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_file_writes_template() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hello.py");
        let content = new_file(&path, "# - Happy Coding! - #").unwrap();
        assert_eq!(content, "# - Happy Coding! - #");
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_save_and_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        save(&path, "one\ntwo").unwrap();
        assert_eq!(open_file(&path).unwrap(), "one\ntwo");
    }

    #[test]
    fn test_open_missing_reports_action() {
        let dir = tempdir().unwrap();
        let err = open_file(&dir.path().join("missing.py")).unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().starts_with("Failed to open file: "));
    }

    #[test]
    fn test_rename_stays_in_directory() {
        let dir = tempdir().unwrap();
        let old = dir.path().join("old.py");
        fs::write(&old, "x").unwrap();
        let new = rename(&old, "new.py").unwrap();
        assert_eq!(new, dir.path().join("new.py"));
        assert!(!old.exists());
        assert_eq!(fs::read_to_string(new).unwrap(), "x");
    }

    #[test]
    fn test_rename_rejects_path_names() {
        let dir = tempdir().unwrap();
        let old = dir.path().join("old.py");
        fs::write(&old, "x").unwrap();
        assert!(rename(&old, "../escape.py").unwrap_err().is_validation());
        assert!(rename(&old, "").unwrap_err().is_validation());
        assert!(old.exists());
    }

    #[test]
    fn test_delete_file_and_empty_dir() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f.txt");
        fs::write(&file, "").unwrap();
        delete(&file).unwrap();
        assert!(!file.exists());

        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        delete(&sub).unwrap();
        assert!(!sub.exists());
    }

    #[test]
    fn test_delete_non_empty_dir_fails() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("keep.txt"), "").unwrap();
        let err = delete(&sub).unwrap_err();
        assert!(err.to_string().starts_with("Failed to delete: "));
        assert!(sub.exists());
    }

    #[test]
    fn test_is_openable() {
        let dir = tempdir().unwrap();
        let py = dir.path().join("a.py");
        let md = dir.path().join("a.md");
        fs::write(&py, "").unwrap();
        fs::write(&md, "").unwrap();
        let allowed = exts(&["txt", "py"]);
        assert!(is_openable(&py, &allowed));
        assert!(!is_openable(&md, &allowed));
        assert!(!is_openable(dir.path(), &allowed));
        assert!(!is_openable(&dir.path().join("missing.py"), &allowed));
    }
}
