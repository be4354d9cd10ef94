use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::{Roster, StoreError};

/// Reads the roster stored at `path`, one name per line.
pub fn load(path: &Path) -> Result<Roster, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let roster = Roster::parse(&text);
    info!(path = %path.display(), count = roster.len(), "loaded roster");
    Ok(roster)
}

/// Overwrites `path` with the roster's names joined by newlines.
///
/// The file is rewritten in place; there is no temporary file or rename.
pub fn save(path: &Path, roster: &Roster) -> Result<(), StoreError> {
    let text = roster.to_text();
    debug!(path = %path.display(), bytes = text.len(), "writing roster");
    fs::write(path, text).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), count = roster.len(), "saved roster");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = load(&dir.path().join("students.txt")).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("students.txt"));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("students.txt");
        let err = save(&path, &Roster::new().add("Alice")).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.txt");
        fs::write(&path, "Old\nNames\nHere\n").unwrap();
        save(&path, &Roster::new().add("New")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "New");
    }
}
