//! On-disk persistence for the key-value store
//!
//! The store is one flat JSON object of string values. Writes go to a sibling
//! temp file that is synced and renamed over the original.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};

/// Contents of a store file
pub type StoreMap = BTreeMap<String, String>;

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> TrackerError {
    TrackerError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read a store file; a missing file is an empty store
pub fn read_store(path: &Path) -> TrackerResult<StoreMap> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StoreMap::new()),
        Err(e) => return Err(storage_error("read", path, e)),
    };

    if contents.trim().is_empty() {
        return Ok(StoreMap::new());
    }

    serde_json::from_str(&contents)
        .map_err(|e| TrackerError::Json(format!("{}: {}", path.display(), e)))
}

/// Rename an unreadable store file to `<name>.corrupt`
pub fn set_aside(path: &Path) -> TrackerResult<PathBuf> {
    let target = sibling(path, ".corrupt");
    fs::rename(path, &target).map_err(|e| storage_error("move aside", path, e))?;
    Ok(target)
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    path.with_file_name(name)
}

/// Replace the store file with `entries` in one rename
pub fn write_store_atomic(path: &Path, entries: &StoreMap) -> TrackerResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    let json = serde_json::to_vec_pretty(entries)?;
    let temp = sibling(path, ".tmp");

    let written = File::create(&temp).and_then(|mut file| {
        file.write_all(&json)?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp);
        return Err(storage_error("write", &temp, e));
    }

    fs::rename(&temp, path).map_err(|e| {
        let _ = fs::remove_file(&temp);
        storage_error("replace", path, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let entries = read_store(&temp_dir.path().join("nonexistent.json")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_blank_file_is_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "  \n").unwrap();

        assert!(read_store(&path).unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let mut entries = StoreMap::new();
        entries.insert("darkMode".to_string(), "enabled".to_string());

        write_store_atomic(&path, &entries).unwrap();
        assert_eq!(read_store(&path).unwrap(), entries);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        write_store_atomic(&path, &StoreMap::new()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("store.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("store.json");

        write_store_atomic(&path, &StoreMap::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(matches!(read_store(&path), Err(TrackerError::Json(_))));
    }

    #[test]
    fn test_read_directory_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            read_store(temp_dir.path()),
            Err(TrackerError::Storage(_))
        ));
    }

    #[test]
    fn test_failed_write_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        let mut entries = StoreMap::new();
        entries.insert("darkMode".to_string(), "disabled".to_string());
        write_store_atomic(&path, &entries).unwrap();

        fs::create_dir(temp_dir.path().join("store.json.tmp")).unwrap();
        entries.insert("darkMode".to_string(), "enabled".to_string());
        assert!(write_store_atomic(&path, &entries).is_err());

        assert_eq!(
            read_store(&path).unwrap().get("darkMode").map(String::as_str),
            Some("disabled")
        );
    }

    #[test]
    fn test_set_aside_renames_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "{ truncated").unwrap();

        let moved = set_aside(&path).unwrap();

        assert_eq!(moved, temp_dir.path().join("store.json.corrupt"));
        assert!(!path.exists());
        assert_eq!(fs::read_to_string(moved).unwrap(), "{ truncated");
    }
}
