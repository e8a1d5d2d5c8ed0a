//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::SakuError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, SakuError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| SakuError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| SakuError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at
/// all, preventing corruption on crashes or power failures.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SakuError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SakuError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("json.tmp");

    {
        let file = File::create(&temp_path).map_err(|e| {
            SakuError::Storage(format!("Failed to create {}: {}", temp_path.display(), e))
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data).map_err(|e| {
            SakuError::Storage(format!("Failed to write {}: {}", temp_path.display(), e))
        })?;

        writer.flush().map_err(|e| {
            SakuError::Storage(format!("Failed to flush {}: {}", temp_path.display(), e))
        })?;
    }

    // Atomic rename over the destination
    fs::rename(&temp_path, path).map_err(|e| {
        SakuError::Storage(format!("Failed to rename to {}: {}", path.display(), e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_returns_default() {
        let temp = TempDir::new().unwrap();
        let map: BTreeMap<String, String> = read_json(temp.path().join("missing.json")).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_write_read_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");

        let mut map = BTreeMap::new();
        map.insert("userName".to_string(), "Budi".to_string());

        write_json_atomic(&path, &map).unwrap();
        let loaded: BTreeMap<String, String> = read_json(&path).unwrap();
        assert_eq!(loaded, map);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("deep").join("prefs.json");

        write_json_atomic(&path, &"hello").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");

        write_json_atomic(&path, &42u32).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_read_corrupt_file_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");
        std::fs::write(&path, "not json {{{").unwrap();

        let result: Result<BTreeMap<String, String>, _> = read_json(&path);
        assert!(matches!(result, Err(SakuError::Storage(_))));
    }
}
