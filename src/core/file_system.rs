// src/core/file_system.rs
use crate::core::error::TrackerResult;
use crate::core::state::ExpenseStore;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use log::{debug, info, warn};

pub struct FileSystem;

impl FileSystem {
    /// Writes the store as pretty JSON, overwriting `state_file` in place.
    pub fn save_state(state: &ExpenseStore, state_file: &str) -> TrackerResult<()> {
        let json = serde_json::to_string_pretty(state)?;

        if let Some(parent) = Path::new(state_file).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(state_file, json)?;
        debug!("Wrote {} expenses to {}", state.len(), state_file);
        Ok(())
    }

    /// Loads the store from `path`. A missing or empty file yields an empty store;
    /// unreadable files and malformed JSON are errors.
    pub fn load_state(path: &str) -> TrackerResult<ExpenseStore> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No data file at {}. Starting with an empty store.", path);
                return Ok(ExpenseStore::new());
            }
            Err(e) => return Err(e.into()),
        };

        if json.trim().is_empty() {
            info!("Data file {} is empty. Starting with an empty store.", path);
            return Ok(ExpenseStore::new());
        }

        let mut state: ExpenseStore = serde_json::from_str(&json)?;
        if state.normalize_next_id()? {
            warn!("next_id in {} was behind the stored ids; raised to {}", path, state.next_id());
        }
        debug!("Loaded {} expenses from {}", state.len(), path);
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TrackerError;
    use tempfile::TempDir;

    fn state_path(temp_dir: &TempDir) -> String {
        temp_dir.path().join("data.json").to_str().unwrap().to_string()
    }

    #[test]
    fn test_load_missing_file_returns_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let state = FileSystem::load_state(&state_path(&temp_dir)).unwrap();
        assert!(state.is_empty());
        assert_eq!(state.next_id(), 1);
    }

    #[test]
    fn test_load_empty_file_returns_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = state_path(&temp_dir);
        fs::write(&path, "  \n").unwrap();
        let state = FileSystem::load_state(&path).unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = state_path(&temp_dir);
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(FileSystem::load_state(&path), Err(TrackerError::Json(_))));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_str().unwrap().to_string();
        assert!(matches!(FileSystem::load_state(&path), Err(TrackerError::Io(_))));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = state_path(&temp_dir);

        let mut state = ExpenseStore::new();
        state.add("coffee".to_string(), 3.5).unwrap();
        state.add("book".to_string(), 20.0).unwrap();
        state.delete(1).unwrap();

        FileSystem::save_state(&state, &path).unwrap();
        let loaded = FileSystem::load_state(&path).unwrap();

        assert_eq!(loaded, state);
        assert_eq!(loaded.next_id(), 3);
    }

    #[test]
    fn test_saved_file_layout() {
        let temp_dir = TempDir::new().unwrap();
        let path = state_path(&temp_dir);

        let mut state = ExpenseStore::new();
        state.add("coffee".to_string(), 3.5).unwrap();
        FileSystem::save_state(&state, &path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["next_id"], 2);
        assert_eq!(value["records"][0]["id"], 1);
        assert_eq!(value["records"][0]["amount"], 3.5);
        assert_eq!(value["records"][0]["description"], "coffee");
        assert!(value["records"][0]["date"].is_string());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("data.json").to_str().unwrap().to_string();
        FileSystem::save_state(&ExpenseStore::new(), &path).unwrap();
        assert!(Path::new(&path).exists());
    }

    #[test]
    fn test_load_repairs_stale_next_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = state_path(&temp_dir);
        fs::write(&path, r#"{"records": [
            {"id": 3, "date": "2024-08-01T10:00:00+00:00", "amount": 1.0, "description": "a"}
        ], "next_id": 1}"#).unwrap();

        let state = FileSystem::load_state(&path).unwrap();
        assert_eq!(state.next_id(), 4);
    }

    #[test]
    fn test_load_with_max_id_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = state_path(&temp_dir);
        fs::write(&path, r#"{"records": [
            {"id": 18446744073709551615, "date": "2024-08-01T10:00:00+00:00", "amount": 1.0, "description": "a"}
        ], "next_id": 1}"#).unwrap();

        assert!(matches!(FileSystem::load_state(&path), Err(TrackerError::IdOverflow(_))));
    }
}
