//! File-backed storage.
//!
//! All keys live in a single JSON object on disk. Every operation re-reads the
//! file, so separate handles and separate runs of the CLI see each other's writes.

use super::{LocalStorage, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

type Items = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage backed by the file at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the backing file. Deleting a file that does not exist is not an error.
    pub fn delete(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn load(&self) -> Result<Items, StorageError> {
        let buf = match fs::read(&self.path) {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Items::new()),
            Err(e) => return Err(e.into()),
        };
        if buf.iter().all(u8::is_ascii_whitespace) {
            return Ok(Items::new());
        }
        serde_json::from_slice(&buf).map_err(StorageError::CorruptStore)
    }

    fn persist(&self, items: &Items) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(items).map_err(StorageError::Serialize)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());
        self.persist(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.load()?;
        if items.remove(key).is_some() {
            self.persist(&items)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.persist(&Items::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::parse_json_from_local_storage;
    use tempfile::tempdir;

    #[test]
    // A file that has never been written reads as empty storage.
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        assert_eq!(storage.get_item("anything").unwrap(), None);
    }

    #[test]
    // Writing should create the parent directories.
    fn test_set_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let storage = FileStorage::new(&path);

        storage.set_item("week_start", "1").unwrap();
        assert!(path.exists());
    }

    #[test]
    // A second handle on the same file sees values written by the first.
    fn test_values_survive_new_handle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");

        FileStorage::new(&path)
            .set_item("enabled_remotes", r#"["SYNC"]"#)
            .unwrap();

        let reopened = FileStorage::new(&path);
        let remotes: Option<Vec<String>> =
            parse_json_from_local_storage(&reopened, "enabled_remotes");
        assert_eq!(remotes, Some(vec!["SYNC".to_string()]));
    }

    #[test]
    fn test_remove_and_clear() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();

        storage.remove_item("a").unwrap();
        assert_eq!(storage.get_item("a").unwrap(), None);
        assert_eq!(storage.get_item("b").unwrap().as_deref(), Some("2"));

        storage.clear().unwrap();
        assert_eq!(storage.get_item("b").unwrap(), None);
    }

    #[test]
    // A corrupt file is reported by the backend and swallowed by the fail-soft reader.
    fn test_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "invalid json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get_item("a"),
            Err(StorageError::CorruptStore(_))
        ));
        assert_eq!(parse_json_from_local_storage::<u32, _>(&storage, "a"), None);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let storage = FileStorage::new(&path);
        storage.set_item("a", "1").unwrap();

        storage.delete().unwrap();
        assert!(!path.exists());
        storage.delete().unwrap();
    }
}
