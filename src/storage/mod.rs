//! Key-value text storage and the JSON accessors built on top of it.
//!
//! Values are stored as text under string keys, the way browser local storage
//! works. Structured values go through [`write_json`] and come back through either
//! [`read_json`], which reports why a read failed, or
//! [`parse_json_from_local_storage`], which folds every failure into `None`.

pub mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(test)]
use mockall::automock;

/// A synchronous key-value text store.
#[cfg_attr(test, automock)]
pub trait LocalStorage {
    /// Returns the text stored under `key`, or `None` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Removes every key.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Reads and parses the JSON value stored under `key`.
///
/// # Errors
/// * [`StorageError::Missing`] if nothing is stored under `key`.
/// * [`StorageError::Parse`] if the stored text is not valid JSON for `T`.
/// * Any error the backend reports while reading.
pub fn read_json<T, S>(storage: &S, key: &str) -> Result<T, StorageError>
where
    T: DeserializeOwned,
    S: LocalStorage + ?Sized,
{
    let raw = storage
        .get_item(key)?
        .ok_or_else(|| StorageError::Missing(key.to_string()))?;

    serde_json::from_str(&raw).map_err(|source| StorageError::Parse {
        key: key.to_string(),
        source,
    })
}

/// Reads the JSON value stored under `key`, or `None` on any failure.
///
/// Missing keys, malformed JSON and backend failures are indistinguishable to the
/// caller. Use [`read_json`] when the cause matters.
pub fn parse_json_from_local_storage<T, S>(storage: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: LocalStorage + ?Sized,
{
    match read_json(storage, key) {
        Ok(value) => Some(value),
        Err(e) if e.is_missing() => None,
        Err(e) => {
            log::debug!("Ignoring unreadable local storage value: {}", e);
            None
        }
    }
}

/// Serializes `value` as JSON and stores it under `key`.
pub fn write_json<T, S>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: LocalStorage + ?Sized,
{
    let json = serde_json::to_string(value).map_err(StorageError::Serialize)?;
    storage.set_item(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Remote {
        name: String,
        url: Option<String>,
        retries: u32,
    }

    #[test]
    fn test_absent_key_reads_as_none() {
        let storage = MemoryStorage::new();
        let value: Option<Vec<String>> = parse_json_from_local_storage(&storage, "missing");
        assert_eq!(value, None);
    }

    #[test]
    fn test_malformed_json_reads_as_none() {
        let storage = MemoryStorage::new();
        storage.set_item("remotes", "{not json").unwrap();

        let value: Option<Remote> = parse_json_from_local_storage(&storage, "remotes");
        assert_eq!(value, None);
    }

    #[test]
    fn test_wrong_shape_reads_as_none() {
        let storage = MemoryStorage::new();
        storage.set_item("remotes", "[1, 2, 3]").unwrap();

        let value: Option<Remote> = parse_json_from_local_storage(&storage, "remotes");
        assert_eq!(value, None);
    }

    #[test]
    fn test_written_value_reads_back_equal() {
        let storage = MemoryStorage::new();
        let remote = Remote {
            name: "sync".to_string(),
            url: Some("https://sync.example.org".to_string()),
            retries: 3,
        };
        write_json(&storage, "remote", &remote).unwrap();
        assert_eq!(parse_json_from_local_storage(&storage, "remote"), Some(remote));

        let mut urls = HashMap::new();
        urls.insert("AUTH".to_string(), String::new());
        urls.insert("SYNC".to_string(), "https://a.example".to_string());
        write_json(&storage, "remote_urls", &urls).unwrap();
        assert_eq!(parse_json_from_local_storage(&storage, "remote_urls"), Some(urls));
    }

    #[test]
    fn test_read_json_distinguishes_causes() {
        let storage = MemoryStorage::new();
        storage.set_item("broken", "nope").unwrap();

        let missing = read_json::<u32, _>(&storage, "absent").unwrap_err();
        assert!(matches!(missing, StorageError::Missing(ref key) if key == "absent"));

        let broken = read_json::<u32, _>(&storage, "broken").unwrap_err();
        assert!(matches!(broken, StorageError::Parse { ref key, .. } if key == "broken"));
    }

    #[test]
    fn test_backend_failure_reads_as_none() {
        let mut storage = MockLocalStorage::new();
        storage.expect_get_item().returning(|_| {
            Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )))
        });

        let value: Option<String> = parse_json_from_local_storage(&storage, "any");
        assert_eq!(value, None);

        let err = read_json::<String, _>(&storage, "any").unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }

    #[test]
    fn test_works_through_trait_objects() {
        let storage: Box<dyn LocalStorage> = Box::new(MemoryStorage::new());
        write_json(storage.as_ref(), "flag", &true).unwrap();
        assert_eq!(
            parse_json_from_local_storage::<bool, _>(storage.as_ref(), "flag"),
            Some(true)
        );
    }
}
