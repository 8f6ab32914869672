use std::{fs, io::ErrorKind, path::{Path, PathBuf}};

use crate::{
    errors::StorageError,
    repositories::kv_repo::{FileKvStore, MemoryKvStore},
};

/// String-keyed, string-valued durable storage with local-storage semantics.
///
/// Implementations are synchronous: the store calls them while holding its
/// write lock so that writes land in mutation order.
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl FileKvStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileKvStore { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys may carry spaces and other characters unsafe in file names
        self.dir.join(format!("{}.json", urlencoding::encode(key)))
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::Io(self.dir.display().to_string(), e.to_string()))
    }
}

impl KeyValueStorage for FileKvStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(key.to_string(), e.to_string())),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_dir()?;
        let path = self.path_for(key);
        write_atomically(&path, value)
            .map_err(|e| StorageError::Io(key.to_string(), e.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(key.to_string(), e.to_string())),
        }
    }
}

fn write_atomically(path: &Path, value: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, value)?;
    fs::rename(&tmp, path)
}

impl MemoryKvStore {
    pub fn new() -> Self {
        MemoryKvStore::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStorage for MemoryKvStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Backend picked at startup from configuration.
impl KeyValueStorage for Box<dyn KeyValueStorage> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_keys_with_spaces() {
        let dir = tempfile::tempdir().expect("failed to create tmpdir");
        let store = FileKvStore::new(dir.path().join("nested"));

        assert_eq!(store.get_item("Artworld Photography_events").unwrap(), None);

        store.set_item("Artworld Photography_events", "[]").unwrap();
        assert_eq!(
            store.get_item("Artworld Photography_events").unwrap().as_deref(),
            Some("[]")
        );
        assert!(dir.path().join("nested").join("Artworld%20Photography_events.json").exists());
    }

    #[test]
    fn file_store_overwrites_and_removes() {
        let dir = tempfile::tempdir().expect("failed to create tmpdir");
        let store = FileKvStore::new(dir.path());

        store.set_item("k", "1").unwrap();
        store.set_item("k", "2").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("2"));

        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);

        // removing twice is fine
        store.remove_item("k").unwrap();
    }

    #[test]
    fn memory_store_shares_entries_between_clones() {
        let store = MemoryKvStore::new();
        let other = store.clone();

        store.set_item("a", "x").unwrap();
        assert_eq!(other.get_item("a").unwrap().as_deref(), Some("x"));
        assert_eq!(other.len(), 1);

        other.remove_item("a").unwrap();
        assert!(store.is_empty());
    }
}
