use ::std::collections::BTreeMap;
use ::std::fs;
use ::std::path::{Path, PathBuf};
use parking_lot::Mutex;

use super::KeyValueStore;
use crate::StoreResult;

/// Every entry lives in one JSON object on disk. Writes replace the whole file through a
/// temporary sibling and a rename.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            BTreeMap::new()
        };
        tracing::info!("Opened store at {} with {} key(s)", path.display(), entries.len());
        Ok(Self { path, entries: Mutex::new(entries) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let serialized = serde_json::to_string_pretty(entries)?;
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, serialized)?;
        fs::rename(&staging, &self.path).map_err(|err| {
            tracing::error!("Failed to replace {}: {err}", self.path.display());
            err
        })?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }
    // The cached map only changes once the new contents are on disk.
    fn set(&self, key: &str, value: String) -> StoreResult<()> {
        let mut entries = self.entries.lock();
        let mut staged = entries.clone();
        staged.insert(key.to_string(), value);
        self.flush(&staged)?;
        *entries = staged;
        Ok(())
    }
    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock();
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut staged = entries.clone();
        staged.remove(key);
        self.flush(&staged)?;
        *entries = staged;
        Ok(())
    }
    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.entries.lock().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        {
            let store = FileStore::open(&path).unwrap();
            store.set("cybercalc_current_user", "4".to_string()).unwrap();
            store.set("other", "x".to_string()).unwrap();
            store.remove("other").unwrap();
        }
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("cybercalc_current_user").unwrap().as_deref(), Some("4"));
        assert_eq!(store.keys().unwrap(), vec!["cybercalc_current_user".to_string()]);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn failed_write_leaves_entries_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        let store = FileStore::open(nested.join("store.json")).unwrap();
        store.set("kept", "1".to_string()).unwrap();

        fs::remove_dir_all(&nested).unwrap();
        assert!(matches!(store.set("k", "v".to_string()), Err(crate::StoreError::Io(_))));
        assert_eq!(store.get("k").unwrap(), None);

        assert!(store.remove("kept").is_err());
        assert_eq!(store.get("kept").unwrap().as_deref(), Some("1"));
        assert_eq!(store.keys().unwrap(), vec!["kept".to_string()]);
    }

    #[test]
    fn empty_file_opens_as_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "").unwrap();
        assert!(FileStore::open(&path).unwrap().keys().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(FileStore::open(&path), Err(crate::StoreError::Serialize(_))));
    }
}
