use super::KeyValueStore;
use crate::error::{DreamzError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const STORE_FILENAME: &str = "store.json";

/// File-backed key-value store.
///
/// Every key lives in one JSON object at `<root>/store.json`. The file is
/// read in full on each call and replaced in full on each write, so two
/// processes writing at once resolve to whichever renames last.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store_path(&self) -> PathBuf {
        self.root.join(STORE_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DreamzError::Io)?;
        }
        Ok(())
    }

    fn load_values(&self) -> Result<BTreeMap<String, String>> {
        let path = self.store_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(DreamzError::Io)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let values = serde_json::from_str(&content).map_err(DreamzError::Serialization)?;
        Ok(values)
    }

    fn save_values(&self, values: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(values).map_err(DreamzError::Serialization)?;

        // Write to a temp file then rename so readers never see a partial file
        let tmp_file = self.root.join(format!(".store-{}.tmp", std::process::id()));
        fs::write(&tmp_file, content).map_err(DreamzError::Io)?;
        fs::rename(&tmp_file, self.store_path()).map_err(DreamzError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.load_values()?;
        log::debug!("store get key={} present={}", key, values.contains_key(key));
        Ok(values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load_values()?;
        values.insert(key.to_string(), value.to_string());
        self.save_values(&values)?;
        log::debug!("store set key={} bytes={}", key, value.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut values = self.load_values()?;
        if values.remove(key).is_some() {
            self.save_values(&values)?;
            log::debug!("store remove key={}", key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn values_survive_a_new_handle() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.set("a", "1").unwrap();
        store.set("b", "[\"x\"]").unwrap();

        let reopened = FileStore::new(dir.path().to_path_buf());
        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("[\"x\"]"));
    }

    #[test]
    fn remove_deletes_only_that_key() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();
        store.remove("missing").unwrap();

        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn creates_root_directory_on_first_write() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("deep").join("data");
        let mut store = FileStore::new(root.clone());
        store.set("k", "v").unwrap();
        assert!(root.join(STORE_FILENAME).exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STORE_FILENAME), "{not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.get("k"),
            Err(DreamzError::Serialization(_))
        ));
    }
}
