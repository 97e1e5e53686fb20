// staffhub-client/src/store/file.rs
// 会话文件存储 - JSON 文件, 原子替换

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use super::SessionStore;

type Entries = BTreeMap<String, String>;

/// Session store backed by a single JSON object file.
///
/// Every mutation rewrites the whole file through a temp file and a
/// rename, so readers never observe a half-written pair of entries.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    /// Create a store at `base_path/filename`
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// 确保目录存在
    fn ensure_dir(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn read_entries(&self) -> io::Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }
        let json = fs::read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Entries to start a mutation from; an unreadable file is replaced
    fn entries_for_update(&self) -> io::Result<Entries> {
        match self.read_entries() {
            Ok(entries) => Ok(entries),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!(path = %self.path.display(), "Discarding corrupt session file: {}", e);
                Ok(Entries::new())
            }
            Err(e) => Err(e),
        }
    }

    fn write_entries(&self, entries: &Entries) -> io::Result<()> {
        if entries.is_empty() {
            return self.delete();
        }
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }

    /// Check whether the session file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove the session file
    pub fn delete(&self) -> io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Path of the session file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.read_entries()?.remove(key))
    }

    fn set_entries(&self, entries: &[(&str, &str)]) -> io::Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut current = self.entries_for_update()?;
        for (key, value) in entries {
            current.insert((*key).to_string(), (*value).to_string());
        }
        self.write_entries(&current)
    }

    fn remove_entries(&self, keys: &[&str]) -> io::Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut current = self.entries_for_update()?;
        for key in keys {
            current.remove(*key);
        }
        self.write_entries(&current)
    }
}
