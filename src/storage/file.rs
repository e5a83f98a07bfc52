//! File-backed key-value store.
//!
//! All keys live in one JSON object of string values. A write reads,
//! merges and rewrites the whole file while holding an exclusive lock, so
//! concurrent writers never drop each other's keys.

use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::storage::error::StorageError;
use crate::storage::kv::KeyValueStore;

type Entries = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Option<Entries> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Failed to open storage file");
                return None;
            }
        };

        let mut content = Vec::new();
        let read = FileExt::lock_shared(&file).and_then(|()| file.read_to_end(&mut content));
        let _ = FileExt::unlock(&file);
        match read {
            Ok(_) => self.parse_entries(&content),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Failed to read storage file");
                None
            }
        }
    }

    fn parse_entries(&self, content: &[u8]) -> Option<Entries> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        match serde_json::from_slice(content) {
            Ok(entries) => Some(entries),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Storage file is corrupt");
                None
            }
        }
    }

    /// Read, merge and rewrite through one locked handle.
    fn merge_locked(&self, file: &mut File, key: &str, value: &str) -> Result<(), StorageError> {
        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|e| self.io_error(e))?;

        let mut entries = self.parse_entries(&content).unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        let encoded = serde_json::to_string_pretty(&entries)?;

        file.set_len(0)
            .and_then(|()| file.seek(SeekFrom::Start(0)))
            .and_then(|_| file.write_all(encoded.as_bytes()))
            .and_then(|()| file.sync_all())
            .map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries()?.remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        FileExt::lock_exclusive(&file).map_err(|e| StorageError::Lock {
            path: self.path.clone(),
            source: e,
        })?;

        let merged = self.merge_locked(&mut file, key, value);
        let _ = FileExt::unlock(&file);
        merged
    }
}
