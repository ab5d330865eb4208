//! Directory-backed store, one JSON file per key.
//!
//! # Responsibility
//! - Map store keys to files under a single data directory.
//! - Make `set` an atomic overwrite (write-then-rename).
//!
//! # Invariants
//! - Keys are restricted to `[A-Za-z0-9_-]` so they can never escape the
//!   data directory.
//! - A missing file reads as `None`, matching an absent key.

use super::{KeyValueStore, StoreError, StoreResult};
use log::{error, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-per-key store rooted at a data directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) the data directory.
    ///
    /// # Side effects
    /// - Creates the directory tree on first use.
    /// - Emits `store_open` logging events.
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        if let Err(err) = fs::create_dir_all(&dir) {
            error!(
                "event=store_open module=store status=error dir={} error={err}",
                dir.display()
            );
            return Err(StoreError::Io {
                key: dir.display().to_string(),
                source: err,
            });
        }

        info!(
            "event=store_open module=store status=ok dir={}",
            dir.display()
        );
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io {
                key: key.to_string(),
                source: err,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));

        fs::write(&tmp, value).map_err(|source| StoreError::Io {
            key: key.to_string(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            key: key.to_string(),
            source,
        })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io {
                key: key.to_string(),
                source: err,
            }),
        }
    }
}
