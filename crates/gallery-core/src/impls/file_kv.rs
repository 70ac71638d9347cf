//! FileKeyValueStore - key ごとに 1 ファイル
//!
//! `<dir>/<key>.json`. Keys are restricted to `[A-Za-z0-9._-]` so they can
//! never escape the directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ports::{KeyValueStore, StorageError};

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Open (and create if missing) the storage directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

/// Permission problems mean the slot is there but off limits.
fn storage_error(path: &Path, e: std::io::Error) -> StorageError {
    match e.kind() {
        ErrorKind::PermissionDenied => {
            StorageError::Unavailable(format!("{}: {e}", path.display()))
        }
        _ => e.into(),
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error(&path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        // write-then-rename so a crash never leaves a half-written slot
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| storage_error(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(storage_error(&path, e));
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error(&path, e)),
        }
    }
}
