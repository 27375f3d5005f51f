//! Persistence for the entry list.
//!
//! The entry list lives in a single key-value slot. `FileStore` maps that slot
//! to `<data_dir>/diary-entries.json`; `MemoryStore` keeps it in process for
//! tests and embedding.

use crate::constants::{STORAGE_FILE_EXTENSION, STORAGE_KEY, STORAGE_LOCK_EXTENSION};
use crate::entries::EntryList;
use crate::errors::{AppError, AppResult, StorageError};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;
use tracing::debug;

#[cfg(unix)]
use std::fs::Permissions;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// A slot holding the serialized entry list.
pub trait EntryStore {
    /// Reads the stored list. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> AppResult<Option<EntryList>>;

    /// Replaces the stored list.
    fn save(&self, entries: &EntryList) -> AppResult<()>;
}

/// JSON file store inside the data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    path: PathBuf,
    lock_path: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `data_dir`. Nothing touches the disk until
    /// the first `load` or `save`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let dir = data_dir.into();
        let path = dir.join(format!("{}.{}", STORAGE_KEY, STORAGE_FILE_EXTENSION));
        let lock_path = dir.join(format!("{}.{}", STORAGE_KEY, STORAGE_LOCK_EXTENSION));
        Self {
            dir,
            path,
            lock_path,
        }
    }

    /// Path of the JSON file holding the list.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Creates the data directory with owner-only permissions if it is missing.
///
/// # Errors
///
/// Returns `AppError::Config` for a relative path and `AppError::Io` if the
/// directory cannot be created.
pub fn ensure_data_dir_exists(dir: &Path) -> AppResult<()> {
    if !dir.is_absolute() {
        return Err(AppError::Config(format!(
            "Data directory path must be absolute: {}",
            dir.display()
        )));
    }

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            AppError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_DIR_PERMISSIONS;
            fs::set_permissions(dir, Permissions::from_mode(DEFAULT_DIR_PERMISSIONS))?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

impl EntryStore for FileStore {
    fn load(&self) -> AppResult<Option<EntryList>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No stored entry list yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let entries: EntryList =
            serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        debug!("Loaded {} stored entries", entries.len());
        Ok(Some(entries))
    }

    fn save(&self, entries: &EntryList) -> AppResult<()> {
        ensure_data_dir_exists(&self.dir)?;

        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.lock_path)?;
        lock_file
            .lock_exclusive()
            .map_err(|source| StorageError::Lock {
                path: self.lock_path.clone(),
                source,
            })?;

        let persist_error = |source: io::Error| StorageError::Persist {
            path: self.path.clone(),
            source,
        };

        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| persist_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        let mut temp = NamedTempFile::new_in(&self.dir).map_err(persist_error)?;
        temp.write_all(&json).map_err(persist_error)?;
        temp.as_file().sync_all().map_err(persist_error)?;

        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_FILE_PERMISSIONS;
            temp.as_file()
                .set_permissions(Permissions::from_mode(DEFAULT_FILE_PERMISSIONS))
                .map_err(persist_error)?;
        }

        temp.persist(&self.path)
            .map_err(|e| persist_error(e.error))?;

        FileExt::unlock(&lock_file)?;
        debug!("Saved {} entries", entries.len());
        Ok(())
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<EntryList>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `entries`.
    pub fn with_entries(entries: EntryList) -> Self {
        Self {
            slot: Mutex::new(Some(entries)),
        }
    }

    /// Returns a copy of whatever was last saved.
    pub fn snapshot(&self) -> Option<EntryList> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl EntryStore for MemoryStore {
    fn load(&self) -> AppResult<Option<EntryList>> {
        Ok(self.snapshot())
    }

    fn save(&self, entries: &EntryList) -> AppResult<()> {
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(entries.clone());
        Ok(())
    }
}

impl<S: EntryStore + ?Sized> EntryStore for &S {
    fn load(&self) -> AppResult<Option<EntryList>> {
        (**self).load()
    }

    fn save(&self, entries: &EntryList) -> AppResult<()> {
        (**self).save(entries)
    }
}
