//! Persistence backends for the cart store.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

use elitestore_core::cart::CartState;

/// Errors that can occur reading or writing persisted cart state.
///
/// These never propagate past the cart store; it logs them and carries
/// on in memory.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A place the whole cart state can be saved to and loaded from.
///
/// `load` returns `Ok(None)` when nothing has ever been saved, which is
/// distinct from a failed read.
pub trait CartStorage: Send + Sync {
    /// Read the persisted state, if any exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unreadable or holds a
    /// record that does not parse.
    fn load(&self) -> Result<Option<CartState>, StorageError>;

    /// Overwrite the persisted state wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be serialized or written.
    fn save(&self, state: &CartState) -> Result<(), StorageError>;
}

/// Cart persistence in a single JSON file.
///
/// The file plays the role of the client's local key-value storage: one
/// fixed key, read once at startup, replaced on every mutation.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a file storage writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for FileStorage {
    fn load(&self) -> Result<Option<CartState>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let state = serde_json::from_str(&contents)?;
        Ok(Some(state))
    }

    fn save(&self, state: &CartState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(state)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory cart persistence.
///
/// Clones share one backing record, so a second store constructed from
/// a clone sees what the first one saved. Used by tests to simulate an
/// application restart without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    record: Arc<Mutex<Option<CartState>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<CartState>, StorageError> {
        let guard = self.record.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn save(&self, state: &CartState) -> Result<(), StorageError> {
        let mut guard = self.record.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(state.clone());
        Ok(())
    }
}
