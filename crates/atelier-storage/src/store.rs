use std::path::{Path, PathBuf};
use std::sync::Mutex;

use atelier_core::catalog::{Catalog, UndoSlot};
use atelier_core::models::WorkRecord;

use crate::error::StorageError;
use crate::state;

/// Whole-collection persistence. Implementations never write part of a
/// catalog: `save_all` replaces everything in one step.
pub trait CatalogStore {
    fn load_all(&self) -> Result<Vec<WorkRecord>, StorageError>;

    fn save_all(&self, works: &[WorkRecord]) -> Result<(), StorageError>;

    /// The pending undo of the most recent delete, kept beside the catalog.
    fn load_undo(&self) -> Result<UndoSlot, StorageError>;

    fn save_undo(&self, slot: &UndoSlot) -> Result<(), StorageError>;

    fn load_catalog(&self) -> Result<Catalog, StorageError> {
        Ok(Catalog::new(self.load_all()?))
    }

    fn save_catalog(&self, catalog: &Catalog) -> Result<(), StorageError> {
        self.save_all(catalog.records())
    }
}

/// Catalog stored as a JSON array on local disk, with the undo slot in a
/// sibling `*.undo.json` file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn undo_path(&self) -> PathBuf {
        self.path.with_extension("undo.json")
    }
}

impl CatalogStore for JsonFileStore {
    /// A missing file is an empty catalog. So is a corrupt one: the damage is
    /// logged and the next save overwrites it.
    fn load_all(&self) -> Result<Vec<WorkRecord>, StorageError> {
        match state::load_state::<Vec<WorkRecord>>(&self.path) {
            Ok(works) => {
                tracing::debug!(path = %self.path.display(), count = works.len(), "catalog loaded");
                Ok(works)
            }
            Err(StorageError::NotFound { .. }) => {
                tracing::debug!(path = %self.path.display(), "no catalog yet, starting empty");
                Ok(Vec::new())
            }
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "catalog unreadable, starting empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn save_all(&self, works: &[WorkRecord]) -> Result<(), StorageError> {
        state::save_state(&self.path, &works)?;
        tracing::info!(path = %self.path.display(), count = works.len(), "catalog saved");
        Ok(())
    }

    fn load_undo(&self) -> Result<UndoSlot, StorageError> {
        match state::load_state_or_default(&self.undo_path()) {
            Ok(slot) => Ok(slot),
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(error = %e, "unreadable undo file, ignoring");
                Ok(UndoSlot::default())
            }
            Err(e) => Err(e),
        }
    }

    fn save_undo(&self, slot: &UndoSlot) -> Result<(), StorageError> {
        if slot.peek().is_none() {
            return state::delete_state(&self.undo_path());
        }
        state::save_state(&self.undo_path(), slot)
    }
}

/// In-process store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    works: Mutex<Vec<WorkRecord>>,
    undo: Mutex<UndoSlot>,
}

impl MemoryStore {
    pub fn new(works: Vec<WorkRecord>) -> Self {
        Self {
            works: Mutex::new(works),
            undo: Mutex::default(),
        }
    }
}

impl CatalogStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<WorkRecord>, StorageError> {
        Ok(self
            .works
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save_all(&self, works: &[WorkRecord]) -> Result<(), StorageError> {
        *self
            .works
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = works.to_vec();
        Ok(())
    }

    fn load_undo(&self) -> Result<UndoSlot, StorageError> {
        Ok(self
            .undo
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save_undo(&self, slot: &UndoSlot) -> Result<(), StorageError> {
        *self
            .undo
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = slot.clone();
        Ok(())
    }
}
