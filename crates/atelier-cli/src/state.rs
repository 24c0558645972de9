use atelier_core::catalog::{Catalog, UndoSlot};
use atelier_storage::error::StorageError;
use atelier_storage::store::CatalogStore;

/// One command's view of the catalog: loaded once, mutated in memory, then
/// written back whole.
pub struct AppState<S> {
    pub store: S,
    pub catalog: Catalog,
    pub undo: UndoSlot,
}

impl<S: CatalogStore> AppState<S> {
    pub fn open(store: S) -> Result<Self, StorageError> {
        let catalog = store.load_catalog()?;
        let undo = store.load_undo()?;
        Ok(Self {
            store,
            catalog,
            undo,
        })
    }

    pub fn save_catalog(&self) -> Result<(), StorageError> {
        self.store.save_catalog(&self.catalog)
    }

    pub fn save_undo(&self) -> Result<(), StorageError> {
        self.store.save_undo(&self.undo)
    }
}
