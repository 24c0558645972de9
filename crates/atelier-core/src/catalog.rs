use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::{NewWork, WorkPatch, WorkRecord};
use crate::normalize::{new_id, now_timestamp};
use crate::view::ViewQuery;

/// The full ordered collection of works owned by one profile.
///
/// Pure in-memory state: the storage crate loads it and writes it back as a
/// whole after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    works: Vec<WorkRecord>,
}

impl Catalog {
    pub fn new(works: Vec<WorkRecord>) -> Self {
        Self { works }
    }

    pub fn records(&self) -> &[WorkRecord] {
        &self.works
    }

    pub fn into_records(self) -> Vec<WorkRecord> {
        self.works
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&WorkRecord> {
        self.works.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Give the work a fresh identity and append it.
    pub fn add(&mut self, work: NewWork) -> WorkRecord {
        let record = work.into_record(new_id(), now_timestamp());
        self.works.push(record.clone());
        record
    }

    /// Append many works at once; returns the created records in order.
    pub fn add_many(&mut self, works: impl IntoIterator<Item = NewWork>) -> Vec<WorkRecord> {
        let created: Vec<WorkRecord> = works
            .into_iter()
            .map(|w| w.into_record(new_id(), now_timestamp()))
            .collect();
        self.works.extend(created.iter().cloned());
        created
    }

    /// Apply a patch in place. `id` and `created_at` never change.
    pub fn update(&mut self, id: &str, patch: &WorkPatch) -> Result<&WorkRecord, CoreError> {
        let record = self
            .works
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        patch.apply_to(record);
        Ok(&*record)
    }

    pub fn remove(&mut self, id: &str) -> Option<WorkRecord> {
        let idx = self.works.iter().position(|w| w.id == id)?;
        Some(self.works.remove(idx))
    }

    /// Put a previously removed record back at the end of the catalog.
    pub fn restore(&mut self, record: WorkRecord) -> Result<(), CoreError> {
        if self.contains(&record.id) {
            return Err(CoreError::DuplicateId(record.id));
        }
        self.works.push(record);
        Ok(())
    }

    /// Discard everything and take `works` as the new catalog.
    pub fn replace_all(&mut self, works: Vec<WorkRecord>) {
        self.works = works;
    }

    pub fn view(&self, query: &ViewQuery) -> Vec<&WorkRecord> {
        query.apply(&self.works)
    }
}

/// Holds the most recent deletion so it can be undone. A second delete
/// replaces the first; only one step of undo is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoSlot {
    last_deleted: Option<WorkRecord>,
}

impl UndoSlot {
    pub fn stash(&mut self, record: WorkRecord) {
        self.last_deleted = Some(record);
    }

    pub fn peek(&self) -> Option<&WorkRecord> {
        self.last_deleted.as_ref()
    }

    pub fn take(&mut self) -> Option<WorkRecord> {
        self.last_deleted.take()
    }

    pub fn clear(&mut self) {
        self.last_deleted = None;
    }
}

impl Catalog {
    /// Remove a work and remember it in `undo`.
    pub fn delete(&mut self, id: &str, undo: &mut UndoSlot) -> Result<WorkRecord, CoreError> {
        let removed = self
            .remove(id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        undo.stash(removed.clone());
        Ok(removed)
    }

    /// Restore the most recent deletion, if any. The slot is only emptied
    /// once the record is back in the catalog.
    pub fn undo_delete(&mut self, undo: &mut UndoSlot) -> Result<Option<WorkRecord>, CoreError> {
        let Some(record) = undo.peek().cloned() else {
            return Ok(None);
        };
        self.restore(record.clone())?;
        undo.clear();
        Ok(Some(record))
    }
}
