//! Reconciling an imported backup with the existing catalog.
//!
//! - **Replace**: the imported records become the whole catalog, identities
//!   and timestamps kept as parsed.
//! - **Merge**: every imported record gets a fresh `id` and `createdAt` and
//!   is appended, so it can never collide with an existing work.

use crate::catalog::Catalog;
use crate::models::WorkRecord;
use crate::normalize::{new_id, now_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStrategy {
    Merge,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub strategy: ImportStrategy,
    /// Records taken from the backup.
    pub imported: usize,
    /// Catalog size afterwards.
    pub total: usize,
}

/// Re-identify imported records as of now.
pub fn reidentify(imported: Vec<WorkRecord>) -> Vec<WorkRecord> {
    imported
        .into_iter()
        .map(|w| WorkRecord {
            id: new_id(),
            created_at: now_timestamp(),
            ..w
        })
        .collect()
}

/// `existing` followed by re-identified copies of `imported`.
pub fn merge(existing: &[WorkRecord], imported: Vec<WorkRecord>) -> Vec<WorkRecord> {
    let mut merged = existing.to_vec();
    merged.extend(reidentify(imported));
    merged
}

/// The imported records, verbatim. `existing` is discarded.
pub fn replace(_existing: &[WorkRecord], imported: Vec<WorkRecord>) -> Vec<WorkRecord> {
    imported
}

/// Apply an import to the catalog in one step. The caller persists the
/// whole catalog afterwards.
pub fn apply_import(
    catalog: &mut Catalog,
    imported: Vec<WorkRecord>,
    strategy: ImportStrategy,
) -> ImportOutcome {
    let count = imported.len();
    let next = match strategy {
        ImportStrategy::Merge => merge(catalog.records(), imported),
        ImportStrategy::Replace => replace(catalog.records(), imported),
    };
    catalog.replace_all(next);

    ImportOutcome {
        strategy,
        imported: count,
        total: catalog.len(),
    }
}
