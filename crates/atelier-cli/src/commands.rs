use std::path::{Path, PathBuf};

use atelier_core::backup::{EXPORT_MIME_TYPE, export_backup_json, parse_import};
use atelier_core::bulk::{ParseResult, parse_bulk_input};
use atelier_core::models::{NewWork, WorkPatch, WorkRecord};
use atelier_core::normalize::{tidy_new_work, validate_new_work};
use atelier_core::reconcile::{ImportOutcome, ImportStrategy, apply_import};
use atelier_core::view::ViewQuery;
use atelier_storage::store::CatalogStore;
use atelier_storage::transfer;

use crate::audit::CatalogEvent;
use crate::state::AppState;

pub fn list<'a, S: CatalogStore>(state: &'a AppState<S>, query: &ViewQuery) -> Vec<&'a WorkRecord> {
    state.catalog.view(query)
}

pub fn add<S: CatalogStore>(state: &mut AppState<S>, work: NewWork) -> eyre::Result<WorkRecord> {
    let work = tidy_new_work(work);
    validate_new_work(&work)?;

    let created = state.catalog.add(work);
    state.save_catalog()?;

    CatalogEvent::for_work("work.add", &created.id).emit();
    Ok(created)
}

pub fn edit<S: CatalogStore>(
    state: &mut AppState<S>,
    id: &str,
    patch: WorkPatch,
) -> eyre::Result<WorkRecord> {
    if patch.is_empty() {
        return Err(eyre::eyre!("nothing to change"));
    }

    let mut preview = state
        .catalog
        .get(id)
        .cloned()
        .ok_or_else(|| eyre::eyre!("work not found: {id}"))?;
    patch.apply_to(&mut preview);
    let tidy = tidy_new_work(preview.to_new_work());
    validate_new_work(&tidy)?;

    let tidy_patch = WorkPatch {
        title: Some(tidy.title),
        work_type: Some(tidy.work_type),
        drive_url: Some(tidy.drive_url),
        description: Some(tidy.description),
        thumbnail_url: Some(tidy.thumbnail_url),
    };
    let updated = state.catalog.update(id, &tidy_patch)?.clone();
    state.save_catalog()?;

    CatalogEvent::for_work("work.edit", &updated.id).emit();
    Ok(updated)
}

/// Remove a work, keeping it restorable with [`undo`] until the next delete.
pub fn delete<S: CatalogStore>(state: &mut AppState<S>, id: &str) -> eyre::Result<WorkRecord> {
    let removed = state.catalog.delete(id, &mut state.undo)?;
    // Undo first: a failed catalog write then leaves the work in both places,
    // never in neither.
    state.save_undo()?;
    state.save_catalog()?;

    CatalogEvent::for_work("work.delete", &removed.id).emit();
    Ok(removed)
}

pub fn undo<S: CatalogStore>(state: &mut AppState<S>) -> eyre::Result<Option<WorkRecord>> {
    let Some(restored) = state.catalog.undo_delete(&mut state.undo)? else {
        return Ok(None);
    };
    // Catalog first: the undo file is only cleared once the work is saved back.
    state.save_catalog()?;
    state.save_undo()?;

    CatalogEvent::for_work("work.restore", &restored.id).emit();
    Ok(Some(restored))
}

#[derive(Debug)]
pub struct BulkReport {
    pub parsed: ParseResult,
    /// Empty on a dry run.
    pub created: Vec<WorkRecord>,
}

/// Parse pasted text and add every valid row. Invalid lines are reported,
/// never fatal.
pub fn bulk<S: CatalogStore>(
    state: &mut AppState<S>,
    input: &str,
    dry_run: bool,
) -> eyre::Result<BulkReport> {
    let parsed = parse_bulk_input(input);
    tracing::debug!(
        valid = parsed.valid.len(),
        invalid = parsed.invalid.len(),
        "bulk input parsed"
    );

    if dry_run || parsed.valid.is_empty() {
        return Ok(BulkReport {
            parsed,
            created: Vec::new(),
        });
    }

    let created = state.catalog.add_many(parsed.valid.iter().cloned());
    state.save_catalog()?;

    CatalogEvent::for_batch("work.bulk_add", created.len())
        .with_details(serde_json::json!({ "rejected": parsed.invalid.len() }))
        .emit();
    Ok(BulkReport { parsed, created })
}

/// Write a backup of the whole catalog to `dir`.
pub fn export<S: CatalogStore>(
    state: &AppState<S>,
    dir: &Path,
    filename: &str,
) -> eyre::Result<PathBuf> {
    let json = export_backup_json(state.catalog.records())?;
    let path = transfer::download_text(dir, filename, EXPORT_MIME_TYPE, &json)?;

    CatalogEvent::for_batch("catalog.export", state.catalog.len())
        .with_details(serde_json::json!({ "path": path.display().to_string() }))
        .emit();
    Ok(path)
}

/// Import backup text. A malformed payload changes nothing.
pub fn import_text<S: CatalogStore>(
    state: &mut AppState<S>,
    raw: &str,
    strategy: ImportStrategy,
) -> eyre::Result<ImportOutcome> {
    let imported = parse_import(raw)?;
    let outcome = apply_import(&mut state.catalog, imported, strategy);
    state.save_catalog()?;

    // A pending undo refers to a catalog that no longer exists.
    if strategy == ImportStrategy::Replace && state.undo.peek().is_some() {
        state.undo.clear();
        state.save_undo()?;
    }

    let action = match strategy {
        ImportStrategy::Merge => "catalog.import_merge",
        ImportStrategy::Replace => "catalog.import_replace",
    };
    CatalogEvent::for_batch(action, outcome.imported)
        .with_details(serde_json::json!({ "total": outcome.total }))
        .emit();
    Ok(outcome)
}

pub fn import_file<S: CatalogStore>(
    state: &mut AppState<S>,
    path: &Path,
    strategy: ImportStrategy,
) -> eyre::Result<ImportOutcome> {
    let raw = transfer::read_text_file(path)?;
    import_text(state, &raw, strategy)
}

/// Fetch sample works and merge them in.
pub fn seed<S: CatalogStore>(state: &mut AppState<S>, url: &str) -> eyre::Result<ImportOutcome> {
    let raw = transfer::fetch_remote_text(url)
        .map_err(|e| eyre::eyre!("Could not load seed works: {e}"))?;
    import_text(state, &raw, ImportStrategy::Merge)
}
