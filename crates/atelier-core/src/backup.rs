//! Backup export and import parsing.
//!
//! Export wraps the catalog in a versioned [`BackupEnvelope`]. Import is
//! lenient: it accepts the envelope or a bare array, and silently drops any
//! element lacking a string `title` and `driveUrl`. Unlike bulk text
//! ingestion there is no per-element diagnostic.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::models::backup::BACKUP_VERSION;
use crate::models::{BackupEnvelope, WorkRecord, WorkType};
use crate::normalize::{coerce_type, new_id, now_timestamp};

pub const EXPORT_FILENAME: &str = "creative-hub-backup.json";
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Snapshot the catalog verbatim. Records are not re-identified.
pub fn export_backup(works: &[WorkRecord]) -> BackupEnvelope {
    BackupEnvelope {
        version: BACKUP_VERSION,
        exported_at: now_timestamp(),
        works: works.to_vec(),
    }
}

/// Serialize a backup as pretty-printed UTF-8 JSON.
pub fn export_backup_json(works: &[WorkRecord]) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(&export_backup(works))?)
}

/// Parse backup text into well-formed records, in file order.
pub fn parse_import(raw: &str) -> Result<Vec<WorkRecord>, CoreError> {
    let data: Value = serde_json::from_str(raw).map_err(CoreError::InvalidJson)?;

    let items = match data {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("works") {
            Some(Value::Array(items)) => items,
            _ => return Err(CoreError::InvalidFormat),
        },
        _ => return Err(CoreError::InvalidFormat),
    };

    Ok(items.iter().filter_map(record_from_value).collect())
}

/// Validate one backup element. `None` means "drop it".
fn record_from_value(value: &Value) -> Option<WorkRecord> {
    let obj = value.as_object()?;
    let title = string_field(obj, "title")?;
    let drive_url = string_field(obj, "driveUrl").filter(|url| !url.trim().is_empty())?;

    Some(WorkRecord {
        id: string_field(obj, "id").unwrap_or_else(new_id),
        title,
        description: string_field(obj, "description"),
        work_type: obj
            .get("type")
            .and_then(Value::as_str)
            .map(coerce_type)
            .unwrap_or(WorkType::Other),
        drive_url,
        thumbnail_url: string_field(obj, "thumbnailUrl"),
        created_at: string_field(obj, "createdAt").unwrap_or_else(now_timestamp),
    })
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}
