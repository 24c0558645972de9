use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::work::WorkRecord;

/// Current backup envelope version. Import accepts any object exposing a
/// `works` array regardless of this value.
pub const BACKUP_VERSION: u32 = 1;

/// The export wire format: `{ "version": 1, "exportedAt": "...", "works": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BackupEnvelope {
    pub version: u32,
    pub exported_at: String,
    pub works: Vec<WorkRecord>,
}
