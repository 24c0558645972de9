use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Kind of creative work. The set is closed; anything else ingested from
/// pasted text or a backup file is coerced to [`WorkType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum WorkType {
    Writing,
    Music,
    Art,
    Video,
    Design,
    Website,
    #[default]
    Other,
}

impl WorkType {
    pub const ALL: [WorkType; 7] = [
        WorkType::Writing,
        WorkType::Music,
        WorkType::Art,
        WorkType::Video,
        WorkType::Design,
        WorkType::Website,
        WorkType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkType::Writing => "Writing",
            WorkType::Music => "Music",
            WorkType::Art => "Art",
            WorkType::Video => "Video",
            WorkType::Design => "Design",
            WorkType::Website => "Website",
            WorkType::Other => "Other",
        }
    }

    /// Exact, case-sensitive lookup. `"music"` is not a type keyword.
    pub fn from_keyword(s: &str) -> Option<WorkType> {
        WorkType::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkType::from_keyword(s).ok_or_else(|| CoreError::InvalidWorkType(s.to_string()))
    }
}

/// A catalogued creative work linked to a Google Drive/Docs document.
///
/// `id` and `created_at` are kept as strings: records imported from a backup
/// carry whatever identifiers the exporting profile produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WorkRecord {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[ts(optional)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub drive_url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[ts(optional)]
    pub thumbnail_url: Option<String>,
    pub created_at: String,
}

impl WorkRecord {
    /// Strip identity, keeping only the user-authored fields.
    pub fn to_new_work(&self) -> NewWork {
        NewWork {
            title: self.title.clone(),
            work_type: self.work_type,
            drive_url: self.drive_url.clone(),
            description: self.description.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
        }
    }
}

/// A work before it is given an identity. Bulk-parsed rows and form input
/// both take this shape; `id`/`createdAt` are assigned when the catalog
/// accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewWork {
    pub title: String,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub drive_url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[ts(optional)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[ts(optional)]
    pub thumbnail_url: Option<String>,
}

impl NewWork {
    pub fn new(title: impl Into<String>, work_type: WorkType, drive_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            work_type,
            drive_url: drive_url.into(),
            description: None,
            thumbnail_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_thumbnail_url(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self
    }

    pub fn into_record(self, id: String, created_at: String) -> WorkRecord {
        WorkRecord {
            id,
            title: self.title,
            description: self.description,
            work_type: self.work_type,
            drive_url: self.drive_url,
            thumbnail_url: self.thumbnail_url,
            created_at,
        }
    }
}

/// Partial update for an existing work. `None` leaves a field untouched;
/// `Some(None)` on the optional text fields clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkPatch {
    pub title: Option<String>,
    pub work_type: Option<WorkType>,
    pub drive_url: Option<String>,
    pub description: Option<Option<String>>,
    pub thumbnail_url: Option<Option<String>>,
}

impl WorkPatch {
    pub fn is_empty(&self) -> bool {
        self == &WorkPatch::default()
    }

    pub fn apply_to(&self, record: &mut WorkRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(work_type) = self.work_type {
            record.work_type = work_type;
        }
        if let Some(drive_url) = &self.drive_url {
            record.drive_url = drive_url.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(thumbnail_url) = &self.thumbnail_url {
            record.thumbnail_url = thumbnail_url.clone();
        }
    }
}
