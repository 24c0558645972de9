//! Normalization shared by every ingestion path.
//!
//! Bulk parsing, backup import and form input all route through these
//! helpers so that the same input is coerced the same way no matter where
//! it enters the catalog.

use uuid::Uuid;

use crate::error::CoreError;
use crate::models::{NewWork, WorkType};

pub const UNTITLED: &str = "Untitled";

const DRIVE_HOSTS: [&str; 2] = ["drive.google.com", "docs.google.com"];

/// Fresh opaque identifier for a work.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current time as an RFC 3339 UTC string, e.g. `2024-05-01T12:00:00.123Z`.
pub fn now_timestamp() -> String {
    jiff::Timestamp::now().to_string()
}

/// Unknown or misspelled type names become [`WorkType::Other`].
pub fn coerce_type(s: &str) -> WorkType {
    WorkType::from_keyword(s).unwrap_or_default()
}

pub fn title_or_untitled(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Trimmed text, or `None` when nothing is left.
pub fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Strict rule: the text references a Drive or Docs host. Case-sensitive.
pub fn is_drive_domain(s: &str) -> bool {
    DRIVE_HOSTS.iter().any(|host| s.contains(host))
}

/// Loose URL detection for parsed fields: a Drive/Docs link first, then
/// anything starting with `http`.
pub fn extract_url(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if is_drive_domain(trimmed) || trimmed.starts_with("http") {
        return Some(trimmed.to_string());
    }
    None
}

/// Validation for works entered one at a time (add and edit). Stricter than
/// bulk parsing: the link must point at Drive or Docs.
pub fn validate_new_work(work: &NewWork) -> Result<(), CoreError> {
    if work.title.trim().is_empty() {
        return Err(CoreError::Validation {
            field: "title",
            message: "Title is required",
        });
    }
    validate_drive_url(&work.drive_url)
}

pub fn validate_drive_url(url: &str) -> Result<(), CoreError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(CoreError::Validation {
            field: "driveUrl",
            message: "Google Drive URL is required",
        });
    }
    if !is_drive_domain(url) {
        return Err(CoreError::Validation {
            field: "driveUrl",
            message: "Please enter a valid Google Drive or Docs URL",
        });
    }
    Ok(())
}

/// Trim user-entered fields and drop empty optional text.
pub fn tidy_new_work(work: NewWork) -> NewWork {
    NewWork {
        title: work.title.trim().to_string(),
        work_type: work.work_type,
        drive_url: work.drive_url.trim().to_string(),
        description: work.description.as_deref().and_then(non_empty),
        thumbnail_url: work.thumbnail_url.as_deref().and_then(non_empty),
    }
}
