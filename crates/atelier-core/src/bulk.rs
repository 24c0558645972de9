//! Bulk text ingestion.
//!
//! Turns pasted free-form text into works, one entry per line:
//!
//! ```text
//! https://drive.google.com/file/d/abc
//! My Short Story | https://docs.google.com/document/d/xyz
//! Album Demo, Music, https://drive.google.com/file/d/123
//! ```
//!
//! `|`, `,` and tab are interchangeable separators. Each line is judged on
//! its own; a bad line is reported and never affects its neighbours.

use thiserror::Error;

use crate::models::{NewWork, WorkType};
use crate::normalize::{UNTITLED, extract_url, title_or_untitled};

const SEPARATORS: [char; 3] = ['|', ',', '\t'];

/// Why a line was rejected. The display text is shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineParseError {
    #[error("Single value must be a Google Drive/Docs URL")]
    SingleValueNotUrl,

    #[error("Second value should be the Drive URL")]
    UrlInTitlePosition,

    #[error("Could not find a valid Drive URL")]
    NoDriveUrl,

    #[error("Could not parse line")]
    Unparseable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLine {
    /// The offending line, trimmed.
    pub line: String,
    pub reason: LineParseError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub valid: Vec<NewWork>,
    pub invalid: Vec<InvalidLine>,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }
}

/// Parse pasted text. Never fails: every non-blank line lands in exactly one
/// of `valid` or `invalid`, both in input order.
pub fn parse_bulk_input(input: &str) -> ParseResult {
    let mut result = ParseResult::default();

    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match parse_line(line) {
            Ok(row) => result.valid.push(row),
            Err(reason) => result.invalid.push(InvalidLine {
                line: line.to_string(),
                reason,
            }),
        }
    }

    result
}

/// Split on any separator, trimming fields and dropping empty ones.
fn split_fields(line: &str) -> Vec<&str> {
    line.split(SEPARATORS)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

fn parse_line(line: &str) -> Result<NewWork, LineParseError> {
    match split_fields(line).as_slice() {
        [] => Err(LineParseError::Unparseable),

        [only] => extract_url(only)
            .map(|url| NewWork::new(UNTITLED, WorkType::Other, url))
            .ok_or(LineParseError::SingleValueNotUrl),

        [title, second] => {
            if let Some(url) = extract_url(second) {
                Ok(NewWork::new(title_or_untitled(title), WorkType::Other, url))
            } else if extract_url(title).is_some() {
                Err(LineParseError::UrlInTitlePosition)
            } else {
                Err(LineParseError::NoDriveUrl)
            }
        }

        // Only the two fields after the title are consulted, even when the
        // line has more than three.
        [title, a, b, ..] => {
            let url = extract_url(a)
                .or_else(|| extract_url(b))
                .ok_or(LineParseError::NoDriveUrl)?;
            let work_type = WorkType::from_keyword(a)
                .or_else(|| WorkType::from_keyword(b))
                .unwrap_or_default();
            Ok(NewWork::new(title_or_untitled(title), work_type, url))
        }
    }
}
