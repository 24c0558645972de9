//! Filtering, searching and sorting the catalog for display.

use std::cmp::Ordering;

use crate::models::{WorkRecord, WorkType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(WorkType),
}

impl TypeFilter {
    pub fn matches(self, work: &WorkRecord) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => work.work_type == t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub filter: TypeFilter,
    /// Case-insensitive substring matched against title and description.
    pub search: String,
    pub sort: SortOrder,
}

impl ViewQuery {
    pub fn apply<'a>(&self, works: &'a [WorkRecord]) -> Vec<&'a WorkRecord> {
        let needle = self.search.trim().to_lowercase();
        let mut out: Vec<&WorkRecord> = works
            .iter()
            .filter(|w| self.filter.matches(w))
            .filter(|w| needle.is_empty() || matches_search(w, &needle))
            .collect();

        match self.sort {
            SortOrder::Newest => out.sort_by(|a, b| compare_created(b, a)),
            SortOrder::Oldest => out.sort_by(|a, b| compare_created(a, b)),
            SortOrder::TitleAsc => out.sort_by(|a, b| compare_title(a, b)),
            SortOrder::TitleDesc => out.sort_by(|a, b| compare_title(b, a)),
        }
        out
    }
}

fn matches_search(work: &WorkRecord, needle: &str) -> bool {
    work.title.to_lowercase().contains(needle)
        || work
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

// Imported timestamps are arbitrary strings; unparseable ones sort as oldest.
fn compare_created(a: &WorkRecord, b: &WorkRecord) -> Ordering {
    let ta = a.created_at.parse::<jiff::Timestamp>().ok();
    let tb = b.created_at.parse::<jiff::Timestamp>().ok();
    ta.cmp(&tb).then_with(|| a.created_at.cmp(&b.created_at))
}

fn compare_title(a: &WorkRecord, b: &WorkRecord) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}
