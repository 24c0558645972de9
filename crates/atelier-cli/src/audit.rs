use serde::Serialize;
use tracing::info;

/// A structured record of one catalog mutation, emitted through `tracing`.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEvent {
    pub action: &'static str,
    pub work_id: Option<String>,
    pub count: usize,
    pub details: Option<serde_json::Value>,
}

impl CatalogEvent {
    pub fn for_work(action: &'static str, work_id: impl Into<String>) -> Self {
        Self {
            action,
            work_id: Some(work_id.into()),
            count: 1,
            details: None,
        }
    }

    pub fn for_batch(action: &'static str, count: usize) -> Self {
        Self {
            action,
            work_id: None,
            count,
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = self.action,
            audit.work_id = self.work_id.as_deref().unwrap_or("-"),
            audit.count = self.count,
            audit.details = %details,
            "catalog event"
        );
    }
}
