use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid JSON file: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Invalid format: expected an array of works")]
    InvalidFormat,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("work not found: {0}")]
    NotFound(String),

    #[error("a work with id {0} already exists")]
    DuplicateId(String),

    #[error("invalid work type: {0}")]
    InvalidWorkType(String),
}
