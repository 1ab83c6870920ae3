use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("duplicate content record id: {0}")]
    DuplicateRecord(String),

    #[error("missing required field: {0}")]
    MissingField(String),
}
