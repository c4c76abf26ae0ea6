use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    #[error("failed to serialize schema document: {0}")]
    Serialize(#[from] serde_json::Error),
}
