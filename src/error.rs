use thiserror::Error;

pub type BindResult<T> = Result<T, BindError>;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("invalid chart payload json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing required attribute `{0}`")]
    MissingAttribute(String),

    #[error("invalid chart payload: {0}")]
    InvalidPayload(String),

    #[error("chart backend rejected call: {0}")]
    Backend(String),
}
