use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmmsError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("form data must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
    #[error("unknown data type: {tag}")]
    UnknownDataType { tag: String },
    #[error("unknown entity form: {name}")]
    UnknownEntity { name: String },
}

pub type Result<T> = std::result::Result<T, CmmsError>;
