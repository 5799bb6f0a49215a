use std::fmt::{self, Display};

/// Errors produced while decoding host messages into entries.
#[derive(Debug)]
pub enum ModelError {
    Json(serde_json::Error),
    /// An open command arrived without a `data` field (or with `null`).
    MissingData,
    /// `data` was present but not an array.
    NotAList,
    /// `data` was an empty array.
    EmptyList,
    /// The element at `position` could not be read as an entry object.
    MalformedEntry {
        position: usize,
        source: serde_json::Error,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Json(err) => write!(f, "invalid host message: {err}"),
            ModelError::MissingData => write!(f, "open command carries no data"),
            ModelError::NotAList => write!(f, "open command data is not a list"),
            ModelError::EmptyList => write!(f, "open command data is empty"),
            ModelError::MalformedEntry { position, source } => {
                write!(f, "entry {position} is malformed: {source}")
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Json(err) => Some(err),
            ModelError::MalformedEntry { source, .. } => Some(source),
            ModelError::MissingData
            | ModelError::NotAList
            | ModelError::EmptyList => None,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
