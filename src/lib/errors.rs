use thiserror::Error;

/// Errors raised by the ambient parts of the frontend. The route guard itself
/// never fails; these cover persistence and setup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("{0}")]
    Validation(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}
