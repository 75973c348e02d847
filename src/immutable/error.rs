use thiserror::Error;

/// Shape mismatches reported by the immutable update helpers.
///
/// These are returned to the caller as-is; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error("Missing field '{path}'")]
    MissingField { path: String },

    #[error("Expected an object at '{path}'")]
    NotAnObject { path: String },

    #[error("Expected an array")]
    NotAnArray,

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
