//! Error types for field path parsing.

/// Reasons a string is not a valid [`FieldPath`](crate::FieldPath).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("path must not be a lone separator")]
    LoneSeparator,

    #[error("path {path:?} contains whitespace")]
    Whitespace { path: String },

    #[error("path {path:?} contains consecutive separators")]
    ConsecutiveSeparators { path: String },

    #[error("path {path:?} has an empty segment")]
    EmptySegment { path: String },
}

/// Result type for path operations.
pub type PathResult<T> = std::result::Result<T, PathError>;
