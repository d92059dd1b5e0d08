//! Error types for path construction.
//!
//! Paths are validated once, when they are built. Reading or writing through a
//! valid path never fails.

/// Represents an error when text cannot be parsed as a [`Path`](super::Path).
///
/// # Examples
///
/// ```rust
/// use pathlens::path::{Path, PathError};
///
/// let error = Path::parse("foo..bar").unwrap_err();
/// assert_eq!(
///     error,
///     PathError::EmptySegment { path: "foo..bar".to_string(), position: 1 }
/// );
/// assert_eq!(
///     format!("{error}"),
///     "invalid path \"foo..bar\": segment 1 is empty"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A `.`-delimited segment is empty, as in `"a..b"`, `".a"` or `"a."`.
    EmptySegment {
        /// The text that failed to parse.
        path: String,
        /// Zero-based index of the empty segment.
        position: usize,
    },
}

impl std::fmt::Display for PathError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySegment { path, position } => {
                write!(formatter, "invalid path {path:?}: segment {position} is empty")
            }
        }
    }
}

impl std::error::Error for PathError {}
