//! Path keys.

use std::borrow::Cow;
use std::fmt;

/// A single step of a [`Path`](super::Path): a named field or a sequence index.
///
/// Keys follow property semantics: a mapping addressed by `Index(3)` reads the
/// field `"3"`, and a sequence addressed by the field `"3"` reads index `3`.
///
/// # Examples
///
/// ```
/// use pathlens::path::Key;
///
/// assert_eq!(Key::parse_segment("0"), Key::Index(0));
/// assert_eq!(Key::parse_segment("0a"), Key::from("0a"));
/// assert_eq!(Key::parse_segment("007"), Key::from("007"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// A mapping field.
    Field(String),
    /// A sequence index.
    Index(usize),
}

impl Key {
    /// Parses one textual segment.
    ///
    /// The segment becomes an [`Key::Index`] only when it is a canonical
    /// non-negative decimal integer that fits in `usize`; everything else is a
    /// [`Key::Field`].
    #[must_use]
    pub fn parse_segment(segment: &str) -> Self {
        parse_index(segment).map_or_else(|| Self::Field(segment.to_owned()), Self::Index)
    }

    /// Returns `true` for [`Key::Index`].
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// Returns the index this key addresses in a sequence, if any.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Field(name) => parse_index(name),
        }
    }

    /// Returns the field name this key addresses in a mapping.
    #[must_use]
    pub fn as_field(&self) -> Cow<'_, str> {
        match self {
            Self::Field(name) => Cow::Borrowed(name),
            Self::Index(index) => Cow::Owned(index.to_string()),
        }
    }
}

fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|byte| byte.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => formatter.write_str(name),
            Self::Index(index) => write!(formatter, "{index}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Field(name.to_owned())
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Self::Field(name.clone())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Field(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&Self> for Key {
    fn from(key: &Self) -> Self {
        key.clone()
    }
}
