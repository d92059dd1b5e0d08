//! Paths into nested values and the copy-on-write path engine.
//!
//! A [`Path`] is an ordered sequence of [`Key`]s. Its textual form joins the
//! keys with `.`; every segment that is a canonical integer becomes an index.
//! The empty path denotes the whole value.
//!
//! # Examples
//!
//! ```
//! use pathlens::path::{Key, Path, get_path, set_path};
//! use pathlens::value;
//! use pathlens::value::Value;
//!
//! let path = Path::parse("bar.array.0")?;
//! assert_eq!(path.keys(), &[Key::from("bar"), Key::from("array"), Key::Index(0)]);
//!
//! let model = value!({ "bar": { "array": [1, 2, 3] } });
//! let updated = set_path(model.clone(), &path, Value::from("x"));
//!
//! assert_eq!(get_path(&model, &path, Value::Null), Value::from(1));
//! assert_eq!(get_path(&updated, &path, Value::Null), Value::from("x"));
//! # Ok::<(), pathlens::path::PathError>(())
//! ```

mod engine;
mod error;
mod key;
#[cfg(feature = "serde")]
mod serde_impl;

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

pub use engine::get_path;
pub use engine::lookup;
pub use engine::set_path;
pub use error::PathError;
pub use key::Key;

/// An ordered sequence of keys addressing a location inside a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    keys: SmallVec<[Key; 4]>,
}

impl Path {
    /// Returns the identity path, which addresses the whole value.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Parses the textual form `segment('.'segment)*`.
    ///
    /// The empty string is the identity path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptySegment`] if any segment is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlens::path::{Key, Path};
    ///
    /// assert!(Path::parse("")?.is_identity());
    /// assert_eq!(Path::parse("items.0a")?.keys()[1], Key::from("0a"));
    /// assert!(Path::parse("items.").is_err());
    /// # Ok::<(), pathlens::path::PathError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, PathError> {
        if text.is_empty() {
            return Ok(Self::identity());
        }
        text.split('.')
            .enumerate()
            .map(|(position, segment)| {
                if segment.is_empty() {
                    Err(PathError::EmptySegment {
                        path: text.to_owned(),
                        position,
                    })
                } else {
                    Ok(Key::parse_segment(segment))
                }
            })
            .collect()
    }

    /// Builds a path from keys, taking every key verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlens::path::{Key, Path};
    ///
    /// let path = Path::from_keys([Key::from("dicts"), Key::from("0"), Key::Index(1)]);
    /// assert_eq!(path.to_string(), "dicts.0.1");
    /// assert!(!path.keys()[1].is_index());
    /// ```
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if this path addresses the whole value.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the keys as a slice.
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Returns an iterator over the keys.
    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.keys.iter()
    }

    /// Returns a new path extended by one key.
    #[must_use]
    pub fn child(&self, key: impl Into<Key>) -> Self {
        let mut keys = self.keys.clone();
        keys.push(key.into());
        Self { keys }
    }

    /// Returns a new path with `other` appended.
    #[must_use]
    pub fn join(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).collect()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, key) in self.keys.iter().enumerate() {
            if position > 0 {
                formatter.write_str(".")?;
            }
            write!(formatter, "{key}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl TryFrom<&str> for Path {
    type Error = PathError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::parse(text)
    }
}

impl From<Key> for Path {
    fn from(key: Key) -> Self {
        Self::from_keys([key])
    }
}

impl From<usize> for Path {
    fn from(index: usize) -> Self {
        Self::from_keys([Key::Index(index)])
    }
}

impl<K: Into<Key>> FromIterator<K> for Path {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// Conversion into a [`Path`] at lens construction time.
///
/// Textual paths are parsed and may fail; key sequences are taken verbatim and
/// always succeed.
pub trait IntoPath {
    /// Converts `self` into a path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] if `self` is text that is not a valid path.
    fn into_path(self) -> Result<Path, PathError>;
}

impl IntoPath for Path {
    fn into_path(self) -> Result<Path, PathError> {
        Ok(self)
    }
}

impl IntoPath for &Path {
    fn into_path(self) -> Result<Path, PathError> {
        Ok(self.clone())
    }
}

impl IntoPath for &str {
    fn into_path(self) -> Result<Path, PathError> {
        Path::parse(self)
    }
}

impl IntoPath for String {
    fn into_path(self) -> Result<Path, PathError> {
        Path::parse(&self)
    }
}

impl IntoPath for &String {
    fn into_path(self) -> Result<Path, PathError> {
        Path::parse(self)
    }
}

impl IntoPath for Key {
    fn into_path(self) -> Result<Path, PathError> {
        Ok(Path::from(self))
    }
}

impl IntoPath for usize {
    fn into_path(self) -> Result<Path, PathError> {
        Ok(Path::from(self))
    }
}

impl<K: Into<Key>> IntoPath for Vec<K> {
    fn into_path(self) -> Result<Path, PathError> {
        Ok(Path::from_keys(self))
    }
}

impl<K: Into<Key>, const N: usize> IntoPath for [K; N] {
    fn into_path(self) -> Result<Path, PathError> {
        Ok(Path::from_keys(self))
    }
}

impl<K> IntoPath for &[K]
where
    K: Into<Key> + Clone,
{
    fn into_path(self) -> Result<Path, PathError> {
        Ok(Path::from_keys(self.iter().cloned()))
    }
}

static_assertions::assert_impl_all!(Path: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("foo", vec![Key::from("foo")])]
    #[case("bar.string", vec![Key::from("bar"), Key::from("string")])]
    #[case("a.0.b", vec![Key::from("a"), Key::Index(0), Key::from("b")])]
    #[case("a.0a", vec![Key::from("a"), Key::from("0a")])]
    #[case("", vec![])]
    fn test_parse(#[case] text: &str, #[case] expected: Vec<Key>) {
        assert_eq!(Path::parse(text).map(|path| path.keys().to_vec()), Ok(expected));
    }

    #[rstest]
    #[case(".a", 0)]
    #[case("a.", 1)]
    #[case("a..b", 1)]
    #[case(".", 0)]
    fn test_parse_rejects_empty_segments(#[case] text: &str, #[case] position: usize) {
        assert_eq!(
            Path::parse(text),
            Err(PathError::EmptySegment {
                path: text.to_string(),
                position,
            })
        );
    }

    #[rstest]
    fn test_display_round_trips_textual_paths() {
        let path: Path = "dicts.fruits.3.name".parse().unwrap();
        assert_eq!(path.to_string(), "dicts.fruits.3.name");
        assert_eq!(path.to_string().parse::<Path>(), Ok(path));
    }

    #[rstest]
    fn test_child_and_join() {
        let base = Path::parse("a.b").unwrap();
        assert_eq!(base.child(2_usize).to_string(), "a.b.2");
        assert_eq!(base.join(&Path::parse("c.d").unwrap()).len(), 4);
        assert_eq!(base.len(), 2);
    }

    #[rstest]
    fn test_into_path_variants() {
        assert_eq!("a.1".into_path(), Ok(Path::from_keys([Key::from("a"), Key::Index(1)])));
        assert_eq!(vec!["a", "1"].into_path().map(|path| path.keys()[1].is_index()), Ok(false));
        assert_eq!(3_usize.into_path(), Ok(Path::from(3_usize)));
        assert!(String::from("x..y").into_path().is_err());
    }
}
