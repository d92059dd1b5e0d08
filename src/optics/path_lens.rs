//! Lenses built from paths into [`Value`]s.
//!
//! A [`PathLens`] addresses a fixed location; a [`PathFnLens`] computes its
//! location from the lens's argument group on every call. Both may apply a
//! transform pair around the focused value: `to_view` after reading and
//! `to_storage` before writing.
//!
//! Reads through a missing location yield [`Value::Null`] before the view
//! transform is applied. Writes create missing containers along the way.
//!
//! # Examples
//!
//! ```
//! use pathlens::optics::{Lens, from_path, from_path_with};
//! use pathlens::value;
//! use pathlens::value::Value;
//!
//! let model = value!({ "foo": 3 });
//!
//! let shifted = from_path_with(
//!     "foo",
//!     |stored: Value| stored.as_i64().unwrap_or_default() + 1,
//!     |shown: i64| Value::from(shown - 1),
//! )?;
//! assert_eq!(shifted.view(&model), 4);
//!
//! let updated = shifted.put(model, 10);
//! assert_eq!(from_path("foo")?.view(&updated), Value::from(9));
//! # Ok::<(), pathlens::path::PathError>(())
//! ```

use std::marker::PhantomData;

use super::Lens;
use crate::path::{IntoPath, Path, PathError, get_path, set_path};
use crate::value::Value;

/// The identity transform.
pub type Identity = fn(Value) -> Value;

/// A path lens without transforms.
pub type ValueLens = PathLens<Identity, Identity>;

const fn identity(value: Value) -> Value {
    value
}

/// A lens focusing on a fixed path.
#[derive(Clone)]
pub struct PathLens<G, St> {
    path: Path,
    to_view: G,
    to_storage: St,
}

impl PathLens<Identity, Identity> {
    /// Creates a lens on `path` with identity transforms.
    #[must_use]
    pub fn new(path: Path) -> Self {
        Self {
            path,
            to_view: identity,
            to_storage: identity,
        }
    }
}

impl<G, St> PathLens<G, St> {
    /// Returns the path this lens focuses on.
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the transform pair.
    #[must_use]
    pub fn with_transforms<A, G2, St2>(self, to_view: G2, to_storage: St2) -> PathLens<G2, St2>
    where
        G2: Fn(Value) -> A,
        St2: Fn(A) -> Value,
    {
        PathLens {
            path: self.path,
            to_view,
            to_storage,
        }
    }
}

impl<A, G, St> Lens<Value, A> for PathLens<G, St>
where
    G: Fn(Value) -> A,
    St: Fn(A) -> Value,
{
    type Args = ();

    fn get(&self, source: &Value, (): &()) -> A {
        (self.to_view)(get_path(source, &self.path, Value::Null))
    }

    fn set(&self, source: Value, (): &(), value: A) -> Value {
        set_path(source, &self.path, (self.to_storage)(value))
    }
}

impl<G, St> std::fmt::Debug for PathLens<G, St> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PathLens")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// A lens whose path is computed from its argument group.
///
/// The path function receives a clone of the argument group on every `get`
/// and `set`.
pub struct PathFnLens<F, P, G, St> {
    path_fn: F,
    to_view: G,
    to_storage: St,
    _marker: PhantomData<fn(P)>,
}

impl<F, P> PathFnLens<F, P, Identity, Identity>
where
    F: Fn(P) -> Path,
{
    /// Creates a lens with identity transforms.
    #[must_use]
    pub fn new(path_fn: F) -> Self {
        Self {
            path_fn,
            to_view: identity,
            to_storage: identity,
            _marker: PhantomData,
        }
    }
}

impl<F, P, G, St> PathFnLens<F, P, G, St>
where
    F: Fn(P) -> Path,
{
    /// Returns the path addressed for `args`.
    pub fn path_for(&self, args: P) -> Path {
        (self.path_fn)(args)
    }

    /// Replaces the transform pair.
    #[must_use]
    pub fn with_transforms<A, G2, St2>(self, to_view: G2, to_storage: St2) -> PathFnLens<F, P, G2, St2>
    where
        G2: Fn(Value) -> A,
        St2: Fn(A) -> Value,
    {
        PathFnLens {
            path_fn: self.path_fn,
            to_view,
            to_storage,
            _marker: PhantomData,
        }
    }
}

impl<A, F, P, G, St> Lens<Value, A> for PathFnLens<F, P, G, St>
where
    F: Fn(P) -> Path,
    P: Clone,
    G: Fn(Value) -> A,
    St: Fn(A) -> Value,
{
    type Args = P;

    fn get(&self, source: &Value, args: &P) -> A {
        let path = (self.path_fn)(args.clone());
        (self.to_view)(get_path(source, &path, Value::Null))
    }

    fn set(&self, source: Value, args: &P, value: A) -> Value {
        let path = (self.path_fn)(args.clone());
        set_path(source, &path, (self.to_storage)(value))
    }
}

impl<F: Clone, P, G: Clone, St: Clone> Clone for PathFnLens<F, P, G, St> {
    fn clone(&self) -> Self {
        Self {
            path_fn: self.path_fn.clone(),
            to_view: self.to_view.clone(),
            to_storage: self.to_storage.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, P, G, St> std::fmt::Debug for PathFnLens<F, P, G, St> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("PathFnLens").finish_non_exhaustive()
    }
}

/// Builds a lens on a static path.
///
/// # Errors
///
/// Returns [`PathError`] if `path` is text that is not a valid path. The
/// error is reported here, never by `get` or `set`.
///
/// # Examples
///
/// ```
/// use pathlens::optics::{Lens, from_path};
/// use pathlens::value;
/// use pathlens::value::Value;
///
/// let model = value!({ "bar": { "string": "a string" } });
/// let string = from_path("bar.string")?;
/// let same = from_path(["bar", "string"])?;
///
/// assert_eq!(string.view(&model), Value::from("a string"));
/// assert_eq!(same.view(&model), Value::from("a string"));
/// assert!(from_path("bar..string").is_err());
/// # Ok::<(), pathlens::path::PathError>(())
/// ```
pub fn from_path<P: IntoPath>(path: P) -> Result<ValueLens, PathError> {
    Ok(PathLens::new(path.into_path()?))
}

/// Builds a lens on a static path with a transform pair.
///
/// # Errors
///
/// Returns [`PathError`] if `path` is text that is not a valid path.
pub fn from_path_with<P, A, G, St>(
    path: P,
    to_view: G,
    to_storage: St,
) -> Result<PathLens<G, St>, PathError>
where
    P: IntoPath,
    G: Fn(Value) -> A,
    St: Fn(A) -> Value,
{
    Ok(PathLens::new(path.into_path()?).with_transforms(to_view, to_storage))
}

/// Builds a lens whose path is computed from its argument group.
///
/// # Examples
///
/// ```
/// use pathlens::optics::{Lens, from_path_fn};
/// use pathlens::path::Path;
/// use pathlens::value;
/// use pathlens::value::Value;
///
/// let fruit = from_path_fn(|name: &str| Path::from_keys(["dicts", "fruits", name]));
/// let model = value!({ "dicts": { "fruits": { "apple": "apple" } } });
///
/// let updated = fruit.set(model.clone(), &"pear", Value::from("pearfruit"));
/// assert_eq!(fruit.get(&updated, &"pear"), Value::from("pearfruit"));
/// assert_eq!(fruit.get(&updated, &"apple"), Value::from("apple"));
/// assert_eq!(fruit.get(&model, &"pear"), Value::Null);
/// ```
pub fn from_path_fn<F, P>(path_fn: F) -> PathFnLens<F, P, Identity, Identity>
where
    F: Fn(P) -> Path,
{
    PathFnLens::new(path_fn)
}

/// Builds a lens whose path is computed from its argument group, with a
/// transform pair.
pub fn from_path_fn_with<F, P, A, G, St>(
    path_fn: F,
    to_view: G,
    to_storage: St,
) -> PathFnLens<F, P, G, St>
where
    F: Fn(P) -> Path,
    G: Fn(Value) -> A,
    St: Fn(A) -> Value,
{
    PathFnLens::new(path_fn).with_transforms(to_view, to_storage)
}

static_assertions::assert_impl_all!(ValueLens: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Key;
    use crate::value;
    use rstest::rstest;

    #[rstest]
    fn test_from_path_get_missing_is_null() {
        let lens = from_path("a.b").unwrap();
        assert_eq!(lens.view(&value!({ "a": 1 })), Value::Null);
    }

    #[rstest]
    fn test_from_path_identity_set_is_noop() {
        let lens = from_path("").unwrap();
        let model = value!({ "a": 1 });
        assert_eq!(lens.view(&model), model);
        assert_eq!(lens.put(model.clone(), Value::from(2)), model);
    }

    #[rstest]
    fn test_from_path_reports_invalid_text_at_construction() {
        assert_eq!(
            from_path("a.").map(|lens| lens.path().clone()),
            Err(PathError::EmptySegment {
                path: "a.".to_string(),
                position: 1,
            })
        );
    }

    #[rstest]
    fn test_from_path_fn_with_transforms() {
        let counter = from_path_fn_with(
            |name: String| Path::from_keys(["counters", name.as_str()]),
            |stored: Value| stored.as_i64().unwrap_or_default(),
            |hits: i64| Value::from(hits),
        );

        let model = counter.over(Value::Null, &"hits".to_string(), |hits| hits + 1);
        let model = counter.over(model, &"hits".to_string(), |hits| hits + 1);
        assert_eq!(model, value!({ "counters": { "hits": 2 } }));
    }

    #[rstest]
    fn test_path_for() {
        let lens = from_path_fn(|index: usize| Path::from_keys([Key::from("items"), Key::Index(index)]));
        assert_eq!(lens.path_for(3).to_string(), "items.3");
    }
}
