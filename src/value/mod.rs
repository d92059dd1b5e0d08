//! Dynamic values addressed by paths.
//!
//! [`Value`] is a closed variant of scalars and containers. Containers are
//! stored behind [`Arc`], so cloning a value is cheap and unchanged branches
//! are shared between an original snapshot and an updated one.
//!
//! # Examples
//!
//! ```
//! use pathlens::value;
//! use pathlens::value::Value;
//!
//! let model = value!({ "foo": 3, "bar": { "array": [1, 2, 3], "string": "a string" } });
//!
//! assert_eq!(model.child_by_name("foo"), Some(&Value::from(3)));
//! assert!(!model.is_empty());
//! assert!(Value::empty_mapping().is_empty());
//! ```

mod callable;
mod convert;
#[cfg(feature = "serde")]
mod serde_impl;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

pub use callable::Callable;

use crate::path::Key;

/// Mapping storage shared between snapshots.
pub type Mapping = BTreeMap<String, Value>;

/// A dynamically typed value: a scalar, a container, or a function.
///
/// Equality is structural for scalars and containers and by identity for
/// [`Value::Function`].
#[derive(Clone, Default, PartialEq)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered sequence of values.
    Sequence(Arc<Vec<Value>>),
    /// A mapping from string keys to values.
    Mapping(Arc<Mapping>),
    /// A function value, carried through updates by reference.
    Function(Callable),
}

impl Value {
    /// Creates an empty mapping.
    #[must_use]
    pub fn empty_mapping() -> Self {
        Self::Mapping(Arc::new(Mapping::new()))
    }

    /// Creates an empty sequence.
    #[must_use]
    pub fn empty_sequence() -> Self {
        Self::Sequence(Arc::new(Vec::new()))
    }

    /// Creates a mapping from key/value pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlens::value::Value;
    ///
    /// let mapping = Value::mapping([("a", Value::from(1)), ("b", Value::from(2))]);
    /// assert_eq!(mapping.child_by_name("b"), Some(&Value::from(2)));
    /// ```
    pub fn mapping<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Self)>,
        K: Into<String>,
    {
        Self::Mapping(Arc::new(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        ))
    }

    /// Creates a sequence from values.
    pub fn sequence<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Sequence(Arc::new(elements.into_iter().collect()))
    }

    /// Wraps a function as a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlens::value::Value;
    ///
    /// let one = Value::function(|_| Value::from(1));
    /// assert_eq!(one.as_callable().map(|f| f.call(&[])), Some(Value::from(1)));
    /// ```
    pub fn function<F>(function: F) -> Self
    where
        F: Fn(&[Self]) -> Self + Send + Sync + 'static,
    {
        Self::Function(Callable::new(function))
    }

    /// Returns the name of the variant, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for sequences and mappings.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Sequence(_) | Self::Mapping(_))
    }

    /// Returns `true` if the value is "empty".
    ///
    /// Falsy scalars (`null`, `false`, `0`, `0.0`, `NaN`, `""`), empty
    /// sequences and empty mappings are empty. Functions and every other
    /// value are not.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(flag) => !flag,
            Self::Int(number) => *number == 0,
            Self::Float(number) => *number == 0.0 || number.is_nan(),
            Self::Str(text) => text.is_empty(),
            Self::Sequence(elements) => elements.is_empty(),
            Self::Mapping(entries) => entries.is_empty(),
            Self::Function(_) => false,
        }
    }

    /// Returns the boolean, if this is a [`Value::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the integer, if this is a [`Value::Int`].
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the number as `f64`, for both integers and floats.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(number) => Some(*number as f64),
            Self::Float(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a [`Value::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements, if this is a [`Value::Sequence`].
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the entries, if this is a [`Value::Mapping`].
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the function, if this is a [`Value::Function`].
    #[must_use]
    pub const fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Function(callable) => Some(callable),
            _ => None,
        }
    }

    /// Looks up a direct child by key.
    ///
    /// A mapping addressed by an index uses the index's decimal text as the
    /// field name; a sequence addressed by a field uses it only when the field
    /// is a canonical integer. Scalars have no children.
    #[must_use]
    pub fn child(&self, key: &Key) -> Option<&Self> {
        match self {
            Self::Mapping(entries) => entries.get(&*key.as_field()),
            Self::Sequence(elements) => key.as_index().and_then(|index| elements.get(index)),
            _ => None,
        }
    }

    /// Looks up a direct child of a mapping by name.
    #[must_use]
    pub fn child_by_name(&self, name: &str) -> Option<&Self> {
        self.as_mapping().and_then(|entries| entries.get(name))
    }

    /// Returns `true` if both values are containers backed by the same
    /// allocation, or the same function.
    ///
    /// Scalars never share storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlens::value;
    ///
    /// let original = value!({ "a": [1], "b": [2] });
    /// let copy = original.clone();
    /// assert!(copy.shares_storage_with(&original));
    /// ```
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Sequence(left), Self::Sequence(right)) => Arc::ptr_eq(left, right),
            (Self::Mapping(left), Self::Mapping(right)) => Arc::ptr_eq(left, right),
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("Null"),
            Self::Bool(flag) => write!(formatter, "{flag:?}"),
            Self::Int(number) => write!(formatter, "{number:?}"),
            Self::Float(number) => write!(formatter, "{number:?}"),
            Self::Str(text) => write!(formatter, "{text:?}"),
            Self::Sequence(elements) => formatter.debug_list().entries(elements.iter()).finish(),
            Self::Mapping(entries) => formatter.debug_map().entries(entries.iter()).finish(),
            Self::Function(callable) => write!(formatter, "{callable:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number}"),
            Self::Str(text) => write!(formatter, "{text:?}"),
            Self::Sequence(elements) => {
                formatter.write_str("[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                formatter.write_str("]")
            }
            Self::Mapping(entries) => {
                formatter.write_str("{")?;
                for (index, (key, element)) in entries.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key:?}: {element}")?;
                }
                formatter.write_str("}")
            }
            Self::Function(_) => formatter.write_str("<function>"),
        }
    }
}

/// Builds a [`Value`] from a JSON-like literal.
///
/// Elements must be single token trees: wrap compound expressions such as
/// negative numbers in parentheses.
///
/// # Examples
///
/// ```
/// use pathlens::value;
/// use pathlens::value::Value;
///
/// let model = value!({
///     "name": "Tom",
///     "scores": [1, (-2), 3.5],
///     "nested": { "flag": true, "missing": null },
///     "empty": {}
/// });
///
/// assert_eq!(model.child_by_name("name"), Some(&Value::from("Tom")));
/// assert_eq!(
///     model.child_by_name("scores"),
///     Some(&Value::sequence([Value::from(1), Value::from(-2), Value::from(3.5)]))
/// );
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::value::Value::Null
    };
    ([]) => {
        $crate::value::Value::empty_sequence()
    };
    ({}) => {
        $crate::value::Value::empty_mapping()
    };
    ([ $($element:tt),+ $(,)? ]) => {
        $crate::value::Value::sequence(::std::vec![$($crate::value!($element)),+])
    };
    ({ $($key:literal : $element:tt),+ $(,)? }) => {
        $crate::value::Value::mapping([$(($key, $crate::value!($element))),+])
    };
    ($other:expr) => {
        $crate::value::Value::from($other)
    };
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone, Default);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null, true)]
    #[case(Value::Bool(false), true)]
    #[case(Value::Bool(true), false)]
    #[case(Value::Int(0), true)]
    #[case(Value::Int(7), false)]
    #[case(Value::Float(0.0), true)]
    #[case(Value::Float(f64::NAN), true)]
    #[case(Value::Float(0.5), false)]
    #[case(Value::from(""), true)]
    #[case(Value::from("text"), false)]
    #[case(Value::empty_sequence(), true)]
    #[case(Value::sequence([Value::Null]), false)]
    #[case(Value::empty_mapping(), true)]
    #[case(Value::mapping([("a", Value::Null)]), false)]
    #[case(Value::function(|_| Value::Null), false)]
    fn test_is_empty(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_empty(), expected);
    }

    #[rstest]
    fn test_child_of_mapping_by_index_uses_decimal_field() {
        let model = Value::mapping([("0", Value::from("zero"))]);
        assert_eq!(model.child(&Key::Index(0)), Some(&Value::from("zero")));
    }

    #[rstest]
    fn test_child_of_sequence_by_numeric_field() {
        let model = value!(["a", "b"]);
        assert_eq!(model.child(&Key::from("1")), Some(&Value::from("b")));
        assert_eq!(model.child(&Key::from("01")), None);
        assert_eq!(model.child(&Key::from("length")), None);
    }

    #[rstest]
    fn test_scalars_have_no_children() {
        assert_eq!(Value::from("abc").child(&Key::Index(0)), None);
        assert_eq!(Value::Null.child(&Key::from("a")), None);
    }

    #[rstest]
    fn test_display_is_json_like() {
        let model = value!({ "a": [1, "x", null], "b": { "c": true } });
        assert_eq!(format!("{model}"), r#"{"a": [1, "x", null], "b": {"c": true}}"#);
    }

    #[rstest]
    fn test_function_equality_is_identity() {
        let function = Value::function(|_| Value::from(1));
        let same = function.clone();
        let other = Value::function(|_| Value::from(1));
        assert_eq!(function, same);
        assert_ne!(function, other);
    }

    #[rstest]
    fn test_value_macro_nested() {
        let model = value!({ "outer": { "inner": [[1], []] } });
        let inner = model
            .child_by_name("outer")
            .and_then(|outer| outer.child_by_name("inner"));
        assert_eq!(
            inner,
            Some(&Value::sequence([
                Value::sequence([Value::from(1)]),
                Value::empty_sequence(),
            ]))
        );
    }
}
