//! Copy-on-write reads and writes through a [`Path`].
//!
//! Writes copy only the containers along the traversed path. Siblings, and
//! any function values elsewhere in the structure, are carried over by
//! reference. A container still shared with another snapshot is copied before
//! it is changed, so an original model is never altered by a write.

use std::mem;
use std::sync::Arc;

use super::{Key, Path};
use crate::value::{Mapping, Value};

/// Returns a reference to the value at `keys`, if present.
///
/// Traversal stops with `None` as soon as the current value is empty (see
/// [`Value::is_empty`]) or the next key is absent. An empty key list returns
/// `value` itself.
///
/// # Examples
///
/// ```
/// use pathlens::path::{Key, lookup};
/// use pathlens::value;
/// use pathlens::value::Value;
///
/// let model = value!({ "a": { "b": null }, "z": 0 });
/// assert_eq!(lookup(&model, &[Key::from("a"), Key::from("b")]), Some(&Value::Null));
/// assert_eq!(lookup(&model, &[Key::from("z"), Key::from("y")]), None);
/// ```
pub fn lookup<'a>(value: &'a Value, keys: &[Key]) -> Option<&'a Value> {
    keys.iter().try_fold(value, |current, key| {
        if current.is_empty() {
            None
        } else {
            current.child(key)
        }
    })
}

/// Returns the value at `path`, or `default` if any step is missing.
///
/// # Examples
///
/// ```
/// use pathlens::path::{Path, get_path};
/// use pathlens::value;
/// use pathlens::value::Value;
///
/// let model = value!({ "foo": { "bar": 1 } });
/// let fallback = Value::from("none");
///
/// assert_eq!(get_path(&model, &Path::parse("foo.bar")?, fallback.clone()), Value::from(1));
/// assert_eq!(get_path(&model, &Path::parse("foo.baz.qux")?, fallback.clone()), fallback);
/// assert_eq!(get_path(&model, &Path::identity(), fallback), model);
/// # Ok::<(), pathlens::path::PathError>(())
/// ```
#[must_use]
pub fn get_path(value: &Value, path: &Path, default: Value) -> Value {
    lookup(value, path.keys()).cloned().unwrap_or(default)
}

/// Returns `value` with the location at `path` replaced by `new_value`.
///
/// Missing intermediate containers are created: a sequence when the following
/// key is an index, a mapping otherwise. An index up to 1024 places past the
/// end of a sequence pads it with `Null`; a farther index turns the sequence
/// into a mapping keyed by decimal text. The identity path leaves `value`
/// unchanged.
///
/// # Examples
///
/// ```
/// use pathlens::path::{Path, set_path};
/// use pathlens::value;
/// use pathlens::value::Value;
///
/// let model = value!({ "foo": 3 });
/// let updated = set_path(model.clone(), &Path::parse("list.1.name")?, Value::from("x"));
///
/// assert_eq!(model, value!({ "foo": 3 }));
/// assert_eq!(updated, value!({ "foo": 3, "list": [null, { "name": "x" }] }));
/// # Ok::<(), pathlens::path::PathError>(())
/// ```
#[must_use]
pub fn set_path(value: Value, path: &Path, new_value: Value) -> Value {
    match path.keys().split_first() {
        None => value,
        Some((key, rest)) => assign(value, key, rest, new_value),
    }
}

fn assign(value: Value, key: &Key, rest: &[Key], new_value: Value) -> Value {
    let container = if value.is_container() {
        value
    } else {
        vacant_container(key)
    };

    match (container, key.as_index()) {
        (Value::Sequence(mut elements), Some(index)) if within_padding(elements.len(), index) => {
            let slots = Arc::make_mut(&mut elements);
            if index >= slots.len() {
                slots.resize(index + 1, Value::Null);
            }
            let current = mem::take(&mut slots[index]);
            slots[index] = descend(current, rest, new_value);
            Value::Sequence(elements)
        }
        (Value::Sequence(elements), _) => {
            tracing::trace!(key = %key, length = elements.len(), "promoting sequence to mapping");
            assign_field(promote_to_mapping(&elements), key, rest, new_value)
        }
        (Value::Mapping(entries), _) => assign_field(entries, key, rest, new_value),
        (scalar, _) => scalar,
    }
}

fn assign_field(mut entries: Arc<Mapping>, key: &Key, rest: &[Key], new_value: Value) -> Value {
    let slots = Arc::make_mut(&mut entries);
    let name = key.as_field();
    let current = slots.remove(&*name).unwrap_or_default();
    slots.insert(name.into_owned(), descend(current, rest, new_value));
    Value::Mapping(entries)
}

/// Writes at most this many `Null`s past the end of a sequence; farther
/// indices turn the sequence into a mapping keyed by decimal text.
const MAX_PADDING: usize = 1024;

fn within_padding(length: usize, index: usize) -> bool {
    index
        .checked_sub(length)
        .is_none_or(|gap| gap <= MAX_PADDING)
}

fn descend(current: Value, rest: &[Key], new_value: Value) -> Value {
    match rest.split_first() {
        None => new_value,
        Some((next, remaining)) => {
            let child = if current.is_container() {
                current
            } else {
                tracing::trace!(
                    key = %next,
                    replaced = current.type_name(),
                    "materializing missing container"
                );
                vacant_container(next)
            };
            assign(child, next, remaining, new_value)
        }
    }
}

fn vacant_container(key: &Key) -> Value {
    if key.is_index() {
        Value::empty_sequence()
    } else {
        Value::empty_mapping()
    }
}

fn promote_to_mapping(elements: &[Value]) -> Arc<Mapping> {
    Arc::new(
        elements
            .iter()
            .enumerate()
            .map(|(index, element)| (index.to_string(), element.clone()))
            .collect(),
    )
}
