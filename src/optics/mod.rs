//! Lenses for immutable data manipulation.
//!
//! A lens focuses on one part of a larger value and provides get/set access
//! to it. Setting through a lens returns a new value; for [`Value`] models
//! the path engine copies only the containers along the focused path.
//!
//! # Available Optics
//!
//! - [`Lens`]: The get/set/over trait, with an explicit argument group
//! - [`FunctionLens`]: A lens built from a getter and a setter
//! - [`ParameterizedLens`]: A lens whose getter and setter take arguments
//! - [`PathLens`]: A lens on a fixed path into a [`Value`]
//! - [`PathFnLens`]: A lens on a path computed from its arguments
//! - [`ComposedLens`]: Two lenses chained, outer then inner
//!
//! # Example with paths
//!
//! ```
//! use pathlens::optics::{Lens, from_path};
//! use pathlens::{compose, value};
//! use pathlens::value::Value;
//!
//! let model = value!({ "foo": 3, "bar": { "array": [1, 2, 3], "string": "a string" } });
//!
//! let array = from_path("bar.array")?;
//! let first = compose!(from_path("bar.array")?, from_path(0_usize)?);
//!
//! let incremented = array.modify(model.clone(), |array| {
//!     array
//!         .as_sequence()
//!         .map(|elements| elements.iter().map(|n| Value::from(n.as_i64().unwrap_or(0) + 1)).collect())
//!         .unwrap_or_default()
//! });
//!
//! assert_eq!(array.view(&incremented), value!([2, 3, 4]));
//! assert_eq!(first.view(&incremented), Value::from(2));
//! assert_eq!(first.view(&model), Value::from(1));
//! # Ok::<(), pathlens::path::PathError>(())
//! ```
//!
//! # Example with a parameterized lens
//!
//! ```
//! use pathlens::optics::{Lens, from_path_fn};
//! use pathlens::path::Path;
//! use pathlens::value;
//! use pathlens::value::Value;
//!
//! let fruit = from_path_fn(|name: &str| Path::from_keys(["dicts", "fruits", name]));
//! let model = value!({ "dicts": { "fruits": { "apple": "apple", "orange": "orange" } } });
//!
//! assert_eq!(fruit.get(&model, &"apple"), Value::from("apple"));
//!
//! let updated = fruit.set(model, &"pear", Value::from("pearfruit"));
//! assert_eq!(fruit.get(&updated, &"pear"), Value::from("pearfruit"));
//! assert_eq!(fruit.get(&updated, &"apple"), Value::from("apple"));
//! ```
//!
//! # Lens Laws
//!
//! Every Lens must satisfy three laws, for every argument group:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source, args, lens.get(&source, args)) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, args, value), args) == value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, args, v1), args, v2) == lens.set(source, args, v2)
//!    ```
//!
//! Path lenses with transforms satisfy the laws up to the transforms, and
//! GetPut holds for path lenses only where the focused location exists.
//!
//! [`Value`]: crate::value::Value

mod accessors;
mod compose;
mod lens;
mod path_lens;

// Re-export all lens-related types and traits
pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::NoArgs;
pub use lens::ParameterizedLens;
pub use lens::make_lens;
pub use lens::parameterized_lens;

// Re-export composition
pub use compose::ComposedLens;

// Re-export path lenses
pub use path_lens::Identity;
pub use path_lens::PathFnLens;
pub use path_lens::PathLens;
pub use path_lens::ValueLens;
pub use path_lens::from_path;
pub use path_lens::from_path_fn;
pub use path_lens::from_path_fn_with;
pub use path_lens::from_path_with;
