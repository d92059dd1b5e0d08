//! Composition of lenses.
//!
//! Composing an outer lens with an inner lens yields a lens focusing on the
//! inner lens's target within the outer lens's target:
//!
//! ```text
//! get(s, (a, b))    = inner.get(outer.get(s, a), b)
//! set(s, (a, b), v) = outer.set(s, a, inner.set(outer.get(s, a), b, v))
//! ```
//!
//! Each step keeps its own argument group. [`compose!`](crate::compose)
//! folds any number of lenses to the right, and [`args!`](crate::args) builds
//! the matching nested argument group, so the n-th lens always receives the
//! n-th argument group. Non-parameterized steps take `()`.
//!
//! # Example
//!
//! ```
//! use pathlens::optics::{Lens, from_path_fn};
//! use pathlens::path::Path;
//! use pathlens::{args, compose, value};
//! use pathlens::value::Value;
//!
//! let section = from_path_fn(|name: &str| Path::from_keys([name]));
//! let entry = from_path_fn(|name: &str| Path::from_keys([name]));
//! let slot = from_path_fn(|index: usize| Path::from(index));
//! let deep = compose!(section, entry, slot);
//!
//! let model = value!({ "a": { "b": [10, 20] } });
//! let updated = deep.set(model.clone(), &args!("a", "b", 1), Value::from(99));
//!
//! assert_eq!(deep.get(&updated, &args!("a", "b", 1)), Value::from(99));
//! assert_eq!(deep.get(&model, &args!("a", "b", 1)), Value::from(20));
//! ```

use std::marker::PhantomData;

use super::Lens;

/// A lens composed of two lenses.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `A`: The intermediate type (target of L1, source of L2)
pub struct ComposedLens<L1, L2, A> {
    outer: L1,
    inner: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens.
    ///
    /// # Arguments
    ///
    /// * `outer` - The lens focusing on the intermediate structure
    /// * `inner` - The lens focusing on the final value within it
    #[must_use]
    pub const fn new(outer: L1, inner: L2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }

    /// Returns the outer lens.
    pub const fn outer(&self) -> &L1 {
        &self.outer
    }

    /// Returns the inner lens.
    pub const fn inner(&self) -> &L2 {
        &self.inner
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    type Args = (<L1 as Lens<S, A>>::Args, <L2 as Lens<A, B>>::Args);

    fn get(&self, source: &S, args: &Self::Args) -> B {
        let intermediate = self.outer.get(source, &args.0);
        self.inner.get(&intermediate, &args.1)
    }

    fn set(&self, source: S, args: &Self::Args, value: B) -> S {
        let intermediate = self.outer.get(&source, &args.0);
        let updated = self.inner.set(intermediate, &args.1, value);
        self.outer.set(source, &args.0, updated)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Composes one or more lenses, outermost first.
///
/// `compose!(a, b, c)` is `a.compose(b.compose(c))`; its argument group is
/// `(a_args, (b_args, c_args))`, built with [`args!`](crate::args). A single
/// lens is returned unchanged.
///
/// # Example
///
/// ```
/// use pathlens::optics::{Lens, from_path};
/// use pathlens::{compose, value};
/// use pathlens::value::Value;
///
/// let abc = compose!(from_path("a")?, from_path("b")?, from_path("c")?);
/// let model = value!({ "a": { "b": { "c": 1 } } });
///
/// assert_eq!(abc.view(&model), Value::from(1));
/// assert_eq!(abc.view(&abc.put(model, Value::from(3))), Value::from(3));
/// # Ok::<(), pathlens::path::PathError>(())
/// ```
#[macro_export]
macro_rules! compose {
    ($lens:expr $(,)?) => {
        $lens
    };
    ($outer:expr, $($rest:expr),+ $(,)?) => {
        $crate::optics::Lens::compose($outer, $crate::compose!($($rest),+))
    };
}

/// Builds the argument group for a lens produced by [`compose!`](crate::compose).
///
/// `args!(a, b, c)` is `(a, (b, c))`; `args!(a)` is `a` and `args!()` is `()`.
///
/// # Example
///
/// ```
/// use pathlens::args;
///
/// assert_eq!(args!("apple", 0_usize, ()), ("apple", (0_usize, ())));
/// assert_eq!(args!(7), 7);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ()
    };
    ($arg:expr $(,)?) => {
        $arg
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        ($first, $crate::args!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{FunctionLens, from_path, from_path_fn, parameterized_lens};
    use crate::path::Path;
    use crate::value;
    use crate::value::Value;

    #[derive(Clone, PartialEq, Debug)]
    struct Inner {
        value: i32,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Outer {
        inner: Inner,
    }

    #[test]
    fn test_compose_typed_lenses() {
        let inner_lens = crate::lens!(Outer, inner);
        let value_lens = crate::lens!(Inner, value);
        let composed = inner_lens.compose(value_lens);

        let data = Outer {
            inner: Inner { value: 42 },
        };

        assert_eq!(composed.view(&data), 42);

        let updated = composed.put(data, 100);
        assert_eq!(updated.inner.value, 100);
    }

    #[test]
    fn test_compose_single_lens_is_identity() {
        let lens = compose!(FunctionLens::new(|n: &i32| *n, |_: i32, n: i32| n));
        assert_eq!(lens.view(&5), 5);
    }

    #[test]
    fn test_compose_parameterized_outer_with_plain_inner() {
        let fruit = from_path_fn(|name: &str| Path::from_keys(["fruits", name]));
        let first = from_path(0_usize).unwrap();
        let first_variety = compose!(fruit, first);

        let model = value!({ "fruits": { "apple": ["delicious", "granny smith"] } });
        assert_eq!(
            first_variety.get(&model, &args!("apple", ())),
            Value::from("delicious")
        );

        let updated = first_variety.set(model.clone(), &args!("melon", ()), Value::from("water"));
        assert_eq!(
            first_variety.get(&updated, &args!("melon", ())),
            Value::from("water")
        );
        assert_eq!(
            first_variety.get(&model, &args!("melon", ())),
            Value::Null
        );
    }

    #[test]
    fn test_compose_plain_outer_with_parameterized_inner() {
        let items = from_path("items").unwrap();
        let nth = parameterized_lens(
            |model: &Value, index: &usize| {
                model
                    .as_sequence()
                    .and_then(|elements| elements.get(*index))
                    .cloned()
                    .unwrap_or_default()
            },
            |model: Value, index: &usize, value: Value| {
                let mut elements = model.as_sequence().map(<[Value]>::to_vec).unwrap_or_default();
                if *index < elements.len() {
                    elements[*index] = value;
                }
                Value::from(elements)
            },
        );
        let composed = compose!(items, nth);

        let model = value!({ "items": [1, 2, 3] });
        let updated = composed.over(model, &args!((), 2_usize), |_| Value::from(30));
        assert_eq!(updated, value!({ "items": [1, 2, 30] }));
    }
}
