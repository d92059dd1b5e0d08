//! Lens optics for focusing on one part of a larger value.
//!
//! A Lens pairs a getter with a setter. Setters never modify their input in
//! place from the caller's point of view: they return a new source.
//!
//! Lenses may be *parameterized*: their associated [`Lens::Args`] type is an
//! argument group passed to both the getter and the setter, so a single lens
//! can address a family of locations chosen at call time. Lenses that take no
//! arguments use `()` and can be driven with [`Lens::view`], [`Lens::put`] and
//! [`Lens::modify`].
//!
//! # Laws
//!
//! For every argument group `args`:
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
//! # Examples
//!
//! ```
//! use pathlens::optics::Lens;
//! use pathlens::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.view(&point), 10);
//!
//! let updated = x_lens.put(point, 100);
//! assert_eq!(updated.x, 100);
//! ```

use std::marker::PhantomData;

use super::ComposedLens;

/// Argument groups that carry no information.
///
/// Implemented for `()` and for pairs of such groups, which is what composing
/// non-parameterized lenses produces.
pub trait NoArgs {
    /// Returns the only value of this group.
    fn none() -> Self;
}

impl NoArgs for () {
    fn none() -> Self {}
}

impl<A: NoArgs, B: NoArgs> NoArgs for (A, B) {
    fn none() -> Self {
        (A::none(), B::none())
    }
}

/// A Lens focuses on a single value within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused value)
pub trait Lens<S, A> {
    /// The extra argument group accepted by [`get`](Lens::get) and
    /// [`set`](Lens::set). `()` for lenses that take no arguments.
    type Args;

    /// Gets the focused value.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    /// * `args` - The argument group selecting the focus
    fn get(&self, source: &S, args: &Self::Args) -> A;

    /// Sets the focused value, returning a new source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `args` - The argument group selecting the focus
    /// * `value` - The new value for the focus
    fn set(&self, source: S, args: &Self::Args, value: A) -> S;

    /// Reads the focus, applies `function`, and writes the result back.
    ///
    /// Equivalent to `set(source, args, function(get(&source, args)))`.
    ///
    /// # Example
    ///
    /// ```
    /// use pathlens::optics::{Lens, parameterized_lens};
    ///
    /// let nth = parameterized_lens(
    ///     |items: &Vec<i32>, index: &usize| items[*index],
    ///     |mut items: Vec<i32>, index: &usize, value: i32| {
    ///         items[*index] = value;
    ///         items
    ///     },
    /// );
    ///
    /// assert_eq!(nth.over(vec![1, 2, 3], &1, |n| n * 10), vec![1, 20, 3]);
    /// ```
    fn over<F>(&self, source: S, args: &Self::Args, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.get(&source, args);
        self.set(source, args, function(current))
    }

    /// Gets the focused value of a lens that takes no arguments.
    fn view(&self, source: &S) -> A
    where
        Self::Args: NoArgs,
    {
        self.get(source, &<Self::Args as NoArgs>::none())
    }

    /// Sets the focused value of a lens that takes no arguments.
    fn put(&self, source: S, value: A) -> S
    where
        Self::Args: NoArgs,
    {
        self.set(source, &<Self::Args as NoArgs>::none(), value)
    }

    /// Modifies the focused value of a lens that takes no arguments.
    ///
    /// # Example
    ///
    /// ```
    /// use pathlens::optics::Lens;
    /// use pathlens::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let point = Point { x: 10, y: 20 };
    /// let doubled = x_lens.modify(point, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        Self::Args: NoArgs,
        F: FnOnce(A) -> A,
    {
        self.over(source, &<Self::Args as NoArgs>::none(), function)
    }

    /// Composes this lens with another lens focusing inside this one.
    ///
    /// The composite takes the argument group `(outer_args, inner_args)`.
    ///
    /// # Example
    ///
    /// ```
    /// use pathlens::optics::Lens;
    /// use pathlens::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let address_lens = lens!(Person, address);
    /// let street_lens = lens!(Address, street);
    /// let person_street = address_lens.compose(street_lens);
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address {
    ///         street: "Main St".to_string(),
    ///         city: "Tokyo".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(person_street.view(&person), "Main St");
    /// ```
    fn compose<B, L>(self, inner: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, inner)
    }
}

/// A lens implemented using getter and setter functions.
///
/// The `lens!` macro and `#[derive(Lenses)]` generate a `FunctionLens`
/// internally.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use pathlens::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.view(&point), 10);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// # Arguments
    ///
    /// * `getter` - A function that extracts the focused value from the source
    /// * `setter` - A function that creates a new source with the value updated
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    type Args = ();

    fn get(&self, source: &S, (): &()) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, (): &(), value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens whose getter and setter take an extra argument group `P`.
///
/// # Example
///
/// ```
/// use pathlens::optics::{Lens, ParameterizedLens};
/// use std::collections::BTreeMap;
///
/// let entry = ParameterizedLens::new(
///     |map: &BTreeMap<String, i32>, key: &String| map.get(key).copied().unwrap_or_default(),
///     |mut map: BTreeMap<String, i32>, key: &String, value: i32| {
///         map.insert(key.clone(), value);
///         map
///     },
/// );
///
/// let map = entry.set(BTreeMap::new(), &"pear".to_string(), 3);
/// assert_eq!(entry.get(&map, &"pear".to_string()), 3);
/// assert_eq!(entry.get(&map, &"apple".to_string()), 0);
/// ```
pub struct ParameterizedLens<S, A, P, G, St>
where
    G: Fn(&S, &P) -> A,
    St: Fn(S, &P, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S, P) -> A>,
}

impl<S, A, P, G, St> ParameterizedLens<S, A, P, G, St>
where
    G: Fn(&S, &P) -> A,
    St: Fn(S, &P, A) -> S,
{
    /// Creates a new `ParameterizedLens` from a getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, G, St> Lens<S, A> for ParameterizedLens<S, A, P, G, St>
where
    G: Fn(&S, &P) -> A,
    St: Fn(S, &P, A) -> S,
{
    type Args = P;

    fn get(&self, source: &S, args: &P) -> A {
        (self.getter)(source, args)
    }

    fn set(&self, source: S, args: &P, value: A) -> S {
        (self.setter)(source, args, value)
    }
}

impl<S, A, P, G, St> Clone for ParameterizedLens<S, A, P, G, St>
where
    G: Fn(&S, &P) -> A + Clone,
    St: Fn(S, &P, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, G, St> std::fmt::Debug for ParameterizedLens<S, A, P, G, St>
where
    G: Fn(&S, &P) -> A,
    St: Fn(S, &P, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ParameterizedLens")
            .finish_non_exhaustive()
    }
}

/// Builds a lens from a getter and a setter.
#[must_use]
pub const fn make_lens<S, A, G, St>(getter: G, setter: St) -> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    FunctionLens::new(getter, setter)
}

/// Builds a parameterized lens from a getter and a setter that both take an
/// argument group.
#[must_use]
pub const fn parameterized_lens<S, A, P, G, St>(
    getter: G,
    setter: St,
) -> ParameterizedLens<S, A, P, G, St>
where
    G: Fn(&S, &P) -> A,
    St: Fn(S, &P, A) -> S,
{
    ParameterizedLens::new(getter, setter)
}

/// Creates a lens for a struct field.
///
/// This macro generates a `FunctionLens` that focuses on the specified field
/// of the given struct type. The getter clones the field.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use pathlens::optics::Lens;
/// use pathlens::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let y_lens = lens!(Point, y);
///
/// let point = Point { x: 10, y: 20 };
///
/// assert_eq!(x_lens.view(&point), 10);
/// assert_eq!(y_lens.view(&point), 20);
///
/// let updated = x_lens.put(point, 100);
/// assert_eq!(updated, Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_function_lens_get() {
        let x_lens = FunctionLens::new(
            |point: &Point| point.x,
            |point: Point, x: i32| Point { x, ..point },
        );

        let point = Point { x: 10, y: 20 };
        assert_eq!(x_lens.get(&point, &()), 10);
    }

    #[test]
    fn test_function_lens_set() {
        let x_lens = make_lens(
            |point: &Point| point.x,
            |point: Point, x: i32| Point { x, ..point },
        );

        let point = Point { x: 10, y: 20 };
        let updated = x_lens.set(point, &(), 100);
        assert_eq!(updated.x, 100);
        assert_eq!(updated.y, 20);
    }

    #[test]
    fn test_lens_modify() {
        let x_lens = lens!(Point, x);
        let point = Point { x: 10, y: 20 };
        let doubled = x_lens.modify(point, |x| x * 2);
        assert_eq!(doubled.x, 20);
    }

    #[test]
    fn test_parameterized_lens_over() {
        let coordinate = parameterized_lens(
            |point: &Point, axis: &char| if *axis == 'x' { point.x } else { point.y },
            |point: Point, axis: &char, value: i32| {
                if *axis == 'x' {
                    Point { x: value, ..point }
                } else {
                    Point { y: value, ..point }
                }
            },
        );

        let point = Point { x: 1, y: 2 };
        let updated = coordinate.over(point, &'y', |y| y + 40);
        assert_eq!(updated, Point { x: 1, y: 42 });
        assert_eq!(coordinate.get(&updated, &'x'), 1);
    }

    #[test]
    fn test_no_args_pairs() {
        let args: ((), ((), ())) = NoArgs::none();
        assert_eq!(args, ((), ((), ())));
    }
}
