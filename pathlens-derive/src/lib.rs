//! Derive macro for pathlens lenses.
//!
//! `#[derive(Lenses)]` generates a `<field>_lens()` associated function for
//! every named field of a struct. Each returned lens takes no argument group,
//! so it composes with the path lenses of `pathlens` through `compose!`.
//!
//! # Example
//!
//! ```rust,ignore
//! use pathlens::Lenses;
//! use pathlens::optics::Lens;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> impl Lens<Point, i32, Args = ()> + Clone
//! // - Point::y_lens() -> impl Lens<Point, i32, Args = ()> + Clone
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(Point::x_lens().view(&point), 10);
//! ```

#![forbid(unsafe_code)]

use proc_macro::TokenStream;

mod lenses;

/// Derive macro generating a lens for each named field of a struct.
///
/// # Generated Code
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl Lens<StructName, T, Args = ()> + Clone
///     where
///         T: Clone,
///     { ... }
/// }
/// ```
///
/// The getter clones the field, so every field type must be `Clone`.
///
/// # Errors
///
/// Enums, unions, tuple structs and unit structs are rejected with a compile
/// error pointing at the type name.
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
