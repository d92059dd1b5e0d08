//! # pathlens
//!
//! Composable lenses for reading and immutably updating values nested inside
//! larger data structures.
//!
//! ## Overview
//!
//! - **Values**: [`Value`](value::Value), a closed variant of scalars,
//!   shared sequences, shared mappings and function values.
//! - **Paths**: [`Path`](path::Path) and the copy-on-write path engine
//!   ([`get_path`](path::get_path), [`set_path`](path::set_path)).
//! - **Optics**: the [`Lens`](optics::Lens) trait, lenses built from
//!   functions or paths, parameterized lenses and composition.
//!
//! ## Feature Flags
//!
//! - `derive`: `#[derive(Lenses)]` for typed struct fields (default)
//! - `serde`: `Serialize`/`Deserialize` for values and paths
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pathlens::prelude::*;
//!
//! let model = value!({ "bar": { "array": [1, 2, 3] } });
//!
//! let first = compose!(from_path("bar.array")?, from_path(0_usize)?);
//! assert_eq!(first.view(&model), Value::from(1));
//!
//! let updated = first.put(model.clone(), Value::from("x"));
//! assert_eq!(first.view(&model), Value::from(1));
//! assert_eq!(first.view(&updated), Value::from("x"));
//! # Ok::<(), pathlens::path::PathError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits, functions and macros.
///
/// # Usage
///
/// ```rust
/// use pathlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optics::*;
    pub use crate::path::*;
    pub use crate::value::*;

    pub use crate::{args, compose, lens, lens_accessors, value};

    #[cfg(feature = "derive")]
    pub use pathlens_derive::Lenses;
}

pub mod optics;
pub mod path;
pub mod value;

#[cfg(feature = "derive")]
pub use pathlens_derive::Lenses;

#[doc(hidden)]
pub use paste;
