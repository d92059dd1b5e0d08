//! Function values stored inside [`Value`](super::Value).

use std::fmt;
use std::sync::Arc;

use super::Value;

type SharedFunction = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// A shared function value.
///
/// Cloning a `Callable` shares the underlying function, so a model copied by
/// the path engine keeps calling the very same closure. Two callables are
/// equal only if they share the same function.
#[derive(Clone)]
pub struct Callable {
    function: SharedFunction,
}

impl Callable {
    /// Wraps a function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
        }
    }

    /// Invokes the function.
    pub fn call(&self, arguments: &[Value]) -> Value {
        (self.function)(arguments)
    }

    /// Returns `true` if both callables share the same function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.function, &other.function)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Callable").finish_non_exhaustive()
    }
}
