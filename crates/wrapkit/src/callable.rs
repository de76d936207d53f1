//! The calling convention shared by plain functions and every wrapper

use std::fmt;

use crate::args::Args;
use crate::value::Value;

/// A named function over [`Args`]
///
/// Wrappers implement this trait too and report the name of the function
/// they wrap, so adapters compose in any order.
pub trait Callable {
    /// Error produced by the function; wrappers pass it through unchanged
    type Error;

    /// Name of the underlying function
    fn name(&self) -> &str;

    /// Invoke with the given arguments
    fn call(&self, args: &Args) -> Result<Value, Self::Error>;
}

impl<C: Callable + ?Sized> Callable for &C {
    type Error = C::Error;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn call(&self, args: &Args) -> Result<Value, Self::Error> {
        (**self).call(args)
    }
}

impl<C: Callable + ?Sized> Callable for Box<C> {
    type Error = C::Error;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn call(&self, args: &Args) -> Result<Value, Self::Error> {
        (**self).call(args)
    }
}

/// A closure paired with a name
pub struct NamedFn<F> {
    name: String,
    f: F,
}

impl<F, E> NamedFn<F>
where
    F: Fn(&Args) -> Result<Value, E>,
{
    /// Name a closure
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F, E> Callable for NamedFn<F>
where
    F: Fn(&Args) -> Result<Value, E>,
{
    type Error = E;

    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, args: &Args) -> Result<Value, E> {
        (self.f)(args)
    }
}

impl<F> fmt::Debug for NamedFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedFn").field("name", &self.name).finish()
    }
}

/// Shorthand for [`NamedFn::new`]
pub fn named<F, E>(name: impl Into<String>, f: F) -> NamedFn<F>
where
    F: Fn(&Args) -> Result<Value, E>,
{
    NamedFn::new(name, f)
}
