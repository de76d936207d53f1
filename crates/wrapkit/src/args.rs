//! Argument lists and call-signature keys
//!
//! A call is an ordered list of positional values plus an insertion-ordered
//! list of keyword values. The signature key joins the positional reprs and
//! the `name=repr` keywords with `", "`, so keyword order is part of the key.

use crate::error::{Error, Result};
use crate::value::Value;

/// Arguments for one call of a wrapped function
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl Args {
    /// Create an empty argument list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword argument
    ///
    /// Re-using a name replaces the earlier value but keeps its position.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.named.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.named.push((name, value)),
        }
        self
    }

    /// Positional arguments in call order
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Keyword arguments in insertion order
    pub fn named(&self) -> &[(String, Value)] {
        &self.named
    }

    /// Positional argument at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Keyword argument called `name`
    pub fn get_named(&self, name: &str) -> Option<&Value> {
        self.named
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Positional argument at `index`, or `Error::MissingArgument`
    pub fn require(&self, index: usize) -> Result<&Value> {
        self.get(index)
            .ok_or_else(|| Error::MissingArgument(format!("positional #{}", index)))
    }

    /// Keyword argument called `name`, or `Error::MissingArgument`
    pub fn require_named(&self, name: &str) -> Result<&Value> {
        self.get_named(name)
            .ok_or_else(|| Error::MissingArgument(name.to_string()))
    }

    /// Total number of arguments
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Check if no arguments were supplied
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Build the call-signature key, e.g. `0, 1, c=1, d=2`
    pub fn signature(&self) -> String {
        let unnamed = self.positional.iter().map(Value::repr);
        let named = self
            .named
            .iter()
            .map(|(name, value)| format!("{}={}", name, value.repr()));
        unnamed.chain(named).collect::<Vec<_>>().join(", ")
    }
}

/// Build an [`Args`] from positional values and `name = value` keywords.
///
/// ```
/// use wrapkit::args;
///
/// let call = args![0, 1; c = 1, d = 2];
/// assert_eq!(call.signature(), "0, 1, c=1, d=2");
/// assert_eq!(args![; key = "v"].signature(), "key='v'");
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($pos:expr),* ; $($name:ident = $val:expr),* $(,)?) => {
        $crate::Args::new()
            $(.arg($pos))*
            $(.kwarg(stringify!($name), $val))*
    };
    ($($pos:expr),+ $(,)?) => {
        $crate::Args::new()$(.arg($pos))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_positional_and_named() {
        let call = Args::new().arg(0).arg(1).kwarg("c", 1).kwarg("d", 2);
        assert_eq!(call.signature(), "0, 1, c=1, d=2");
    }

    #[test]
    fn test_signature_uses_repr() {
        let call = Args::new().arg("a").arg(1.0).kwarg("flag", true).kwarg("t", (1, 2));
        assert_eq!(call.signature(), "'a', 1.0, flag=True, t=(1, 2)");
    }

    #[test]
    fn test_signature_empty() {
        assert_eq!(Args::new().signature(), "");
        assert!(Args::new().is_empty());
    }

    #[test]
    fn test_keyword_order_changes_key() {
        let ab = Args::new().kwarg("a", 1).kwarg("b", 2);
        let ba = Args::new().kwarg("b", 2).kwarg("a", 1);
        assert_ne!(ab.signature(), ba.signature());
    }

    #[test]
    fn test_positional_and_keyword_keys_differ() {
        let positional = Args::new().arg(1).arg(2);
        let keyword = Args::new().arg(1).kwarg("b", 2);
        assert_ne!(positional.signature(), keyword.signature());
    }

    #[test]
    fn test_kwarg_replaces_in_place() {
        let call = Args::new().kwarg("a", 1).kwarg("b", 2).kwarg("a", 3);
        assert_eq!(call.signature(), "a=3, b=2");
        assert_eq!(call.len(), 2);
    }

    #[test]
    fn test_accessors() {
        let call = args![10, "x"; scale = 2.5];
        assert_eq!(call.get(0), Some(&Value::Int(10)));
        assert_eq!(call.get_named("scale"), Some(&Value::Float(2.5)));
        assert_eq!(call.get(2), None);
        assert_eq!(
            call.require(5),
            Err(Error::MissingArgument("positional #5".to_string()))
        );
        assert_eq!(
            call.require_named("missing"),
            Err(Error::MissingArgument("missing".to_string()))
        );
    }

    #[test]
    fn test_macro_forms() {
        assert!(args![].is_empty());
        assert_eq!(args![1, 2].signature(), "1, 2");
        assert_eq!(args![1, 2,].signature(), "1, 2");
        assert_eq!(args![; c = 3].signature(), "c=3");
        assert_eq!(args![1; c = 3, d = 4].signature(), "1, c=3, d=4");
    }
}
