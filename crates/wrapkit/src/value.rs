//! Dynamic values passed to and returned from wrapped functions
//!
//! `repr()` is the debug representation that call-signature keys and the
//! debugger's log lines are built from. It must stay stable: two values with
//! the same repr are "the same argument" as far as the cacher is concerned.

use std::fmt::{self, Write};

use crate::error::{Error, Result};

/// A dynamically typed argument or result
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value
    #[default]
    None,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Double precision float
    Float(f64),
    /// Text
    Str(String),
    /// Fixed-size ordered group of values
    Tuple(Vec<Value>),
    /// Growable ordered sequence of values
    List(Vec<Value>),
}

impl Value {
    /// Type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Tuple(_) => "tuple",
            Value::List(_) => "list",
        }
    }

    /// Debug representation of this value
    pub fn repr(&self) -> String {
        let mut out = String::new();
        self.write_repr(&mut out);
        out
    }

    fn write_repr(&self, out: &mut String) {
        match self {
            Value::None => out.push_str("None"),
            Value::Bool(true) => out.push_str("True"),
            Value::Bool(false) => out.push_str("False"),
            Value::Int(i) => {
                let _ = write!(out, "{}", i);
            }
            Value::Float(x) => out.push_str(&float_repr(*x)),
            Value::Str(s) => out.push_str(&str_repr(s)),
            Value::Tuple(items) => {
                out.push('(');
                write_items(items, out);
                if items.len() == 1 {
                    out.push(',');
                }
                out.push(')');
            }
            Value::List(items) => {
                out.push('[');
                write_items(items, out);
                out.push(']');
            }
        }
    }

    /// Returns true for `Value::None`
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns the elements if this is a tuple
    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// `+` with dynamic-language semantics
    ///
    /// Numbers add (bools count as 0/1, any float operand makes a float),
    /// strings, tuples and lists concatenate with their own kind.
    pub fn add(&self, other: &Value) -> Result<Value> {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", a, b))),
            (Value::Tuple(a), Value::Tuple(b)) => Ok(Value::Tuple(concat(a, b))),
            (Value::List(a), Value::List(b)) => Ok(Value::List(concat(a, b))),
            _ => match (self.as_number(), other.as_number()) {
                (Some(Number::Int(a)), Some(Number::Int(b))) => a
                    .checked_add(b)
                    .map(Value::Int)
                    .ok_or(Error::Overflow { op: "+" }),
                (Some(a), Some(b)) => Ok(Value::Float(a.to_f64() + b.to_f64())),
                _ => Err(Error::UnsupportedOperand {
                    op: "+",
                    left: self.type_name(),
                    right: other.type_name(),
                }),
            },
        }
    }

    fn as_number(&self) -> Option<Number> {
        match self {
            Value::Bool(b) => Some(Number::Int(i64::from(*b))),
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(x) => Some(Number::Float(*x)),
            _ => None,
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            expected,
            found: self.repr(),
        }
    }
}

#[derive(Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn to_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(x) => x,
        }
    }
}

fn concat(a: &[Value], b: &[Value]) -> Vec<Value> {
    a.iter().chain(b).cloned().collect()
}

fn write_items(items: &[Value], out: &mut String) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        item.write_repr(out);
    }
}

/// Shortest round-trip digits; scientific outside `1e-4 <= |x| < 1e16`.
fn float_repr(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sci = format!("{:e}", x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if x != 0.0 && !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exp.abs());
    }

    let mut plain = format!("{}", x);
    if !plain.contains('.') {
        plain.push_str(".0");
    }
    plain
}

fn str_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || (0x7f..=0x9f).contains(&(c as u32)) => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::None
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Value::Int(i64::from(i))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((a, b): (A, B)) -> Self {
        Value::Tuple(vec![a.into(), b.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> From<(A, B, C)> for Value {
    fn from((a, b, c): (A, B, C)) -> Self {
        Value::Tuple(vec![a.into(), b.into(), c.into()])
    }
}

impl TryFrom<&Value> for i64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Int(i) => Ok(*i),
            Value::Bool(b) => Ok(i64::from(*b)),
            other => Err(other.mismatch("int")),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Float(x) => Ok(*x),
            Value::Int(i) => Ok(*i as f64),
            other => Err(other.mismatch("float")),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("bool")),
        }
    }
}

impl TryFrom<&Value> for String {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Str(s) => Ok(s.clone()),
            other => Err(other.mismatch("str")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repr_scalars() {
        assert_eq!(Value::None.repr(), "None");
        assert_eq!(Value::Bool(true).repr(), "True");
        assert_eq!(Value::Bool(false).repr(), "False");
        assert_eq!(Value::Int(-42).repr(), "-42");
    }

    #[test]
    fn test_repr_floats() {
        assert_eq!(Value::Float(1.0).repr(), "1.0");
        assert_eq!(Value::Float(0.1).repr(), "0.1");
        assert_eq!(Value::Float(-2.5).repr(), "-2.5");
        assert_eq!(Value::Float(0.0001).repr(), "0.0001");
        assert_eq!(Value::Float(1e-5).repr(), "1e-05");
        assert_eq!(Value::Float(1.5e-7).repr(), "1.5e-07");
        assert_eq!(Value::Float(1e15).repr(), "1000000000000000.0");
        assert_eq!(Value::Float(1e16).repr(), "1e+16");
        assert_eq!(Value::Float(f64::NAN).repr(), "nan");
        assert_eq!(Value::Float(f64::NEG_INFINITY).repr(), "-inf");
    }

    #[test]
    fn test_repr_strings() {
        assert_eq!(Value::from("abc").repr(), "'abc'");
        assert_eq!(Value::from("it's").repr(), "\"it's\"");
        assert_eq!(Value::from("both ' and \"").repr(), "'both \\' and \"'");
        assert_eq!(Value::from("a\nb\\").repr(), "'a\\nb\\\\'");
        assert_eq!(Value::from("\u{1}").repr(), "'\\x01'");
        assert_eq!(Value::from("héllo").repr(), "'héllo'");
    }

    #[test]
    fn test_repr_sequences() {
        assert_eq!(Value::Tuple(vec![]).repr(), "()");
        assert_eq!(Value::Tuple(vec![Value::Int(1)]).repr(), "(1,)");
        assert_eq!(Value::from((1, "x")).repr(), "(1, 'x')");
        assert_eq!(Value::from(vec![1, 2, 3]).repr(), "[1, 2, 3]");
        assert_eq!(
            Value::List(vec![Value::from((1, 2)), Value::None]).repr(),
            "[(1, 2), None]"
        );
    }

    #[test]
    fn test_add() {
        assert_eq!(Value::Int(2).add(&Value::Int(1)), Ok(Value::Int(3)));
        assert_eq!(Value::Int(1).add(&Value::Float(0.5)), Ok(Value::Float(1.5)));
        assert_eq!(Value::Bool(true).add(&Value::Int(1)), Ok(Value::Int(2)));
        assert_eq!(Value::from("a").add(&Value::from("b")), Ok(Value::from("ab")));
        assert_eq!(
            Value::from(vec![1]).add(&Value::from(vec![2])),
            Ok(Value::from(vec![1, 2]))
        );
    }

    #[test]
    fn test_add_errors() {
        assert_eq!(
            Value::Int(1).add(&Value::from("a")),
            Err(Error::UnsupportedOperand { op: "+", left: "int", right: "str" })
        );
        assert_eq!(
            Value::Int(i64::MAX).add(&Value::Int(1)),
            Err(Error::Overflow { op: "+" })
        );
    }

    #[test]
    fn test_try_from() {
        assert_eq!(i64::try_from(&Value::Int(7)), Ok(7));
        assert_eq!(f64::try_from(&Value::Int(7)), Ok(7.0));
        assert_eq!(String::try_from(&Value::from("s")), Ok("s".to_string()));
        assert_eq!(
            i64::try_from(&Value::from("7")),
            Err(Error::TypeMismatch { expected: "int", found: "'7'".to_string() })
        );
    }
}
