//! Error types for wrapkit

use std::fmt;

/// Result type alias for wrapkit helpers
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the value model and adapter configuration.
///
/// The adapters themselves never produce these on the call path: a wrapped
/// function's own error type is passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Delay is negative, NaN or infinite
    InvalidWait(f64),

    /// Positional index or keyword not supplied
    MissingArgument(String),

    /// Value could not be extracted as the requested type
    TypeMismatch {
        /// Requested type name
        expected: &'static str,
        /// Repr of the value that was found
        found: String,
    },

    /// Operator not defined for the operand types
    UnsupportedOperand {
        /// Operator symbol
        op: &'static str,
        /// Type name of the left operand
        left: &'static str,
        /// Type name of the right operand
        right: &'static str,
    },

    /// Integer result does not fit in 64 bits
    Overflow {
        /// Operator symbol
        op: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidWait(secs) => {
                write!(f, "Invalid wait: {} seconds (must be finite and >= 0)", secs)
            }
            Error::MissingArgument(name) => write!(f, "Missing argument: {}", name),
            Error::TypeMismatch { expected, found } => {
                write!(f, "Type mismatch: expected {}, found {}", expected, found)
            }
            Error::UnsupportedOperand { op, left, right } => write!(
                f,
                "Unsupported operand type(s) for {}: '{}' and '{}'",
                op, left, right
            ),
            Error::Overflow { op } => write!(f, "Integer overflow in {}", op),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::MissingArgument("c".to_string()).to_string(),
            "Missing argument: c"
        );
        assert_eq!(
            Error::UnsupportedOperand { op: "+", left: "int", right: "str" }.to_string(),
            "Unsupported operand type(s) for +: 'int' and 'str'"
        );
    }
}
