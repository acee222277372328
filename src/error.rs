//! Error types for traversal and reduction operations.
//!
//! This module provides the error type shared by every operation in the
//! crate. All variants represent caller-contract violations that are
//! detected eagerly, before any element of the input collection is visited.

/// Represents a contract violation detected at the entry of an operation.
///
/// None of these errors are recoverable by retrying: each one means the
/// call site supplied the wrong combination of arguments, or an operand
/// that cannot be traversed at all.
///
/// # Examples
///
/// ```rust
/// use enumars::error::EnumerateError;
///
/// let error = EnumerateError::MissingCallable { operation: "select" };
/// assert_eq!(format!("{}", error), "select: no block given");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumerateError {
    /// A required predicate, transform, or step callable was not supplied.
    MissingCallable {
        /// The name of the operation that required the callable.
        operation: &'static str,
    },
    /// More (or fewer) positional values were supplied than the operation's
    /// contract allows, e.g. two counting targets or two initial
    /// accumulators.
    InvalidArgumentCount {
        /// The name of the operation that rejected the arguments.
        operation: &'static str,
        /// How many positional values were supplied.
        given: usize,
        /// How many the operation accepts.
        expected: usize,
    },
    /// The operand exposes neither positional length nor key enumeration,
    /// so there is no order in which to visit its elements.
    UnsupportedOperand {
        /// The type name of the operand, as reported by
        /// [`std::any::type_name`].
        type_name: &'static str,
    },
}

impl std::fmt::Display for EnumerateError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCallable { operation } => {
                write!(formatter, "{operation}: no block given")
            }
            Self::InvalidArgumentCount {
                operation,
                given,
                expected,
            } => {
                write!(
                    formatter,
                    "{operation}: wrong number of arguments (given {given}, expected {expected})"
                )
            }
            Self::UnsupportedOperand { type_name } => {
                write!(
                    formatter,
                    "{type_name} exposes neither positional length nor key enumeration"
                )
            }
        }
    }
}

impl std::error::Error for EnumerateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_callable_display() {
        let error = EnumerateError::MissingCallable {
            operation: "for_each",
        };
        assert_eq!(format!("{error}"), "for_each: no block given");
    }

    #[test]
    fn test_invalid_argument_count_display() {
        let error = EnumerateError::InvalidArgumentCount {
            operation: "count",
            given: 3,
            expected: 1,
        };
        assert_eq!(
            format!("{error}"),
            "count: wrong number of arguments (given 3, expected 1)"
        );
    }

    #[test]
    fn test_unsupported_operand_display() {
        let error = EnumerateError::UnsupportedOperand { type_name: "i32" };
        assert_eq!(
            format!("{error}"),
            "i32 exposes neither positional length nor key enumeration"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        let left = EnumerateError::MissingCallable { operation: "select" };
        let right = EnumerateError::MissingCallable { operation: "select" };
        assert_eq!(left, right);

        let other = EnumerateError::MissingCallable { operation: "reduce" };
        assert_ne!(left, other);
    }
}
