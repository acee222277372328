//! Entry validation for variadic and optional arguments.
//!
//! Every operation in this crate accepts its "action" parameters the same
//! way: zero-or-more positional values arrive as a `Vec`, and an optional
//! callable arrives as an `Option`. This module is the single place where
//! those raw parameters are checked against an operation's contract and
//! converted into validated forms, so the traversal code downstream never
//! has to reason about arity again.
//!
//! Validation always happens before the first element of a collection is
//! visited.
//!
//! # Examples
//!
//! ```rust
//! use enumars::dispatch::{self, Supplied};
//!
//! assert_eq!(dispatch::at_most_one(Vec::<i32>::new(), "count"), Ok(Supplied::Absent));
//! assert_eq!(dispatch::at_most_one(vec![7], "count"), Ok(Supplied::One(7)));
//! assert!(dispatch::at_most_one(vec![1, 2], "count").is_err());
//! ```

use crate::error::EnumerateError;

/// The validated form of a zero-or-one positional argument.
///
/// This is the tagged-option type that the dispatch layer produces from a
/// raw `Vec` of positional values: either nothing was supplied, or exactly
/// one value was.
///
/// # Examples
///
/// ```rust
/// use enumars::dispatch::Supplied;
///
/// let target: Supplied<i32> = Supplied::One(3);
/// assert!(!target.is_absent());
/// assert_eq!(target.into_option(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Supplied<T> {
    /// No value was supplied.
    Absent,
    /// Exactly one value was supplied.
    One(T),
}

impl<T> Supplied<T> {
    /// Returns whether no value was supplied.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Converts into a plain [`Option`].
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Absent => None,
            Self::One(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Supplied<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::One)
    }
}

/// Validates that at most one positional value was supplied.
///
/// # Errors
///
/// Returns [`EnumerateError::InvalidArgumentCount`] when two or more values
/// were supplied.
///
/// # Examples
///
/// ```rust
/// use enumars::dispatch::{self, Supplied};
///
/// assert_eq!(dispatch::at_most_one(vec!["x"], "count"), Ok(Supplied::One("x")));
/// ```
pub fn at_most_one<T>(
    mut values: Vec<T>,
    operation: &'static str,
) -> Result<Supplied<T>, EnumerateError> {
    match values.len() {
        0 => Ok(Supplied::Absent),
        1 => Ok(Supplied::One(values.remove(0))),
        given => Err(EnumerateError::InvalidArgumentCount {
            operation,
            given,
            expected: 1,
        }),
    }
}

/// Validates that exactly one positional value was supplied.
///
/// # Errors
///
/// Returns [`EnumerateError::InvalidArgumentCount`] when the number of
/// supplied values is anything other than one.
///
/// # Examples
///
/// ```rust
/// use enumars::dispatch;
///
/// assert_eq!(dispatch::exactly_one(vec![2], "inject"), Ok(2));
/// assert!(dispatch::exactly_one(Vec::<i32>::new(), "inject").is_err());
/// ```
pub fn exactly_one<T>(
    mut values: Vec<T>,
    operation: &'static str,
) -> Result<T, EnumerateError> {
    if values.len() == 1 {
        Ok(values.remove(0))
    } else {
        Err(EnumerateError::InvalidArgumentCount {
            operation,
            given: values.len(),
            expected: 1,
        })
    }
}

/// Validates that a required callable was supplied.
///
/// # Errors
///
/// Returns [`EnumerateError::MissingCallable`] when the callable is absent.
///
/// # Examples
///
/// ```rust
/// use enumars::dispatch;
///
/// let action = Some(|element: i32| element + 1);
/// assert!(dispatch::require_callable(action, "for_each").is_ok());
/// assert!(dispatch::require_callable(None::<fn(i32)>, "for_each").is_err());
/// ```
pub fn require_callable<F>(
    callable: Option<F>,
    operation: &'static str,
) -> Result<F, EnumerateError> {
    callable.ok_or(EnumerateError::MissingCallable { operation })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_at_most_one_absent() {
        assert_eq!(
            at_most_one(Vec::<i32>::new(), "count"),
            Ok(Supplied::Absent)
        );
    }

    #[rstest]
    fn test_at_most_one_single() {
        assert_eq!(at_most_one(vec![5], "count"), Ok(Supplied::One(5)));
    }

    #[rstest]
    #[case(vec![1, 2], 2)]
    #[case(vec![1, 2, 3], 3)]
    fn test_at_most_one_rejects_multiple(#[case] values: Vec<i32>, #[case] given: usize) {
        assert_eq!(
            at_most_one(values, "count"),
            Err(EnumerateError::InvalidArgumentCount {
                operation: "count",
                given,
                expected: 1,
            })
        );
    }

    #[rstest]
    fn test_exactly_one_accepts_single() {
        assert_eq!(exactly_one(vec!["initial"], "inject"), Ok("initial"));
    }

    #[rstest]
    #[case(Vec::new(), 0)]
    #[case(vec![1, 2], 2)]
    fn test_exactly_one_rejects_other_counts(#[case] values: Vec<i32>, #[case] given: usize) {
        assert_eq!(
            exactly_one(values, "inject"),
            Err(EnumerateError::InvalidArgumentCount {
                operation: "inject",
                given,
                expected: 1,
            })
        );
    }

    #[rstest]
    fn test_require_callable_present() {
        let doubled = require_callable(Some(|value: i32| value * 2), "map").map(|f| f(4));
        assert_eq!(doubled, Ok(8));
    }

    #[rstest]
    fn test_require_callable_absent() {
        assert_eq!(
            require_callable(None::<fn(i32) -> i32>, "map"),
            Err(EnumerateError::MissingCallable { operation: "map" })
        );
    }

    #[rstest]
    fn test_supplied_from_option() {
        assert_eq!(Supplied::from(Some(1)), Supplied::One(1));
        assert_eq!(Supplied::<i32>::from(None), Supplied::Absent);
    }
}
