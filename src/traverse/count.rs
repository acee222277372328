//! Element counting with target/predicate/bare dispatch.
//!
//! [`Count::count`] supports three mutually exclusive call shapes, resolved
//! by one exhaustive match over the validated arguments:
//!
//! 1. one target value - count elements structurally equal to it;
//! 2. a predicate - count elements whose parts satisfy it;
//! 3. neither - return the total element count.
//!
//! Supplying a target *and* a predicate is not an error: the target wins,
//! the predicate is ignored, and one diagnostic warning is emitted with the
//! exact text [`GIVEN_BLOCK_NOT_USED`]. Supplying two or more targets is a
//! wrong-arity call.
//!
//! [`GIVEN_BLOCK_NOT_USED`]: crate::diagnostics::GIVEN_BLOCK_NOT_USED
//!
//! # Examples
//!
//! ```rust
//! use enumars::prelude::*;
//!
//! let sequence = vec![1, 2, 1];
//! assert_eq!(sequence.count(vec![1], None::<fn(i32) -> bool>), Ok(2));
//! assert_eq!(sequence.count(vec![], Some(|element: i32| element > 1)), Ok(1));
//! assert_eq!(sequence.count(vec![], None::<fn(i32) -> bool>), Ok(3));
//! ```

use crate::diagnostics::{ConsoleDiagnostics, DiagnosticSink, GIVEN_BLOCK_NOT_USED};
use crate::dispatch::{self, Supplied};
use crate::error::EnumerateError;

use super::engine::Traverse;

/// Counting over any traversable collection.
pub trait Count: Traverse {
    /// Counts elements, dispatching on the supplied target and predicate.
    ///
    /// Diagnostic warnings go to standard output; use
    /// [`count_with_sink`](Count::count_with_sink) to capture them.
    ///
    /// # Errors
    ///
    /// - [`EnumerateError::InvalidArgumentCount`] when two or more targets
    ///   are supplied.
    /// - [`EnumerateError::UnsupportedOperand`] when the operand cannot
    ///   produce a view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::prelude::*;
    /// use enumars::collection::Pair;
    /// use enumars::mapping;
    ///
    /// // A mapping target is a candidate pair.
    /// let mapping = mapping! { "a" => 1, "b" => 2 };
    /// assert_eq!(
    ///     mapping.count(vec![Pair::new("a", 1)], None::<fn((&str, i32)) -> bool>),
    ///     Ok(1)
    /// );
    /// ```
    fn count<P>(
        &self,
        targets: Vec<Self::Item>,
        predicate: Option<P>,
    ) -> Result<usize, EnumerateError>
    where
        Self::Item: PartialEq,
        P: FnMut(Self::Parts) -> bool,
    {
        self.count_with_sink(targets, predicate, &mut ConsoleDiagnostics)
    }

    /// The same operation with an explicit destination for the
    /// target-takes-precedence warning.
    ///
    /// # Errors
    ///
    /// Same as [`count`](Count::count).
    fn count_with_sink<P, S>(
        &self,
        targets: Vec<Self::Item>,
        predicate: Option<P>,
        sink: &mut S,
    ) -> Result<usize, EnumerateError>
    where
        Self::Item: PartialEq,
        P: FnMut(Self::Parts) -> bool,
        S: DiagnosticSink,
    {
        let target = dispatch::at_most_one(targets, "count")?;
        match (target, predicate) {
            (Supplied::One(target), predicate) => {
                if predicate.is_some() {
                    sink.warn(GIVEN_BLOCK_NOT_USED);
                }
                Ok(self
                    .view()?
                    .into_iter()
                    .filter(|item| *item == target)
                    .count())
            }
            (Supplied::Absent, Some(mut predicate)) => {
                let mut total = 0;
                for item in self.view()? {
                    if predicate(Self::decompose(item)) {
                        total += 1;
                    }
                }
                Ok(total)
            }
            (Supplied::Absent, None) => Ok(self.view()?.len()),
        }
    }
}

impl<C: Traverse> Count for C {}
