//! Folding a collection into a single value.
//!
//! One logical operation, two call modes, two entry points:
//!
//! - [`Fold::reduce`] seeds the accumulator from the first element and folds
//!   the rest. The accumulator has the element's type; for a mapping both
//!   the accumulator and each subsequent element arrive as raw [`Pair`]s,
//!   with no decomposition.
//! - [`Fold::inject`] takes an explicit initial accumulator (exactly one)
//!   and folds every element, decomposed, into it. The accumulator type is
//!   free.
//!
//! The modes split because the seeded accumulator *is* an element: one
//! statically-typed signature covering both would force an
//! element-to-accumulator conversion on every caller.
//!
//! [`Pair`]: crate::collection::Pair
//!
//! # Examples
//!
//! ```rust
//! use enumars::prelude::*;
//!
//! let sum = vec![1, 2].reduce(Some(|accumulator, element| accumulator + element));
//! assert_eq!(sum, Ok(Some(3)));
//!
//! let product = vec![2, 2, 3].inject(vec![1], Some(|product, n| product * n));
//! assert_eq!(product, Ok(12));
//! ```

use crate::dispatch;
use crate::error::EnumerateError;

use super::engine::Traverse;

/// Reduction over any traversable collection.
pub trait Fold: Traverse {
    /// Folds the elements together, seeding the accumulator from the first
    /// element in traversal order.
    ///
    /// `step` runs once per *remaining* element. An empty collection yields
    /// `Ok(None)` without ever invoking `step`.
    ///
    /// # Errors
    ///
    /// - [`EnumerateError::MissingCallable`] when `step` is `None`.
    /// - [`EnumerateError::UnsupportedOperand`] when the operand cannot
    ///   produce a view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::prelude::*;
    ///
    /// assert_eq!(
    ///     Vec::<i32>::new().reduce(Some(|accumulator, element| accumulator + element)),
    ///     Ok(None)
    /// );
    /// ```
    fn reduce<F>(&self, step: Option<F>) -> Result<Option<Self::Item>, EnumerateError>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut step = dispatch::require_callable(step, "reduce")?;
        let mut elements = self.view()?.into_iter();
        let Some(seed) = elements.next() else {
            return Ok(None);
        };

        let mut accumulator = seed;
        for element in elements {
            accumulator = step(accumulator, element);
        }
        Ok(Some(accumulator))
    }

    /// Folds every element, decomposed, into an explicit initial
    /// accumulator.
    ///
    /// Exactly one initial must be supplied; the `Vec` parameter exists so
    /// wrong-arity calls surface as [`EnumerateError::InvalidArgumentCount`]
    /// rather than being unrepresentable. An empty collection returns the
    /// initial unchanged.
    ///
    /// # Errors
    ///
    /// - [`EnumerateError::InvalidArgumentCount`] when zero or two-plus
    ///   initials are supplied (the zero-initial call shape is
    ///   [`reduce`](Fold::reduce)).
    /// - [`EnumerateError::MissingCallable`] when `step` is `None`.
    /// - [`EnumerateError::UnsupportedOperand`] when the operand cannot
    ///   produce a view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::prelude::*;
    /// use enumars::mapping;
    ///
    /// let total = mapping! { "a" => 1, "b" => 2 }
    ///     .inject(vec![0], Some(|sum, (_key, value)| sum + value));
    /// assert_eq!(total, Ok(3));
    /// ```
    fn inject<A, F>(&self, initials: Vec<A>, step: Option<F>) -> Result<A, EnumerateError>
    where
        F: FnMut(A, Self::Parts) -> A,
    {
        let initial = dispatch::exactly_one(initials, "inject")?;
        let mut step = dispatch::require_callable(step, "inject")?;

        let mut accumulator = initial;
        for item in self.view()? {
            accumulator = step(accumulator, Self::decompose(item));
        }
        Ok(accumulator)
    }
}

impl<C: Traverse> Fold for C {}
