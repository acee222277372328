//! Predicate filtering and the boolean reducers built on it.
//!
//! [`Filter::select`] is the shape-preserving filter: sequence input yields
//! a sequence, mapping input yields a fresh mapping re-keyed from the
//! surviving pairs. The boolean reducers `all`, `any`, and `none` are
//! defined directly in terms of `select`, the way the original operations
//! compose: `all` compares the filtered result against the input, `any`
//! checks it for emptiness, and `none` negates `any`.
//!
//! # Examples
//!
//! ```rust
//! use enumars::prelude::*;
//! use enumars::mapping;
//!
//! let even = vec![1, 2, 3, 4].select(Some(|element: i32| element % 2 == 0));
//! assert_eq!(even, Ok(vec![2, 4]));
//!
//! let big = mapping! { "a" => 1, "b" => 2 }.select(Some(|(_key, value)| value == 2));
//! assert_eq!(big, Ok(mapping! { "b" => 2 }));
//! ```

use crate::collection::FromElements;
use crate::dispatch;
use crate::error::EnumerateError;

use super::engine::Traverse;

/// Predicate filtering plus the boolean reducers derived from it.
pub trait Filter: Traverse {
    /// Retains the elements whose decomposed parts satisfy `predicate`,
    /// rebuilding the result in the input's shape.
    ///
    /// The filter is stable: surviving elements keep their original
    /// relative order.
    ///
    /// # Errors
    ///
    /// - [`EnumerateError::MissingCallable`] when `predicate` is `None`.
    /// - [`EnumerateError::UnsupportedOperand`] when the operand cannot
    ///   produce a view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::prelude::*;
    ///
    /// let kept = vec![1, 2, 3].select(Some(|element: i32| element < 3));
    /// assert_eq!(kept, Ok(vec![1, 2]));
    /// ```
    fn select<P>(&self, predicate: Option<P>) -> Result<Self, EnumerateError>
    where
        Self: FromElements,
        P: FnMut(Self::Parts) -> bool,
    {
        let mut predicate = dispatch::require_callable(predicate, "select")?;
        let mut survivors = Vec::new();
        for item in self.view()? {
            if predicate(Self::decompose(item.clone())) {
                survivors.push(item);
            }
        }
        Ok(Self::from_elements(survivors))
    }

    /// Returns whether every element satisfies `predicate`.
    ///
    /// Defined as: the filtered result equals the original collection.
    /// Empty collections vacuously satisfy any predicate.
    ///
    /// # Errors
    ///
    /// Same as [`select`](Filter::select).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::prelude::*;
    ///
    /// assert_eq!(vec![2, 4].all(Some(|element: i32| element % 2 == 0)), Ok(true));
    /// assert_eq!(Vec::<i32>::new().all(Some(|_element: i32| false)), Ok(true));
    /// ```
    fn all<P>(&self, predicate: Option<P>) -> Result<bool, EnumerateError>
    where
        Self: FromElements + PartialEq,
        P: FnMut(Self::Parts) -> bool,
    {
        Ok(self.select(predicate)? == *self)
    }

    /// Returns whether at least one element satisfies `predicate`.
    ///
    /// Defined as: the filtered result is non-empty.
    ///
    /// # Errors
    ///
    /// Same as [`select`](Filter::select).
    fn any<P>(&self, predicate: Option<P>) -> Result<bool, EnumerateError>
    where
        Self: FromElements,
        P: FnMut(Self::Parts) -> bool,
    {
        Ok(!self.select(predicate)?.view()?.is_empty())
    }

    /// Returns whether no element satisfies `predicate`.
    ///
    /// # Errors
    ///
    /// Same as [`select`](Filter::select).
    fn none<P>(&self, predicate: Option<P>) -> Result<bool, EnumerateError>
    where
        Self: FromElements,
        P: FnMut(Self::Parts) -> bool,
    {
        self.any(predicate).map(|found| !found)
    }
}

impl<C: Traverse> Filter for C {}
