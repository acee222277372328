//! The traversal engine - ordered visitation for every collection shape.
//!
//! [`Traverse`] is the single source of truth for what order elements are
//! visited in: it walks the collection's [`SequenceView`] front to back and
//! hands each element's decomposed parts to the supplied action. Every
//! higher operation in this crate (filtering, counting, mapping, folding)
//! is built on this trait, which is why none of them ever inspect the
//! collection shape themselves.
//!
//! [`SequenceView`]: crate::collection::SequenceView
//!
//! # Examples
//!
//! ```rust
//! use enumars::prelude::*;
//!
//! let mut visited = Vec::new();
//! let sequence = vec![1, 2, 3]
//!     .for_each(Some(|element: i32| visited.push(element)))
//!     .unwrap();
//! assert_eq!(visited, vec![1, 2, 3]);
//!
//! // The collection comes back unchanged, enabling chaining.
//! assert_eq!(sequence, vec![1, 2, 3]);
//! ```

use crate::collection::Collection;
use crate::dispatch;
use crate::error::EnumerateError;

/// Ordered element visitation over any [`Collection`].
///
/// Implemented for every collection via a blanket impl; the per-shape work
/// all happens in [`Collection::view`] and [`Collection::decompose`].
///
/// # Element order
///
/// - Sequences are visited in index order `0..length`.
/// - Mappings are visited in insertion order.
///
/// Each element is visited exactly once per call.
pub trait Traverse: Collection {
    /// Invokes `action` once per element, in view order, passing the
    /// element's decomposed parts (the value itself for a sequence, the
    /// `(key, value)` tuple for a mapping).
    ///
    /// Returns the collection unchanged so calls can be chained.
    ///
    /// # Errors
    ///
    /// - [`EnumerateError::MissingCallable`] when `action` is `None`; the
    ///   traversal requires a step function, and the check is eager - an
    ///   empty collection with no action still fails.
    /// - [`EnumerateError::UnsupportedOperand`] when the operand cannot
    ///   produce a view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::prelude::*;
    /// use enumars::mapping;
    ///
    /// let mut seen = Vec::new();
    /// mapping! { "a" => 1, "b" => 2 }
    ///     .for_each(Some(|(key, value)| seen.push((key, value))))
    ///     .unwrap();
    /// assert_eq!(seen, vec![("a", 1), ("b", 2)]);
    /// ```
    fn for_each<F>(self, action: Option<F>) -> Result<Self, EnumerateError>
    where
        F: FnMut(Self::Parts),
    {
        let mut action = dispatch::require_callable(action, "for_each")?;
        for item in self.view()? {
            action(Self::decompose(item));
        }
        Ok(self)
    }

    /// Like [`for_each`](Traverse::for_each), additionally passing each
    /// element's zero-based position after its parts.
    ///
    /// # Errors
    ///
    /// Same as [`for_each`](Traverse::for_each).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::prelude::*;
    ///
    /// let mut weighted = Vec::new();
    /// vec![10, 20]
    ///     .for_each_indexed(Some(|element: i32, index| {
    ///         weighted.push(element + index as i32);
    ///     }))
    ///     .unwrap();
    /// assert_eq!(weighted, vec![10, 21]);
    /// ```
    fn for_each_indexed<F>(self, action: Option<F>) -> Result<Self, EnumerateError>
    where
        F: FnMut(Self::Parts, usize),
    {
        let mut action = dispatch::require_callable(action, "for_each_indexed")?;
        for (index, item) in self.view()?.into_iter().enumerate() {
            action(Self::decompose(item), index);
        }
        Ok(self)
    }
}

impl<C: Collection> Traverse for C {}
