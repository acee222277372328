//! The sequence view - one ordered presentation for every collection shape.
//!
//! Traversal code in this crate never branches on whether its input is a
//! sequence or a mapping. Instead, every collection produces a
//! [`SequenceView`]: an ordered snapshot of its logical items (raw values
//! for a sequence, [`Pair`]s for a mapping). The [`Collection`] trait is the
//! capability that produces the view, and [`FromElements`] is the inverse
//! capability used by shape-preserving operations to rebuild an output in
//! the input's shape.
//!
//! The view is where element order is decided, once: positional order for
//! sequences, insertion order for mappings. Everything downstream inherits
//! that guarantee.
//!
//! # Examples
//!
//! ```rust
//! use enumars::collection::{Collection, Pair};
//! use enumars::mapping;
//!
//! let view = vec![10, 20].view().unwrap();
//! assert_eq!(view.into_elements(), vec![10, 20]);
//!
//! let mapping = mapping! { "a" => 1, "b" => 2 };
//! let view = mapping.view().unwrap();
//! assert_eq!(
//!     view.into_elements(),
//!     vec![Pair::new("a", 1), Pair::new("b", 2)]
//! );
//! ```

use crate::error::EnumerateError;

use super::mapping::Mapping;
use super::pair::Pair;
use super::scalar::Scalar;

/// An ordered snapshot of a collection's logical items.
///
/// Produced by [`Collection::view`]; consumed by the traversal engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceView<T> {
    elements: Vec<T>,
}

impl<T> SequenceView<T> {
    /// Creates a view from already-ordered elements.
    #[must_use]
    pub const fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Returns the number of elements in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the view has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements, in view order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Unwraps the view into its ordered elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }
}

impl<T> IntoIterator for SequenceView<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SequenceView<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The capability of producing an ordered view of logical items.
///
/// This is the crate's closed notion of "collection": sequences ([`Vec`]),
/// mappings ([`Mapping`]), and the deliberately failing [`Scalar`]. Shape
/// detection happens here, at the boundary, exactly once.
///
/// # Associated Types
///
/// - `Item`: the element as stored in the view - the raw value for a
///   sequence, a [`Pair`] for a mapping.
/// - `Parts`: the element as presented to actions - the value itself for a
///   sequence, the decomposed `(key, value)` tuple for a mapping, so mapping
///   consumers write `|(key, value)| ...` with native tuple ergonomics.
pub trait Collection: Sized {
    /// The element type of the ordered view.
    type Item: Clone;

    /// The decomposed form passed to actions.
    type Parts;

    /// Produces the ordered view of this collection's items.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerateError::UnsupportedOperand`] when the operand
    /// exposes neither positional length nor key enumeration.
    fn view(&self) -> Result<SequenceView<Self::Item>, EnumerateError>;

    /// Decomposes one item into the form an action receives.
    fn decompose(item: Self::Item) -> Self::Parts;
}

/// The capability of rebuilding a collection from surviving items.
///
/// Shape-preserving operations such as `select` use this to return a
/// sequence for sequence input and a freshly re-keyed mapping for mapping
/// input. [`Scalar`] deliberately lacks this capability.
pub trait FromElements: Collection {
    /// Reconstructs a collection of this shape from ordered items.
    fn from_elements(elements: Vec<Self::Item>) -> Self;
}

// =============================================================================
// Sequence: Vec
// =============================================================================

impl<T: Clone> Collection for Vec<T> {
    type Item = T;
    type Parts = T;

    fn view(&self) -> Result<SequenceView<T>, EnumerateError> {
        Ok(SequenceView::new(self.clone()))
    }

    fn decompose(item: T) -> T {
        item
    }
}

impl<T: Clone> FromElements for Vec<T> {
    fn from_elements(elements: Vec<T>) -> Self {
        elements
    }
}

// =============================================================================
// Mapping
// =============================================================================

impl<K: Clone + PartialEq, V: Clone> Collection for Mapping<K, V> {
    type Item = Pair<K, V>;
    type Parts = (K, V);

    fn view(&self) -> Result<SequenceView<Pair<K, V>>, EnumerateError> {
        Ok(SequenceView::new(self.pairs().cloned().collect()))
    }

    fn decompose(item: Pair<K, V>) -> (K, V) {
        item.into_parts()
    }
}

impl<K: Clone + PartialEq, V: Clone> FromElements for Mapping<K, V> {
    fn from_elements(elements: Vec<Pair<K, V>>) -> Self {
        elements.into_iter().collect()
    }
}

// =============================================================================
// Scalar
// =============================================================================

impl<T: Clone> Collection for Scalar<T> {
    type Item = T;
    type Parts = T;

    fn view(&self) -> Result<SequenceView<T>, EnumerateError> {
        Err(EnumerateError::UnsupportedOperand {
            type_name: std::any::type_name::<T>(),
        })
    }

    fn decompose(item: T) -> T {
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping;
    use rstest::rstest;

    #[rstest]
    fn test_sequence_view_preserves_positional_order() {
        let view = vec![3, 1, 2].view().unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view.into_elements(), vec![3, 1, 2]);
    }

    #[rstest]
    fn test_mapping_view_preserves_insertion_order() {
        let mapping = mapping! { "b" => 2, "a" => 1 };
        let view = mapping.view().unwrap();
        assert_eq!(
            view.into_elements(),
            vec![Pair::new("b", 2), Pair::new("a", 1)]
        );
    }

    #[rstest]
    fn test_empty_views() {
        assert!(Vec::<i32>::new().view().unwrap().is_empty());
        assert!(Mapping::<i32, i32>::new().view().unwrap().is_empty());
    }

    #[rstest]
    fn test_scalar_view_is_unsupported() {
        let outcome = Scalar::new(1).view();
        assert_eq!(
            outcome,
            Err(EnumerateError::UnsupportedOperand { type_name: "i32" })
        );
    }

    #[rstest]
    fn test_view_does_not_consume_the_collection() {
        let sequence = vec![1, 2];
        let _ = sequence.view().unwrap();
        assert_eq!(sequence, vec![1, 2]);
    }

    #[rstest]
    fn test_decompose_splits_mapping_pairs() {
        let parts = Mapping::decompose(Pair::new("k", 5));
        assert_eq!(parts, ("k", 5));
    }

    #[rstest]
    fn test_rebuild_re_keys_surviving_pairs() {
        let rebuilt: Mapping<&str, i32> =
            Mapping::from_elements(vec![Pair::new("x", 1), Pair::new("y", 2)]);
        assert_eq!(rebuilt, mapping! { "x" => 1, "y" => 2 });
    }
}
