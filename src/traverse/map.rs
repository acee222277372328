//! Mapping elements through callables, one- and two-stage.
//!
//! [`Map::map`] is the plain one-stage map: a required action applied to
//! every element's parts, producing a sequence. [`Map::map_with`] is the
//! two-stage form that separates a *transform* (a first-class callable
//! passed as data, composable and reusable) from a *block* (an inline,
//! single-use closure), with a strict application order: the transform pass
//! runs over every element first, then the block pass runs over every
//! intermediate result. The order is externally observable - `(x + 1)` then
//! `(x * 2)` is not `(x * 2)` then `(x + 1)`.
//!
//! Both forms always produce a sequence regardless of input shape, because
//! transforming entries loses key semantics. The one exception is the
//! deliberate no-op policy: a block with no transform warns (exact text
//! [`BLOCK_WITHOUT_TRANSFORM`]) and hands the collection back unchanged,
//! which [`Mapped`] encodes in the return type.
//!
//! [`BLOCK_WITHOUT_TRANSFORM`]: crate::diagnostics::BLOCK_WITHOUT_TRANSFORM
//!
//! # Examples
//!
//! ```rust
//! use enumars::prelude::*;
//!
//! let incremented = vec![1, 2].map(Some(|element: i32| element + 1));
//! assert_eq!(incremented, Ok(vec![2, 3]));
//!
//! let staged = vec![1, 2]
//!     .map_with(vec![|element: i32| element + 1], Some(|value| value * 2))
//!     .unwrap();
//! assert_eq!(staged, Mapped::Sequence(vec![4, 6]));
//! ```

use crate::diagnostics::{BLOCK_WITHOUT_TRANSFORM, ConsoleDiagnostics, DiagnosticSink};
use crate::dispatch::{self, Supplied};
use crate::error::EnumerateError;

use super::engine::Traverse;

/// The outcome of a two-stage map.
///
/// The identity-fallback policy means `map_with` has two success shapes: a
/// mapped sequence, or the input collection handed back untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mapped<C, T> {
    /// The elements were transformed; keys (if any) are gone.
    Sequence(Vec<T>),
    /// The block-without-transform fallback: the input, unchanged.
    Unchanged(C),
}

impl<C, T> Mapped<C, T> {
    /// Returns the mapped sequence, or `None` for the unchanged fallback.
    #[must_use]
    pub fn into_sequence(self) -> Option<Vec<T>> {
        match self {
            Self::Sequence(elements) => Some(elements),
            Self::Unchanged(_) => None,
        }
    }

    /// Returns whether this is the unchanged fallback.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged(_))
    }
}

/// One- and two-stage element mapping.
pub trait Map: Traverse {
    /// Applies `action` to every element's parts, in order, and collects
    /// the results into a sequence.
    ///
    /// # Errors
    ///
    /// - [`EnumerateError::MissingCallable`] when `action` is `None`.
    /// - [`EnumerateError::UnsupportedOperand`] when the operand cannot
    ///   produce a view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::prelude::*;
    /// use enumars::mapping;
    ///
    /// let labels = mapping! { "a" => 1, "b" => 2 }
    ///     .map(Some(|(key, value)| format!("{key}={value}")));
    /// assert_eq!(labels, Ok(vec!["a=1".to_string(), "b=2".to_string()]));
    /// ```
    fn map<F, U>(&self, action: Option<F>) -> Result<Vec<U>, EnumerateError>
    where
        F: FnMut(Self::Parts) -> U,
    {
        let mut action = dispatch::require_callable(action, "map")?;
        Ok(self
            .view()?
            .into_iter()
            .map(|item| action(Self::decompose(item)))
            .collect())
    }

    /// The two-stage map: an optional transform (at most one), then an
    /// optional block, applied in that fixed order.
    ///
    /// Dispatch:
    ///
    /// - transform only: apply it to every element → [`Mapped::Sequence`].
    /// - transform and block: transform every element, then apply the block
    ///   to every intermediate result → [`Mapped::Sequence`].
    /// - block only: warn and return [`Mapped::Unchanged`].
    /// - neither: a transform is required →
    ///   [`EnumerateError::InvalidArgumentCount`].
    ///
    /// Diagnostic warnings go to standard output; use
    /// [`map_with_sink`](Map::map_with_sink) to capture them.
    ///
    /// # Errors
    ///
    /// - [`EnumerateError::InvalidArgumentCount`] when no callable at all,
    ///   or more than one transform, is supplied.
    /// - [`EnumerateError::UnsupportedOperand`] when the operand cannot
    ///   produce a view.
    fn map_with<F, B, U>(
        &self,
        transforms: Vec<F>,
        block: Option<B>,
    ) -> Result<Mapped<Self, U>, EnumerateError>
    where
        Self: Clone,
        F: FnMut(Self::Parts) -> U,
        B: FnMut(U) -> U,
    {
        self.map_with_sink(transforms, block, &mut ConsoleDiagnostics)
    }

    /// The same operation with an explicit destination for the
    /// block-ignored warning.
    ///
    /// # Errors
    ///
    /// Same as [`map_with`](Map::map_with).
    fn map_with_sink<F, B, U, S>(
        &self,
        transforms: Vec<F>,
        block: Option<B>,
        sink: &mut S,
    ) -> Result<Mapped<Self, U>, EnumerateError>
    where
        Self: Clone,
        F: FnMut(Self::Parts) -> U,
        B: FnMut(U) -> U,
        S: DiagnosticSink,
    {
        let transform = dispatch::at_most_one(transforms, "map_with")?;
        match (transform, block) {
            (Supplied::One(transform), None) => {
                Ok(Mapped::Sequence(self.map(Some(transform))?))
            }
            (Supplied::One(transform), Some(block)) => {
                let intermediates = self.map(Some(transform))?;
                Ok(Mapped::Sequence(intermediates.into_iter().map(block).collect()))
            }
            (Supplied::Absent, Some(_block)) => {
                sink.warn(BLOCK_WITHOUT_TRANSFORM);
                Ok(Mapped::Unchanged(self.clone()))
            }
            (Supplied::Absent, None) => Err(EnumerateError::InvalidArgumentCount {
                operation: "map_with",
                given: 0,
                expected: 1,
            }),
        }
    }
}

impl<C: Traverse> Map for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Scalar;
    use crate::diagnostics::BufferedDiagnostics;
    use crate::mapping;
    use rstest::rstest;

    type Transform = fn(i32) -> i32;

    #[rstest]
    fn test_map_applies_action_in_order() {
        let doubled = vec![1, 2, 3].map(Some(|element: i32| element * 2));
        assert_eq!(doubled, Ok(vec![2, 4, 6]));
    }

    #[rstest]
    fn test_map_over_mapping_returns_a_sequence() {
        let sums = mapping! { 1 => 10, 2 => 20 }.map(Some(|(key, value)| key + value));
        assert_eq!(sums, Ok(vec![11, 22]));
    }

    #[rstest]
    fn test_map_without_action_is_missing_callable() {
        let outcome = vec![1].map(None::<fn(i32) -> i32>);
        assert_eq!(
            outcome,
            Err(EnumerateError::MissingCallable { operation: "map" })
        );
    }

    #[rstest]
    fn test_map_with_transform_only() {
        let outcome = vec![1, 2].map_with(
            vec![|element: i32| element + 1],
            None::<Transform>,
        );
        assert_eq!(outcome, Ok(Mapped::Sequence(vec![2, 3])));
    }

    #[rstest]
    fn test_map_with_applies_transform_before_block() {
        let outcome = vec![1, 2]
            .map_with(vec![|element: i32| element + 1], Some(|value| value * 2))
            .unwrap();
        // (1+1)*2 and (2+1)*2, not (1*2)+1 and (2*2)+1
        assert_eq!(outcome, Mapped::Sequence(vec![4, 6]));
    }

    #[rstest]
    fn test_map_with_block_only_warns_and_returns_input() {
        let mut sink = BufferedDiagnostics::new();
        let outcome = vec![1, 2]
            .map_with_sink(Vec::<Transform>::new(), Some(|value| value + 2), &mut sink)
            .unwrap();

        assert_eq!(outcome, Mapped::Unchanged(vec![1, 2]));
        assert_eq!(
            sink.messages(),
            ["warning: given block not used (must have proc as argument)"]
        );
    }

    #[rstest]
    fn test_map_with_nothing_is_wrong_arity() {
        let outcome = vec![1, 2].map_with(Vec::<Transform>::new(), None::<Transform>);
        assert_eq!(
            outcome,
            Err(EnumerateError::InvalidArgumentCount {
                operation: "map_with",
                given: 0,
                expected: 1,
            })
        );
    }

    #[rstest]
    fn test_map_with_rejects_multiple_transforms() {
        let first: Transform = |element| element + 1;
        let second: Transform = |element| element * 2;
        let outcome = vec![1, 2].map_with(vec![first, second], None::<Transform>);
        assert_eq!(
            outcome,
            Err(EnumerateError::InvalidArgumentCount {
                operation: "map_with",
                given: 2,
                expected: 1,
            })
        );
    }

    #[rstest]
    fn test_map_with_over_mapping_loses_keys() {
        let outcome = mapping! { "a" => 1, "b" => 2 }
            .map_with(vec![|(_key, value): (&str, i32)| value * 10], None::<Transform>);
        assert_eq!(outcome, Ok(Mapped::Sequence(vec![10, 20])));
    }

    #[rstest]
    fn test_transform_pass_completes_before_block_pass() {
        let order = std::cell::RefCell::new(Vec::new());
        let outcome = vec![1, 2]
            .map_with_sink(
                vec![|element: i32| {
                    order.borrow_mut().push(("transform", element));
                    element * 10
                }],
                Some(|value: i32| {
                    order.borrow_mut().push(("block", value));
                    value
                }),
                &mut BufferedDiagnostics::new(),
            )
            .unwrap();

        assert_eq!(outcome, Mapped::Sequence(vec![10, 20]));
        assert_eq!(
            order.into_inner(),
            vec![
                ("transform", 1),
                ("transform", 2),
                ("block", 10),
                ("block", 20),
            ]
        );
    }

    #[rstest]
    fn test_map_on_scalar_is_unsupported() {
        let outcome = Scalar::new(1).map(Some(|value: i32| value));
        assert!(matches!(
            outcome,
            Err(EnumerateError::UnsupportedOperand { .. })
        ));
    }

    #[rstest]
    fn test_mapped_accessors() {
        let mapped: Mapped<Vec<i32>, i32> = Mapped::Sequence(vec![1]);
        assert!(!mapped.is_unchanged());
        assert_eq!(mapped.into_sequence(), Some(vec![1]));

        let unchanged: Mapped<Vec<i32>, i32> = Mapped::Unchanged(vec![2]);
        assert!(unchanged.is_unchanged());
        assert_eq!(unchanged.into_sequence(), None);
    }
}
