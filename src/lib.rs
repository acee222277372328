//! # enumars
//!
//! A functional enumeration library for Rust providing shape-agnostic
//! traversal and reduction over sequences and mappings.
//!
//! ## Overview
//!
//! One traversal algorithm serves two container shapes: an ordered sequence
//! of values ([`Vec`]) and an insertion-ordered mapping of unique keys to
//! values ([`Mapping`](collection::Mapping)). The unification happens once,
//! at the call boundary: every collection produces an ordered
//! [`SequenceView`](collection::SequenceView) of its logical items, and
//! every operation is defined over that view. It includes:
//!
//! - **Collections**: `Pair`, `Mapping`, `Scalar`, and the `Collection` /
//!   `FromElements` capability traits
//! - **Traversal**: `for_each`, `for_each_indexed`
//! - **Filtering**: `select` and the boolean reducers `all`, `any`, `none`
//! - **Counting**: `count` with target / predicate / bare dispatch
//! - **Mapping**: `map` and the two-stage `map_with`
//! - **Folding**: `reduce` and `inject`
//!
//! The second half of the design is the dispatch layer: operations accept
//! optional callables and zero-or-more positional values, and the
//! [`dispatch`] module validates them once at entry - at most one counting
//! target, exactly one injected initial, transform-before-block order -
//! producing the crate's three [error kinds](error::EnumerateError) for
//! contract violations and two literal [diagnostic warnings](diagnostics)
//! for the forgiving cases.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `Pair` and `Mapping`
//!
//! ## Example
//!
//! ```rust
//! use enumars::prelude::*;
//! use enumars::mapping;
//!
//! let sequence = vec![1, 2, 1];
//! assert_eq!(sequence.count(vec![1], None::<fn(i32) -> bool>), Ok(2));
//!
//! let scores = mapping! { "ada" => 3, "ben" => 1 };
//! let passing = scores.select(Some(|(_name, score)| score >= 2));
//! assert_eq!(passing, Ok(mapping! { "ada" => 3 }));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use enumars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;

    pub use crate::diagnostics::*;

    pub use crate::dispatch::*;

    pub use crate::error::*;

    pub use crate::traverse::*;
}

pub mod collection;

pub mod diagnostics;

pub mod dispatch;

pub mod error;

pub mod traverse;
