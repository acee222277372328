//! Collection shapes and the view that unifies them.
//!
//! This module provides the two container shapes traversal operates over,
//! and the capability traits that let one traversal algorithm serve both:
//!
//! - [`Pair`]: immutable (key, value) tuple - a mapping entry as a sequence
//!   element.
//! - [`Mapping`]: insertion-ordered mapping with unique keys.
//! - [`Scalar`]: a non-collection operand; traversing it fails.
//! - [`SequenceView`]: an ordered snapshot of any collection's items.
//! - [`Collection`]: the produce-ordered-elements capability.
//! - [`FromElements`]: the rebuild-in-my-shape capability.
//!
//! Sequences are plain [`Vec`]s; the traits are implemented on `Vec`
//! directly.
//!
//! # Examples
//!
//! ```rust
//! use enumars::collection::{Collection, Mapping};
//!
//! let mut mapping = Mapping::new();
//! mapping.insert("one", 1);
//!
//! // Both shapes produce an ordered view through the same capability.
//! assert_eq!(vec![1, 2, 3].view().unwrap().len(), 3);
//! assert_eq!(mapping.view().unwrap().len(), 1);
//! ```

mod mapping;
mod pair;
mod scalar;
mod view;

pub use mapping::{Mapping, MappingIntoIterator, MappingIterator};
pub use pair::Pair;
pub use scalar::Scalar;
pub use view::{Collection, FromElements, SequenceView};
