//! Traversal and reduction operations.
//!
//! This module provides the operation traits, all blanket-implemented for
//! every [`Collection`](crate::collection::Collection):
//!
//! - [`Traverse`]: `for_each`, `for_each_indexed` - the engine every other
//!   operation is built on.
//! - [`Filter`]: `select` plus the boolean reducers `all`, `any`, `none`.
//! - [`Count`]: `count` with target/predicate/bare dispatch.
//! - [`Map`]: `map` and the two-stage `map_with`, with [`Mapped`] as the
//!   two-stage outcome.
//! - [`Fold`]: `reduce` (seeded from the first element) and `inject`
//!   (explicit initial).
//!
//! # Examples
//!
//! ```rust
//! use enumars::prelude::*;
//! use enumars::mapping;
//!
//! let evens = vec![1, 2, 3, 4].select(Some(|element: i32| element % 2 == 0));
//! assert_eq!(evens, Ok(vec![2, 4]));
//!
//! let total = mapping! { "a" => 1, "b" => 2 }
//!     .inject(vec![0], Some(|sum, (_key, value)| sum + value));
//! assert_eq!(total, Ok(3));
//! ```

mod count;
mod engine;
mod filter;
mod fold;
mod map;

pub use count::Count;
pub use engine::Traverse;
pub use filter::Filter;
pub use fold::Fold;
pub use map::{Map, Mapped};
