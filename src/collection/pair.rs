//! Key-value pair - the element type of a mapping.
//!
//! A [`Pair`] presents one mapping entry as a single sequence element, which
//! is what lets the traversal engine treat sequences and mappings uniformly:
//! a mapping's ordered view is simply a sequence of pairs.
//!
//! # Examples
//!
//! ```rust
//! use enumars::collection::Pair;
//!
//! let entry = Pair::new("one", 1);
//! assert_eq!(entry.key(), &"one");
//! assert_eq!(entry.value(), &1);
//!
//! // Equality is structural
//! assert_eq!(entry, Pair::new("one", 1));
//! assert_ne!(entry, Pair::new("one", 2));
//! ```

/// An immutable (key, value) tuple representing one mapping entry.
///
/// Two pairs are equal iff their keys are equal and their values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K, V> Pair<K, V> {
    /// Creates a pair from a key and a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::collection::Pair;
    ///
    /// let pair = Pair::new("a", 1);
    /// assert_eq!(pair.into_parts(), ("a", 1));
    /// ```
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns a reference to the key.
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the value.
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Decomposes the pair into its key and value.
    ///
    /// This is the two-part form that mapping actions receive: a closure
    /// written as `|(key, value)| ...` consumes the decomposed pair with the
    /// ergonomics of native tuple destructuring.
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<Pair<K, V>> for (K, V) {
    fn from(pair: Pair<K, V>) -> Self {
        pair.into_parts()
    }
}

static_assertions::assert_impl_all!(Pair<String, i32>: Send, Sync, Clone);
