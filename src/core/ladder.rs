//! Ladder representation
//!
//! A Ladder is one complete shortest transformation sequence from a start
//! word to an end word, each step substituting exactly one letter.

use std::fmt;

/// An ordered sequence of words from start to end
///
/// Consecutive words differ by exactly one substituted letter. Ladders
/// compare element-wise, so sorting a `Vec<Ladder>` yields the expected
/// lexicographic result order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ladder(Vec<String>);

impl Ladder {
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self(words)
    }

    /// The words in order, start first
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Number of words in the ladder (one more than the number of hops)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Ladder {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}
