//! Ordered sets of characters eligible for generated ids.

use std::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;

/// The 62 characters used when no other alphabet is configured.
pub const DEFAULT_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// An ordered set of unique characters.
///
/// Order is preserved for display but has no effect on generation, which
/// draws uniformly from the whole set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet with no characters.
    #[must_use]
    pub fn empty() -> Self {
        Self { chars: Vec::new() }
    }

    /// Adds `c` unless it is already present. Returns `true` if it was added.
    pub fn insert(&mut self, c: char) -> bool {
        if self.contains(c) {
            return false;
        }
        self.chars.push(c);
        true
    }

    /// Removes `c` if present. Returns `true` if it was removed.
    pub fn remove(&mut self, c: char) -> bool {
        match self.chars.iter().position(|&existing| existing == c) {
            Some(index) => {
                self.chars.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `c` is in the alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of characters in the alphabet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the alphabet has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Iterates over the characters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Draws one character uniformly at random, or `None` if empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
        self.chars.choose(rng).copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        DEFAULT_CHARS.chars().collect()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut alphabet = Self::empty();
        for c in iter {
            alphabet.insert(c);
        }
        alphabet
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
