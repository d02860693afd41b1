//! Random suffix sources
//!
//! This module provides a [`SuffixSource`] trait that abstracts over where key
//! suffixes come from, allowing production code to draw from the operating
//! system's CSPRNG while tests can use reproducible or constant suffixes.
//!
//! # Example
//!
//! ```
//! use lexorder::{OsRandomSuffix, SuffixSource};
//!
//! let suffix = OsRandomSuffix.suffix(32);
//! assert_eq!(suffix.len(), 32);
//! assert!(!suffix.contains('0'));
//! ```

use std::fmt::Debug;

use rand::Rng;
use rand::rngs::OsRng;

#[cfg(any(test, feature = "testing"))]
use rand::{SeedableRng, rngs::StdRng};
#[cfg(any(test, feature = "testing"))]
use std::sync::{Mutex, PoisonError};

use crate::constants::SUFFIX_ALPHABET;

/// A provider of random key suffixes.
///
/// Two writers that land on the same subkey are told apart only by their
/// suffixes, so production sources must be unpredictable across processes.
pub trait SuffixSource: Send + Sync + Debug {
    /// Returns `len` characters drawn from [`SUFFIX_ALPHABET`].
    fn suffix(&self, len: usize) -> String;
}

/// Production suffix source backed by the operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSuffix;

impl SuffixSource for OsRandomSuffix {
    fn suffix(&self, len: usize) -> String {
        sample(&mut OsRng, len)
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())]))
        .collect()
}

/// Test suffix source with a reproducible sequence.
///
/// Two sources built from the same seed produce the same suffixes in the same
/// order, which makes generated keys stable across test runs.
///
/// # Example
///
/// ```
/// use lexorder::{SeededSuffix, SuffixSource};
///
/// let a = SeededSuffix::new(7);
/// let b = SeededSuffix::new(7);
/// assert_eq!(a.suffix(32), b.suffix(32));
/// ```
#[cfg(any(test, feature = "testing"))]
#[derive(Debug)]
pub struct SeededSuffix {
    rng: Mutex<StdRng>,
}

#[cfg(any(test, feature = "testing"))]
impl SeededSuffix {
    /// Create a new source from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl SuffixSource for SeededSuffix {
    fn suffix(&self, len: usize) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        sample(&mut *rng, len)
    }
}

/// Test suffix source that always returns the same suffix.
///
/// Every key generated into the same gap gets the same suffix, which forces
/// the subkey collisions that independent writers only hit by chance.
/// The pattern is repeated to the requested length.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Clone)]
pub struct FixedSuffix {
    pattern: String,
}

#[cfg(any(test, feature = "testing"))]
impl FixedSuffix {
    /// Create a source repeating `pattern`.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for FixedSuffix {
    fn default() -> Self {
        Self::new("V")
    }
}

#[cfg(any(test, feature = "testing"))]
impl SuffixSource for FixedSuffix {
    fn suffix(&self, len: usize) -> String {
        self.pattern.chars().cycle().take(len).collect()
    }
}
