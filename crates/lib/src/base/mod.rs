//! Base key generation.
//!
//! The base primitive returns the shortest key that sorts strictly between two
//! optional bounds. It knows nothing about random suffixes; the layered format
//! lives in [`crate::codec`].
//!
//! # Core Types
//!
//! - [`BaseBetween`] - The primitive, as a trait so callers can supply their own
//! - [`Base62Digits`] - Variable-length-integer keys over `0-9A-Za-z`
//! - [`BaseError`] - Validation and exhaustion errors

pub mod digits;
pub mod errors;

pub use digits::Base62Digits;
pub use errors::BaseError;

use crate::Result;

/// Generates a key strictly between two optional bounds.
///
/// Implementations must uphold:
/// - `between(Some(lo), Some(hi))` returns `k` with `lo < k < hi`
/// - `between(Some(lo), None)` returns `k > lo`
/// - `between(None, Some(hi))` returns `k < hi`
/// - `between(None, None)` returns any valid key
///
/// Comparison is byte-wise, the same as `str` ordering. Implementations reject
/// `lo >= hi` with an error rather than returning an unordered key.
pub trait BaseBetween: Send + Sync + std::fmt::Debug {
    /// Returns the shortest key strictly between `lower` and `upper`.
    fn between(&self, lower: Option<&str>, upper: Option<&str>) -> Result<String>;

    /// Checks that a key can be used as a bound.
    fn validate(&self, key: &str) -> Result<()>;
}
