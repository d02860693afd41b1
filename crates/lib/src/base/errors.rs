//! Error types for the base key primitive.
//!
//! This module defines structured errors raised while validating or
//! generating base-62 keys.

use thiserror::Error;

/// Structured error types for base key generation.
///
/// Each variant carries the offending key material so that callers can
/// report which stored key is malformed.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BaseError {
    /// A key does not follow the base-62 key grammar
    #[error("Invalid order key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    /// The lower bound does not sort strictly before the upper bound
    #[error("Invalid base key bounds: {lower:?} >= {upper:?}")]
    InvalidBounds { lower: String, upper: String },

    /// The integer part cannot move any further in the requested direction
    #[error("Key space exhausted at {key:?}")]
    Exhausted { key: String },
}

impl BaseError {
    /// Check if this error is caused by a malformed key
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, BaseError::InvalidKey { .. })
    }

    /// Check if this error is caused by bounds in the wrong order
    pub fn is_bound_order_error(&self) -> bool {
        matches!(self, BaseError::InvalidBounds { .. })
    }

    /// Check if this error is caused by running out of integer space
    pub fn is_exhausted(&self) -> bool {
        matches!(self, BaseError::Exhausted { .. })
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            BaseError::InvalidKey { key, .. } | BaseError::Exhausted { key } => Some(key),
            _ => None,
        }
    }
}

// Conversion from BaseError to the main Error type
impl From<BaseError> for crate::Error {
    fn from(err: BaseError) -> Self {
        crate::Error::Base(err)
    }
}
