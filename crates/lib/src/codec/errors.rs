//! Error types for the layered key codec.

use thiserror::Error;

/// Structured error types for layered key generation.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CodecError {
    /// Both bounds were given but the lower one does not sort strictly first.
    ///
    /// This points at a caller bug in neighbour computation; retrying with the
    /// same bounds fails the same way.
    #[error("Invalid bound order: {lower:?} must sort before {upper:?}")]
    InvalidBoundOrder { lower: String, upper: String },

    /// Codec configuration is unusable
    #[error("Invalid codec configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A suffix source produced a suffix outside the suffix format
    #[error("Invalid key suffix {suffix:?}: {reason}")]
    InvalidSuffix { suffix: String, reason: String },

    /// The base primitive kept returning keys outside the requested gap
    #[error("No key found between {lower:?} and {upper:?}")]
    NoRoom {
        lower: Option<String>,
        upper: Option<String>,
    },
}

impl CodecError {
    /// Check if this error is caused by bounds in the wrong order
    pub fn is_bound_order_error(&self) -> bool {
        matches!(self, CodecError::InvalidBoundOrder { .. })
    }

    /// Check if this error is caused by configuration or a misbehaving suffix source
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CodecError::InvalidConfig { .. } | CodecError::InvalidSuffix { .. }
        )
    }
}

// Conversion from CodecError to the main Error type
impl From<CodecError> for crate::Error {
    fn from(err: CodecError) -> Self {
        crate::Error::Codec(err)
    }
}
