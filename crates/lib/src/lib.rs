//!
//! lexorder: sortable string keys for reorderable lists.
//! This library assigns fractional-index keys to items so that any insert or move
//! rewrites exactly one key, never the rest of the list.
//!
//! ## Core Concepts
//!
//! lexorder is built around a few key concepts:
//!
//! * **Base keys (`base::BaseBetween`)**: The primitive that returns the shortest key strictly between two optional bounds. [`base::Base62Digits`] is the bundled implementation.
//! * **Layered keys (`codec::KeyCodec`)**: A key is a *subkey* produced by the base primitive, followed by a `'0'` separator and a random suffix. Two writers generating into the same gap without coordination get distinct keys.
//! * **Ordered collections (`orderer::OrderedCollection`)**: The caller's list, exposed through enumeration, id/key accessors, and a single key-assignment hook.
//! * **Reordering (`orderer::ListOrderer`)**: Move, move-to-side, insert-before and append operations that compute the right neighbour bounds and assign one new key.
//!
//! ```
//! use lexorder::{KeyCodec, ListOrderer, VecCollection};
//!
//! # fn main() -> lexorder::Result<()> {
//! let codec = KeyCodec::new();
//! let first = codec.generate_between(None, None)?;
//! let second = codec.generate_between(Some(&first), None)?;
//! let middle = codec.generate_between(Some(&first), Some(&second))?;
//! assert!(first < middle && middle < second);
//!
//! let mut orderer = ListOrderer::new(VecCollection::<(&str, String)>::new());
//! let key = orderer.new_trailing_key()?;
//! orderer.collection_mut().push(("a", key));
//! # Ok(())
//! # }
//! ```

pub mod base;
pub mod codec;
pub mod constants;
pub mod orderer;

pub use base::{Base62Digits, BaseBetween, BaseError};
pub use codec::{
    CodecConfig, CodecError, KeyCodec, generate_between, subkey,
    suffix::{OsRandomSuffix, SuffixSource},
};
pub use orderer::{
    ListOrderer, OrderError, Side,
    collection::{Ordered, OrderedCollection, VecCollection},
};

#[cfg(any(test, feature = "testing"))]
pub use codec::suffix::{FixedSuffix, SeededSuffix};

/// Result type used throughout the lexorder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the lexorder library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured errors from the base key primitive
    #[error(transparent)]
    Base(base::BaseError),

    /// Structured errors from the layered key codec
    #[error(transparent)]
    Codec(codec::CodecError),

    /// Structured errors from list reordering
    #[error(transparent)]
    Order(orderer::OrderError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Base(_) => "base",
            Error::Codec(_) => "codec",
            Error::Order(_) => "orderer",
        }
    }

    /// Check if this error indicates a referenced item was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Order(order_err) => order_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error comes from bounds given in the wrong order.
    pub fn is_bound_order_error(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_bound_order_error(),
            Error::Base(base_err) => base_err.is_bound_order_error(),
            _ => false,
        }
    }

    /// Check if this error comes from a malformed key.
    pub fn is_invalid_key(&self) -> bool {
        match self {
            Error::Base(base_err) => base_err.is_invalid_key(),
            _ => false,
        }
    }

    /// Check if the key space ran out in one direction.
    pub fn is_exhausted(&self) -> bool {
        match self {
            Error::Base(base_err) => base_err.is_exhausted(),
            _ => false,
        }
    }

    /// Check if this error is configuration-related.
    pub fn is_config_error(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_config_error(),
            _ => false,
        }
    }
}
