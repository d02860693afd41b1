//! Layered, collision-resistant order keys.
//!
//! A layered key is a *subkey* produced by a [`BaseBetween`] primitive,
//! followed by a `'0'` separator and a random suffix:
//!
//! ```text
//! a1V 0 q8ZrX1...(32 chars)
//! \_/ | \________________/
//! subkey       suffix
//! ```
//!
//! The subkey carries the ordering. The suffix only tells apart keys that two
//! writers generated into the same gap without coordinating: they get the same
//! subkey and, with overwhelming probability, different suffixes. Keys no
//! longer than the suffix layer are treated as bare subkeys, so keys written
//! before the suffix layer existed keep working as bounds.

pub mod errors;
pub mod suffix;

pub use errors::CodecError;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::Result;
use crate::base::{Base62Digits, BaseBetween};
use crate::constants::{DEFAULT_SUFFIX_LENGTH, SUFFIX_ALPHABET, SUFFIX_SEPARATOR};
use suffix::{OsRandomSuffix, SuffixSource};

/// Shape of the suffix layer.
///
/// # Example
///
/// ```
/// use lexorder::CodecConfig;
///
/// let config = CodecConfig::default();
/// assert_eq!(config.suffix_length, 32);
/// assert_eq!(config.layer_length(), 33);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Number of random characters after the separator.
    ///
    /// Every writer sharing a list must use the same value, since it decides
    /// where a stored key's subkey ends.
    pub suffix_length: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            suffix_length: DEFAULT_SUFFIX_LENGTH,
        }
    }
}

impl CodecConfig {
    /// Length of the separator plus suffix.
    pub fn layer_length(&self) -> usize {
        self.suffix_length + SUFFIX_SEPARATOR.len_utf8()
    }

    /// Check that the configuration can produce keys.
    pub fn validate(&self) -> Result<()> {
        if self.suffix_length == 0 {
            return Err(CodecError::InvalidConfig {
                reason: "suffix_length must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Generates layered keys strictly between two optional bounds.
///
/// # Examples
///
/// ```
/// use lexorder::KeyCodec;
///
/// # fn main() -> lexorder::Result<()> {
/// let codec = KeyCodec::new();
/// let low = codec.generate_between(None, None)?;
/// let high = codec.generate_between(Some(&low), None)?;
/// let mid = codec.generate_between(Some(&low), Some(&high))?;
///
/// assert!(low < mid && mid < high);
/// assert_eq!(codec.subkey(&low), "a0");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyCodec<B = Base62Digits, S = OsRandomSuffix> {
    base: B,
    suffix: S,
    config: CodecConfig,
}

impl KeyCodec {
    /// Creates a codec with base-62 subkeys, OS random suffixes and the default config.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: BaseBetween, S: SuffixSource> KeyCodec<B, S> {
    /// Creates a codec from its parts.
    ///
    /// # Errors
    /// Returns [`CodecError::InvalidConfig`] if `config` fails validation.
    pub fn with_parts(base: B, suffix: S, config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            base,
            suffix,
            config,
        })
    }

    /// The suffix layer configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// The base primitive used for subkeys.
    pub fn base(&self) -> &B {
        &self.base
    }

    /// Returns the ordering part of `key`.
    ///
    /// Keys longer than the suffix layer lose their trailing separator and
    /// suffix. Shorter keys, including keys written without a suffix layer,
    /// are their own subkey.
    pub fn subkey<'a>(&self, key: &'a str) -> &'a str {
        let layer = self.config.layer_length();
        if key.len() > layer {
            key.get(..key.len() - layer).unwrap_or(key)
        } else {
            key
        }
    }

    /// Generates a key strictly between `lower` and `upper`.
    ///
    /// An absent bound leaves that side open. With both bounds absent the
    /// result is a fresh key for an empty list.
    ///
    /// # Errors
    /// - [`CodecError::InvalidBoundOrder`] if both bounds are present and
    ///   `lower >= upper`
    /// - [`crate::BaseError`] if a bound is not a valid key for the base primitive
    pub fn generate_between(&self, lower: Option<&str>, upper: Option<&str>) -> Result<String> {
        if let (Some(lower), Some(upper)) = (lower, upper) {
            if lower >= upper {
                return Err(CodecError::InvalidBoundOrder {
                    lower: lower.to_string(),
                    upper: upper.to_string(),
                }
                .into());
            }
        }

        let lower_subkey = lower.map(|key| self.bound_subkey(key));
        let upper_subkey = upper.map(|key| self.bound_subkey(key));
        let mut subkey = match (lower_subkey, upper_subkey) {
            (None, None) => self.base.between(None, None)?,
            (None, Some(upper_subkey)) => self.base.between(None, Some(upper_subkey))?,
            (Some(lower_subkey), None) => self.base.between(Some(lower_subkey), None)?,
            (Some(lower_subkey), Some(upper_subkey)) if lower_subkey == upper_subkey => {
                // Subkeys cannot split the gap, the full keys can.
                debug!(
                    subkey = lower_subkey,
                    "Bounds share a subkey, generating between full keys"
                );
                self.base.between(lower, upper)?
            }
            (Some(lower_subkey), Some(upper_subkey)) if lower_subkey < upper_subkey => {
                self.base.between(Some(lower_subkey), Some(upper_subkey))?
            }
            (Some(lower_subkey), Some(upper_subkey)) => {
                debug!(
                    lower_subkey,
                    upper_subkey, "Subkeys sort against their keys, generating between full keys"
                );
                self.base.between(lower, upper)?
            }
        };

        let suffix = self.next_suffix()?;
        let max_repairs = upper.map_or(0, str::len) + 2;
        for _ in 0..=max_repairs {
            let key = self.layer(&subkey, &suffix);
            let above = lower.is_none_or(|lower| lower < key.as_str());
            let below = upper.is_none_or(|upper| key.as_str() < upper);
            if above && below {
                trace!(?lower, ?upper, %key, "Generated layered key");
                return Ok(key);
            }

            // The suffix pushed the key out of the gap. Pick a new subkey
            // inside the full-key bounds, starting from the old one if it
            // already sits in the gap.
            debug!(?lower, ?upper, %key, "Layered key escaped its bounds, repairing subkey");
            let inside = lower.is_none_or(|lower| lower < subkey.as_str())
                && upper.is_none_or(|upper| subkey.as_str() < upper);
            let floor = if inside { Some(subkey.as_str()) } else { lower };
            subkey = self.base.between(floor, upper)?;
        }

        Err(CodecError::NoRoom {
            lower: lower.map(str::to_string),
            upper: upper.map(str::to_string),
        }
        .into())
    }

    /// Generates `count` ascending keys strictly between `lower` and `upper`.
    ///
    /// Each key is generated with the previous one as its lower bound, which
    /// suits bulk-populating a new list.
    pub fn generate_n_between(
        &self,
        lower: Option<&str>,
        upper: Option<&str>,
        count: usize,
    ) -> Result<Vec<String>> {
        let mut keys: Vec<String> = Vec::with_capacity(count);
        for _ in 0..count {
            let previous = keys.last().map(String::as_str).or(lower);
            let key = self.generate_between(previous, upper)?;
            keys.push(key);
        }
        Ok(keys)
    }

    /// Subkey of a bound, or the whole key when its prefix is not a valid base key.
    ///
    /// Keys of unknown provenance can be longer than the suffix layer without
    /// carrying one.
    fn bound_subkey<'a>(&self, key: &'a str) -> &'a str {
        let subkey = self.subkey(key);
        if subkey.len() < key.len() && self.base.validate(subkey).is_err() {
            debug!(key, subkey, "Key prefix is not a valid subkey, using the full key");
            return key;
        }
        subkey
    }

    fn next_suffix(&self) -> Result<String> {
        let suffix = self.suffix.suffix(self.config.suffix_length);
        if suffix.len() != self.config.suffix_length {
            return Err(CodecError::InvalidSuffix {
                reason: format!(
                    "expected {} characters, got {}",
                    self.config.suffix_length,
                    suffix.len()
                ),
                suffix,
            }
            .into());
        }
        if let Some(bad) = suffix.bytes().find(|b| !SUFFIX_ALPHABET.contains(b)) {
            return Err(CodecError::InvalidSuffix {
                reason: format!("{:?} is not a suffix character", char::from(bad)),
                suffix,
            }
            .into());
        }
        Ok(suffix)
    }

    fn layer(&self, subkey: &str, suffix: &str) -> String {
        let mut key = String::with_capacity(subkey.len() + self.config.layer_length());
        key.push_str(subkey);
        key.push(SUFFIX_SEPARATOR);
        key.push_str(suffix);
        key
    }
}

/// Generates a key strictly between `lower` and `upper` with the default codec.
///
/// See [`KeyCodec::generate_between`].
pub fn generate_between(lower: Option<&str>, upper: Option<&str>) -> Result<String> {
    KeyCodec::new().generate_between(lower, upper)
}

/// Returns the ordering part of `key` under the default suffix layer.
///
/// See [`KeyCodec::subkey`].
pub fn subkey(key: &str) -> &str {
    let layer = CodecConfig::default().layer_length();
    if key.len() > layer {
        key.get(..key.len() - layer).unwrap_or(key)
    } else {
        key
    }
}
