//! Constants used throughout the lexorder library.
//!
//! This module provides central definitions for the key alphabets and the
//! fixed shape of the layered key format.

/// Digits of the base-62 key scheme, in ascending byte order.
pub const BASE_62_DIGITS: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Alphabet for random key suffixes.
///
/// Excludes `'0'` so a suffix never ends in the zero digit and the layered key
/// stays a valid base-62 key.
pub const SUFFIX_ALPHABET: &[u8; 61] =
    b"123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Separator placed between a subkey and its random suffix.
pub const SUFFIX_SEPARATOR: char = '0';

/// Default length of the random suffix.
pub const DEFAULT_SUFFIX_LENGTH: usize = 32;

/// Key returned by the base primitive when neither bound is present.
pub const INITIAL_KEY: &str = "a0";

/// Number of integer digits after the head character of the smallest integer part.
pub const MAX_INTEGER_DIGITS: usize = 26;
