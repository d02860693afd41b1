//! Base-62 variable-length-integer keys.
//!
//! A key is an *integer part* followed by an optional *fraction part*. The
//! head character of the integer part encodes how many digits follow it:
//! `a..=z` are non-negative integers with 1 to 26 digits, `A..=Z` are negative
//! integers with 26 down to 1 digits. Appending and prepending walk the integer
//! space, so keys stay short for the common "add at the end" case; inserting
//! between two keys with the same integer part takes a fraction midpoint.

use tracing::trace;

use super::{BaseBetween, BaseError};
use crate::Result;
use crate::constants::{BASE_62_DIGITS, INITIAL_KEY, MAX_INTEGER_DIGITS};

const ZERO: u8 = BASE_62_DIGITS[0];
const LAST: u8 = BASE_62_DIGITS[BASE_62_DIGITS.len() - 1];

/// Base key primitive over the digits `0-9A-Za-z`.
///
/// # Examples
///
/// ```
/// use lexorder::{Base62Digits, BaseBetween};
///
/// let base = Base62Digits::new();
/// assert_eq!(base.between(None, None).unwrap(), "a0");
/// assert_eq!(base.between(Some("a0"), None).unwrap(), "a1");
/// assert_eq!(base.between(Some("a0"), Some("a1")).unwrap(), "a0V");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Base62Digits;

impl Base62Digits {
    /// Creates the base-62 primitive.
    pub fn new() -> Self {
        Self
    }

    /// The integer part that sorts before every other one. Not a valid key by itself.
    fn smallest_integer() -> String {
        let mut smallest = String::with_capacity(MAX_INTEGER_DIGITS + 1);
        smallest.push('A');
        smallest.extend(std::iter::repeat_n(char::from(ZERO), MAX_INTEGER_DIGITS));
        smallest
    }

    fn integer_length(key: &str) -> Result<usize> {
        match key.as_bytes().first() {
            Some(&head @ b'a'..=b'z') => Ok(usize::from(head - b'a') + 2),
            Some(&head @ b'A'..=b'Z') => Ok(usize::from(b'Z' - head) + 2),
            _ => Err(invalid_key(key, "integer part must start with a letter")),
        }
    }

    fn integer_part(key: &str) -> Result<&str> {
        let length = Self::integer_length(key)?;
        if length > key.len() {
            return Err(invalid_key(key, "integer part is truncated"));
        }
        Ok(&key[..length])
    }

    /// Next integer up, or `None` once the largest integer is reached.
    fn increment_integer(integer: &str) -> Option<String> {
        let (head, digits) = integer.as_bytes().split_first()?;
        let mut head = *head;
        let mut digits = digits.to_vec();

        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            let next = digit_value(*digit) + 1;
            if next == BASE_62_DIGITS.len() {
                *digit = ZERO;
            } else {
                *digit = BASE_62_DIGITS[next];
                carry = false;
                break;
            }
        }

        if carry {
            match head {
                b'Z' => return Some(format!("a{}", char::from(ZERO))),
                b'z' => return None,
                _ => {}
            }
            head += 1;
            if head > b'a' {
                digits.push(ZERO);
            } else {
                digits.pop();
            }
        }

        Some(assemble(head, &digits))
    }

    /// Next integer down, or `None` once the smallest integer is reached.
    fn decrement_integer(integer: &str) -> Option<String> {
        let (head, digits) = integer.as_bytes().split_first()?;
        let mut head = *head;
        let mut digits = digits.to_vec();

        let mut borrow = true;
        for digit in digits.iter_mut().rev() {
            let value = digit_value(*digit);
            if value == 0 {
                *digit = LAST;
            } else {
                *digit = BASE_62_DIGITS[value - 1];
                borrow = false;
                break;
            }
        }

        if borrow {
            match head {
                b'a' => return Some(format!("Z{}", char::from(LAST))),
                b'A' => return None,
                _ => {}
            }
            head -= 1;
            if head < b'Z' {
                digits.push(LAST);
            } else {
                digits.pop();
            }
        }

        Some(assemble(head, &digits))
    }

    /// Shortest fraction strictly between `lower` and `upper`, appended to `out`.
    ///
    /// Fractions compare as if padded with zeros, so neither bound may end in `'0'`.
    fn midpoint(lower: &[u8], upper: Option<&[u8]>, out: &mut String) -> Result<()> {
        if upper.is_some_and(|upper| lower >= upper) {
            return Err(BaseError::InvalidBounds {
                lower: String::from_utf8_lossy(lower).into_owned(),
                upper: String::from_utf8_lossy(upper.unwrap_or_default()).into_owned(),
            }
            .into());
        }
        let trailing_zero = [Some(lower), upper]
            .into_iter()
            .flatten()
            .find(|fraction| fraction.last() == Some(&ZERO));
        if let Some(fraction) = trailing_zero {
            return Err(BaseError::InvalidKey {
                key: String::from_utf8_lossy(fraction).into_owned(),
                reason: "fraction ends with '0'".to_string(),
            }
            .into());
        }

        if let Some(upper) = upper {
            let shared = upper
                .iter()
                .enumerate()
                .take_while(|(i, digit)| lower.get(*i).copied().unwrap_or(ZERO) == **digit)
                .count();
            if shared > 0 {
                out.extend(upper[..shared].iter().copied().map(char::from));
                return Self::midpoint(
                    lower.get(shared..).unwrap_or_default(),
                    Some(&upper[shared..]),
                    out,
                );
            }
        }

        let digit_lower = lower.first().map_or(0, |&d| digit_value(d));
        let digit_upper = upper
            .and_then(<[u8]>::first)
            .map_or(BASE_62_DIGITS.len(), |&d| digit_value(d));

        if digit_upper > digit_lower + 1 {
            let middle = (digit_lower + digit_upper).div_ceil(2);
            out.push(char::from(BASE_62_DIGITS[middle]));
            return Ok(());
        }

        match upper {
            Some(upper) if upper.len() > 1 => {
                out.push(char::from(upper[0]));
                Ok(())
            }
            _ => {
                out.push(char::from(BASE_62_DIGITS[digit_lower]));
                Self::midpoint(lower.get(1..).unwrap_or_default(), None, out)
            }
        }
    }

    fn split(key: &str) -> Result<(&str, &str)> {
        let integer = Self::integer_part(key)?;
        Ok((integer, &key[integer.len()..]))
    }

    fn with_fraction(integer: &str, lower: &str, upper: Option<&str>) -> Result<String> {
        let mut key = integer.to_string();
        Self::midpoint(lower.as_bytes(), upper.map(str::as_bytes), &mut key)?;
        Ok(key)
    }
}

impl BaseBetween for Base62Digits {
    fn validate(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(invalid_key(key, "key is empty"));
        }
        if let Some(bad) = key.bytes().find(|b| !BASE_62_DIGITS.contains(b)) {
            return Err(invalid_key(
                key,
                &format!("{:?} is not a base-62 digit", char::from(bad)),
            ));
        }
        if key == Self::smallest_integer() {
            return Err(invalid_key(key, "reserved smallest integer"));
        }
        let (_, fraction) = Self::split(key)?;
        if fraction.as_bytes().last() == Some(&ZERO) {
            return Err(invalid_key(key, "fraction ends with '0'"));
        }
        Ok(())
    }

    fn between(&self, lower: Option<&str>, upper: Option<&str>) -> Result<String> {
        if let Some(lower) = lower {
            self.validate(lower)?;
        }
        if let Some(upper) = upper {
            self.validate(upper)?;
        }
        if let (Some(lower), Some(upper)) = (lower, upper) {
            if lower >= upper {
                return Err(BaseError::InvalidBounds {
                    lower: lower.to_string(),
                    upper: upper.to_string(),
                }
                .into());
            }
        }

        let key = match (lower, upper) {
            (None, None) => INITIAL_KEY.to_string(),
            (None, Some(upper)) => {
                let (integer, fraction) = Self::split(upper)?;
                if integer == Self::smallest_integer() {
                    Self::with_fraction(integer, "", Some(fraction))?
                } else if integer < upper {
                    integer.to_string()
                } else {
                    Self::decrement_integer(integer).ok_or_else(|| BaseError::Exhausted {
                        key: upper.to_string(),
                    })?
                }
            }
            (Some(lower), None) => {
                let (integer, fraction) = Self::split(lower)?;
                match Self::increment_integer(integer) {
                    Some(next) => next,
                    None => Self::with_fraction(integer, fraction, None)?,
                }
            }
            (Some(lower), Some(upper)) => {
                let (lower_integer, lower_fraction) = Self::split(lower)?;
                let (upper_integer, upper_fraction) = Self::split(upper)?;
                if lower_integer == upper_integer {
                    Self::with_fraction(lower_integer, lower_fraction, Some(upper_fraction))?
                } else {
                    let next = Self::increment_integer(lower_integer).ok_or_else(|| {
                        BaseError::Exhausted {
                            key: lower.to_string(),
                        }
                    })?;
                    if next.as_str() < upper {
                        next
                    } else {
                        Self::with_fraction(lower_integer, lower_fraction, None)?
                    }
                }
            }
        };

        trace!(?lower, ?upper, %key, "Generated base key");
        Ok(key)
    }
}

/// Position of a validated digit in [`BASE_62_DIGITS`].
fn digit_value(digit: u8) -> usize {
    match digit {
        b'0'..=b'9' => usize::from(digit - b'0'),
        b'A'..=b'Z' => usize::from(digit - b'A') + 10,
        b'a'..=b'z' => usize::from(digit - b'a') + 36,
        _ => 0,
    }
}

fn assemble(head: u8, digits: &[u8]) -> String {
    std::iter::once(head)
        .chain(digits.iter().copied())
        .map(char::from)
        .collect()
}

fn invalid_key(key: &str, reason: &str) -> crate::Error {
    BaseError::InvalidKey {
        key: key.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
