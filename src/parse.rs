use core::str::FromStr;

use thiserror::Error;

use crate::bitfield::{BitField, WIDTH};

/// Error returned when parsing a [`BitField`] from its string form fails.
///
/// Every variant carries the byte offset of the offending token.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseBitFieldError {
    /// Two separators in a row, or a leading or trailing separator.
    #[error("empty position at byte {offset}")]
    EmptyToken {
        /// Byte offset of the empty token.
        offset: usize,
    },
    /// A token containing anything other than ASCII digits.
    #[error("invalid position at byte {offset}")]
    InvalidToken {
        /// Byte offset of the first byte of the token.
        offset: usize,
    },
    /// A well-formed number that does not fit in `0..=63`.
    #[error("position at byte {offset} out of range")]
    OutOfRange {
        /// Byte offset of the first byte of the token.
        offset: usize,
    },
}

/// Parses the space-separated form written by [`BitField`]'s `Display`.
///
/// The empty string is the empty field. Positions are unsigned decimals
/// below 64, separated by exactly one ASCII space. Order does not matter
/// and repeats are accepted.
///
/// # Examples
/// ```
/// use bitfield64::{BitField, ParseBitFieldError};
///
/// assert_eq!("1 3 5".parse::<BitField>(), Ok(BitField::of(&[1, 3, 5])));
/// assert_eq!("".parse::<BitField>(), Ok(BitField::EMPTY));
/// assert_eq!(
///     "1  3".parse::<BitField>(),
///     Err(ParseBitFieldError::EmptyToken { offset: 2 })
/// );
/// assert_eq!(
///     "1 64".parse::<BitField>(),
///     Err(ParseBitFieldError::OutOfRange { offset: 2 })
/// );
/// ```
impl FromStr for BitField {
    type Err = ParseBitFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::EMPTY);
        }

        let mut field = Self::EMPTY;
        let mut offset = 0;
        for token in s.split(' ') {
            field = field.set(parse_position(token, offset)?);
            offset += token.len() + 1;
        }
        Ok(field)
    }
}

fn parse_position(token: &str, offset: usize) -> Result<usize, ParseBitFieldError> {
    if token.is_empty() {
        return Err(ParseBitFieldError::EmptyToken { offset });
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseBitFieldError::InvalidToken { offset });
    }
    // digits only, so the only possible failure is overflow
    match token.parse::<usize>() {
        Ok(n) if n < WIDTH => Ok(n),
        _ => Err(ParseBitFieldError::OutOfRange { offset }),
    }
}
