//! Rotation key handling: range validation, strtoul-style parsing of the CLI
//! argument, and the one-byte header encoding (`'a'` = 1 … `'z'` = 26).

use crate::error::CodecError;

/// Offset that maps 1..=26 onto `'a'..='z'` in the `.cdc` header.
const HEADER_OFFSET: u8 = 96;

/// A rotation amount known to be in 1..=26 — except when it came from a
/// foreign `.cdc` header, which is trusted as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Key(u8);

impl Key {
    /// Validate a parsed key. Anything outside 1..=26 is rejected, before
    /// any file is opened or created.
    pub fn new(value: u64) -> Result<Self, CodecError> {
        if (1..=26).contains(&value) {
            Ok(Key(value as u8))
        } else {
            Err(CodecError::InvalidKey(value))
        }
    }

    /// The header byte: the key written as a lowercase letter.
    pub fn to_header_byte(self) -> u8 {
        self.0 + HEADER_OFFSET
    }

    /// Read a key back from a header byte. The byte is not re-validated; a
    /// corrupted or foreign header yields a garbage key and garbage output.
    pub fn from_header_byte(byte: u8) -> Self {
        Key(byte.wrapping_sub(HEADER_OFFSET))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Parse the key argument the way `strtoul` does: consume leading decimal
/// digits and stop at the first non-digit. No digits parses as 0 and an
/// overlong digit string saturates; both fall to the range check.
pub fn parse_key(arg: &str) -> Result<Key, CodecError> {
    let digits: &str = arg
        .split_once(|c: char| !c.is_ascii_digit())
        .map_or(arg, |(head, _)| head);
    let value = if digits.is_empty() {
        0
    } else {
        digits.parse::<u64>().unwrap_or(u64::MAX)
    };
    Key::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_full_range() {
        for k in 1..=26u64 {
            assert_eq!(Key::new(k).unwrap().value(), k as u8);
        }
    }

    #[test]
    fn rejects_zero_and_twenty_seven() {
        assert!(matches!(Key::new(0), Err(CodecError::InvalidKey(0))));
        assert!(matches!(Key::new(27), Err(CodecError::InvalidKey(27))));
    }

    #[test]
    fn header_byte_is_a_lowercase_letter() {
        assert_eq!(Key::new(1).unwrap().to_header_byte(), b'a');
        assert_eq!(Key::new(26).unwrap().to_header_byte(), b'z');
        assert_eq!(Key::from_header_byte(b'm').value(), 13);
    }

    #[test]
    fn foreign_header_byte_is_trusted_as_is() {
        // 'A' was never a valid header, but decode does not re-validate
        assert_eq!(Key::from_header_byte(b'A').value(), b'A'.wrapping_sub(96));
    }

    #[test]
    fn parses_like_strtoul() {
        assert_eq!(parse_key("3").unwrap().value(), 3);
        assert_eq!(parse_key("26").unwrap().value(), 26);
        // trailing junk stops the parse, digits before it still count
        assert_eq!(parse_key("7abc").unwrap().value(), 7);
        assert!(parse_key("abc").is_err()); // no digits -> 0 -> rejected
        assert!(parse_key("").is_err());
        assert!(parse_key("0").is_err());
        assert!(parse_key("27").is_err());
        assert!(parse_key("99999999999999999999999").is_err()); // saturates
    }
}
