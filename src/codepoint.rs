//! Codepoint codec
//!
//! Converts between a single Unicode scalar value and its numeric codepoint.

use crate::error::Error;

/// Maximum number of input bytes echoed back in an error message.
const ERROR_INPUT_PREVIEW: usize = 16;

/// Return the numeric codepoint of a string holding exactly one scalar value.
///
/// Grapheme clusters made of several scalars (e.g. a letter plus a combining
/// accent) are rejected, as is the empty string.
///
/// ```
/// assert_eq!(strkit::codepoint_of("©").unwrap(), 0xA9);
/// assert!(strkit::codepoint_of("ab").is_err());
/// ```
pub fn codepoint_of(input: &str) -> Result<u32, Error> {
    let mut chars = input.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(c as u32);
    }

    Err(Error::InvalidCharacter {
        input: input.chars().take(ERROR_INPUT_PREVIEW).collect(),
        scalars: input.chars().count(),
    })
}

/// Return the character for a codepoint.
///
/// Fails for values above U+10FFFF and for the surrogate block
/// U+D800..=U+DFFF, which are not scalar values.
///
/// ```
/// assert_eq!(strkit::character_of(0x44B).unwrap(), 'ы');
/// assert!(strkit::character_of(0xD800).is_err());
/// ```
pub fn character_of(code: u32) -> Result<char, Error> {
    char::from_u32(code).ok_or(Error::InvalidCodepoint { code })
}
