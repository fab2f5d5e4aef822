//! Error types for the fallible conversions.
//!
//! Only the codepoint codec can fail; every other transformation in this
//! crate is total over its documented input domain.

/// Errors produced by [`crate::codepoint`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input was not exactly one Unicode scalar value.
    #[error("expected exactly one character, got {scalars} in {input:?}")]
    InvalidCharacter {
        /// The offending input, truncated for display.
        input: String,
        /// Number of scalar values found.
        scalars: usize,
    },

    /// The value is outside the Unicode scalar range or a surrogate.
    #[error("U+{code:04X} is not a valid Unicode scalar value")]
    InvalidCodepoint {
        /// The rejected codepoint value.
        code: u32,
    },
}
