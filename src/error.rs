//! Error taxonomy for the FFX-A2 engine.

use thiserror::Error;

/// Errors returned by the FFX-A2 engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Radix supplied to [`crate::Encrypter::new`] is outside `[2, 36]`.
    #[error("invalid radix {radix}; must be between 2 and 36")]
    InvalidRadix {
        /// The radix that was rejected.
        radix: u32,
    },

    /// Key supplied to [`crate::Encrypter::new`] is not exactly 16 bytes.
    #[error("key must be exactly 16 bytes, got {len}")]
    KeyWrongSize {
        /// The length of the supplied key, in bytes.
        len: usize,
    },

    /// A character outside the current radix alphabet was encountered
    /// while parsing a numeral string.
    #[error("character '{symbol}' is not a valid digit for radix {radix}")]
    BadSymbol {
        /// The offending character.
        symbol: char,
        /// The radix it was being parsed against.
        radix: u32,
    },

    /// An integer passed to [`crate::Numeral::from_int`] does not fit in
    /// `radix^length`.
    #[error("value {value} does not fit in {length} digit(s) of radix {radix}")]
    ValueOutOfRange {
        /// The out-of-range value, rendered as a decimal string (values can
        /// exceed `u64`/`u128`).
        value: String,
        /// The radix of the target numeral.
        radix: u32,
        /// The declared length of the target numeral.
        length: usize,
    },

    /// A string passed to [`crate::Numeral::from_str`] is longer than the
    /// declared length.
    #[error("numeral string of {actual} digit(s) exceeds declared length {declared}")]
    LengthExceeded {
        /// The declared (maximum) length.
        declared: usize,
        /// The actual length of the supplied string.
        actual: usize,
    },

    /// The tweak and message (or encrypter) radices disagree.
    #[error(
        "tweak radix {tweak_radix} does not match message radix {message_radix}"
    )]
    RadixMismatch {
        /// Radix of the tweak.
        tweak_radix: u32,
        /// Radix of the message (or of the encrypter).
        message_radix: u32,
    },

    /// The message is shorter than the minimum admissible length (2).
    #[error("message length {len} is too short; minimum is 2")]
    LengthTooShort {
        /// The length that was rejected.
        len: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
