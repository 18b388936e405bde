//! The central FFX-A2 value type: an immutable digit string over a fixed
//! radix and declared length.

use std::fmt;

use num_bigint::BigUint;

use crate::alphabet::{self, char_to_digit, digit_to_char};
use crate::codec;
use crate::error::{Error, Result};

/// An immutable digit string of a fixed declared `length` over a fixed
/// `radix`, interpretable as an integer in `[0, radix^length)`.
///
/// Two numerals compare equal when their integer value and length agree
/// (radix is not part of equality, per the value type's contract).
#[derive(Debug, Clone)]
pub struct Numeral {
    radix: u32,
    length: usize,
    value: BigUint,
    /// The digit string in whatever case it was originally supplied
    /// (left-padded with `'0'` to `length`, same as [`Numeral::digit_string`]
    /// but without folding letters to lowercase).
    ///
    /// [`Numeral::digit_string`]/[`Display`](fmt::Display)/equality are all
    /// case-canonical (lowercase) per spec.md §3 — every symbol a caller
    /// sees out of this type is lowercase. This field exists solely so that
    /// a tweak's *original* byte image can be recovered for `Q`-construction:
    /// the FFX-A2 round function keys off the literal bytes the caller
    /// passed in for the tweak, not a case-folded copy of them (confirmed
    /// against `original_source/ffx/encrypter.py`, which never lowercases
    /// its tweak before encoding it into `Q`).
    raw: String,
}

impl Numeral {
    /// Parses `s` as a numeral of the given `radix` and declared `length`.
    ///
    /// Characters are matched case-insensitively against the alphabet
    /// `0-9a-z`. If `s` is shorter than `length` it is treated as
    /// left-padded with `'0'`. Fails with [`Error::BadSymbol`] on an
    /// out-of-alphabet character, or [`Error::LengthExceeded`] if `s` has
    /// more than `length` characters.
    pub fn from_str(s: &str, radix: u32, length: usize) -> Result<Self> {
        alphabet::validate_radix(radix)?;

        let actual = s.chars().count();
        if actual > length {
            return Err(Error::LengthExceeded {
                declared: length,
                actual,
            });
        }

        let mut digits = Vec::with_capacity(actual);
        for c in s.chars() {
            digits.push(char_to_digit(c, radix)? as u8);
        }

        let value = if digits.is_empty() {
            BigUint::from(0u32)
        } else {
            BigUint::from_radix_be(&digits, radix)
                .expect("digits were validated against radix above")
        };

        let mut raw = "0".repeat(length - actual);
        raw.push_str(s);

        Ok(Numeral {
            radix,
            length,
            value,
            raw,
        })
    }

    /// Builds a numeral from a non-negative integer value.
    ///
    /// Fails with [`Error::ValueOutOfRange`] if `v >= radix^length`.
    pub fn from_int<T: Into<BigUint>>(v: T, radix: u32, length: usize) -> Result<Self> {
        alphabet::validate_radix(radix)?;
        let value: BigUint = v.into();

        let limit = BigUint::from(radix).pow(length as u32);
        if value >= limit {
            return Err(Error::ValueOutOfRange {
                value: value.to_string(),
                radix,
                length,
            });
        }

        let raw = canonical_digit_string(&value, radix, length);
        Ok(Numeral {
            radix,
            length,
            value,
            raw,
        })
    }

    pub(crate) fn from_biguint_unchecked(value: BigUint, radix: u32, length: usize) -> Self {
        debug_assert!(value < BigUint::from(radix).pow(length as u32));
        let raw = canonical_digit_string(&value, radix, length);
        Numeral {
            radix,
            length,
            value,
            raw,
        }
    }

    /// The declared length, in digits.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the declared length is zero.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The radix this numeral is defined over.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// The integer value in `[0, radix^length)`.
    pub fn to_int(&self) -> BigUint {
        self.value.clone()
    }

    /// Big-endian image of [`Numeral::to_int`], left-padded with zero
    /// bytes to at least `min_len` bytes (a zero value still yields at
    /// least one byte).
    pub fn to_bytes(&self, min_len: usize) -> Vec<u8> {
        codec::int_to_bytes(&self.value, min_len)
    }

    /// The numeral's digits, most significant first, as an ASCII string
    /// in the canonical (lowercase) alphabet.
    pub(crate) fn digit_string(&self) -> String {
        canonical_digit_string(&self.value, self.radix, self.length)
    }

    /// The numeral's digits, most significant first, in whatever case they
    /// were originally supplied (a numeral built from an integer, or one
    /// produced internally by Feistel arithmetic, has no "original case" to
    /// preserve, so this falls back to the canonical lowercase form).
    ///
    /// Used only for the tweak's byte image in `Q`-construction
    /// (spec.md §4.D): the round function is sensitive to the tweak's
    /// literal input bytes, not a case-folded copy of them.
    pub(crate) fn raw_digits(&self) -> &str {
        &self.raw
    }

    /// A numeral of length `j - i` over the same radix, holding the digits
    /// `[i, j)` of this numeral (most significant first).
    ///
    /// Panics if `i > j` or `j > self.len()`, exactly as slicing a `&str`
    /// out of bounds would.
    pub fn slice(&self, i: usize, j: usize) -> Self {
        assert!(i <= j && j <= self.length, "numeral slice out of bounds");

        let canonical = self.digit_string();
        let sub_canonical: String = canonical.chars().skip(i).take(j - i).collect();
        let sub_raw: String = self.raw.chars().skip(i).take(j - i).collect();

        let value = if sub_canonical.is_empty() {
            BigUint::from(0u32)
        } else {
            let digits: Vec<u8> = sub_canonical
                .chars()
                .map(|c| char_to_digit(c, self.radix).expect("digit of a valid numeral") as u8)
                .collect();
            BigUint::from_radix_be(&digits, self.radix)
                .expect("digits of a valid numeral are themselves valid")
        };

        Numeral {
            radix: self.radix,
            length: j - i,
            value,
            raw: sub_raw,
        }
    }

    /// Concatenates `a` and `b` into a single numeral of length
    /// `a.len() + b.len()`. Fails with [`Error::RadixMismatch`] if the two
    /// operands don't share a radix.
    pub fn concat(a: &Self, b: &Self) -> Result<Self> {
        if a.radix != b.radix {
            return Err(Error::RadixMismatch {
                tweak_radix: b.radix,
                message_radix: a.radix,
            });
        }

        let shifted = &a.value * BigUint::from(a.radix).pow(b.length as u32);
        let mut raw = a.raw.clone();
        raw.push_str(&b.raw);
        Ok(Numeral {
            radix: a.radix,
            length: a.length + b.length,
            value: shifted + &b.value,
            raw,
        })
    }
}

/// Shared canonicalization: digits of `value` at `length` digits in `radix`,
/// left-padded with `'0'`, rendered lowercase.
fn canonical_digit_string(value: &BigUint, radix: u32, length: usize) -> String {
    let digits = if *value == BigUint::from(0u32) {
        Vec::new()
    } else {
        value.to_radix_be(radix)
    };

    let mut padded = vec![0u8; length.saturating_sub(digits.len())];
    padded.extend_from_slice(&digits);

    padded
        .into_iter()
        .map(|d| digit_to_char(d as u32, radix))
        .collect()
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digit_string())
    }
}

impl PartialEq for Numeral {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.length == other.length
    }
}

impl Eq for Numeral {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_pads_short_strings() {
        let n = Numeral::from_str("42", 10, 6).unwrap();
        assert_eq!(n.to_string(), "000042");
    }

    #[test]
    fn rejects_strings_longer_than_declared_length() {
        assert!(Numeral::from_str("12345", 10, 3).is_err());
    }

    #[test]
    fn rejects_bad_symbol() {
        assert!(Numeral::from_str("12x45", 10, 5).is_err());
    }

    #[test]
    fn case_insensitive_parse_lowercase_output() {
        let n = Numeral::from_str("C4XPWULBM3M863JH", 36, 16).unwrap();
        assert_eq!(n.to_string(), "c4xpwulbm3m863jh");
    }

    #[test]
    fn from_int_rejects_out_of_range() {
        assert!(Numeral::from_int(100u32, 10, 2).is_err());
        assert!(Numeral::from_int(99u32, 10, 2).is_ok());
    }

    #[test]
    fn slice_and_concat_round_trip() {
        let n = Numeral::from_str("0123456789", 10, 10).unwrap();
        let a = n.slice(0, 5);
        let b = n.slice(5, 10);
        assert_eq!(a.to_string(), "01234");
        assert_eq!(b.to_string(), "56789");

        let joined = Numeral::concat(&a, &b).unwrap();
        assert_eq!(joined, n);
    }

    #[test]
    fn slice_with_nonzero_start() {
        let n = Numeral::from_str("abcdef", 36, 6).unwrap();
        assert_eq!(n.slice(2, 4).to_string(), "cd");
    }

    #[test]
    fn concat_rejects_radix_mismatch() {
        let a = Numeral::from_str("1", 10, 1).unwrap();
        let b = Numeral::from_str("1", 16, 1).unwrap();
        assert!(Numeral::concat(&a, &b).is_err());
    }

    #[test]
    fn equality_ignores_radix() {
        let a = Numeral::from_int(5u32, 10, 1).unwrap();
        let b = Numeral::from_int(5u32, 8, 1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_key_numeral_serializes_to_sixteen_zero_bytes() {
        let key = Numeral::from_str(&"0".repeat(128), 2, 128).unwrap();
        assert_eq!(key.to_bytes(16), vec![0u8; 16]);
    }

    #[test]
    fn raw_digits_preserve_original_case_while_display_stays_lowercase() {
        let n = Numeral::from_str("TQF9J5QDAGSCSPB1", 36, 16).unwrap();
        assert_eq!(n.raw_digits(), "TQF9J5QDAGSCSPB1");
        assert_eq!(n.to_string(), "tqf9j5qdagscspb1");
    }

    #[test]
    fn raw_digits_are_left_padded_like_the_canonical_form() {
        let n = Numeral::from_str("Ab", 36, 4).unwrap();
        assert_eq!(n.raw_digits(), "00Ab");
    }

    #[test]
    fn slice_preserves_raw_case_of_the_selected_range() {
        let n = Numeral::from_str("AbCdEf", 36, 6).unwrap();
        assert_eq!(n.slice(2, 4).raw_digits(), "Cd");
    }

    #[test]
    fn concat_preserves_raw_case_of_both_operands() {
        let a = Numeral::from_str("Ab", 36, 2).unwrap();
        let b = Numeral::from_str("cD", 36, 2).unwrap();
        assert_eq!(Numeral::concat(&a, &b).unwrap().raw_digits(), "AbcD");
    }

    #[test]
    fn values_built_without_original_text_fall_back_to_canonical_raw() {
        let n = Numeral::from_int(10u32, 36, 2).unwrap();
        assert_eq!(n.raw_digits(), "0a");
    }
}
