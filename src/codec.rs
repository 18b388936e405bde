//! Big-endian byte/integer conversions with explicit minimum-length padding.
//!
//! Mirrors `long_to_bytes`/`bytes_to_long` from the FFX reference
//! implementation: a zero value still serializes to `min_len` bytes rather
//! than the empty string.

use num_bigint::BigUint;

/// Big-endian unsigned encoding of `n`, left-padded with zero bytes to at
/// least `min_len` bytes.
pub(crate) fn int_to_bytes(n: &BigUint, min_len: usize) -> Vec<u8> {
    let body = n.to_bytes_be();
    let target = min_len.max(body.len()).max(1);

    if body == [0u8] && target == 1 {
        return body;
    }

    let mut out = vec![0u8; target - body.len()];
    out.extend_from_slice(&body);
    out
}

/// Big-endian unsigned decoding.
pub(crate) fn bytes_to_int(bs: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pads_to_min_len() {
        let n = BigUint::from(0u32);
        assert_eq!(int_to_bytes(&n, 4), vec![0, 0, 0, 0]);
        assert_eq!(int_to_bytes(&n, 1), vec![0]);
    }

    #[test]
    fn encodes_65536_as_three_bytes() {
        let n = BigUint::from(65536u32);
        assert_eq!(int_to_bytes(&n, 0), vec![0x01, 0x00, 0x00]);
    }

    #[test]
    fn pads_non_zero_value() {
        let n = BigUint::from(1u32);
        assert_eq!(int_to_bytes(&n, 4), vec![0, 0, 0, 1]);
    }

    #[test]
    fn min_len_is_a_floor_not_a_cap() {
        let n = BigUint::from(0x0102_0304u32);
        assert_eq!(int_to_bytes(&n, 1), vec![0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn round_trips() {
        let n = BigUint::from(9037450980398204379409345039453045723049u128);
        let bs = int_to_bytes(&n, 0);
        assert_eq!(bytes_to_int(&bs), n);
    }
}
