//! The FFX-A2 round function `F`: assembles the per-round `P`/`Q` blocks,
//! runs them through AES-CBC-MAC, optionally extends the MAC output with
//! AES-ECB counter blocks, and reduces the result modulo `radix^m`.

use std::collections::HashMap;
use std::sync::RwLock;

use num_bigint::BigUint;

use crate::aes::{Aes128Adapter, BLOCK_SIZE};
use crate::codec;
use crate::numeral::Numeral;

/// Cache key: every value baked into the `P` prefix for a given message —
/// message length, radix, and tweak digit length. Radix is constant for a
/// given [`crate::Encrypter`], but is included because it is, per the
/// layout, one of the fields `P` encodes.
type PCacheKey = (usize, u32, usize);

/// Memoises the 16-byte `P` prefix per `(n, radix, t)`. Safe for concurrent
/// read-mostly use: two threads racing to compute the same entry both
/// compute the same bytes, so a plain insert-or-replace is sufficient —
/// there is no need for a more elaborate synchronization scheme.
pub(crate) struct PCache(RwLock<HashMap<PCacheKey, [u8; BLOCK_SIZE]>>);

impl PCache {
    pub(crate) fn new() -> Self {
        PCache(RwLock::new(HashMap::new()))
    }

    fn get_or_build(&self, n: usize, radix: u32, t: usize) -> [u8; BLOCK_SIZE] {
        let key = (n, radix, t);

        if let Some(p) = self.0.read().expect("P-cache lock poisoned").get(&key) {
            return *p;
        }

        let p = build_p(n, radix, t);
        self.0
            .write()
            .expect("P-cache lock poisoned")
            .insert(key, p);
        p
    }
}

fn build_p(n: usize, radix: u32, t: usize) -> [u8; BLOCK_SIZE] {
    let mut p = [0u8; BLOCK_SIZE];
    p[0] = 0x01; // version
    p[1] = 0x02; // method = FFX-A2
    p[2] = 0x01; // addblock type = addition
    p[3..6].copy_from_slice(&radix.to_be_bytes()[1..4]);
    p[6] = 0x0A; // always ten rounds
    p[7] = ((n / 2) % 256) as u8;
    p[8..12].copy_from_slice(&(n as u32).to_be_bytes());
    p[12..16].copy_from_slice(&(t as u32).to_be_bytes());
    p
}

/// Number of bytes needed to hold the right half's integer value, i.e. the
/// bit length of `radix^beta - 1`, rounded up to a byte boundary. Computed
/// exactly over `BigUint` rather than via floating-point `log2` so there is
/// no risk of rounding the wrong way at a radix/length boundary.
fn right_half_byte_width(radix: u32, beta: usize) -> usize {
    if beta == 0 {
        return 0;
    }
    let max_value = BigUint::from(radix).pow(beta as u32) - BigUint::from(1u32);
    ((max_value.bits() as usize) + 7) / 8
}

/// Computes `F(n, tweak, round, b)`.
///
/// `tweak_digits` is the tweak's digit string in its *original* input case
/// (not case-folded), or the empty string for no tweak — per the FFX-A2
/// layout, the tweak's byte image used here is the ASCII encoding of that
/// digit string (one byte per digit), not a big-endian integer packing of
/// its value, and case matters: `Q` is built from the literal bytes the
/// caller supplied for the tweak, so e.g. a radix-36 tweak of `"ab"` and one
/// of `"AB"` produce different output. This also makes the tweak's digit
/// count `t` equal to the byte length it contributes to `Q`, which the
/// padding arithmetic below depends on.
pub(crate) fn compute(
    aes: &Aes128Adapter,
    cache: &PCache,
    radix: u32,
    n: usize,
    tweak_digits: &str,
    round: u8,
    b: &Numeral,
) -> BigUint {
    let l = n / 2;
    let m_prime = n - l;
    let m = if round % 2 == 0 { l } else { m_prime };

    let beta = m_prime;
    let b_bytes = right_half_byte_width(radix, beta);
    let d = 4 * ((b_bytes + 3) / 4);

    let tweak_bytes = tweak_digits.as_bytes();
    let t = tweak_bytes.len();

    let p = cache.get_or_build(n, radix, t);

    let pad_len = (-(t as i64) - (b_bytes as i64) - 1).rem_euclid(16) as usize;

    let mut q = Vec::with_capacity(pad_len + 1 + b_bytes + tweak_bytes.len());
    q.extend_from_slice(tweak_bytes);
    q.extend(std::iter::repeat(0u8).take(pad_len));
    q.push(round);

    let b_value = b.to_int();
    let b_encoded = codec::int_to_bytes(&b_value, b_bytes);
    debug_assert_eq!(
        b_encoded.len(),
        b_bytes,
        "right half does not fit in the byte width computed for it"
    );
    q.extend_from_slice(&b_encoded);

    assert_eq!(
        (p.len() + q.len()) % BLOCK_SIZE,
        0,
        "P || Q must be a positive multiple of the AES block size"
    );

    let mut pq = Vec::with_capacity(p.len() + q.len());
    pq.extend_from_slice(&p);
    pq.extend_from_slice(&q);

    let y = aes.cbc_mac(&pq);

    let mut tmp = y.to_vec();
    let mut j: u32 = 1;
    while tmp.len() < d + 4 {
        let y_int = codec::bytes_to_int(&y);
        let x = y_int ^ BigUint::from(j);
        let block = codec::int_to_bytes(&x, BLOCK_SIZE);
        let mut block_arr = [0u8; BLOCK_SIZE];
        block_arr.copy_from_slice(&block[block.len() - BLOCK_SIZE..]);
        tmp.extend_from_slice(&aes.ecb_encrypt(&block_arr));
        j += 1;
    }
    tmp.truncate(d + 4);

    let y_value = codec::bytes_to_int(&tmp);
    y_value % BigUint::from(radix).pow(m as u32)
}
