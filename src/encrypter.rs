//! The public entry point: an [`Encrypter`] binds a key and radix, and
//! exposes `encrypt`/`decrypt` over [`Numeral`] plaintexts and ciphertexts.

use crate::aes::Aes128Adapter;
use crate::alphabet;
use crate::error::{Error, Result};
use crate::feistel;
use crate::numeral::Numeral;
use crate::prf::{self, PCache};

const MIN_LEN: usize = 2;

/// Binds a 16-byte key and a radix. Owns the AES key schedule and a cache of
/// per-length `P` prefixes; both are pure memoisation, so an `Encrypter` is
/// safe to share across threads (`encrypt`/`decrypt` take `&self`).
pub struct Encrypter {
    radix: u32,
    aes: Aes128Adapter,
    cache: PCache,
}

impl Encrypter {
    /// Builds an encrypter over the given 16-byte key and radix.
    ///
    /// Fails with [`Error::InvalidRadix`] unless `2 <= radix <= 36`, or
    /// [`Error::KeyWrongSize`] unless the key is exactly 16 bytes.
    pub fn new(key: &[u8], radix: u32) -> Result<Self> {
        alphabet::validate_radix(radix)?;
        let aes = Aes128Adapter::new(key)?;
        Ok(Encrypter {
            radix,
            aes,
            cache: PCache::new(),
        })
    }

    /// The radix this encrypter operates over.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Encrypts `plaintext` under `tweak` (pass `None` for no tweak).
    ///
    /// Fails with [`Error::LengthTooShort`] if `plaintext` has fewer than 2
    /// digits, or [`Error::RadixMismatch`] if a supplied tweak's radix
    /// disagrees with this encrypter's.
    pub fn encrypt(&self, tweak: Option<&Numeral>, plaintext: &Numeral) -> Result<Numeral> {
        self.check(tweak, plaintext)?;
        let tweak_digits = tweak_digit_string(tweak);
        let n = plaintext.len();
        Ok(feistel::encrypt(plaintext, |round, b| {
            prf::compute(&self.aes, &self.cache, self.radix, n, &tweak_digits, round, b)
        }))
    }

    /// Decrypts `ciphertext` under `tweak` (pass `None` for no tweak).
    ///
    /// Same preconditions as [`Encrypter::encrypt`].
    pub fn decrypt(&self, tweak: Option<&Numeral>, ciphertext: &Numeral) -> Result<Numeral> {
        self.check(tweak, ciphertext)?;
        let tweak_digits = tweak_digit_string(tweak);
        let n = ciphertext.len();
        Ok(feistel::decrypt(ciphertext, |round, b| {
            prf::compute(&self.aes, &self.cache, self.radix, n, &tweak_digits, round, b)
        }))
    }

    fn check(&self, tweak: Option<&Numeral>, message: &Numeral) -> Result<()> {
        if message.radix() != self.radix {
            return Err(Error::RadixMismatch {
                tweak_radix: message.radix(),
                message_radix: self.radix,
            });
        }
        if message.len() < MIN_LEN {
            return Err(Error::LengthTooShort { len: message.len() });
        }
        if let Some(t) = tweak {
            if t.radix() != self.radix {
                return Err(Error::RadixMismatch {
                    tweak_radix: t.radix(),
                    message_radix: self.radix,
                });
            }
        }
        Ok(())
    }
}

/// The tweak's digit string in its original input case, for `Q`-construction
/// (`prf::compute` is case-sensitive here; see [`Numeral::raw_digits`]).
fn tweak_digit_string(tweak: Option<&Numeral>) -> String {
    match tweak {
        Some(t) => t.raw_digits().to_string(),
        None => String::new(),
    }
}
