//! AES-128 adapter: single-block "ECB" encryption and CBC-MAC, both built
//! on the same CBC primitive with a fixed zero IV — a lone CBC-encrypted
//! block is indistinguishable from an ECB-encrypted one, so there is no
//! need for a second cipher type just for single blocks.

use aes::cipher::{BlockEncryptMut, KeyIvInit};
use aes::Aes128;

use crate::error::{Error, Result};

pub(crate) const BLOCK_SIZE: usize = 16;

const ZERO_IV: &[u8] = &[0u8; BLOCK_SIZE];

#[derive(Clone)]
pub(crate) struct Aes128Adapter {
    key: [u8; BLOCK_SIZE],
}

impl Aes128Adapter {
    pub(crate) fn new(key: &[u8]) -> Result<Self> {
        if key.len() != BLOCK_SIZE {
            return Err(Error::KeyWrongSize { len: key.len() });
        }

        let mut k = [0u8; BLOCK_SIZE];
        k.copy_from_slice(key);
        Ok(Aes128Adapter { key: k })
    }

    fn fresh_cbc(&self) -> cbc::Encryptor<Aes128> {
        cbc::Encryptor::<Aes128>::new(self.key[..].into(), ZERO_IV.into())
    }

    /// AES-128 ECB encryption of a single 16-byte block, via a freshly
    /// keyed CBC encryptor with a zero IV.
    pub(crate) fn ecb_encrypt(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut out = [0u8; BLOCK_SIZE];
        self.fresh_cbc().encrypt_block_b2b_mut(block[..].into(), (&mut out[..]).into());
        out
    }

    /// CBC-MAC with a zero IV: CBC-encrypts `data` (whose length must be a
    /// positive multiple of 16) and returns the last ciphertext block.
    ///
    /// This is used only internally as a keyed PRF over a fixed-length-
    /// multiple input; it must not be exposed to callers as a general MAC.
    pub(crate) fn cbc_mac(&self, data: &[u8]) -> [u8; BLOCK_SIZE] {
        assert!(
            !data.is_empty() && data.len() % BLOCK_SIZE == 0,
            "cbc_mac input must be a positive multiple of 16 bytes, got {}",
            data.len()
        );

        let mut enc = self.fresh_cbc();
        let mut last = [0u8; BLOCK_SIZE];
        for chunk in data.chunks(BLOCK_SIZE) {
            enc.encrypt_block_b2b_mut(chunk.into(), (&mut last[..]).into());
        }
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_key_size() {
        assert!(Aes128Adapter::new(&[0u8; 15]).is_err());
        assert!(Aes128Adapter::new(&[0u8; 16]).is_ok());
    }

    #[test]
    fn cbc_mac_of_one_block_equals_ecb_encrypt() {
        let adapter = Aes128Adapter::new(&[0u8; 16]).unwrap();
        let block = [0u8; 16];
        assert_eq!(adapter.cbc_mac(&block), adapter.ecb_encrypt(&block));
    }

    #[test]
    fn cbc_mac_is_deterministic() {
        let adapter = Aes128Adapter::new(&[0u8; 16]).unwrap();
        let data = [1u8; 32];
        assert_eq!(adapter.cbc_mac(&data), adapter.cbc_mac(&data));
    }

    #[test]
    #[should_panic]
    fn cbc_mac_rejects_non_block_multiple() {
        let adapter = Aes128Adapter::new(&[0u8; 16]).unwrap();
        adapter.cbc_mac(&[0u8; 5]);
    }
}
