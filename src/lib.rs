//! FFX-A2: a format-preserving encryption engine over AES-128.
//!
//! FFX-A2 is a 10-round, addition-combining, maximally-balanced Feistel
//! construction that lets a fixed-radix numeral string (radix 2 through 36)
//! be encrypted back into a numeral string of the same length and radix —
//! a credit-card-shaped input stays credit-card-shaped, a hex string stays
//! hex. It is bijective for a fixed `(key, tweak, length)`: no two distinct
//! plaintexts of the same length collide under the same tweak.
//!
//! ```
//! use ffx_a2::{Encrypter, Numeral};
//!
//! let key = [0u8; 16];
//! let enc = Encrypter::new(&key, 10).unwrap();
//!
//! let plaintext = Numeral::from_str("0123456789", 10, 10).unwrap();
//! let ciphertext = enc.encrypt(None, &plaintext).unwrap();
//! let decrypted = enc.decrypt(None, &ciphertext).unwrap();
//!
//! assert_eq!(decrypted, plaintext);
//! ```
//!
//! AES-128 itself is treated as a trusted primitive; this crate supplies no
//! key generation, key storage, or authenticity guarantees — a tampered
//! ciphertext decrypts to *some* plaintext of the right shape, not an error.

mod aes;
mod alphabet;
mod codec;
mod encrypter;
mod error;
mod feistel;
mod numeral;
mod prf;

pub use alphabet::{MAX_RADIX, MIN_RADIX};
pub use encrypter::Encrypter;
pub use error::{Error, Result};
pub use numeral::Numeral;

/// The sentinel "no tweak" value: a tweak of digit length 0 and empty byte
/// image. Equivalent to passing `None` to [`Encrypter::encrypt`] /
/// [`Encrypter::decrypt`] — provided for call sites that prefer a named
/// constant over an `Option::None` literal.
pub const NO_TWEAK: Option<&'static Numeral> = None;
