//! Encryption and decryption, both thin wrappers over modular
//! exponentiation.

use super::errors::{RsaError, RsaResult};
use super::keys::{PrivateKey, PublicKey};
use crate::math::mod_exp;

/// Encrypts `plaintext` under `public_key`: `c = m^e mod n`.
///
/// The plaintext must be smaller than the modulus. Modular exponentiation
/// would silently reduce a larger value to `m mod n` and the original
/// message could never be recovered, so the range is checked here instead
/// of being left to the caller.
pub fn encrypt(plaintext: u64, public_key: &PublicKey) -> RsaResult<u64> {
    if plaintext >= public_key.n {
        return Err(RsaError::PlaintextOutOfRange {
            plaintext,
            modulus: public_key.n,
        });
    }
    Ok(mod_exp(plaintext, public_key.e, public_key.n))
}

/// Decrypts `ciphertext` under `private_key`: `m = c^d mod n`.
pub fn decrypt(ciphertext: u64, private_key: &PrivateKey) -> u64 {
    mod_exp(ciphertext, private_key.d, private_key.n)
}

impl PublicKey {
    /// Method form of [`encrypt`].
    pub fn encrypt(&self, plaintext: u64) -> RsaResult<u64> {
        encrypt(plaintext, self)
    }
}

impl PrivateKey {
    /// Method form of [`decrypt`].
    pub fn decrypt(&self, ciphertext: u64) -> u64 {
        decrypt(ciphertext, self)
    }
}
