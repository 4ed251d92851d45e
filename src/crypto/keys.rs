//! RSA key material and key generation.
//!
//! Key generation runs three sequential stages, with no branching back:
//!
//! 1. derive `n = p * q` and `phi = (p - 1) * (q - 1)`,
//! 2. select the smallest `e >= 3` coprime to `phi`,
//! 3. compute `d`, the inverse of `e` modulo `phi`.
//!
//! Everything is deterministic given `(p, q)`; unlike production RSA there
//! is no randomness anywhere in this scheme.

use super::errors::{RsaError, RsaResult};
use crate::math::{gcd, is_prime, mod_inverse};

/// Public half of a key pair: the encryption exponent and the modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    pub e: u64,
    pub n: u64,
}

/// Private half of a key pair: the decryption exponent and the modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey {
    pub d: u64,
    pub n: u64,
}

/// A freshly generated key pair, plus the totient it was derived from.
///
/// `phi` is not needed for encryption or decryption, but teaching tools
/// want to display it, so it is kept alongside the keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
    pub phi: u64,
}

impl KeyPair {
    /// Derives a key pair from two distinct primes.
    ///
    /// Validates its inputs rather than trusting the caller: `p` and `q`
    /// must both be prime and distinct, `p * q` must fit in `u64`, and the
    /// totient must be large enough that an exponent search can succeed.
    /// Degenerate inputs like `p = q = 2` yield a totient with no exponent
    /// coprime to it, so they are rejected up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use toy_rsa::KeyPair;
    ///
    /// let keys = KeyPair::generate(7, 11).unwrap();
    /// assert_eq!(keys.public.n, 77);
    /// assert_eq!(keys.phi, 60);
    /// assert_eq!(keys.public.e, 7);
    /// assert_eq!(keys.private.d, 43);
    /// ```
    pub fn generate(p: u64, q: u64) -> RsaResult<Self> {
        if !is_prime(p) {
            return Err(RsaError::NotPrime(p));
        }
        if !is_prime(q) {
            return Err(RsaError::NotPrime(q));
        }
        if p == q {
            return Err(RsaError::EqualPrimes(p));
        }

        let n = p
            .checked_mul(q)
            .ok_or(RsaError::ModulusOverflow { p, q })?;
        // (p - 1) * (q - 1) < p * q, so this cannot overflow once n fits.
        let phi = (p - 1) * (q - 1);
        if phi <= 2 {
            return Err(RsaError::TotientTooSmall(phi));
        }

        let e = select_public_exponent(phi)?;
        let d = mod_inverse(e, phi)?;

        Ok(KeyPair {
            public: PublicKey { e, n },
            private: PrivateKey { d, n },
            phi,
        })
    }
}

/// Returns the smallest `e >= 3` with `gcd(e, phi) == 1`.
///
/// The search is bounded by `phi`: `phi - 1` is always coprime to `phi`,
/// so for `phi > 3` the loop finds an exponent before running out.
fn select_public_exponent(phi: u64) -> RsaResult<u64> {
    (3..phi)
        .find(|&e| gcd(e, phi) == 1)
        .ok_or(RsaError::NoPublicExponent(phi))
}
