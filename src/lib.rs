//! Textbook RSA over native `u64` integers.
//!
//! This crate demonstrates the arithmetic behind RSA: primality testing,
//! greatest common divisor, modular inverse, and modular exponentiation,
//! composed into key generation and an encrypt/decrypt pipeline. Everything
//! is bounded to 64-bit integers, so key sizes are toy values only.
//!
//! This is a teaching artifact. It is deterministic, uses brute-force
//! algorithms, and makes no attempt at constant-time arithmetic or any other
//! hardening. Never use it to protect real data.
//!
//! ```
//! use toy_rsa::{KeyPair, decrypt, encrypt};
//!
//! let keys = KeyPair::generate(7, 11).unwrap();
//! let ciphertext = encrypt(5, &keys.public).unwrap();
//! assert_eq!(decrypt(ciphertext, &keys.private), 5);
//! ```

pub mod crypto;
pub mod math;

pub use crypto::{KeyPair, PrivateKey, PublicKey, RsaError, RsaResult, decrypt, encrypt};
pub use math::{gcd, is_prime, mod_exp, mod_inverse};
