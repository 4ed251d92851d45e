//! User-facing RSA API: key generation, encryption, and decryption.

pub mod errors;
pub mod keys;
pub mod operations;

pub use errors::{RsaError, RsaResult};
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use operations::{decrypt, encrypt};
