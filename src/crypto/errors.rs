use crate::math::ArithError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RsaError {
    #[error("{0} is not a prime number")]
    NotPrime(u64),

    #[error("p and q must be distinct primes, both were {0}")]
    EqualPrimes(u64),

    #[error("modulus overflow: {p} * {q} does not fit in u64")]
    ModulusOverflow { p: u64, q: u64 },

    #[error("totient {0} is too small to select a public exponent")]
    TotientTooSmall(u64),

    #[error("no public exponent coprime to totient {0}")]
    NoPublicExponent(u64),

    #[error("plaintext {plaintext} must be less than modulus {modulus}")]
    PlaintextOutOfRange { plaintext: u64, modulus: u64 },

    #[error("arithmetic failed: {source}")]
    Arith {
        #[from]
        source: ArithError,
    },
}

pub type RsaResult<T> = Result<T, RsaError>;
