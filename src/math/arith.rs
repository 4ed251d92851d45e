//! Modular arithmetic primitives shared by key generation and the cipher.
//!
//! All routines work over `u64` and widen to `u128` internally where a
//! product could wrap, so every function is exact for the full input range.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArithError {
    #[error("no inverse: {a} and {modulus} are not coprime")]
    NotCoprime { a: u64, modulus: u64 },
}

/// Computes the greatest common divisor of `a` and `b`.
///
/// Euclidean algorithm in iterative form; the second operand strictly
/// decreases each step, so the loop terminates in `O(log(min(a, b)))`
/// iterations. `gcd(0, 0)` is defined as `0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Returns `(g, x, y)` with `g = gcd(a, b)` and `a * x + b * y = g`.
fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    if a == 0 {
        (b, 0, 1)
    } else {
        let (g, x, y) = extended_gcd(b % a, a);
        (g, y - (b / a) * x, x)
    }
}

/// Computes `(a * b) mod modulus` using `u128` intermediate arithmetic.
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    assert!(modulus > 0, "mul_mod: modulus must be positive");
    ((a as u128 * b as u128) % modulus as u128) as u64
}

/// Computes `base^exp mod modulus` via binary (square-and-multiply)
/// exponentiation.
///
/// Runs in `O(log exp)` multiplications: the exponent is halved each step,
/// the base is squared modulo `modulus`, and the base is folded into the
/// accumulator whenever the current exponent bit is set.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn mod_exp(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus > 0, "mod_exp: modulus must be positive");
    if modulus == 1 {
        return 0;
    }
    let mut acc = 1u64;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    acc
}

/// Computes the multiplicative inverse of `a` modulo `modulus`: the unique
/// `d` in `[1, modulus)` with `(d * a) % modulus == 1`.
///
/// Uses the extended Euclidean algorithm, `O(log modulus)`. Returns
/// [`ArithError::NotCoprime`] when `gcd(a, modulus) != 1`, in which case no
/// inverse exists.
///
/// # Panics
///
/// Panics if `modulus` is not greater than 1.
pub fn mod_inverse(a: u64, modulus: u64) -> Result<u64, ArithError> {
    assert!(modulus > 1, "mod_inverse: modulus must be greater than 1");
    let (g, x, _) = extended_gcd((a % modulus) as i128, modulus as i128);
    if g != 1 {
        return Err(ArithError::NotCoprime { a, modulus });
    }
    let m = modulus as i128;
    Ok(((x % m + m) % m) as u64)
}

/// Slow-but-clear reference inverse: linear search from `d = 1` upward.
///
/// Returns the same value as [`mod_inverse`] whenever an inverse exists.
/// The search is bounded by `modulus`, so it terminates (with an error)
/// even for non-coprime inputs.
pub fn mod_inverse_reference(a: u64, modulus: u64) -> Result<u64, ArithError> {
    assert!(
        modulus > 1,
        "mod_inverse_reference: modulus must be greater than 1"
    );
    for d in 1..modulus {
        if mul_mod(d, a, modulus) == 1 {
            return Ok(d);
        }
    }
    Err(ArithError::NotCoprime { a, modulus })
}
