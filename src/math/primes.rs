//! Trial-division primality testing.
//!
//! Key generation only needs to validate two caller-supplied primes, so a
//! simple deterministic check is enough here. The test skips multiples of 2
//! and 3 and then walks candidate divisors of the form `6k - 1` and `6k + 1`
//! up to `sqrt(n)`: every prime above 3 falls in one of those two residue
//! classes mod 6, so nothing is missed.

/// Returns `true` if `n` is prime, using `6k +/- 1` trial division.
///
/// Runs in `O(sqrt(n))` divisions. The loop bound is computed with
/// `saturating_mul` so the check stays correct over the full `u64` range.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n.is_multiple_of(2) || n.is_multiple_of(3) {
        return false;
    }
    let mut i = 5u64;
    while i.saturating_mul(i) <= n {
        if n.is_multiple_of(i) || n.is_multiple_of(i + 2) {
            return false;
        }
        i += 6;
    }
    true
}
