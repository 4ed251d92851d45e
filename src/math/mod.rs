pub mod arith;
pub mod primes;

pub use arith::{ArithError, gcd, mod_exp, mod_inverse, mod_inverse_reference, mul_mod};
pub use primes::is_prime;
