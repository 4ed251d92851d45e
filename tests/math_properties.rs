use proptest::prelude::*;
use toy_rsa::math::{gcd, mod_exp, mod_inverse, mul_mod};
use toy_rsa::{KeyPair, decrypt, encrypt, is_prime};

// Pool of primes small enough that any product fits comfortably in u64.
const PRIME_POOL: [u64; 12] = [5, 7, 11, 13, 17, 19, 23, 29, 101, 211, 1009, 65_537];

fn distinct_prime_pair() -> impl Strategy<Value = (u64, u64)> {
    (0..PRIME_POOL.len(), 0..PRIME_POOL.len())
        .prop_filter("primes must be distinct", |(i, j)| i != j)
        .prop_map(|(i, j)| (PRIME_POOL[i], PRIME_POOL[j]))
}

proptest! {
    #[test]
    fn gcd_divides_both_operands(a in 1u64..1_000_000, b in 1u64..1_000_000) {
        let g = gcd(a, b);
        prop_assert!(a.is_multiple_of(g));
        prop_assert!(b.is_multiple_of(g));
    }

    #[test]
    fn gcd_is_maximal(a in 1u64..1_000_000, b in 1u64..1_000_000) {
        // After dividing out the gcd, nothing common remains.
        let g = gcd(a, b);
        prop_assert_eq!(gcd(a / g, b / g), 1);
    }

    #[test]
    fn gcd_is_commutative(a in 0u64..1_000_000, b in 0u64..1_000_000) {
        prop_assert_eq!(gcd(a, b), gcd(b, a));
    }

    #[test]
    fn mod_exp_matches_naive_power(
        base in 0u64..1_000,
        exp in 0u64..16,
        modulus in 1u64..10_000,
    ) {
        let mut expected = 1 % modulus;
        for _ in 0..exp {
            expected = mul_mod(expected, base, modulus);
        }
        prop_assert_eq!(mod_exp(base, exp, modulus), expected);
    }

    #[test]
    fn mod_exp_is_multiplicative_in_exponent(
        base in 0u64..10_000,
        e1 in 0u64..1_000,
        e2 in 0u64..1_000,
        modulus in 2u64..100_000,
    ) {
        // base^(e1 + e2) = base^e1 * base^e2 (mod modulus)
        let combined = mod_exp(base, e1 + e2, modulus);
        let split = mul_mod(mod_exp(base, e1, modulus), mod_exp(base, e2, modulus), modulus);
        prop_assert_eq!(combined, split);
    }

    #[test]
    fn inverse_identity_holds_for_coprime_pairs(
        a in 1u64..100_000,
        modulus in 2u64..100_000,
    ) {
        prop_assume!(gcd(a, modulus) == 1);
        let d = mod_inverse(a, modulus).unwrap();
        prop_assert!(d >= 1 && d < modulus);
        prop_assert_eq!(mul_mod(d, a, modulus), 1);
    }

    #[test]
    fn non_coprime_pairs_have_no_inverse(
        a in 2u64..10_000,
        modulus in 2u64..10_000,
    ) {
        prop_assume!(gcd(a, modulus) != 1);
        prop_assert!(mod_inverse(a, modulus).is_err());
    }

    #[test]
    fn is_prime_has_no_small_witness(n in 2u64..1_000_000) {
        // A number reported prime has no divisor in [2, min(n, 1000)).
        if is_prime(n) {
            for d in 2..n.min(1_000) {
                prop_assert!(!n.is_multiple_of(d), "{n} divisible by {d}");
            }
        }
    }

    #[test]
    fn generated_keys_round_trip((p, q) in distinct_prime_pair(), seed in any::<u64>()) {
        let keys = KeyPair::generate(p, q).unwrap();
        let m = seed % keys.public.n;
        let c = encrypt(m, &keys.public).unwrap();
        prop_assert_eq!(decrypt(c, &keys.private), m);
    }

    #[test]
    fn generated_exponents_invert_each_other((p, q) in distinct_prime_pair()) {
        let keys = KeyPair::generate(p, q).unwrap();
        prop_assert_eq!(mul_mod(keys.public.e, keys.private.d, keys.phi), 1);
        prop_assert!(keys.public.e >= 3);
        prop_assert!(keys.private.d >= 1 && keys.private.d < keys.phi);
    }
}
