//! Full key-generation and encrypt/decrypt cycle with the classic
//! 61 / 53 textbook primes, printing every intermediate value.
//!
//! Run with: `cargo run --example full_cycle`

use toy_rsa::{KeyPair, RsaError, decrypt, encrypt};

fn main() -> Result<(), RsaError> {
    let (p, q) = (61u64, 53u64);
    let plaintext = 2790u64;

    let keys = KeyPair::generate(p, q)?;

    println!("========== RSA Key Calculation ==========");
    println!("Prime number p: {p}");
    println!("Prime number q: {q}");
    println!("-----------------------------------------");
    println!("N = p * q = {}", keys.public.n);
    println!("phi = (p-1)*(q-1) = {}", keys.phi);
    println!("Public key (e, N) = ({}, {})", keys.public.e, keys.public.n);
    println!("Private key (d, N) = ({}, {})", keys.private.d, keys.private.n);
    println!("=========================================");

    let ciphertext = encrypt(plaintext, &keys.public)?;
    println!("Plaintext:            {plaintext}");
    println!("Encrypted ciphertext: {ciphertext}");

    let recovered = decrypt(ciphertext, &keys.private);
    println!("Decrypted plaintext:  {recovered}");
    assert_eq!(recovered, plaintext);

    Ok(())
}
