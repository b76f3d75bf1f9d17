// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod oaep;
pub mod sign;

pub use bigint::RsaBigInt;
pub use decrypt::{decrypt, decrypt_bytes, decrypt_to_string};
pub use encrypt::{encrypt, encrypt_bytes};
pub use keygen::{generate_keypair, keypair_from_primes, RsaKey, RsaKeyPair};
pub use sign::{sign, verify};

/// Two key pairs shared by every test in the crate; generating them is slow
#[cfg(test)]
pub(crate) fn test_keys() -> &'static (RsaKeyPair, RsaKeyPair) {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::OnceLock;

    static KEYS: OnceLock<(RsaKeyPair, RsaKeyPair)> = OnceLock::new();
    KEYS.get_or_init(|| {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let first = generate_keypair(&mut rng).expect("first test key pair");
        let second = generate_keypair(&mut rng).expect("second test key pair");
        (first, second)
    })
}
