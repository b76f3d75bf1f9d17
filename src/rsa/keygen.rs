// RSA Key Generation
// Implements RSA key pair generation (public and secret keys)

use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};

use super::bigint::{from_u64, lcm, mod_inverse, next_prime, random_bits, RsaBigInt};
use crate::config::{BITLEN, EXPONENT, KEYGEN_ATTEMPTS, PRIMALITY_ROUNDS};
use crate::error::{Result, RsaError};

/// RSA key: a modulus and an exponent.
///
/// Public and secret keys have the same shape; which one a key is depends
/// only on the exponent it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKey {
    pub n: RsaBigInt,   // Modulus
    pub exp: RsaBigInt, // Exponent
}

/// RSA Key Pair sharing one modulus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub public_key: RsaKey,
    pub secret_key: RsaKey,
}

impl RsaKey {
    pub fn new(n: RsaBigInt, exp: RsaBigInt) -> Self {
        Self { n, exp }
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Bytes needed to hold any value below the modulus
    pub fn byte_length(&self) -> usize {
        ((self.bit_length() + 7) / 8) as usize
    }

    /// Reject keys no RSA operation can use
    pub fn validate(&self) -> Result<()> {
        if self.n.is_zero() {
            return Err(RsaError::MalformedKey("modulus is zero".to_string()));
        }
        Ok(())
    }
}

/// Build a key pair from two primes.
///
/// n = p*q, λ = lcm(p-1, q-1), e = 65537 and d = e^(-1) mod λ.
/// Fails with `KeyGenerationFailed` when e has no inverse modulo λ.
pub fn keypair_from_primes(p: &RsaBigInt, q: &RsaBigInt) -> Result<RsaKeyPair> {
    if p <= &RsaBigInt::one() || q <= &RsaBigInt::one() {
        return Err(RsaError::KeyGenerationFailed(
            "prime factors must be greater than 1".to_string(),
        ));
    }

    // Step 1: Compute n = p * q
    let n = p * q;

    // Step 2: Compute λ(n) = lcm(p-1, q-1)
    let lambda = lcm(&(p - 1u8), &(q - 1u8));

    // Step 3: Compute d = e^(-1) mod λ(n)
    let e = from_u64(EXPONENT);
    let d = mod_inverse(&e, &lambda).ok_or_else(|| {
        RsaError::KeyGenerationFailed(format!("e={} is not invertible modulo λ(n)", e))
    })?;

    Ok(RsaKeyPair {
        public_key: RsaKey::new(n.clone(), e),
        secret_key: RsaKey::new(n, d),
    })
}

/// Generate an RSA key pair from two random BITLEN-bit prime candidates.
///
/// Primes that leave e without an inverse are discarded and fresh ones drawn,
/// up to `KEYGEN_ATTEMPTS` times.
pub fn generate_keypair<R>(rng: &mut R) -> Result<RsaKeyPair>
where
    R: RngCore + CryptoRng + ?Sized,
{
    for attempt in 1..=KEYGEN_ATTEMPTS {
        let p = next_prime(&random_bits(BITLEN, rng), PRIMALITY_ROUNDS, rng);
        debug!(attempt, bits = p.bits(), "found prime p");
        let q = next_prime(&random_bits(BITLEN, rng), PRIMALITY_ROUNDS, rng);
        debug!(attempt, bits = q.bits(), "found prime q");

        if p == q {
            warn!(attempt, "p and q are equal, drawing new primes");
            continue;
        }

        match keypair_from_primes(&p, &q) {
            Ok(keys) => {
                debug!(attempt, modulus_bits = keys.public_key.bit_length(), "key pair ready");
                return Ok(keys);
            }
            Err(e) => warn!(attempt, error = %e, "discarding primes"),
        }
    }

    Err(RsaError::KeyGenerationFailed(format!(
        "no usable primes after {} attempts",
        KEYGEN_ATTEMPTS
    )))
}
