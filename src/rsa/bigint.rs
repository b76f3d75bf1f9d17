// RSA Big Integer Operations
// Wrapper around num-bigint for RSA-specific operations

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Odd primes used to discard candidates before Miller-Rabin
const SMALL_PRIMES: [u32; 53] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181,
    191, 193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
///
/// Montgomery ladder: one multiply and one square per bit, over every bit
/// position up to the wider of modulus and exponent, so the sequence of
/// operations does not depend on the exponent's value.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let bits = modulus.bits().max(exp.bits());
    let mut r0 = RsaBigInt::one();
    let mut r1 = base % modulus;

    for i in (0..bits).rev() {
        if exp.bit(i) {
            r0 = (&r0 * &r1) % modulus;
            r1 = (&r1 * &r1) % modulus;
        } else {
            r1 = (&r0 * &r1) % modulus;
            r0 = (&r0 * &r0) % modulus;
        }
    }

    r0
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);

        let next_t = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if inverse doesn't exist
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if m.is_zero() {
        return None;
    }

    let a = BigInt::from_biguint(Sign::Plus, a.clone());
    let m = BigInt::from_biguint(Sign::Plus, m.clone());
    let (gcd, x, _) = extended_gcd(&a, &m);

    if !gcd.is_one() {
        // Inverse doesn't exist
        return None;
    }

    // Bring x into [0, m)
    x.mod_floor(&m).to_biguint()
}

/// Miller-Rabin primality test
/// Returns true if n is probably prime
pub fn is_probable_prime<R>(n: &RsaBigInt, iterations: u32, rng: &mut R) -> bool
where
    R: RngCore + CryptoRng + ?Sized,
{
    let two = RsaBigInt::from(2u8);
    if n < &two {
        return false;
    }
    if n == &two || n == &RsaBigInt::from(3u8) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as d * 2^s with d odd
    let n_minus_one = n - 1u8;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    // Witness loop
    'witness: for _ in 0..iterations {
        // Pick random witness a in [2, n-2]
        let a = rng.gen_biguint_range(&two, &n_minus_one);

        // Candidates are public, the variable-time modpow is fine here
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        // Composite
        return false;
    }

    // Probably prime
    true
}

/// Whether a small prime divides n (n itself excluded)
fn has_small_factor(n: &RsaBigInt) -> bool {
    SMALL_PRIMES.iter().any(|&p| {
        let p = RsaBigInt::from(p);
        n != &p && (n % &p).is_zero()
    })
}

/// Smallest probable prime greater than or equal to `n`
pub fn next_prime<R>(n: &RsaBigInt, iterations: u32, rng: &mut R) -> RsaBigInt
where
    R: RngCore + CryptoRng + ?Sized,
{
    let two = RsaBigInt::from(2u8);
    if n <= &two {
        return two;
    }

    let mut candidate = n.clone();
    if candidate.is_even() {
        candidate += 1u8;
    }

    loop {
        if !has_small_factor(&candidate) && is_probable_prime(&candidate, iterations, rng) {
            return candidate;
        }
        candidate += 2u8;
    }
}

/// Uniformly random integer below 2^bits
pub fn random_bits<R>(bits: usize, rng: &mut R) -> RsaBigInt
where
    R: RngCore + CryptoRng + ?Sized,
{
    rng.gen_biguint(bits as u64)
}

/// Least common multiple
pub fn lcm(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    if a.is_zero() || b.is_zero() {
        return RsaBigInt::zero();
    }
    a.lcm(b)
}
