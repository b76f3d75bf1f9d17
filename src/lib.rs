//! RSA-OAEP encryption and signatures over a from-scratch SHA3.
//!
//! The crate is built from three layers:
//!
//! ```text
//! buffer  (ByteBuffer: growable bytes, endian-aware load/save, BigUint conversion)
//!    ↓
//! sha3    (Keccak-f[1600] state + pad/absorb/squeeze sponge)
//!    ↓
//! rsa     (key generation, OAEP, encrypt/decrypt, sign/verify)
//! ```
//!
//! Parameters are fixed: 1024-bit primes, e = 65537, an 88-bit OAEP nonce
//! and a 512-bit sponge capacity.
//!
//! # Examples
//!
//! ```no_run
//! use keccak_rsa::buffer::ByteBuffer;
//! use keccak_rsa::rsa::{decrypt, encrypt, generate_keypair, sign, verify};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::from_entropy();
//! let keys = generate_keypair(&mut rng).unwrap();
//!
//! let msg = ByteBuffer::from_bytes(b"abc");
//! let cipher = encrypt(&msg, &keys.public_key, &mut rng).unwrap();
//! assert_eq!(decrypt(&cipher, &keys.secret_key).unwrap(), msg);
//!
//! let signature = sign(&msg, &keys.secret_key).unwrap();
//! assert!(verify(&signature, &msg, &keys.public_key).unwrap());
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod rsa;
pub mod sha3;
pub mod util;

pub use buffer::ByteBuffer;
pub use error::{Result, RsaError};
pub use rsa::{RsaKey, RsaKeyPair};
pub use sha3::sha3;
