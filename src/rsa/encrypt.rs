// RSA Encryption Implementation
// Implements RSA encryption with SHA3-based OAEP padding

use rand::{CryptoRng, RngCore};
use tracing::trace;

use super::bigint::mod_pow;
use super::keygen::RsaKey;
use super::oaep;
use crate::buffer::ByteBuffer;
use crate::error::Result;

/// Encrypt `message` under `key`.
///
/// The message is OAEP-encoded, raised to the key exponent modulo n, and
/// written big-endian at the modulus byte width.
pub fn encrypt<R>(message: &ByteBuffer, key: &RsaKey, rng: &mut R) -> Result<ByteBuffer>
where
    R: RngCore + CryptoRng + ?Sized,
{
    key.validate()?;

    // Apply OAEP padding
    let encoded = oaep::encode(message, rng)?;

    // Compute c = m^e mod n
    let c = mod_pow(&encoded.to_integer(), &key.exp, &key.n);
    trace!(message_len = message.len(), modulus_bits = key.bit_length(), "encrypted");

    Ok(ByteBuffer::from_integer_padded(&c, key.byte_length()))
}

/// Encrypt a byte slice using an RSA key
pub fn encrypt_bytes<R>(plaintext: &[u8], key: &RsaKey, rng: &mut R) -> Result<Vec<u8>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    encrypt(&ByteBuffer::from_bytes(plaintext), key, rng).map(ByteBuffer::into_vec)
}
