// RSA Decryption Implementation
// Implements RSA decryption and removal of the OAEP zero padding

use num_traits::Zero;
use tracing::trace;

use super::bigint::mod_pow;
use super::keygen::RsaKey;
use super::oaep;
use crate::buffer::ByteBuffer;
use crate::config::OAEP_BLOCK_BYTES;
use crate::error::Result;

/// Decrypt `ciphertext` with `key`.
///
/// After OAEP decoding, the zero bytes appended by the encoder are removed
/// by dropping every whole trailing zero byte of the recovered integer.
/// Messages that themselves end in `0x00`, or start with it, therefore come
/// back without those bytes.
pub fn decrypt(ciphertext: &ByteBuffer, key: &RsaKey) -> Result<ByteBuffer> {
    key.validate()?;

    // Compute m = c^d mod n
    let m = mod_pow(&ciphertext.to_integer(), &key.exp, &key.n);

    // Remove OAEP padding
    let block = ByteBuffer::from_integer_padded(&m, OAEP_BLOCK_BYTES);
    let padded = oaep::decode(&block);
    trace!(ciphertext_len = ciphertext.len(), "decrypted");

    Ok(strip_trailing_zeros(&padded))
}

/// Drop trailing zero bytes (and leading ones, through the integer round trip).
///
/// The shift is the lowest set bit rounded down to a whole byte, not the exact
/// bit count, so a message ending in an even byte keeps its last byte.
fn strip_trailing_zeros(padded: &ByteBuffer) -> ByteBuffer {
    let value = padded.to_integer();
    if value.is_zero() {
        return ByteBuffer::with_capacity(0);
    }

    // Lowest set bit, rounded down to a byte boundary
    let first = value.trailing_zeros().unwrap_or(0);
    ByteBuffer::from_integer(&(value >> (first / 8 * 8)))
}

/// Decrypt ciphertext bytes using an RSA key
pub fn decrypt_bytes(ciphertext: &[u8], key: &RsaKey) -> Result<Vec<u8>> {
    decrypt(&ByteBuffer::from_bytes(ciphertext), key).map(ByteBuffer::into_vec)
}

/// Decrypt ciphertext to a string
pub fn decrypt_to_string(ciphertext: &[u8], key: &RsaKey) -> Result<String> {
    let plaintext = decrypt_bytes(ciphertext, key)?;
    Ok(String::from_utf8_lossy(&plaintext).into_owned())
}
