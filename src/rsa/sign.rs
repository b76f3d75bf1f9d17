// RSA Signatures
// Hash-then-exponentiate signing and exponentiate-then-compare verification

use tracing::trace;

use super::bigint::mod_pow;
use super::keygen::RsaKey;
use crate::buffer::ByteBuffer;
use crate::config::BITLEN;
use crate::error::Result;
use crate::sha3::sha3;

/// Sign `message`: SHA3(message, BITLEN)^exp mod n, written at the modulus
/// byte width. Conventionally `key` is the secret key.
pub fn sign(message: &ByteBuffer, key: &RsaKey) -> Result<ByteBuffer> {
    key.validate()?;

    let digest = sha3(message, BITLEN);
    let s = mod_pow(&digest.to_integer(), &key.exp, &key.n);
    trace!(message_len = message.len(), "signed");

    Ok(ByteBuffer::from_integer_padded(&s, key.byte_length()))
}

/// Check `signature` against `message`.
///
/// Returns `Ok(false)` on a mismatch; errors are reserved for unusable keys.
pub fn verify(signature: &ByteBuffer, message: &ByteBuffer, key: &RsaKey) -> Result<bool> {
    key.validate()?;

    // Recover the signed digest h0
    let h0 = mod_pow(&signature.to_integer(), &key.exp, &key.n);

    // Hash the message ourselves
    let h1 = sha3(message, BITLEN).to_integer();

    Ok(h0 == h1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::test_keys;

    fn msg(bytes: &[u8]) -> ByteBuffer {
        ByteBuffer::from_bytes(bytes)
    }

    #[test]
    fn test_sign_verify() {
        let keys = &test_keys().0;
        let signature = sign(&msg(b"abc"), &keys.secret_key).unwrap();
        assert_eq!(signature.len(), keys.secret_key.byte_length());
        assert!(verify(&signature, &msg(b"abc"), &keys.public_key).unwrap());
    }

    #[test]
    fn test_sign_is_deterministic() {
        let keys = &test_keys().0;
        let a = sign(&msg(b"same input"), &keys.secret_key).unwrap();
        let b = sign(&msg(b"same input"), &keys.secret_key).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_verify_other_message() {
        let keys = &test_keys().0;
        let signature = sign(&msg(b"abc"), &keys.secret_key).unwrap();
        assert!(!verify(&signature, &msg(b"abd"), &keys.public_key).unwrap());
        assert!(!verify(&signature, &msg(b""), &keys.public_key).unwrap());
    }

    #[test]
    fn test_verify_other_key() {
        let (keys, other) = test_keys();
        let signature = sign(&msg(b"abc"), &keys.secret_key).unwrap();
        assert!(!verify(&signature, &msg(b"abc"), &other.public_key).unwrap());
    }

    #[test]
    fn test_verify_tampered_signature() {
        let keys = &test_keys().0;
        let signature = sign(&msg(b"abc"), &keys.secret_key).unwrap();

        let mut bytes = signature.into_vec();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        let tampered = ByteBuffer::from(bytes);
        assert!(!verify(&tampered, &msg(b"abc"), &keys.public_key).unwrap());
    }

    #[test]
    fn test_sign_empty_message() {
        let keys = &test_keys().0;
        let signature = sign(&msg(b""), &keys.secret_key).unwrap();
        assert!(verify(&signature, &msg(b""), &keys.public_key).unwrap());
    }
}
