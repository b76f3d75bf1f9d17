// RSA-OAEP Padding
// Randomized padding with two SHA3 masking rounds: X = m ^ H(r), Y = r ^ H(X)

use num_traits::One;
use rand::{CryptoRng, RngCore};
use tracing::trace;

use super::bigint::{random_bits, RsaBigInt};
use crate::buffer::ByteBuffer;
use crate::config::{BITLEN, OAEP_BLOCK_BYTES, OAEP_K0, OAEP_MSG_BYTES, OAEP_NONCE_BYTES};
use crate::error::{Result, RsaError};
use crate::sha3::sha3;

fn check_length(message: &ByteBuffer) -> Result<()> {
    if message.len() > OAEP_MSG_BYTES {
        return Err(RsaError::MessageTooLong {
            len: message.len(),
            max: OAEP_MSG_BYTES,
        });
    }
    Ok(())
}

/// OAEP-encode `message` with a fresh OAEP_K0-bit nonce drawn from `rng`.
///
/// The length check runs before any randomness is consumed.
pub fn encode<R>(message: &ByteBuffer, rng: &mut R) -> Result<ByteBuffer>
where
    R: RngCore + CryptoRng + ?Sized,
{
    check_length(message)?;

    let r = random_bits(OAEP_K0, rng);
    encode_with_nonce(message, &r)
}

/// OAEP-encode `message` with a caller-chosen nonce.
///
/// Only the low OAEP_K0 bits of `nonce` are used. The result is always
/// OAEP_BLOCK_BYTES long: X on OAEP_MSG_BYTES, then Y on OAEP_NONCE_BYTES.
pub fn encode_with_nonce(message: &ByteBuffer, nonce: &RsaBigInt) -> Result<ByteBuffer> {
    check_length(message)?;

    let r = nonce % (RsaBigInt::one() << OAEP_K0);

    // Pad message with zeros on the right
    let mut padded = ByteBuffer::with_capacity(OAEP_MSG_BYTES);
    padded.concat_zeros(message, OAEP_MSG_BYTES - message.len());

    // X = m ^ H(r)
    let hr = sha3(&ByteBuffer::from_integer(&r), BITLEN - OAEP_K0);
    let x = padded.to_integer() ^ hr.to_integer();

    // Y = r ^ H(X)
    let hx = sha3(&ByteBuffer::from_integer(&x), OAEP_K0);
    let y = &r ^ hx.to_integer();

    // X || Y
    let mut encoded = ByteBuffer::with_capacity(OAEP_BLOCK_BYTES);
    encoded.concat(
        &ByteBuffer::from_integer_padded(&x, OAEP_MSG_BYTES),
        &ByteBuffer::from_integer_padded(&y, OAEP_NONCE_BYTES),
    );
    trace!(message_len = message.len(), encoded_len = encoded.len(), "oaep encode");

    Ok(encoded)
}

/// Recover the zero-padded message from an OAEP block.
///
/// The last OAEP_NONCE_BYTES bytes are Y, everything before them is X.
/// The result keeps the zero padding added by [`encode`] and is at least
/// OAEP_MSG_BYTES long.
pub fn decode(encoded: &ByteBuffer) -> ByteBuffer {
    let mut x_bytes = ByteBuffer::with_capacity(OAEP_MSG_BYTES);
    x_bytes.trim(encoded, OAEP_NONCE_BYTES as isize);

    let mut y_bytes = ByteBuffer::with_capacity(OAEP_NONCE_BYTES);
    y_bytes.trim(encoded, -(x_bytes.len() as isize));

    // r = Y ^ H(X)
    let x = x_bytes.to_integer();
    let hx = sha3(&ByteBuffer::from_integer(&x), OAEP_K0);
    let r = y_bytes.to_integer() ^ hx.to_integer();

    // m = X ^ H(r)
    let hr = sha3(&ByteBuffer::from_integer(&r), BITLEN - OAEP_K0);
    let m = x ^ hr.to_integer();
    trace!(encoded_len = encoded.len(), "oaep decode");

    ByteBuffer::from_integer_padded(&m, OAEP_MSG_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn zero_padded(message: &[u8]) -> ByteBuffer {
        let mut out = ByteBuffer::from_bytes(message);
        out.push_zeros(OAEP_MSG_BYTES - message.len());
        out
    }

    #[test]
    fn test_encode_width() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in [0, 1, 3, 64, OAEP_MSG_BYTES] {
            let msg = ByteBuffer::from_bytes(&vec![0x5a; len]);
            let encoded = encode(&msg, &mut rng).unwrap();
            assert_eq!(encoded.len(), OAEP_BLOCK_BYTES);
        }
    }

    #[test]
    fn test_decode_inverts_encode_for_forced_nonces() {
        let nonces = [
            from_u64(0),
            from_u64(1),
            from_u64(0xffff_ffff_ffff_ffff),
            (RsaBigInt::one() << OAEP_K0) - 1u8,
            RsaBigInt::one() << (OAEP_K0 - 1),
        ];
        let messages: [&[u8]; 4] = [b"", b"abc", b"\0leading zero", &[0xff; OAEP_MSG_BYTES]];

        for nonce in &nonces {
            for msg in messages {
                let encoded = encode_with_nonce(&ByteBuffer::from_bytes(msg), nonce).unwrap();
                assert_eq!(encoded.len(), OAEP_BLOCK_BYTES);
                assert_eq!(decode(&encoded), zero_padded(msg), "nonce {}", nonce);
            }
        }
    }

    #[test]
    fn test_decode_inverts_random_encode() {
        let mut rng = StdRng::seed_from_u64(9);
        let msg = ByteBuffer::from_bytes(b"random nonce path");
        for _ in 0..8 {
            let encoded = encode(&msg, &mut rng).unwrap();
            assert_eq!(decode(&encoded), zero_padded(b"random nonce path"));
        }
    }

    #[test]
    fn test_nonce_changes_block() {
        let msg = ByteBuffer::from_bytes(b"abc");
        let a = encode_with_nonce(&msg, &from_u64(1)).unwrap();
        let b = encode_with_nonce(&msg, &from_u64(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_message_too_long() {
        let mut rng = StdRng::seed_from_u64(5);
        let msg = ByteBuffer::from_bytes(&[1u8; OAEP_MSG_BYTES + 1]);
        let result = encode(&msg, &mut rng);
        assert!(matches!(
            result,
            Err(RsaError::MessageTooLong { len: 118, max: 117 })
        ));
    }

    #[test]
    fn test_rejected_message_draws_no_randomness() {
        let mut used = StdRng::seed_from_u64(77);
        let mut fresh = StdRng::seed_from_u64(77);

        let long = ByteBuffer::from_bytes(&[1u8; OAEP_MSG_BYTES + 1]);
        assert!(encode(&long, &mut used).is_err());

        let msg = ByteBuffer::from_bytes(b"abc");
        assert_eq!(
            encode(&msg, &mut used).unwrap(),
            encode(&msg, &mut fresh).unwrap()
        );
    }

    #[test]
    fn test_decode_short_input() {
        // Anything shorter than a nonce decodes without panicking
        let out = decode(&ByteBuffer::from_bytes(&[1, 2, 3]));
        assert_eq!(out.len(), OAEP_MSG_BYTES);
    }
}
