// SHA3 Module - Main module file
// Keccak-f[1600] sponge producing digests of any whole-byte length

pub mod sponge;
pub mod state;

pub use sponge::{Absorbing, Sponge, Squeezing};
pub use state::State;

use tracing::trace;

use crate::buffer::ByteBuffer;
#[cfg(not(feature = "variable-capacity"))]
use crate::config::SHA3_C;
#[cfg(feature = "variable-capacity")]
use crate::config::SHA3_MAX_C;

/// Sponge capacity used for a digest of `output_bits` bits
#[cfg(not(feature = "variable-capacity"))]
pub fn capacity_bits(_output_bits: usize) -> usize {
    SHA3_C
}

/// Sponge capacity used for a digest of `output_bits` bits:
/// twice the output length, capped at [`SHA3_MAX_C`]
#[cfg(feature = "variable-capacity")]
pub fn capacity_bits(output_bits: usize) -> usize {
    (output_bits * 2).min(SHA3_MAX_C)
}

/// Hash `message` into a digest of `output_bits / 8` bytes.
///
/// Fractional bytes are dropped, so `sha3(m, 100)` yields 12 bytes.
pub fn sha3(message: &ByteBuffer, output_bits: usize) -> ByteBuffer {
    let capacity = capacity_bits(output_bits);
    trace!(len = message.len(), output_bits, capacity, "sha3");

    Sponge::new(capacity)
        .pad(message)
        .absorb()
        .squeeze(output_bits / 8)
}

#[cfg(all(test, not(feature = "variable-capacity")))]
mod tests {
    use super::*;

    fn digest(msg: &[u8], bits: usize) -> String {
        sha3(&ByteBuffer::from_bytes(msg), bits).to_hex_string()
    }

    // 512-bit capacity gives the SHA3-256 rate, so 256-bit output must
    // match the published SHA3-256 vectors

    #[test]
    fn test_empty_message() {
        assert_eq!(
            digest(b"", 256),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_abc() {
        assert_eq!(
            digest(b"abc", 256),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }

    #[test]
    fn test_two_block_message() {
        // 200 bytes of 0xa3 spans two 136-byte blocks
        assert_eq!(
            digest(&[0xa3; 200], 256),
            "79f38adec5c20307a98ef76e8324afbfd46cfd81b22e3973c65fa1bd9de31787"
        );
    }

    #[test]
    fn test_single_padding_byte() {
        assert_eq!(
            digest(&[b'a'; 135], 256),
            "8094bb53c44cfb1e67b7c30447f9a1c33696d2463ecc1d9c92538913392843c9"
        );
    }

    #[test]
    fn test_rsa_width_output() {
        let out = digest(b"abc", 1024);
        assert_eq!(out.len(), 256);
        assert_eq!(
            out,
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532\
             d136f622fb9210f8273e60d6aac89720f7b13f6261c5f2319cdf04f2f374df8f\
             acc486b18d835e9fa2ba11bc041c0aa842f74ea5810513bfbff8a9cdcefc9230\
             6208f04a2a8b8b1a05a70cd990ccc4604e1e85543279241fef2146a8dc391263"
        );
    }

    #[test]
    fn test_truncated_outputs() {
        assert_eq!(digest(b"abc", 88), "3a985da74fe225b2045c17");
        // 100 bits rounds down to 12 bytes
        assert_eq!(digest(b"abc", 100), "3a985da74fe225b2045c172d");
        assert_eq!(digest(b"abc", 7), "");
    }

    #[test]
    fn test_output_beyond_state() {
        // 212 bytes needs a second permutation after the 25th lane
        let out = digest(b"abc", 1700);
        assert_eq!(out.len(), 424);
        assert!(out.ends_with(
            "c36c4b8c929480667d1a16ae2951c2d54110e9969e9cd8b5b2bd77f2cd2077d2422e4301"
        ));
    }

    #[test]
    fn test_message_untouched() {
        let msg = ByteBuffer::from_bytes(b"keep me");
        let _ = sha3(&msg, 256);
        assert_eq!(msg.as_bytes(), b"keep me");
    }
}
