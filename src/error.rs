// Error Types
// Failure taxonomy shared by the buffer, SHA3 and RSA layers

use thiserror::Error;

/// Errors produced by the keccak-rsa library.
///
/// A signature that does not match is not an error: [`crate::rsa::verify`]
/// reports it as `Ok(false)`.
#[derive(Debug, Error)]
pub enum RsaError {
    /// Message does not fit in an OAEP block for the fixed modulus size.
    #[error("message too long: {len} bytes, OAEP capacity is {max} bytes")]
    MessageTooLong { len: usize, max: usize },

    /// The public exponent has no inverse modulo λ(n) for the chosen primes.
    #[error("key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// A key file does not follow the length-prefixed layout.
    #[error("malformed key: {0}")]
    MalformedKey(String),

    /// A signature file is empty or wider than the key modulus.
    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, RsaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message_too_long() {
        let err = RsaError::MessageTooLong { len: 118, max: 117 };
        assert_eq!(
            err.to_string(),
            "message too long: 118 bytes, OAEP capacity is 117 bytes"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.pk");
        let err: RsaError = io.into();
        assert!(matches!(err, RsaError::Io(_)));
        assert!(err.to_string().contains("missing.pk"));
    }
}
