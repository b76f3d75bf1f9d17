// Library Configuration
// Fixed cryptographic parameters and file naming settings

/// Bit length of each RSA prime and of the OAEP block
pub const BITLEN: usize = 1024;

/// Public exponent e
pub const EXPONENT: u64 = 65537;

/// Width in bits of the OAEP nonce r (k0)
pub const OAEP_K0: usize = 88;

/// Bytes of message an OAEP block can carry
pub const OAEP_MSG_BYTES: usize = (BITLEN - OAEP_K0) / 8;

/// Bytes occupied by the masked nonce Y
pub const OAEP_NONCE_BYTES: usize = OAEP_K0 / 8;

/// Total OAEP block width in bytes
pub const OAEP_BLOCK_BYTES: usize = BITLEN / 8;

/// Keccak state width in bits
pub const SHA3_B: usize = 1600;

/// Sponge capacity in bits
pub const SHA3_C: usize = 512;

/// Capacity ceiling when the `variable-capacity` feature is enabled
pub const SHA3_MAX_C: usize = 512;

/// Number of Keccak-f rounds
pub const SHA3_ROUNDS: usize = 24;

/// Lane width in bits
pub const SHA3_LANE_BITS: usize = 64;

/// Attempts at finding usable primes before key generation gives up
pub const KEYGEN_ATTEMPTS: usize = 8;

/// Miller-Rabin rounds for prime candidates
pub const PRIMALITY_ROUNDS: u32 = 25;

/// File naming for keys and signatures
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileConfig {
    pub public_suffix: String,
    pub secret_suffix: String,
    pub signature_suffix: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            public_suffix: ".pk".to_string(),
            secret_suffix: ".sk".to_string(),
            signature_suffix: ".sign".to_string(),
        }
    }
}

impl FileConfig {
    pub fn with_public_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.public_suffix = suffix.into();
        self
    }

    pub fn with_secret_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.secret_suffix = suffix.into();
        self
    }

    pub fn with_signature_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.signature_suffix = suffix.into();
        self
    }

    /// Path of the public key file for a key pair stem
    pub fn public_key_path(&self, stem: &str) -> String {
        format!("{}{}", stem, self.public_suffix)
    }

    /// Path of the secret key file for a key pair stem
    pub fn secret_key_path(&self, stem: &str) -> String {
        format!("{}{}", stem, self.secret_suffix)
    }

    /// Default signature path for a signed file
    pub fn signature_path(&self, file: &str) -> String {
        format!("{}{}", file, self.signature_suffix)
    }
}
