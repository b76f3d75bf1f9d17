// Buffer Conversions
// Big-endian integer import/export and hex display for byte buffers

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use super::byte_buffer::ByteBuffer;

impl ByteBuffer {
    /// Interpret the buffer as an unsigned big-endian integer.
    /// An empty buffer is zero.
    pub fn to_integer(&self) -> BigUint {
        BigUint::from_bytes_be(self.as_bytes())
    }

    /// Big-endian export of `n` with no leading zero bytes.
    /// Zero exports as the single byte `0x00`, as `num-bigint` does.
    pub fn from_integer(n: &BigUint) -> Self {
        Self::from(n.to_bytes_be())
    }

    /// Replace contents with the big-endian export of `n`
    pub fn set_integer(&mut self, n: &BigUint) {
        self.assign_raw(&n.to_bytes_be());
    }

    /// Big-endian export of `n` left-padded with zeros to `width` bytes.
    /// Values wider than `width` are returned unpadded, never truncated.
    pub fn from_integer_padded(n: &BigUint, width: usize) -> Self {
        let mut buf = Self::with_capacity(width);
        if !n.is_zero() {
            buf.set_integer(n);
        }
        if buf.len() < width {
            let zeros = vec![0u8; width - buf.len()];
            buf.prepend(&zeros);
        }
        buf
    }

    /// Lower-case hex rendering of the occupied bytes
    pub fn to_hex_string(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}
