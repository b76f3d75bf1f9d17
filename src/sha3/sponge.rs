// Keccak Sponge
// Pad, absorb and squeeze phases as separate types so each instance runs once

use crate::buffer::{ByteBuffer, Endian};
use crate::config::{SHA3_B, SHA3_LANE_BITS};

use super::state::{State, LANES};

const LANE_BYTES: usize = SHA3_LANE_BITS / 8;

/// Sponge before any input has been seen
#[derive(Debug)]
pub struct Sponge {
    rate_bytes: usize,
}

/// Sponge holding a padded message, ready to absorb it
#[derive(Debug)]
pub struct Absorbing {
    rate_bytes: usize,
    padded: ByteBuffer,
}

/// Sponge with the whole message absorbed
#[derive(Debug)]
pub struct Squeezing {
    state: State,
}

impl Sponge {
    /// Sponge over the 1600-bit state with `capacity_bits` held back.
    /// The rate is rounded down to whole lanes.
    pub fn new(capacity_bits: usize) -> Self {
        let rate_bits = SHA3_B - capacity_bits.min(SHA3_B - SHA3_LANE_BITS);
        Self {
            rate_bytes: rate_bits / SHA3_LANE_BITS * LANE_BYTES,
        }
    }

    pub fn rate_bytes(&self) -> usize {
        self.rate_bytes
    }

    /// Apply the SHA3 multi-rate padding.
    ///
    /// At least one byte is always added: `0x86` when exactly one byte is
    /// missing from a full block, otherwise `0x06`, zeros, then `0x80`.
    pub fn pad(self, message: &ByteBuffer) -> Absorbing {
        let q = self.rate_bytes - message.len() % self.rate_bytes;

        let mut padded = ByteBuffer::with_capacity(message.len() + q);
        padded.assign(message);
        if q == 1 {
            padded.push_byte(0x86);
        } else {
            padded.push_byte(0x06);
            padded.push_zeros(q - 2);
            padded.push_byte(0x80);
        }

        Absorbing {
            rate_bytes: self.rate_bytes,
            padded,
        }
    }
}

impl Absorbing {
    /// XOR every block into the state, little-endian word by word, and
    /// permute after each block.
    pub fn absorb(mut self) -> Squeezing {
        let mut state = State::new();
        let words = self.rate_bytes / LANE_BYTES;

        for block in (0..self.padded.len()).step_by(self.rate_bytes) {
            for j in 0..words {
                let mut word = [0u8; LANE_BYTES];
                self.padded
                    .save(&mut word, LANE_BYTES, (block + j * LANE_BYTES) as isize, Endian::Big);
                state.xor_lane(j % 5, j / 5, u64::from_le_bytes(word));
            }
            state.permute();
        }

        self.padded.release();
        Squeezing { state }
    }
}

impl Squeezing {
    /// Read `output_bytes` bytes out of the state.
    ///
    /// Lanes are emitted in order (0,0), (1,0), ..., (4,4), eight bytes each,
    /// the last one cut short if needed. After all 25 lanes the state is
    /// permuted again and output restarts at lane 0.
    pub fn squeeze(mut self, output_bytes: usize) -> ByteBuffer {
        let mut out = ByteBuffer::with_capacity(output_bytes);
        let mut lane = 0;

        while out.len() < output_bytes {
            let fill = LANE_BYTES.min(output_bytes - out.len());
            let bytes = self.state.lane_at(lane).to_le_bytes();
            out.append(&bytes[..fill]);

            lane += 1;
            if lane == LANES {
                lane = 0;
                self.state.permute();
            }
        }

        self.state.release();
        out
    }
}
