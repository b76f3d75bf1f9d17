// Keccak State
// 5x5 matrix of 64-bit lanes and the Keccak-f[1600] permutation

use std::fmt;

use crate::config::SHA3_ROUNDS;

/// Iota round constants
const RC: [u64; 24] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808a,
    0x8000000080008000, 0x000000000000808b, 0x0000000080000001,
    0x8000000080008081, 0x8000000000008009, 0x000000000000008a,
    0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
    0x000000008000808b, 0x800000000000008b, 0x8000000000008089,
    0x8000000000008003, 0x8000000000008002, 0x8000000000000080,
    0x000000000000800a, 0x800000008000000a, 0x8000000080008081,
    0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

/// Number of lanes in the state
pub const LANES: usize = 25;

/// Keccak state, indexed as `lanes[x][y]`
#[derive(Clone, Default, PartialEq, Eq)]
pub struct State {
    lanes: [[u64; 5]; 5],
}

impl State {
    /// Zero-initialized state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lane(&self, x: usize, y: usize) -> u64 {
        self.lanes[x][y]
    }

    /// Lane at position `index` in squeeze order: (0,0), (1,0), ..., (4,4)
    pub fn lane_at(&self, index: usize) -> u64 {
        self.lanes[index % 5][index / 5]
    }

    pub fn xor_lane(&mut self, x: usize, y: usize, word: u64) {
        self.lanes[x][y] ^= word;
    }

    /// Keccak-f[1600]: all rounds of theta, rho+pi, chi and iota
    pub fn permute(&mut self) {
        for rc in RC.iter().take(SHA3_ROUNDS) {
            self.theta();
            self.rho_pi();
            self.chi();
            self.iota(*rc);
        }
    }

    fn theta(&mut self) {
        let a = &mut self.lanes;
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = a[x][0] ^ a[x][1] ^ a[x][2] ^ a[x][3] ^ a[x][4];
        }

        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                a[x][y] ^= d;
            }
        }
    }

    /// Rotations and lane permutation in a single walk of the 24-lane cycle
    /// starting at (1,0). Lane (0,0) is left alone.
    fn rho_pi(&mut self) {
        let a = &mut self.lanes;
        let (mut x, mut y) = (1usize, 0usize);
        let mut current = a[x][y];

        for t in 0..24u32 {
            let next = (y, (2 * x + 3 * y) % 5);
            x = next.0;
            y = next.1;

            let old = a[x][y];
            a[x][y] = current.rotate_left(((t + 1) * (t + 2) / 2) % 64);
            current = old;
        }
    }

    fn chi(&mut self) {
        let a = &mut self.lanes;
        for y in 0..5 {
            let mut c = [0u64; 5];
            for x in 0..5 {
                c[x] = a[x][y];
            }
            for x in 0..5 {
                a[x][y] = c[x] ^ (!c[(x + 1) % 5] & c[(x + 2) % 5]);
            }
        }
    }

    fn iota(&mut self, rc: u64) {
        self.lanes[0][0] ^= rc;
    }

    /// Wipe every lane
    pub fn release(&mut self) {
        self.lanes = [[0u64; 5]; 5];
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..5 {
            for x in 0..5 {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:016x}", self.lanes[x][y])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State(\n{})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permute_zero_state() {
        let mut st = State::new();
        st.permute();
        assert_eq!(st.lane(0, 0), 0xf1258f7940e1dde7);
        assert_eq!(st.lane(1, 0), 0x84d5ccf933c0478a);
        assert_eq!(st.lane_at(1), st.lane(1, 0));
    }

    #[test]
    fn test_permute_changes_every_call() {
        let mut once = State::new();
        once.permute();
        let mut twice = once.clone();
        twice.permute();
        assert_ne!(once, twice);
    }

    #[test]
    fn test_xor_lane_and_release() {
        let mut st = State::new();
        st.xor_lane(2, 3, 0xff);
        st.xor_lane(2, 3, 0x0f);
        assert_eq!(st.lane(2, 3), 0xf0);
        assert_eq!(st.lane_at(2 + 5 * 3), 0xf0);

        st.release();
        assert_eq!(st, State::new());
    }

    #[test]
    fn test_display_matrix() {
        let mut st = State::new();
        st.xor_lane(1, 0, 0xab);
        let text = st.to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows[0],
            "0000000000000000 00000000000000ab 0000000000000000 0000000000000000 0000000000000000"
        );
    }
}
