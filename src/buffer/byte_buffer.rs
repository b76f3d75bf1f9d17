// Byte Buffer
// Growable byte sequence used to move data between integers, hashes and files

use std::fmt;

/// Capacity of a buffer created without an explicit size
pub const DEFAULT_CAPACITY: usize = 64;

/// Multiplier applied when a buffer grows without a requested size
pub const GROWTH_FACTOR: usize = 2;

/// Byte order used by [`ByteBuffer::save`] and [`ByteBuffer::load`].
///
/// `Big` copies bytes in stored order, `Little` copies them reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// Owned, resizable byte sequence with a logical length and a capacity.
///
/// Every operation that writes has a form taking operands and a form that
/// works on `self` in place (the destination aliasing one operand). In-place
/// forms shift existing bytes with `copy_within`, which handles overlap.
///
/// Capacity only grows implicitly; shrinking happens through [`release`].
///
/// [`release`]: ByteBuffer::release
#[derive(Clone)]
pub struct ByteBuffer {
    data: Vec<u8>, // storage, data.len() is the capacity
    len: usize,
}

impl ByteBuffer {
    /// Empty buffer with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Empty buffer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity],
            len: 0,
        }
    }

    /// Buffer holding a copy of `bytes`
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = Self::with_capacity(bytes.len());
        buf.assign_raw(bytes);
        buf
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Occupied bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    pub fn into_vec(mut self) -> Vec<u8> {
        self.data.truncate(self.len);
        self.data
    }

    /// Reallocate storage.
    /// A `size` of zero multiplies the current capacity by [`GROWTH_FACTOR`],
    /// any other value sets the capacity to exactly `size`.
    fn update(&mut self, size: usize) {
        let capacity = if size == 0 {
            (self.capacity() * GROWTH_FACTOR).max(DEFAULT_CAPACITY)
        } else {
            size
        };

        let mut data = vec![0u8; capacity];
        let keep = self.len.min(capacity);
        data[..keep].copy_from_slice(&self.data[..keep]);
        self.data = data;
        self.len = keep;
    }

    /// Grow to exactly `needed` bytes if the buffer is smaller
    fn ensure(&mut self, needed: usize) {
        if self.capacity() < needed {
            self.update(needed);
        }
    }

    /// Replace contents with those of `src`
    pub fn assign(&mut self, src: &ByteBuffer) {
        self.assign_raw(src.as_bytes());
    }

    /// Replace contents with `bytes`
    pub fn assign_raw(&mut self, bytes: &[u8]) {
        self.ensure(bytes.len());
        self.data[..bytes.len()].copy_from_slice(bytes);
        self.len = bytes.len();
    }

    /// self = a || b
    pub fn concat(&mut self, a: &ByteBuffer, b: &ByteBuffer) {
        let (a, b) = (a.as_bytes(), b.as_bytes());
        let total = a.len() + b.len();
        self.ensure(total);

        self.data[..a.len()].copy_from_slice(a);
        self.data[a.len()..total].copy_from_slice(b);
        self.len = total;
    }

    /// self = self || tail
    pub fn append(&mut self, tail: &[u8]) {
        let start = self.len;
        let total = start + tail.len();
        self.ensure(total);

        self.data[start..total].copy_from_slice(tail);
        self.len = total;
    }

    /// self = head || self
    pub fn prepend(&mut self, head: &[u8]) {
        let old_len = self.len;
        let total = head.len() + old_len;
        self.ensure(total);

        // Move the current bytes out of the way before writing the head
        self.data.copy_within(..old_len, head.len());
        self.data[..head.len()].copy_from_slice(head);
        self.len = total;
    }

    /// self = a || byte
    pub fn concat_byte(&mut self, a: &ByteBuffer, byte: u8) {
        self.assign(a);
        self.push_byte(byte);
    }

    /// self = self || byte
    pub fn push_byte(&mut self, byte: u8) {
        if self.len == self.capacity() {
            self.update(0);
        }
        self.data[self.len] = byte;
        self.len += 1;
    }

    /// self = a || 0^n
    pub fn concat_zeros(&mut self, a: &ByteBuffer, n: usize) {
        self.assign(a);
        self.push_zeros(n);
    }

    /// self = self || 0^n
    pub fn push_zeros(&mut self, n: usize) {
        let start = self.len;
        let total = start + n;
        self.ensure(total);

        self.data[start..total].fill(0);
        self.len = total;
    }

    /// Set self to `src` with `n` bytes removed.
    ///
    /// A non-negative `n` drops the last `n` bytes, a negative `n` drops the
    /// first `|n|`. The count is clamped to the source length.
    pub fn trim(&mut self, src: &ByteBuffer, n: isize) {
        let (from, to) = trim_range(src.len(), n);
        self.assign_raw(&src.as_bytes()[from..to]);
    }

    /// In-place form of [`trim`](ByteBuffer::trim)
    pub fn trim_in_place(&mut self, n: isize) {
        let (from, to) = trim_range(self.len, n);
        self.data.copy_within(from..to, 0);
        self.len = to - from;
    }

    /// Copy up to `size` bytes starting at `start` into `dest`.
    ///
    /// A negative `start` counts back from the end of the buffer. The copy is
    /// clamped to the bytes remaining after `start` and to `dest.len()`.
    /// `Endian::Little` writes the selected bytes in reverse order.
    /// Returns the number of bytes written.
    pub fn save(&self, dest: &mut [u8], size: usize, start: isize, endian: Endian) -> usize {
        if self.len == 0 {
            return 0;
        }

        let start = if start < 0 {
            start.rem_euclid(self.len as isize) as usize
        } else {
            start as usize
        };
        if start >= self.len {
            return 0;
        }

        let size = size.min(self.len - start).min(dest.len());
        let src = &self.data[start..start + size];
        match endian {
            Endian::Big => dest[..size].copy_from_slice(src),
            Endian::Little => {
                for (d, s) in dest[..size].iter_mut().zip(src.iter().rev()) {
                    *d = *s;
                }
            }
        }

        size
    }

    /// Replace contents with `size` bytes of `src` starting at `start`.
    ///
    /// Inverse of [`save`](ByteBuffer::save). The copy is clamped to what
    /// `src` holds after `start`.
    pub fn load(&mut self, src: &[u8], size: usize, start: usize, endian: Endian) {
        let start = start.min(src.len());
        let size = size.min(src.len() - start);
        self.ensure(size);

        let src = &src[start..start + size];
        match endian {
            Endian::Big => self.data[..size].copy_from_slice(src),
            Endian::Little => {
                for (d, s) in self.data[..size].iter_mut().zip(src.iter().rev()) {
                    *d = *s;
                }
            }
        }
        self.len = size;
    }

    /// Free the storage. Safe to call more than once; the buffer is left
    /// empty with zero capacity and grows again on the next write.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.len = 0;
    }
}

/// Retained range of a buffer of `len` bytes after trimming `n`
fn trim_range(len: usize, n: isize) -> (usize, usize) {
    let count = n.unsigned_abs().min(len);
    if n < 0 {
        (count, len)
    } else {
        (0, len - count)
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteBuffer {}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        Self { data: bytes, len }
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("data", &hex::encode(self.as_bytes()))
            .finish()
    }
}
