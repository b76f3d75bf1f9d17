// Buffer Module - Main module file
// Byte buffer primitive shared by the SHA3 and RSA layers

pub mod byte_buffer;
pub mod convert;

pub use byte_buffer::{ByteBuffer, Endian, DEFAULT_CAPACITY, GROWTH_FACTOR};
