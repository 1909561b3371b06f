//! In-place byte order reversal for moving key bytes across an endianness
//! boundary.
//!
//! The key format itself is big-endian and never needs these; they exist for
//! stores that hand keys to little-endian word comparators.

/// Reverses every 8-byte chunk of `buf` in place. A trailing chunk shorter
/// than eight bytes is reversed within its own length.
pub fn swap_64bit(buf: &mut [u8]) {
    swap_chunks(buf, 8);
}

/// Reverses every 4-byte chunk of `buf` in place. A trailing chunk shorter
/// than four bytes is reversed within its own length.
pub fn swap_32bit(buf: &mut [u8]) {
    swap_chunks(buf, 4);
}

fn swap_chunks(buf: &mut [u8], width: usize) {
    for chunk in buf.chunks_mut(width) {
        chunk.reverse();
    }
}
