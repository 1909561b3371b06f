//! Order-preserving encoding of IEEE-754 doubles.
//!
//! A double's bit pattern is framed as 72 bits, `[tag:4][payload:64][0:4]`,
//! and written big-endian. Values with the sign bit clear get tag `1` and
//! their raw pattern; values with the sign bit set get tag `0` and every
//! bit except the sign inverted, so larger magnitudes sort lower. The tag
//! puts the first byte in `0x08..=0x0F` or `0x10..=0x17`.
//!
//! Standalone non-negative numbers drop trailing zero bytes (down to
//! [`MIN_WIDTH`]). The decoder treats missing bytes as zero, and since a
//! truncated frame only loses zeros, byte order is unchanged.

use bytes::{Buf, BufMut, BytesMut};

use super::marker;

/// Width of a full number frame.
pub const MAX_WIDTH: usize = 9;

/// Shortest frame written for a truncated number.
pub const MIN_WIDTH: usize = 4;

const SIGN: u64 = 1 << 63;

// Every NaN is written as the positive quiet NaN, which sorts after +inf.
const CANONICAL_NAN: u64 = 0x7FF8_0000_0000_0000;

/// Appends the encoding of `value`.
///
/// With `full_width` the frame is always [`MAX_WIDTH`] bytes, which is what
/// a sequence element needs to stay self-delimiting.
pub fn encode_number(buf: &mut BytesMut, value: f64, full_width: bool) {
    let bits = if value.is_nan() {
        CANONICAL_NAN
    } else {
        value.to_bits()
    };
    let negative = bits & SIGN != 0;
    let (tag, payload) = if negative {
        (0u64, bits ^ !SIGN)
    } else {
        (1u64, bits)
    };

    let start = buf.len();
    buf.put_u64((tag << 60) | (payload >> 4));
    buf.put_u8(((payload & 0xF) as u8) << 4);

    if !negative && !full_width {
        let frame = &buf[start..];
        let mut len = MAX_WIDTH;
        while len > MIN_WIDTH && frame[len - 1] == 0 {
            len -= 1;
        }
        buf.truncate(start + len);
    }
}

/// Reads a number frame of up to [`MAX_WIDTH`] bytes.
///
/// The caller has already checked that the first byte is in the number
/// range. Fewer than nine remaining bytes means the encoder truncated
/// trailing zeros.
pub fn decode_number(buf: &mut impl Buf) -> f64 {
    let mut frame = [0u8; MAX_WIDTH];
    let n = buf.remaining().min(MAX_WIDTH);
    buf.copy_to_slice(&mut frame[..n]);

    let mut head = [0u8; 8];
    head.copy_from_slice(&frame[..8]);
    let mut payload = (u64::from_be_bytes(head) << 4) | u64::from(frame[8] >> 4);
    if frame[0] < marker::POSITIVE_MIN {
        payload ^= !SIGN;
    }
    f64::from_bits(payload)
}
