//! UTF-8 transcoding for string keys.
//!
//! Strings are written byte by byte so the encoder can interleave control
//! bytes, and read back by a streaming decoder that stops at the `0`
//! terminator. The decoder yields UTF-16 code units; a supplementary
//! character comes out as two calls, the low surrogate being held in the
//! decoder until it is asked for the next unit.

use bytes::{Buf, BufMut, BytesMut};

use super::marker;

const REPLACEMENT: u16 = 0xFFFD;

/// Appends the UTF-8 encoding of `s`, one code point at a time.
pub fn encode_str(buf: &mut BytesMut, s: &str) {
    for c in s.chars() {
        put_code_point(buf, u32::from(c));
    }
}

/// Appends the UTF-8 encoding of a UTF-16 code unit sequence.
///
/// A high surrogate followed by a low surrogate becomes one 4-byte
/// sequence. A lone surrogate is written as a 3-byte sequence of its own
/// value.
pub fn encode_utf16_units(buf: &mut BytesMut, units: &[u16]) {
    let mut i = 0;
    while i < units.len() {
        let c1 = units[i];
        match units.get(i + 1) {
            Some(&c2) if is_high_surrogate(c1) && is_low_surrogate(c2) => {
                let cp = 0x10000 + ((u32::from(c1) & 0x3FF) << 10) + (u32::from(c2) & 0x3FF);
                put_code_point(buf, cp);
                i += 2;
            }
            _ => {
                put_code_point(buf, u32::from(c1));
                i += 1;
            }
        }
    }
}

fn put_code_point(buf: &mut BytesMut, cp: u32) {
    if cp < 0x80 {
        buf.put_u8(cp as u8);
    } else if cp < 0x800 {
        buf.put_u8((cp >> 6) as u8 | 0xC0);
        buf.put_u8((cp & 0x3F) as u8 | 0x80);
    } else if cp < 0x10000 {
        buf.put_u8((cp >> 12) as u8 | 0xE0);
        buf.put_u8(((cp >> 6) & 0x3F) as u8 | 0x80);
        buf.put_u8((cp & 0x3F) as u8 | 0x80);
    } else {
        buf.put_u8((cp >> 18) as u8 | 0xF0);
        buf.put_u8(((cp >> 12) & 0x3F) as u8 | 0x80);
        buf.put_u8(((cp >> 6) & 0x3F) as u8 | 0x80);
        buf.put_u8((cp & 0x3F) as u8 | 0x80);
    }
}

fn is_high_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xD800
}

fn is_low_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xDC00
}

/// Streaming UTF-8 to UTF-16 decoder.
///
/// Continuation bytes are not checked for their `10` tag; only their payload
/// bits are used. A terminator or the end of input inside a multi-byte
/// sequence yields U+FFFD and leaves the terminator unread.
#[derive(Debug, Default, Clone)]
pub struct Utf8Decoder {
    pending: Option<u16>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the low half of a surrogate pair is waiting to be returned.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the next code unit, or `None` at a `0` byte or end of input.
    ///
    /// A pending low surrogate is returned first, without touching `buf`.
    pub fn next_unit(&mut self, buf: &mut impl Buf) -> Option<u16> {
        if let Some(low) = self.pending.take() {
            return Some(low);
        }
        let lead = peek(&*buf)?;
        if lead == marker::SEPARATOR {
            return None;
        }
        buf.advance(1);

        let unit = if lead & 0xE0 == 0xC0 {
            continuation(buf, u32::from(lead & 0x1F), 1).map_or(REPLACEMENT, |cp| cp as u16)
        } else if lead & 0xF0 == 0xE0 {
            continuation(buf, u32::from(lead & 0x0F), 2).map_or(REPLACEMENT, |cp| cp as u16)
        } else if lead & 0xF8 == 0xF0 {
            match continuation(buf, u32::from(lead & 0x07), 3) {
                Some(cp) if cp > 0x10FFFF => REPLACEMENT,
                Some(cp) if cp > 0xFFFF => {
                    let offset = cp - 0x10000;
                    self.pending = Some(0xDC00 | (offset & 0x3FF) as u16);
                    0xD800 | (offset >> 10) as u16
                }
                Some(cp) => cp as u16,
                None => REPLACEMENT,
            }
        } else {
            u16::from(lead)
        };
        Some(unit)
    }
}

fn peek(buf: &impl Buf) -> Option<u8> {
    buf.chunk().first().copied()
}

// Folds `count` continuation bytes into `acc`.
fn continuation(buf: &mut impl Buf, mut acc: u32, count: usize) -> Option<u32> {
    for _ in 0..count {
        match peek(&*buf) {
            Some(b) if b != marker::SEPARATOR => {
                buf.advance(1);
                acc = (acc << 6) | u32::from(b & 0x3F);
            }
            _ => return None,
        }
    }
    Some(acc)
}

/// Reads a string up to (not including) the next `0` byte or end of input.
pub fn decode_str(buf: &mut impl Buf) -> String {
    let mut decoder = Utf8Decoder::new();
    let mut units = Vec::new();
    while let Some(unit) = decoder.next_unit(buf) {
        units.push(unit);
    }
    String::from_utf16_lossy(&units)
}
