//! Key decoding: bytes → `Key`.
//!
//! There is no length prefix. A key is read one component at a time until
//! the input is exhausted, skipping a separator after each component; more
//! than one component makes a sequence.

use bytes::Buf;

use super::marker::{self, Control};
use super::{number, utf8};
use crate::types::Key;

/// Decodes a whole key.
pub fn read_key(bytes: &[u8]) -> Key {
    let mut cursor = bytes;
    decode_key(&mut cursor)
}

/// Decodes the key stored in `bytes[start..end]`.
///
/// Bounds past the end of `bytes` are clamped.
pub fn read_key_at(bytes: &[u8], start: usize, end: usize) -> Key {
    let end = end.min(bytes.len());
    let start = start.min(end);
    read_key(&bytes[start..end])
}

/// Decodes components until `buf` is exhausted.
///
/// Zero components decode to [`Key::Absent`], one to that component, more
/// to a [`Key::Sequence`]. A component that starts with an unrecognized
/// control byte swallows the rest of the input as [`Key::Raw`].
pub fn decode_key(buf: &mut impl Buf) -> Key {
    let mut values = Vec::new();
    while buf.has_remaining() {
        let value = decode_component(buf);
        let opaque = matches!(value, Key::Raw(_));
        values.push(value);
        if opaque {
            break;
        }
        if peek(&*buf) == Some(marker::SEPARATOR) {
            buf.advance(1);
        }
    }

    match values.len() {
        0 => Key::Absent,
        1 => values.swap_remove(0),
        _ => Key::Sequence(values),
    }
}

/// Decodes a single component, leaving any following separator unread.
pub fn decode_component(buf: &mut impl Buf) -> Key {
    let Some(control) = peek(&*buf) else {
        return Key::Absent;
    };

    match marker::classify(control) {
        Control::Null => {
            buf.advance(1);
            Key::Null
        }
        Control::False => {
            buf.advance(1);
            Key::Boolean(false)
        }
        Control::True => {
            buf.advance(1);
            Key::Boolean(true)
        }
        Control::Symbol => {
            buf.advance(1);
            Key::Symbol(decode_string(buf))
        }
        Control::Number => Key::Number(number::decode_number(buf)),
        Control::String => Key::String(decode_string(buf)),
        Control::Unknown => {
            tracing::debug!(
                control,
                remaining = buf.remaining(),
                "undecodable key component, keeping raw bytes"
            );
            Key::Raw(buf.copy_to_bytes(buf.remaining()).to_vec())
        }
    }
}

/// Reads a string, skipping its escape byte if present.
fn decode_string(buf: &mut impl Buf) -> String {
    if peek(&*buf) == Some(marker::ESCAPE) {
        buf.advance(1);
    }
    utf8::decode_str(buf)
}

fn peek(buf: &impl Buf) -> Option<u8> {
    buf.chunk().first().copied()
}
