//! Key encoding: `Key` → order-preserving bytes.

use bytes::{BufMut, BytesMut};

use super::{marker, number, utf8};
use crate::error::KeyError;
use crate::types::Key;

/// Appends the encoding of `key` and returns the new write position.
///
/// `in_sequence` marks a component that is followed by more of the key;
/// such a component is written in self-delimiting form and followed by a
/// separator byte. On error the buffer may hold a partial encoding.
pub fn write_key(buf: &mut BytesMut, key: &Key, in_sequence: bool) -> Result<usize, KeyError> {
    match key {
        Key::Absent => {}
        Key::Null => encode_null(buf, in_sequence),
        Key::Boolean(b) => encode_bool(buf, *b, in_sequence),
        Key::Number(n) => encode_number(buf, *n, in_sequence),
        Key::String(s) => encode_string(buf, s, in_sequence)?,
        Key::Symbol(name) => encode_symbol(buf, name, in_sequence)?,
        Key::Raw(bytes) => encode_raw(buf, bytes, in_sequence),
        Key::Sequence(items) => encode_sequence(buf, items, in_sequence)?,
    }
    Ok(buf.len())
}

fn terminate(buf: &mut BytesMut, in_sequence: bool) {
    if in_sequence {
        buf.put_u8(marker::SEPARATOR);
    }
}

pub fn encode_null(buf: &mut BytesMut, in_sequence: bool) {
    buf.put_u8(marker::NULL);
    terminate(buf, in_sequence);
}

pub fn encode_bool(buf: &mut BytesMut, value: bool, in_sequence: bool) {
    buf.put_u8(if value { marker::TRUE } else { marker::FALSE });
    terminate(buf, in_sequence);
}

/// Encodes a number; full width inside a sequence, shortest otherwise.
pub fn encode_number(buf: &mut BytesMut, value: f64, in_sequence: bool) {
    if value.is_nan() {
        tracing::debug!(bits = value.to_bits(), "canonicalizing NaN key component");
    }
    number::encode_number(buf, value, in_sequence);
    terminate(buf, in_sequence);
}

/// Encodes a string, escaped when empty or when its first code point
/// collides with the control range.
pub fn encode_string(buf: &mut BytesMut, value: &str, in_sequence: bool) -> Result<(), KeyError> {
    if value.contains('\0') {
        return Err(KeyError::InvalidString(format!(
            "{value:?} contains U+0000"
        )));
    }
    if value
        .chars()
        .next()
        .is_none_or(|c| u32::from(c) < u32::from(marker::STRING_MIN))
    {
        buf.put_u8(marker::ESCAPE);
    }
    utf8::encode_str(buf, value);
    terminate(buf, in_sequence);
    Ok(())
}

/// Encodes a string given as UTF-16 code units.
///
/// Surrogate pairs become 4-byte sequences; lone surrogates are kept as
/// 3-byte sequences and decode to U+FFFD.
pub fn encode_utf16_string(
    buf: &mut BytesMut,
    units: &[u16],
    in_sequence: bool,
) -> Result<(), KeyError> {
    if units.contains(&0) {
        return Err(KeyError::InvalidString(
            "UTF-16 input contains U+0000".into(),
        ));
    }
    if units
        .first()
        .is_none_or(|&u| u < u16::from(marker::STRING_MIN))
    {
        buf.put_u8(marker::ESCAPE);
    }
    utf8::encode_utf16_units(buf, units);
    terminate(buf, in_sequence);
    Ok(())
}

/// Encodes a symbol as its marker followed by its name.
pub fn encode_symbol(buf: &mut BytesMut, name: &str, in_sequence: bool) -> Result<(), KeyError> {
    buf.put_u8(marker::SYMBOL);
    encode_string(buf, name, in_sequence)
}

/// Copies pre-encoded bytes verbatim.
pub fn encode_raw(buf: &mut BytesMut, bytes: &[u8], in_sequence: bool) {
    buf.put_slice(bytes);
    terminate(buf, in_sequence);
}

/// Encodes sequence components in order.
///
/// Components that encode to nothing are skipped, and nested sequences are
/// spliced into the surrounding key.
pub fn encode_sequence(
    buf: &mut BytesMut,
    items: &[Key],
    in_sequence: bool,
) -> Result<(), KeyError> {
    let mut present = items.iter().filter(|k| !k.is_empty_encoding()).peekable();
    while let Some(item) = present.next() {
        let more = present.peek().is_some();
        write_key(buf, item, more || in_sequence)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(key: &Key) -> Vec<u8> {
        let mut buf = BytesMut::new();
        write_key(&mut buf, key, false).expect("encode failed");
        buf.to_vec()
    }

    #[test]
    fn encode_scalars() {
        assert_eq!(enc(&Key::Null), vec![marker::NULL]);
        assert_eq!(enc(&Key::Boolean(false)), vec![marker::FALSE]);
        assert_eq!(enc(&Key::Boolean(true)), vec![marker::TRUE]);
        assert!(enc(&Key::Absent).is_empty());
    }

    #[test]
    fn scalars_in_sequence_are_terminated() {
        let mut buf = BytesMut::new();
        let pos = write_key(&mut buf, &Key::Null, true).unwrap();
        assert_eq!(pos, 2);
        assert_eq!(&buf[..], &[marker::NULL, marker::SEPARATOR]);

        buf.clear();
        write_key(&mut buf, &Key::Number(1.0), true).unwrap();
        assert_eq!(buf.len(), number::MAX_WIDTH + 1);
        assert_eq!(buf[number::MAX_WIDTH], marker::SEPARATOR);
    }

    #[test]
    fn write_key_returns_position() {
        let mut buf = BytesMut::from(&b"prefix"[..]);
        let pos = write_key(&mut buf, &Key::String("ab".into()), false).unwrap();
        assert_eq!(pos, 8);
        assert_eq!(&buf[..], b"prefixab");
    }

    #[test]
    fn plain_string_has_no_escape() {
        assert_eq!(enc(&Key::String("apple".into())), b"apple".to_vec());
    }

    #[test]
    fn empty_string_is_escape_byte() {
        assert_eq!(enc(&Key::String(String::new())), vec![marker::ESCAPE]);
    }

    #[test]
    fn control_range_first_char_is_escaped() {
        assert_eq!(enc(&Key::String("\u{1}x".into())), vec![marker::ESCAPE, 0x01, b'x']);
        assert_eq!(enc(&Key::String("\u{1B}".into())), vec![marker::ESCAPE, 0x1B]);
        assert_eq!(enc(&Key::String("\u{1C}".into())), vec![0x1C]);
    }

    #[test]
    fn nul_in_string_is_rejected() {
        let err = write_key(&mut BytesMut::new(), &Key::String("a\0b".into()), false);
        assert!(matches!(err, Err(KeyError::InvalidString(_))));
    }

    #[test]
    fn symbol_is_marker_then_name() {
        assert_eq!(enc(&Key::symbol("id")), vec![marker::SYMBOL, b'i', b'd']);
        let mut buf = BytesMut::new();
        write_key(&mut buf, &Key::symbol("id"), true).unwrap();
        assert_eq!(&buf[..], &[marker::SYMBOL, b'i', b'd', marker::SEPARATOR]);
    }

    #[test]
    fn raw_is_copied() {
        assert_eq!(enc(&Key::Raw(vec![0x01, 0xFF])), vec![0x01, 0xFF]);
    }

    #[test]
    fn apple_forty_two() {
        let key = Key::Sequence(vec!["apple".into(), 42.into()]);
        assert_eq!(enc(&key), b"apple\0\x14\x04\x50\x00".to_vec());
    }

    #[test]
    fn single_element_sequence_equals_element() {
        assert_eq!(enc(&Key::Sequence(vec!["apple".into()])), enc(&"apple".into()));
        assert_eq!(enc(&Key::Sequence(vec![7.into()])), enc(&7.into()));
    }

    #[test]
    fn nested_sequences_are_spliced() {
        let nested = Key::Sequence(vec![
            Key::Sequence(vec![1.into(), "x".into()]),
            Key::Sequence(vec![true.into()]),
        ]);
        let flat = Key::Sequence(vec![1.into(), "x".into(), true.into()]);
        assert_eq!(enc(&nested), enc(&flat));
    }

    #[test]
    fn absent_components_are_skipped() {
        let with_gaps = Key::Sequence(vec![
            Key::Absent,
            "a".into(),
            Key::Sequence(vec![]),
            Key::Null,
            Key::Absent,
        ]);
        assert_eq!(enc(&with_gaps), vec![b'a', 0, marker::NULL]);
        assert!(enc(&Key::Sequence(vec![])).is_empty());
    }

    #[test]
    fn utf16_string_matches_str() {
        let s = "ab😀";
        let units: Vec<u16> = s.encode_utf16().collect();
        let mut buf = BytesMut::new();
        encode_utf16_string(&mut buf, &units, true).unwrap();
        let mut expected = BytesMut::new();
        encode_string(&mut expected, s, true).unwrap();
        assert_eq!(buf, expected);
    }

    #[test]
    fn utf16_escape_and_nul() {
        let mut buf = BytesMut::new();
        encode_utf16_string(&mut buf, &[], false).unwrap();
        assert_eq!(&buf[..], &[marker::ESCAPE]);
        assert!(encode_utf16_string(&mut buf, &[0x41, 0], false).is_err());
    }
}
