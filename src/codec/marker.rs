//! Control byte constants.
//!
//! The first byte of every encoded component selects its type. The ranges
//! are ordered so that comparing keys byte-wise also compares their types.

// Sequence separator and string terminator.
pub const SEPARATOR: u8 = 0x00;

// Symbol: the name follows, encoded as a string.
pub const SYMBOL: u8 = 0x02;

// Null
pub const NULL: u8 = 0x05;

// Boolean
pub const FALSE: u8 = 0x06;
pub const TRUE: u8 = 0x07;

// Numbers: 0x08..=0x0F when the sign bit is set, 0x10..=0x17 otherwise.
pub const NEGATIVE_MIN: u8 = 0x08;
pub const NEGATIVE_MAX: u8 = 0x0F;
pub const POSITIVE_MIN: u8 = 0x10;
pub const POSITIVE_MAX: u8 = 0x17;

// 0x18..=0x1A are reserved; 0x01, 0x03 and 0x04 are unassigned.

// Precedes a string that is empty or starts with a code point below
// STRING_MIN.
pub const ESCAPE: u8 = 0x1B;

// Lowest first byte of a string written without escape.
pub const STRING_MIN: u8 = 0x1C;

/// Type of component selected by a control byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Symbol,
    Null,
    False,
    True,
    Number,
    String,
    /// Separator, unassigned or reserved byte: nothing further decodes.
    Unknown,
}

/// Classifies a leading byte.
pub fn classify(b: u8) -> Control {
    match b {
        SYMBOL => Control::Symbol,
        NULL => Control::Null,
        FALSE => Control::False,
        TRUE => Control::True,
        NEGATIVE_MIN..=POSITIVE_MAX => Control::Number,
        ESCAPE.. => Control::String,
        _ => Control::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_sort_by_type() {
        assert!(SYMBOL < NULL);
        assert!(NULL < FALSE && FALSE < TRUE);
        assert!(TRUE < NEGATIVE_MIN);
        assert!(NEGATIVE_MAX < POSITIVE_MIN);
        assert!(POSITIVE_MAX < ESCAPE);
        assert!(ESCAPE < STRING_MIN);
    }

    #[test]
    fn classify_bytes() {
        assert_eq!(classify(0x00), Control::Unknown);
        assert_eq!(classify(0x01), Control::Unknown);
        assert_eq!(classify(0x02), Control::Symbol);
        assert_eq!(classify(0x05), Control::Null);
        assert_eq!(classify(0x07), Control::True);
        assert_eq!(classify(0x08), Control::Number);
        assert_eq!(classify(0x17), Control::Number);
        assert_eq!(classify(0x18), Control::Unknown);
        assert_eq!(classify(0x1A), Control::Unknown);
        assert_eq!(classify(0x1B), Control::String);
        assert_eq!(classify(b'a'), Control::String);
        assert_eq!(classify(0xFF), Control::String);
    }
}
