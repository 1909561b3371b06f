//! Key value model.

use std::fmt;

/// A value that can be turned into an order-preserving key.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// No key at this position. Encodes to zero bytes.
    Absent,
    Null,
    Boolean(bool),
    /// Every numeric input is carried as a double.
    Number(f64),
    String(String),
    /// An interned name. Sorts by its name, ahead of every other type.
    Symbol(String),
    /// Bytes copied verbatim into the key. The decoder also returns this
    /// for any tail it cannot interpret.
    Raw(Vec<u8>),
    /// Ordered components of a compound key.
    Sequence(Vec<Key>),
}

impl Key {
    /// Returns the value as a string reference, if it is a `String` variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an f64, if it is a `Number` variant.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the components, if this is a `Sequence` variant.
    pub fn as_sequence(&self) -> Option<&[Key]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Builds a symbol key.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Whether encoding this value writes at least one byte.
    pub(crate) fn is_empty_encoding(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Raw(bytes) => bytes.is_empty(),
            Self::Sequence(items) => items.iter().all(Key::is_empty_encoding),
            _ => false,
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Raw(_) => "raw",
            Self::Sequence(_) => "sequence",
        }
    }
}

// -- Convenience conversions --

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<f64> for Key {
    fn from(f: f64) -> Self {
        Self::Number(f)
    }
}

impl From<f32> for Key {
    fn from(f: f32) -> Self {
        Self::Number(f64::from(f))
    }
}

macro_rules! lossless_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(n: $t) -> Self {
                    Self::Number(f64::from(n))
                }
            }
        )*
    };
}

lossless_number!(i8, i16, i32, u8, u16, u32);

// Wide integers are coerced to the nearest double; precision beyond 2^53
// is the caller's concern.
macro_rules! coerced_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(n: $t) -> Self {
                    Self::Number(n as f64)
                }
            }
        )*
    };
}

coerced_number!(i64, u64, i128, u128, isize, usize);

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<Vec<u8>> for Key {
    fn from(b: Vec<u8>) -> Self {
        Self::Raw(b)
    }
}

impl From<&[u8]> for Key {
    fn from(b: &[u8]) -> Self {
        Self::Raw(b.to_vec())
    }
}

impl From<Vec<Key>> for Key {
    fn from(v: Vec<Key>) -> Self {
        Self::Sequence(v)
    }
}

impl From<()> for Key {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Key>> From<Option<T>> for Key {
    fn from(o: Option<T>) -> Self {
        o.map_or(Self::Absent, Into::into)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "<absent>"),
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Symbol(s) => write!(f, "Symbol({s})"),
            Self::Raw(b) => write!(f, "<{} raw bytes>", b.len()),
            Self::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_become_numbers() {
        assert_eq!(Key::from(42i32), Key::Number(42.0));
        assert_eq!(Key::from(-7i64), Key::Number(-7.0));
        assert_eq!(Key::from(u128::from(u64::MAX)), Key::Number(u64::MAX as f64));
    }

    #[test]
    fn option_none_is_absent() {
        assert_eq!(Key::from(None::<i32>), Key::Absent);
        assert_eq!(Key::from(Some("a")), Key::String("a".into()));
    }

    #[test]
    fn empty_encodings() {
        assert!(Key::Absent.is_empty_encoding());
        assert!(Key::Sequence(vec![]).is_empty_encoding());
        assert!(Key::Sequence(vec![Key::Absent, Key::Sequence(vec![])]).is_empty_encoding());
        assert!(Key::Raw(vec![]).is_empty_encoding());
        assert!(!Key::Null.is_empty_encoding());
        assert!(!Key::String(String::new()).is_empty_encoding());
    }

    #[test]
    fn display_sequence() {
        let k = Key::Sequence(vec!["apple".into(), 42.into(), Key::symbol("s")]);
        assert_eq!(k.to_string(), "[\"apple\", 42, Symbol(s)]");
    }
}
