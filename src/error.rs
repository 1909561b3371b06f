//! Error types for key encoding.

/// Errors that can occur while encoding a key.
///
/// Decoding never fails: bytes that cannot be interpreted come back as
/// [`Key::Raw`](crate::types::Key::Raw).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("unsupported key type: {0}")]
    UnsupportedType(String),

    #[error("invalid string in key: {0}")]
    InvalidString(String),

    #[error("encoded key is {size} bytes, limit is {limit}")]
    KeyTooLarge { size: usize, limit: usize },
}

impl KeyError {
    /// Builds an [`KeyError::UnsupportedType`] naming the offending type.
    pub fn unsupported(type_name: impl std::fmt::Display) -> Self {
        Self::UnsupportedType(type_name.to_string())
    }
}
