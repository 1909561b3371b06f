//! ordkey — order-preserving binary keys.
//!
//! Encodes nulls, booleans, numbers, strings, symbols and sequences of them
//! into byte strings whose unsigned lexicographic order matches the order of
//! the values, so a byte-sorted store can index them without a comparator.
//!
//! ```
//! use ordkey::{from_key, to_key, Key};
//!
//! let a = to_key(&Key::Sequence(vec!["apple".into(), 42.into()])).unwrap();
//! let b = to_key(&Key::Sequence(vec!["apple".into(), 43.into()])).unwrap();
//! assert!(a < b);
//! assert_eq!(from_key(&a), Key::Sequence(vec!["apple".into(), 42.into()]));
//! ```
//!
//! # Architecture
//!
//! - **`codec`** — The key format: control bytes, number frames, UTF-8
//!   transcoding, encoder and decoder
//! - **`types`** — The `Key` value model
//! - **`builder`** — `KeyCodec` settings (null termination, size limit)
//! - **`swap`** — Byte order helpers for word-oriented comparators
//! - **`json`** — Conversion from `serde_json::Value` (feature `json`)

pub mod builder;
pub mod codec;
pub mod error;
pub mod swap;
pub mod types;

#[cfg(feature = "json")]
pub mod json;

use bytes::Bytes;

pub use builder::{enable_null_termination, KeyCodec};
pub use error::KeyError;
pub use types::Key;

/// Encodes `key` with the default codec.
pub fn to_key(key: &Key) -> Result<Bytes, KeyError> {
    KeyCodec::default().encode(key)
}

/// Decodes bytes produced by [`to_key`].
pub fn from_key(bytes: &[u8]) -> Key {
    KeyCodec::default().decode(bytes)
}
