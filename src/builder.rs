//! Key codec configuration.

use std::sync::atomic::{AtomicBool, Ordering};

use bytes::{Bytes, BytesMut};

use crate::codec::{read_key, write_key};
use crate::error::KeyError;
use crate::types::Key;

/// Initial capacity of the buffer allocated by [`KeyCodec::encode`].
pub const DEFAULT_SCRATCH_CAPACITY: usize = 2048;

static NULL_TERMINATION: AtomicBool = AtomicBool::new(false);

/// Sets the process-wide default for null termination.
///
/// Only codecs created afterwards pick it up, including those behind
/// [`to_key`](crate::to_key). Set it once at startup.
pub fn enable_null_termination(enabled: bool) {
    NULL_TERMINATION.store(enabled, Ordering::Relaxed);
}

/// Encoder/decoder settings.
///
/// ```
/// use ordkey::{Key, KeyCodec};
///
/// let codec = KeyCodec::builder().null_termination(true).max_key_size(511);
/// let bytes = codec.encode(&Key::from("apple")).unwrap();
/// assert_eq!(&bytes[..], b"apple\0");
/// assert_eq!(codec.decode(&bytes), Key::from("apple"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCodec {
    null_termination: bool,
    scratch_capacity: usize,
    max_key_size: Option<usize>,
}

impl Default for KeyCodec {
    fn default() -> Self {
        Self::builder()
    }
}

impl KeyCodec {
    /// Creates a codec with default settings.
    pub fn builder() -> Self {
        Self {
            null_termination: NULL_TERMINATION.load(Ordering::Relaxed),
            scratch_capacity: DEFAULT_SCRATCH_CAPACITY,
            max_key_size: None,
        }
    }

    /// Terminates the final component too, as if more of the key followed.
    pub fn null_termination(mut self, enabled: bool) -> Self {
        self.null_termination = enabled;
        self
    }

    /// Sets the initial capacity of buffers allocated by [`encode`](Self::encode).
    pub fn scratch_capacity(mut self, capacity: usize) -> Self {
        self.scratch_capacity = capacity;
        self
    }

    /// Rejects keys that encode to more than `limit` bytes.
    pub fn max_key_size(mut self, limit: usize) -> Self {
        self.max_key_size = Some(limit);
        self
    }

    pub fn is_null_terminated(&self) -> bool {
        self.null_termination
    }

    /// Encodes `key` into a new buffer holding exactly the key bytes.
    pub fn encode(&self, key: &Key) -> Result<Bytes, KeyError> {
        let mut buf = BytesMut::with_capacity(self.scratch_capacity);
        self.encode_into(&mut buf, key)?;
        Ok(buf.freeze())
    }

    /// Appends the encoding of `key` to `buf` and returns the number of bytes
    /// written. On error `buf` is restored to its previous length.
    pub fn encode_into(&self, buf: &mut BytesMut, key: &Key) -> Result<usize, KeyError> {
        let start = buf.len();
        let result = write_key(buf, key, self.null_termination).and_then(|end| {
            let size = end - start;
            match self.max_key_size {
                Some(limit) if size > limit => {
                    tracing::warn!(size, limit, key_type = key.type_name(), "key exceeds size limit");
                    Err(KeyError::KeyTooLarge { size, limit })
                }
                _ => Ok(size),
            }
        });
        match &result {
            Ok(size) => tracing::trace!(size, key_type = key.type_name(), "encoded key"),
            Err(_) => buf.truncate(start),
        }
        result
    }

    /// Decodes a key produced by [`encode`](Self::encode).
    pub fn decode(&self, bytes: &[u8]) -> Key {
        let key = read_key(bytes);
        tracing::trace!(size = bytes.len(), key_type = key.type_name(), "decoded key");
        key
    }
}
