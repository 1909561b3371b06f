//! Key value types.

mod key;

pub use key::Key;
