//! Order-preserving key format.
//!
//! Every component starts with a control byte from [`marker`]; numbers use
//! a big-endian frame, strings are UTF-8 ended by a `0` byte when more of
//! the key follows.

pub mod decode;
pub mod encode;
pub mod marker;
pub mod number;
pub mod utf8;

pub use decode::read_key;
pub use encode::write_key;
