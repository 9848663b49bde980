//! The binary save/restore discipline shared by every collection in the crate.
//!
//! All formats are sequences of fixed-width, native-endian integers with no header, magic number
//! or version. Lengths read back from a stream are bounded by [`MAX_DECODED_LEN`] before anything
//! is allocated for them, and running out of input is always an error rather than a partial
//! result.

mod codec;
mod error;
mod persist;
mod tests;

pub(crate) use codec::{Decoder, Encoder};
pub use codec::MAX_DECODED_LEN;
pub use error::*;
pub use persist::*;
