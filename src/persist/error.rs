use std::io;

use derive_more::{Display, Error, From};

#[cfg(all(feature = "fs", target_os = "linux"))]
use crate::fs::{CloseError, OpenError};

#[derive(Debug, Display, Error)]
#[display("key {_0} is reserved as the null marker and can't be encoded")]
pub struct ReservedKeyError(#[error(not(source))] pub i32);

#[derive(Debug, Display, Error)]
#[display("stream ended before the structure was complete")]
pub struct TruncatedError;

#[derive(Debug, Display, Error)]
#[display("stream continues after the end of the structure")]
pub struct TrailingBytesError;

#[derive(Debug, Display, Error)]
#[display("declared {field} of {len} exceeds the limit of {limit}")]
pub struct OversizedError {
    pub field: &'static str,
    pub len: usize,
    pub limit: usize,
}

#[derive(Debug, Display, Error)]
#[display("declared capacity is 0")]
pub struct ZeroCapacityError;

#[derive(Debug, Display, Error)]
#[display("slot {index} has an invalid state (occupied: {occupied}, deleted: {deleted})")]
pub struct InvalidSlotError {
    pub index: usize,
    pub occupied: u8,
    pub deleted: u8,
}

#[derive(Debug, Display, Error)]
#[display("declared size {declared} doesn't match the {actual} entries decoded")]
pub struct SizeMismatchError {
    pub declared: usize,
    pub actual: usize,
}

#[derive(Debug, Display, Error)]
#[display("decoded tree violates the ordering or balance invariant")]
pub struct MalformedTreeError;

#[derive(Debug, Display, Error, From)]
pub enum EncodeError {
    Io(io::Error),
    ReservedKey(ReservedKeyError),
}

#[derive(Debug, Display, Error, From)]
pub enum DecodeError {
    Io(io::Error),
    Truncated(TruncatedError),
    TrailingBytes(TrailingBytesError),
    Oversized(OversizedError),
    ZeroCapacity(ZeroCapacityError),
    InvalidSlot(InvalidSlotError),
    SizeMismatch(SizeMismatchError),
    MalformedTree(MalformedTreeError),
}

#[cfg(all(feature = "fs", target_os = "linux"))]
#[derive(Debug, Display, Error, From)]
pub enum SaveError {
    Open(OpenError),
    Encode(EncodeError),
    Close(CloseError),
}

#[cfg(all(feature = "fs", target_os = "linux"))]
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
    Open(OpenError),
    Decode(DecodeError),
    Close(CloseError),
}
