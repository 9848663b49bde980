use std::fmt::{self, Display, Formatter};
use std::io::{Read, Write};

use derive_more::IsVariant;

use crate::persist::{Decoder, DecodeError, Encoder, InvalidSlotError};

/// A key-value pair stored in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub key: i32,
    pub value: i32,
}

/// A single slot of an [`OpenHashMap`](super::OpenHashMap).
///
/// A tombstone marks a removed entry. It keeps probe sequences that passed through the slot
/// intact and can be reused by a later insertion. The removed entry is retained only so that the
/// slot can be written out exactly as it was.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum Slot {
    #[default]
    Empty,
    Live(Entry),
    Tombstone(Entry),
}

impl Slot {
    /// Writes the slot as `{key: i32, value: i32, occupied: bool, deleted: bool}`.
    pub fn encode<W: Write>(&self, encoder: &mut Encoder<'_, W>) -> std::io::Result<()> {
        let (entry, occupied, deleted) = match self {
            Slot::Empty => (Entry { key: 0, value: 0 }, false, false),
            Slot::Live(entry) => (*entry, true, false),
            Slot::Tombstone(entry) => (*entry, true, true),
        };

        encoder.i32(entry.key)?;
        encoder.i32(entry.value)?;
        encoder.bool(occupied)?;
        encoder.bool(deleted)
    }

    /// Reads a slot written by [`Slot::encode`]. Flag bytes other than 0 and 1, and the
    /// combination "deleted but never occupied", are rejected.
    pub fn decode<R: Read>(decoder: &mut Decoder<'_, R>, index: usize) -> Result<Slot, DecodeError> {
        let entry = Entry {
            key: decoder.i32()?,
            value: decoder.i32()?,
        };
        let occupied = decoder.u8()?;
        let deleted = decoder.u8()?;

        match (occupied, deleted) {
            (0, 0) => Ok(Slot::Empty),
            (1, 0) => Ok(Slot::Live(entry)),
            (1, 1) => Ok(Slot::Tombstone(entry)),
            _ => Err(InvalidSlotError {
                index,
                occupied,
                deleted,
            })?,
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Empty => write!(f, "-"),
            Slot::Live(Entry { key, value }) => write!(f, "({key}: {value})"),
            Slot::Tombstone(Entry { key, value }) => write!(f, "†({key}: {value})"),
        }
    }
}
