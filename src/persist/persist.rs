use std::io::{Read, Write};
#[cfg(all(feature = "fs", target_os = "linux"))]
use std::io::{BufReader, BufWriter};
#[cfg(all(feature = "fs", target_os = "linux"))]
use std::path::Path;

#[cfg(all(feature = "fs", target_os = "linux"))]
use log::debug;

use super::{DecodeError, EncodeError, TrailingBytesError};
#[cfg(all(feature = "fs", target_os = "linux"))]
use super::{LoadError, SaveError};
#[cfg(all(feature = "fs", target_os = "linux"))]
use crate::fs::File;

/// A structure with a binary representation that can be written out in full and read back.
///
/// Implementors provide [`encode`](Persist::encode), [`decode`](Persist::decode) and
/// [`clear`](Persist::clear). Everything else is built on top of those three: restoring in place,
/// byte buffer helpers, and (on Linux, with the `fs` feature) saving to and loading from a path.
///
/// The formats are native-endian and unversioned, so they are only portable between builds for
/// the same platform.
pub trait Persist: Sized {
    /// Writes the complete representation of `self` to `writer`.
    ///
    /// If an error is returned, any bytes that were already written don't form a valid
    /// representation.
    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), EncodeError>;

    /// Reads a complete representation from `reader`, consuming exactly the bytes written by
    /// [`Persist::encode`].
    fn decode<R: Read>(reader: &mut R) -> Result<Self, DecodeError>;

    /// Removes all contents, releasing any owned nodes.
    fn clear(&mut self);

    /// Replaces the contents of `self` with a representation read from `reader`. The existing
    /// contents are torn down first, so on error `self` is left empty rather than partially
    /// restored.
    fn restore<R: Read>(&mut self, reader: &mut R) -> Result<(), DecodeError> {
        self.clear();
        *self = Self::decode(reader)?;
        Ok(())
    }

    /// Encodes `self` into a new byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::new();
        self.encode(&mut buf)?;
        Ok(buf)
    }

    /// Decodes a value from `bytes`, which must contain exactly one representation.
    fn from_bytes(mut bytes: &[u8]) -> Result<Self, DecodeError> {
        let value = Self::decode(&mut bytes)?;
        if !bytes.is_empty() {
            Err(TrailingBytesError)?
        }
        Ok(value)
    }

    /// Writes `self` to the file at `path`, creating it or truncating any existing contents.
    #[cfg(all(feature = "fs", target_os = "linux"))]
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.encode(&mut writer)?;

        let file = writer
            .into_inner()
            .map_err(|e| EncodeError::from(e.into_error()))?;
        file.close()?;

        debug!("saved {} to {}", std::any::type_name::<Self>(), path.display());
        Ok(())
    }

    /// Replaces the contents of `self` with those of the file at `path`. See
    /// [`Persist::restore`] for the state of `self` when decoding fails. If the file can't be
    /// opened, `self` is left untouched.
    #[cfg(all(feature = "fs", target_os = "linux"))]
    fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);
        self.restore(&mut reader)?;
        reader.into_inner().close()?;

        debug!("loaded {} from {}", std::any::type_name::<Self>(), path.display());
        Ok(())
    }
}
