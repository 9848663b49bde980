use std::io::{self, ErrorKind, Read, Write};

use super::{DecodeError, OversizedError, TruncatedError, ZeroCapacityError};

/// The largest capacity or chain length a decoder will accept before allocating for it.
pub const MAX_DECODED_LEN: usize = 1_000_000;

/// Writes the fixed-width, native-endian primitives that every persisted structure is built from.
pub(crate) struct Encoder<'a, W: Write> {
    inner: &'a mut W,
}

impl<'a, W: Write> Encoder<'a, W> {
    pub fn new(inner: &'a mut W) -> Encoder<'a, W> {
        Encoder { inner }
    }

    pub fn i32(&mut self, value: i32) -> io::Result<()> {
        self.inner.write_all(&value.to_ne_bytes())
    }

    pub fn usize(&mut self, value: usize) -> io::Result<()> {
        self.inner.write_all(&value.to_ne_bytes())
    }

    pub fn bool(&mut self, value: bool) -> io::Result<()> {
        self.inner.write_all(&[value as u8])
    }
}

/// The reading half of [`Encoder`]. Running out of input is reported as [`TruncatedError`] rather
/// than as a plain I/O error.
pub(crate) struct Decoder<'a, R: Read> {
    inner: &'a mut R,
}

impl<'a, R: Read> Decoder<'a, R> {
    pub fn new(inner: &'a mut R) -> Decoder<'a, R> {
        Decoder { inner }
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<(), DecodeError> {
        match self.inner.read_exact(buf) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(TruncatedError)?,
            Err(e) => Err(e)?,
        }
    }

    pub fn i32(&mut self) -> Result<i32, DecodeError> {
        let mut buf = [0; size_of::<i32>()];
        self.fill(&mut buf)?;
        Ok(i32::from_ne_bytes(buf))
    }

    pub fn usize(&mut self) -> Result<usize, DecodeError> {
        let mut buf = [0; size_of::<usize>()];
        self.fill(&mut buf)?;
        Ok(usize::from_ne_bytes(buf))
    }

    /// Reads a single raw byte. Booleans are read this way so that the caller can reject bytes
    /// other than 0 and 1 with a meaningful error.
    pub fn u8(&mut self) -> Result<u8, DecodeError> {
        let mut buf = [0; 1];
        self.fill(&mut buf)?;
        Ok(buf[0])
    }

    /// Reads a length field, rejecting anything above [`MAX_DECODED_LEN`].
    pub fn len(&mut self, field: &'static str) -> Result<usize, DecodeError> {
        let len = self.usize()?;
        if len > MAX_DECODED_LEN {
            Err(OversizedError {
                field,
                len,
                limit: MAX_DECODED_LEN,
            })?
        }
        Ok(len)
    }

    /// Reads a capacity field, which has the same bound as [`Decoder::len`] and additionally
    /// can't be 0.
    pub fn cap(&mut self) -> Result<usize, DecodeError> {
        match self.len("capacity")? {
            0 => Err(ZeroCapacityError)?,
            cap => Ok(cap),
        }
    }
}
