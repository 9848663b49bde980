#![cfg(test)]

use std::io::{self, ErrorKind, Read};

use super::*;

/// A reader that fails with something other than running out of input.
struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(ErrorKind::PermissionDenied, "denied"))
    }
}

#[test]
fn test_primitives_are_native_endian() {
    let mut buf = Vec::new();
    let mut encoder = Encoder::new(&mut buf);
    encoder.i32(-2).unwrap();
    encoder.usize(7).unwrap();
    encoder.bool(true).unwrap();

    let mut expected = Vec::new();
    expected.extend((-2i32).to_ne_bytes());
    expected.extend(7usize.to_ne_bytes());
    expected.push(1);
    assert_eq!(buf, expected);

    let mut reader = buf.as_slice();
    let mut decoder = Decoder::new(&mut reader);
    assert_eq!(decoder.i32().unwrap(), -2);
    assert_eq!(decoder.usize().unwrap(), 7);
    assert_eq!(decoder.u8().unwrap(), 1);
    assert!(reader.is_empty());
}

#[test]
fn test_truncated() {
    let mut reader: &[u8] = &[1, 2];
    assert!(
        matches!(Decoder::new(&mut reader).i32(), Err(DecodeError::Truncated(_))),
        "Running out of input should be reported as truncation."
    );
}

#[test]
fn test_io_errors_pass_through() {
    let mut reader = FailingReader;
    assert!(
        matches!(Decoder::new(&mut reader).u8(), Err(DecodeError::Io(_))),
        "Errors other than end of input should be kept as they are."
    );
}

#[test]
fn test_length_limits() {
    let bytes = MAX_DECODED_LEN.to_ne_bytes();
    assert_eq!(Decoder::new(&mut bytes.as_slice()).len("test").unwrap(), MAX_DECODED_LEN);

    let bytes = (MAX_DECODED_LEN + 1).to_ne_bytes();
    match Decoder::new(&mut bytes.as_slice()).len("test") {
        Err(DecodeError::Oversized(e)) => {
            assert_eq!(e.field, "test");
            assert_eq!(e.len, MAX_DECODED_LEN + 1);
        },
        other => panic!("Expected an oversized error, got {other:?}."),
    }

    let bytes = 0usize.to_ne_bytes();
    assert!(matches!(
        Decoder::new(&mut bytes.as_slice()).cap(),
        Err(DecodeError::ZeroCapacity(_))
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        DecodeError::from(SizeMismatchError {
            declared: 3,
            actual: 2
        })
        .to_string(),
        "declared size 3 doesn't match the 2 entries decoded"
    );
    assert_eq!(
        EncodeError::from(ReservedKeyError(-1)).to_string(),
        "key -1 is reserved as the null marker and can't be encoded"
    );
}

#[cfg(all(feature = "fs", target_os = "linux"))]
#[test]
fn test_close_errors_are_returned_from_load() {
    use crate::fs::{CloseError, IOError};

    let error = LoadError::from(CloseError::from(IOError));
    assert!(
        matches!(error, LoadError::Close(_)),
        "A failed close after loading should be returned, not raised on drop."
    );
    assert_eq!(error.to_string(), "error during I/O");
}
