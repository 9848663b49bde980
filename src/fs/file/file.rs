use std::ffi::CString;
use std::io::{self, Read, Write};
use std::marker::PhantomData;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::c_int;

use super::{AccessMode, CloseError, OpenError, ReadOnly, WriteOnly};
use crate::fs::error::InteriorNulError;
use crate::fs::panic::{BadAddrPanic, BadFdPanic, Panic};
use crate::fs::{Fd, err_no};

const DEFAULT_MODE: c_int = 0o644;

/// A regular file, opened through the raw `open(2)` family of syscalls.
///
/// The access mode is part of the type: [`File::open`] produces a `File<ReadOnly>`, which
/// implements [`Read`], while [`File::create`] produces a `File<WriteOnly>`, which implements
/// [`Write`]. Neither buffers on its own, so wrap them in [`io::BufReader`] / [`io::BufWriter`]
/// for small reads and writes.
#[derive(Debug)]
pub struct File<A: AccessMode> {
    pub(crate) _access: PhantomData<fn() -> A>,
    pub(crate) fd: Fd,
}

impl<A: AccessMode> File<A> {
    fn open_with_mode<P: AsRef<Path>>(file_path: P) -> Result<File<A>, OpenError> {
        let pathname = CString::new(file_path.as_ref().as_os_str().as_bytes())
            .map_err(|_| InteriorNulError)?;

        // SAFETY: pathname is a valid nul-terminated string for the duration of the call.
        let fd = match unsafe { libc::open(pathname.as_ptr(), A::FLAGS, DEFAULT_MODE) } {
            -1 => Err(OpenError::interpret_raw_error(err_no()))?,
            fd => Fd(fd),
        };

        Ok(File {
            _access: PhantomData,
            fd: fd.assert_regular()?,
        })
    }

    /// Closes the file, reporting any error that the implicit close on drop would have to
    /// discard.
    pub fn close(self) -> Result<(), CloseError> {
        self.fd.close()
    }
}

impl File<ReadOnly> {
    /// Opens an existing regular file for reading.
    pub fn open<P: AsRef<Path>>(file_path: P) -> Result<File<ReadOnly>, OpenError> {
        File::open_with_mode(file_path)
    }
}

impl File<WriteOnly> {
    /// Opens a regular file for writing, creating it if it doesn't exist and truncating it if it
    /// does.
    pub fn create<P: AsRef<Path>>(file_path: P) -> Result<File<WriteOnly>, OpenError> {
        File::open_with_mode(file_path)
    }
}

/// Converts an error number from `read(2)` or `write(2)` into an [`io::Error`], panicking on the
/// ones that indicate a bug rather than a condition the caller could handle.
fn interpret_io_error(error: c_int) -> io::Error {
    match error {
        libc::EBADF => BadFdPanic.panic(),
        libc::EFAULT => BadAddrPanic.panic(),
        e => io::Error::from_raw_os_error(e),
    }
}

impl Read for File<ReadOnly> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.fd.read(buf).map_err(interpret_io_error)
    }
}

impl Write for File<WriteOnly> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.fd.write(buf).map_err(interpret_io_error)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
