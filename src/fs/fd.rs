use std::mem::{ManuallyDrop, MaybeUninit};
use std::thread;

use libc::{c_int, stat as Stat};

use super::panic::{BadAddrPanic, BadFdPanic, Panic, UnexpectedErrorPanic};
use super::{
    CloseError, IOError, InterruptError, IrregularFileError, OOMError, OpenError,
    OversizedFileError, StorageExhaustedError, err_no,
};

/// An owned file descriptor, closed when dropped.
#[derive(Debug)]
pub(crate) struct Fd(pub c_int);

impl Fd {
    /// Checks that the descriptor refers to a regular file, consuming it (and closing it) if not.
    pub fn assert_regular(self) -> Result<Fd, OpenError> {
        let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
        // SAFETY: fstat writes at most one stat struct to the provided pointer.
        if unsafe { libc::fstat(self.0, raw_meta.as_mut_ptr()) } == -1 {
            match err_no() {
                libc::EBADF => BadFdPanic.panic(),
                libc::EFAULT => BadAddrPanic.panic(),
                libc::ENOMEM => Err(OOMError)?,
                libc::EOVERFLOW => Err(OversizedFileError)?,
                e => UnexpectedErrorPanic(e).panic(),
            }
        }
        // SAFETY: fstat either initializes raw_meta or returns an error and diverges.
        let raw = unsafe { raw_meta.assume_init() };

        if raw.st_mode & libc::S_IFMT != libc::S_IFREG {
            Err(IrregularFileError)?
        }
        Ok(self)
    }

    /// Reads up to `buf.len()` bytes, returning the number read or the raw error number.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, c_int> {
        // SAFETY: buf is valid for writes of buf.len() bytes.
        match unsafe { libc::read(self.0, buf.as_mut_ptr().cast(), buf.len()) } {
            -1 => Err(err_no()),
            count => Ok(count as usize),
        }
    }

    /// Writes up to `buf.len()` bytes, returning the number written or the raw error number.
    pub fn write(&self, buf: &[u8]) -> Result<usize, c_int> {
        // SAFETY: buf is valid for reads of buf.len() bytes.
        match unsafe { libc::write(self.0, buf.as_ptr().cast(), buf.len()) } {
            -1 => Err(err_no()),
            count => Ok(count as usize),
        }
    }

    pub fn close(self) -> Result<(), CloseError> {
        // The descriptor is invalidated by close regardless of the outcome, so Drop mustn't run
        // and close it a second time.
        let fd = ManuallyDrop::new(self);
        // SAFETY: fd is owned and never used again.
        if unsafe { libc::close(fd.0) } == -1 {
            match err_no() {
                libc::EBADF => BadFdPanic.panic(),
                libc::EINTR => Err(InterruptError)?,
                libc::EIO => Err(IOError)?,
                libc::ENOSPC | libc::EDQUOT => Err(StorageExhaustedError)?,
                e => UnexpectedErrorPanic(e).panic(),
            }
        }
        Ok(())
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // doesn't matter.
        if unsafe { libc::close(self.0) } == -1
            // Panic only if we aren't already, to prevent aborting an existing unwind.
            && !thread::panicking()
        {
            panic!("error while dropping file descriptor: {}", match err_no() {
                libc::EBADF => BadFdPanic.to_string(),
                libc::EINTR => InterruptError.to_string(),
                libc::EIO => IOError.to_string(),
                libc::ENOSPC | libc::EDQUOT => StorageExhaustedError.to_string(),
                e => UnexpectedErrorPanic(e).to_string(),
            });
        }
    }
}
