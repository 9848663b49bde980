use std::fmt::Debug;

use libc::{O_CLOEXEC, O_CREAT, O_RDONLY, O_TRUNC, O_WRONLY, c_int};

use crate::util::sealed::Sealed;

/// The way a [`File`](super::File) was opened, tracked in its type so that only readable files
/// implement [`std::io::Read`] and only writable files implement [`std::io::Write`].
pub trait AccessMode: Sealed + Debug {
    const FLAGS: c_int;
}

/// An existing file opened for reading only.
#[derive(Debug)]
pub enum ReadOnly {}

impl Sealed for ReadOnly {}

impl AccessMode for ReadOnly {
    const FLAGS: c_int = O_RDONLY | O_CLOEXEC;
}

/// A file opened for writing only, created if missing and emptied if present.
#[derive(Debug)]
pub enum WriteOnly {}

impl Sealed for WriteOnly {}

impl AccessMode for WriteOnly {
    const FLAGS: c_int = O_WRONLY | O_CREAT | O_TRUNC | O_CLOEXEC;
}
