use derive_more::{Display, Error, From};
use libc::c_int;

use crate::fs::error::*;

#[derive(Debug, Display, Clone, From, Error)]
pub enum OpenError {
    Access(AccessError),
    Interrupt(InterruptError),
    ExcessiveLinks(ExcessiveLinksError),
    FileCount(FileCountError),
    PathLength(PathLengthError),
    InteriorNul(InteriorNulError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    IrregularFile(IrregularFileError),
    OversizedFile(OversizedFileError),
    OOM(OOMError),
    StorageExhausted(StorageExhaustedError),
    ReadOnlyFS(ReadOnlyFSError),
    BusyExecutable(BusyExecutableError),
    Unexpected(UnexpectedError),
}

impl OpenError {
    /// Maps the error number set by a failed `open` onto the matching error.
    pub(crate) fn interpret_raw_error(error: c_int) -> OpenError {
        match error {
            libc::EACCES | libc::EPERM => AccessError.into(),
            libc::EINTR => InterruptError.into(),
            libc::ELOOP => ExcessiveLinksError.into(),
            libc::EMFILE | libc::ENFILE => FileCountError.into(),
            libc::ENAMETOOLONG => PathLengthError.into(),
            libc::ENOENT => MissingComponentError.into(),
            libc::ENOTDIR => NonDirComponentError.into(),
            libc::EISDIR | libc::ENXIO | libc::ENODEV => IrregularFileError.into(),
            libc::EFBIG | libc::EOVERFLOW => OversizedFileError.into(),
            libc::ENOMEM => OOMError.into(),
            libc::ENOSPC | libc::EDQUOT => StorageExhaustedError.into(),
            libc::EROFS => ReadOnlyFSError.into(),
            libc::ETXTBSY => BusyExecutableError.into(),
            e => UnexpectedError(e).into(),
        }
    }
}

#[derive(Debug, Display, Clone, From, Error)]
pub enum CloseError {
    Interrupt(InterruptError),
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
}
