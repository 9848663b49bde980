use derive_more::{Display, Error};
use libc::c_int;

#[derive(Debug, Display, Clone, Error)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Clone, Error)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Clone, Error)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

#[derive(Debug, Display, Clone, Error)]
#[display("out of memory")]
pub struct OOMError;

#[derive(Debug, Display, Clone, Error)]
#[display("exceeded open file limit")]
pub struct FileCountError;

#[derive(Debug, Display, Clone, Error)]
#[display("permission denied for the file or a directory in its path")]
pub struct AccessError;

#[derive(Debug, Display, Clone, Error)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Clone, Error)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Clone, Error)]
#[display("path contains an interior nul byte")]
pub struct InteriorNulError;

#[derive(Debug, Display, Clone, Error)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Clone, Error)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Clone, Error)]
#[display("file is not a regular file")]
pub struct IrregularFileError;

#[derive(Debug, Display, Clone, Error)]
#[display("file is too large to be opened")]
pub struct OversizedFileError;

#[derive(Debug, Display, Clone, Error)]
#[display("file is on a read-only file system")]
pub struct ReadOnlyFSError;

#[derive(Debug, Display, Clone, Error)]
#[display("file is an executable that is currently running")]
pub struct BusyExecutableError;

#[derive(Debug, Display, Clone, Error)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedError(#[error(not(source))] pub c_int);
