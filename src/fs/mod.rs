//! A minimal, Linux-only file layer over `libc`, used to save and load persisted collections.
//!
//! Errors from the underlying syscalls are mapped onto small, strongly typed error structs which
//! are grouped into enums per operation. Error numbers that can only arise from a bug (a corrupt
//! file descriptor or a bad pointer) panic instead.
#![cfg(target_os = "linux")]

pub mod file;

mod error;
mod fd;
mod panic;
mod syscall;

pub use error::*;
#[doc(inline)]
pub use file::{CloseError, File, OpenError};
pub(crate) use fd::*;
pub(crate) use syscall::*;
