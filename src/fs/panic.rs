use std::error::Error;

use derive_more::{Display, Error};
use libc::c_int;

/// An error that can only be caused by a bug, either in this crate or in unsafe code elsewhere
/// that has corrupted its state, and so is raised as a panic instead of being returned.
pub trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[derive(Debug, Display, Error)]
#[display("file descriptor corruption")]
pub struct BadFdPanic;
impl Panic for BadFdPanic {}

#[derive(Debug, Display, Error)]
#[display("pointer exceeded accessible address space")]
pub struct BadAddrPanic;
impl Panic for BadAddrPanic {}

#[derive(Debug, Display, Error)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedErrorPanic(#[error(not(source))] pub c_int);
impl Panic for UnexpectedErrorPanic {}
