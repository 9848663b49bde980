mod access;
mod error;
mod file;

pub use access::*;
pub use error::*;
pub use file::*;
