use std::io;

use libc::c_int;

/// Returns the error number left behind by the most recent failed syscall on this thread.
pub fn err_no() -> c_int {
    io::Error::last_os_error().raw_os_error().unwrap_or_default()
}
