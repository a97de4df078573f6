use std::io;

use thiserror::Error;

/// Errors produced by process inspection and termination operations.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The operation has no implementation on the current platform, or a
    /// platform-specific entry point was called on the wrong OS.
    #[error("operation `{0}` is not supported on this platform")]
    UnsupportedPlatform(&'static str),

    /// No process with the given PID exists (or it has already been reaped).
    #[error("process with PID {0} does not exist")]
    NotFound(u32),

    /// The caller lacks the rights to inspect or signal the process.
    #[error("permission denied for PID {0}")]
    PermissionDenied(u32),

    /// PID 0, a negative value, or a value outside the platform PID range.
    #[error("invalid PID: {0}")]
    InvalidPid(i64),

    /// The OS returned data this library could not make sense of
    /// (truncated psinfo, garbled sysctl buffer, unreadable PEB).
    #[error("malformed process data: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type ProcessResult<T> = Result<T, ProcessError>;

#[cfg(unix)]
impl ProcessError {
    /// Maps an errno from a per-PID syscall to the matching error kind.
    pub(crate) fn from_errno(errno: nix::errno::Errno, pid: u32) -> Self {
        use nix::errno::Errno;

        match errno {
            Errno::ESRCH => ProcessError::NotFound(pid),
            Errno::EPERM | Errno::EACCES => ProcessError::PermissionDenied(pid),
            other => ProcessError::Io(io::Error::from_raw_os_error(other as i32)),
        }
    }
}

#[cfg(any(target_os = "linux", target_os = "solaris", target_os = "illumos"))]
impl ProcessError {
    /// Maps an `io::Error` from a per-PID file read (`/proc` style sources)
    /// to the matching error kind.
    pub(crate) fn from_io(err: io::Error, pid: u32) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ProcessError::NotFound(pid),
            io::ErrorKind::PermissionDenied => ProcessError::PermissionDenied(pid),
            _ => ProcessError::Io(err),
        }
    }
}
