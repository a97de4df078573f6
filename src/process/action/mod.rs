pub mod alive;
pub mod kill;
pub mod terminate;
pub mod wait;

use crate::process::error::{ProcessError, ProcessResult};

/// Rejects PID 0 and values outside the platform PID range.
pub(crate) fn validate_pid(pid: u32) -> ProcessResult<()> {
    if pid == 0 {
        return Err(ProcessError::InvalidPid(0));
    }
    #[cfg(unix)]
    if i32::try_from(pid).is_err() {
        return Err(ProcessError::InvalidPid(i64::from(pid)));
    }
    Ok(())
}

/// Converts a raw PID to a `nix` PID, checking for zero and overflow.
#[cfg(unix)]
pub(crate) fn unix_pid(pid: u32) -> ProcessResult<nix::unistd::Pid> {
    validate_pid(pid)?;
    // validate_pid already proved the value fits in i32
    Ok(nix::unistd::Pid::from_raw(pid as i32))
}
