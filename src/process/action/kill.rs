use crate::process::error::ProcessResult;

/// Exit code reported by processes torn down with
/// [`terminate_process_windows`] when the caller does not choose one.
/// Matches the conventional `(DWORD)-1`.
pub const DEFAULT_EXIT_CODE: u32 = u32::MAX;

/// Forcibly kill a process by PID (Unix only).
///
/// Sends SIGKILL, which cannot be caught or ignored. The kernel reclaims the
/// process without giving it a chance to clean up; prefer
/// [`terminate_process`](crate::process::action::terminate::terminate_process)
/// first for cooperative shutdown.
///
/// # Errors
///
/// Returns an error if:
/// - The process does not exist ([`NotFound`](crate::process::error::ProcessError::NotFound))
/// - Permission denied ([`PermissionDenied`](crate::process::error::ProcessError::PermissionDenied))
/// - The PID is zero or out of range ([`InvalidPid`](crate::process::error::ProcessError::InvalidPid))
/// - Called on a non-Unix platform ([`UnsupportedPlatform`](crate::process::error::ProcessError::UnsupportedPlatform))
///
/// # Example
/// ```rust,no_run
/// use pidkit::process::action::kill::kill_process;
///
/// let pid = 1234;
/// kill_process(pid).unwrap();
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument)]
pub fn kill_process(pid: u32) -> ProcessResult<()> {
    #[cfg(unix)]
    {
        use nix::sys::signal::{Signal, kill};

        use crate::process::action::unix_pid;
        use crate::process::error::ProcessError;

        let target = unix_pid(pid)?;
        kill(target, Signal::SIGKILL).map_err(|e| ProcessError::from_errno(e, pid))
    }

    #[cfg(not(unix))]
    {
        use crate::process::error::ProcessError;

        let _ = pid;
        Err(ProcessError::UnsupportedPlatform("kill_process"))
    }
}

/// Forcibly terminate a process by PID (Windows only).
///
/// Opens the target with `PROCESS_TERMINATE` rights and calls
/// `TerminateProcess` with the given exit code. The handle is closed on every
/// path. Calling this on a non-Windows platform returns
/// [`ProcessError::UnsupportedPlatform`](crate::process::error::ProcessError::UnsupportedPlatform).
///
/// # Arguments
///
/// * `pid` - The process ID to terminate
/// * `exit_code` - Exit code the terminated process will report; use
///   [`DEFAULT_EXIT_CODE`] when there is no meaningful value
///
/// # Errors
///
/// Returns an error if:
/// - The process does not exist or could not be opened
/// - Permission denied
/// - `TerminateProcess` itself failed
///
/// # Example
/// ```rust,no_run
/// use pidkit::process::action::kill::{terminate_process_windows, DEFAULT_EXIT_CODE};
///
/// let pid = 1234;
/// terminate_process_windows(pid, DEFAULT_EXIT_CODE).unwrap();
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument)]
pub fn terminate_process_windows(pid: u32, exit_code: u32) -> ProcessResult<()> {
    #[cfg(windows)]
    {
        use windows::Win32::System::Threading::{PROCESS_TERMINATE, TerminateProcess};

        use crate::process::action::validate_pid;
        use crate::process::error::ProcessError;
        use crate::process::win::HandleGuard;

        validate_pid(pid)?;

        let handle = HandleGuard::open(pid, PROCESS_TERMINATE)?;
        // SAFETY: the guard holds a live handle with terminate rights.
        unsafe { TerminateProcess(handle.raw(), exit_code) }.map_err(|e| {
            ProcessError::Io(std::io::Error::other(format!(
                "failed to terminate process with PID {}: {:?}",
                pid, e
            )))
        })
    }

    #[cfg(not(windows))]
    {
        use crate::process::error::ProcessError;

        let _ = (pid, exit_code);
        Err(ProcessError::UnsupportedPlatform("terminate_process_windows"))
    }
}
