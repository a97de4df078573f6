use crate::process::error::ProcessResult;

/// Request graceful termination of a process by PID (Unix only).
///
/// Sends SIGTERM to the specified process. The target is free to catch or
/// ignore the signal; pair this with
/// [`wait_for_exit`](crate::process::action::wait::wait_for_exit) and fall
/// back to [`kill_process`](crate::process::action::kill::kill_process) for
/// uncooperative targets.
///
/// Windows exposes no equivalent soft path; calling this there returns
/// [`ProcessError::UnsupportedPlatform`](crate::process::error::ProcessError::UnsupportedPlatform).
///
/// # Arguments
///
/// * `pid` - The process ID to terminate
///
/// # Returns
///
/// - `Ok(())` if the signal was sent successfully
/// - `Err(ProcessError)` if termination failed
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
/// use pidkit::process::action::terminate::terminate_process;
///
/// let pid = 1234;
/// match terminate_process(pid) {
///     Ok(()) => println!("SIGTERM sent"),
///     Err(e) => eprintln!("failed to terminate: {}", e),
/// }
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument)]
pub fn terminate_process(pid: u32) -> ProcessResult<()> {
    #[cfg(unix)]
    {
        use nix::sys::signal::{Signal, kill};

        use crate::process::action::unix_pid;
        use crate::process::error::ProcessError;

        let target = unix_pid(pid)?;
        kill(target, Signal::SIGTERM).map_err(|e| ProcessError::from_errno(e, pid))
    }

    #[cfg(not(unix))]
    {
        use crate::process::error::ProcessError;

        let _ = pid;
        Err(ProcessError::UnsupportedPlatform("terminate_process"))
    }
}
