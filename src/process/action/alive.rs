/// Check whether a process with the given PID currently exists.
///
/// This is a point-in-time query: the process may exit (or the PID may be
/// reused) immediately after the call returns. A process that exists but is
/// not signalable by the caller still counts as alive.
///
/// On Unix this sends signal 0 via `kill(2)`, which checks existence without
/// delivering anything. On Windows it opens the process with query rights and
/// checks the exit code against `STILL_ACTIVE`.
///
/// # Example
/// ```rust
/// use pidkit::process::action::alive::is_process_alive;
///
/// assert!(is_process_alive(std::process::id()));
/// ```
#[must_use]
pub fn is_process_alive(pid: u32) -> bool {
    #[cfg(unix)]
    {
        use nix::errno::Errno;
        use nix::sys::signal::kill;
        use nix::unistd::Pid;

        let Ok(pid_i32) = i32::try_from(pid) else {
            return false;
        };
        if pid_i32 <= 0 {
            return false;
        }

        match kill(Pid::from_raw(pid_i32), None) {
            Ok(()) => true,
            // The process exists, we just may not signal it.
            Err(Errno::EPERM) => true,
            Err(_) => false,
        }
    }

    #[cfg(windows)]
    {
        use windows::Win32::Foundation::STILL_ACTIVE;
        use windows::Win32::System::Threading::{
            GetExitCodeProcess, PROCESS_QUERY_LIMITED_INFORMATION,
        };

        use crate::process::win::HandleGuard;

        let Ok(handle) = HandleGuard::open(pid, PROCESS_QUERY_LIMITED_INFORMATION) else {
            return false;
        };

        let mut exit_code = 0u32;
        // SAFETY: the guard holds a live handle with query rights.
        let queried = unsafe { GetExitCodeProcess(handle.raw(), &mut exit_code) };
        queried.is_ok() && exit_code == STILL_ACTIVE.0 as u32
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = pid;
        false
    }
}
