use std::process::{Child, Command};
use std::time::Duration;

use crate::process::action::{self, alive, kill, terminate, wait};
use crate::process::cmdline;
use crate::process::error::{ProcessError, ProcessResult};
use crate::process::info::ProcessInfo;

/// How long [`ProcessHandle::restart`] waits for the old process to
/// disappear before respawning.
const RESTART_EXIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to a live or terminated OS process, identified by PID.
///
/// A handle created with [`from_child`](ProcessHandle::from_child)
/// additionally owns the `std::process::Child`, which enables the runtime's
/// own kill-and-reap path in [`kill_forcibly`](ProcessHandle::kill_forcibly).
/// Handles hold no other OS resource; dropping one releases nothing beyond
/// the optional child.
///
/// All queries are point-in-time and racy under PID reuse; the library does
/// not attempt to close that race.
///
/// # Example
/// ```rust,no_run
/// use std::process::Command;
/// use pidkit::process::handle::ProcessHandle;
///
/// let child = Command::new("sleep").arg("30").spawn().unwrap();
/// let mut handle = ProcessHandle::from_child(child);
/// assert!(handle.is_alive());
/// handle.kill_forcibly().unwrap();
/// ```
#[derive(Debug)]
pub struct ProcessHandle {
    pid: u32,
    child: Option<Child>,
}

impl ProcessHandle {
    /// Handle for the calling process.
    #[must_use]
    pub fn current() -> Self {
        ProcessHandle {
            pid: std::process::id(),
            child: None,
        }
    }

    /// Handle for an arbitrary PID.
    ///
    /// The PID is validated for range only; whether a process with that PID
    /// exists is checked by each subsequent operation, not here.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::InvalidPid`] for PID 0 or values outside the
    /// platform PID range.
    pub fn of(pid: u32) -> ProcessResult<Self> {
        action::validate_pid(pid)?;
        Ok(ProcessHandle { pid, child: None })
    }

    /// Handle wrapping a locally spawned child.
    ///
    /// The child is owned by the handle from here on;
    /// [`kill_forcibly`](ProcessHandle::kill_forcibly) will use
    /// `Child::kill` + `Child::wait`, which also reaps the process on Unix.
    #[must_use]
    pub fn from_child(child: Child) -> Self {
        ProcessHandle {
            pid: child.id(),
            child: Some(child),
        }
    }

    #[must_use]
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Whether the process currently exists.
    ///
    /// See [`is_process_alive`](crate::process::action::alive::is_process_alive)
    /// for the exact semantics; an unreaped zombie still counts as alive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        alive::is_process_alive(self.pid)
    }

    /// Resolve the process's executable path and argument vector.
    ///
    /// The snapshot is materialized on every call and never cached; it is
    /// stale the moment it returns.
    ///
    /// # Errors
    ///
    /// See [`cmdline::resolve`](crate::process::cmdline::resolve).
    pub fn info(&self) -> ProcessResult<ProcessInfo> {
        cmdline::resolve(self.pid)
    }

    /// Request graceful termination (SIGTERM; Unix only).
    ///
    /// # Errors
    ///
    /// See [`terminate_process`](crate::process::action::terminate::terminate_process);
    /// notably [`ProcessError::UnsupportedPlatform`] on Windows.
    pub fn kill(&self) -> ProcessResult<()> {
        terminate::terminate_process(self.pid)
    }

    /// Forcibly terminate the process.
    ///
    /// When the handle owns the child, prefers `Child::kill` + `Child::wait`
    /// so the process is reaped and no zombie is left behind. Otherwise sends
    /// SIGKILL on Unix or `TerminateProcess` (exit code
    /// [`DEFAULT_EXIT_CODE`](crate::process::action::kill::DEFAULT_EXIT_CODE))
    /// on Windows.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::NotFound`] when the process already exited;
    /// killing a dead process is a failed result, never a panic.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(pid = self.pid)))]
    pub fn kill_forcibly(&mut self) -> ProcessResult<()> {
        if let Some(child) = self.child.as_mut() {
            if let Ok(Some(_status)) = child.try_wait() {
                return Err(ProcessError::NotFound(self.pid));
            }
            child.kill()?;
            child.wait()?;
            return Ok(());
        }

        #[cfg(unix)]
        {
            kill::kill_process(self.pid)
        }

        #[cfg(windows)]
        {
            kill::terminate_process_windows(self.pid, kill::DEFAULT_EXIT_CODE)
        }

        #[cfg(not(any(unix, windows)))]
        {
            Err(ProcessError::UnsupportedPlatform("kill_forcibly"))
        }
    }

    /// Block until the process exits or `timeout` elapses; `true` means it
    /// is gone.
    ///
    /// Note this does not reap an owned child; call
    /// [`kill_forcibly`](ProcessHandle::kill_forcibly) or take the child out
    /// with [`into_child`](ProcessHandle::into_child) and `wait` on it for
    /// that.
    #[must_use]
    pub fn wait_for_exit(&self, timeout: Duration) -> bool {
        wait::wait_for_exit(self.pid, timeout)
    }

    /// Gives up the owned child, if any, ending the fast-termination path.
    pub fn into_child(&mut self) -> Option<Child> {
        self.child.take()
    }

    /// Kill the process and spawn a fresh one from its resolved command
    /// line, returning a handle that owns the new child.
    ///
    /// The command line is captured first; the process is then force-killed
    /// and given a bounded window to disappear before the respawn. The new
    /// process inherits nothing from the old one beyond its executable and
    /// arguments (environment and working directory are the caller's).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command line could not be resolved, or resolves to nothing
    ///   ([`Malformed`](ProcessError::Malformed))
    /// - The process would not die within the bounded window
    /// - Spawning the replacement failed ([`Io`](ProcessError::Io))
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(pid = self.pid)))]
    pub fn restart(&mut self) -> ProcessResult<ProcessHandle> {
        let info = self.info()?;

        let program = info
            .executable
            .clone()
            .or_else(|| info.arguments.first().cloned())
            .ok_or_else(|| {
                ProcessError::Malformed(format!("PID {} has an empty command line", self.pid))
            })?;
        let arguments: &[String] = if cmdline::ARGV0_IN_ARGUMENTS && !info.arguments.is_empty() {
            &info.arguments[1..]
        } else {
            &info.arguments
        };

        self.kill_forcibly()?;
        if !wait::wait_for_exit(self.pid, RESTART_EXIT_TIMEOUT) {
            return Err(ProcessError::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                format!("PID {} still alive after forcible kill", self.pid),
            )));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(program = %program, "respawning process");

        let child = Command::new(&program).args(arguments).spawn()?;
        Ok(ProcessHandle::from_child(child))
    }
}
