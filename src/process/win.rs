//! Win32 handle plumbing shared by the inspection and termination paths.

use windows::Win32::Foundation::{CloseHandle, E_ACCESSDENIED, HANDLE};
use windows::Win32::System::Threading::{OpenProcess, PROCESS_ACCESS_RIGHTS};

use crate::process::error::{ProcessError, ProcessResult};

/// Owned process handle, closed on every exit path.
pub(crate) struct HandleGuard(HANDLE);

impl HandleGuard {
    /// Opens `pid` with the requested access rights.
    pub(crate) fn open(pid: u32, access: PROCESS_ACCESS_RIGHTS) -> ProcessResult<Self> {
        // SAFETY: OpenProcess has no memory-safety preconditions; the result
        // is checked before use.
        let handle = unsafe { OpenProcess(access, false, pid) }
            .map_err(|e| map_open_error(&e, pid))?;
        Ok(HandleGuard(handle))
    }

    pub(crate) fn raw(&self) -> HANDLE {
        self.0
    }
}

impl Drop for HandleGuard {
    fn drop(&mut self) {
        // SAFETY: the handle was returned live by OpenProcess and is closed
        // exactly once.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// `OpenProcess` fails with access-denied for protected processes and with
/// invalid-parameter for PIDs that no longer exist.
fn map_open_error(err: &windows::core::Error, pid: u32) -> ProcessError {
    if err.code() == E_ACCESSDENIED {
        ProcessError::PermissionDenied(pid)
    } else {
        ProcessError::NotFound(pid)
    }
}
