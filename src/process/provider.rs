//! Platform handle providers.
//!
//! One provider exists per supported platform; a fixed, ordered list is
//! probed once at first use and the first [`HandleProvider::is_supported`]
//! match stays selected for the lifetime of the process. Call sites never
//! branch on the OS themselves.

use std::process::Child;
use std::sync::OnceLock;

use crate::process::error::{ProcessError, ProcessResult};
use crate::process::handle::ProcessHandle;

/// Strategy object producing [`ProcessHandle`]s for one platform.
pub trait HandleProvider: Send + Sync {
    /// Platform identity predicate, checked once during selection.
    fn is_supported(&self) -> bool;

    /// Name of the platform this provider serves.
    fn name(&self) -> &'static str;

    /// Handle for the calling process.
    fn current(&self) -> ProcessHandle {
        ProcessHandle::current()
    }

    /// Handle for an arbitrary PID.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::InvalidPid`] for PID 0 or values outside the
    /// platform PID range.
    fn of_pid(&self, pid: u32) -> ProcessResult<ProcessHandle> {
        ProcessHandle::of(pid)
    }

    /// Handle wrapping a locally spawned child, keeping the fast
    /// kill-and-reap path available.
    fn of_child(&self, child: Child) -> ProcessHandle {
        ProcessHandle::from_child(child)
    }
}

#[cfg(target_os = "linux")]
pub(crate) struct LinuxProvider;

#[cfg(target_os = "linux")]
impl HandleProvider for LinuxProvider {
    fn is_supported(&self) -> bool {
        cfg!(target_os = "linux")
    }

    fn name(&self) -> &'static str {
        "linux"
    }
}

#[cfg(any(target_os = "solaris", target_os = "illumos"))]
pub(crate) struct SolarisProvider;

#[cfg(any(target_os = "solaris", target_os = "illumos"))]
impl HandleProvider for SolarisProvider {
    fn is_supported(&self) -> bool {
        cfg!(any(target_os = "solaris", target_os = "illumos"))
    }

    fn name(&self) -> &'static str {
        "solaris"
    }
}

#[cfg(target_os = "macos")]
pub(crate) struct MacosProvider;

#[cfg(target_os = "macos")]
impl HandleProvider for MacosProvider {
    fn is_supported(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn name(&self) -> &'static str {
        "macos"
    }
}

#[cfg(target_os = "freebsd")]
pub(crate) struct FreebsdProvider;

#[cfg(target_os = "freebsd")]
impl HandleProvider for FreebsdProvider {
    fn is_supported(&self) -> bool {
        cfg!(target_os = "freebsd")
    }

    fn name(&self) -> &'static str {
        "freebsd"
    }
}

#[cfg(windows)]
pub(crate) struct WindowsProvider;

#[cfg(windows)]
impl HandleProvider for WindowsProvider {
    fn is_supported(&self) -> bool {
        cfg!(windows)
    }

    fn name(&self) -> &'static str {
        "windows"
    }
}

/// Fixed probe order: Linux, Solaris, macOS, FreeBSD, Windows. Only
/// providers whose platform code compiles on the build target are present.
fn candidates() -> Vec<&'static dyn HandleProvider> {
    #[allow(unused_mut)]
    let mut providers: Vec<&'static dyn HandleProvider> = Vec::new();
    #[cfg(target_os = "linux")]
    providers.push(&LinuxProvider);
    #[cfg(any(target_os = "solaris", target_os = "illumos"))]
    providers.push(&SolarisProvider);
    #[cfg(target_os = "macos")]
    providers.push(&MacosProvider);
    #[cfg(target_os = "freebsd")]
    providers.push(&FreebsdProvider);
    #[cfg(windows)]
    providers.push(&WindowsProvider);
    providers
}

/// The active provider for this process, selected on first call and stable
/// afterwards.
///
/// # Errors
///
/// Returns [`ProcessError::UnsupportedPlatform`] when no provider matches
/// the running platform.
pub fn provider() -> ProcessResult<&'static dyn HandleProvider> {
    static SELECTED: OnceLock<Option<&'static dyn HandleProvider>> = OnceLock::new();

    let selected = *SELECTED.get_or_init(|| candidates().into_iter().find(|p| p.is_supported()));
    selected.ok_or(ProcessError::UnsupportedPlatform("handle provider"))
}
