//! Linux: `/proc/<pid>/cmdline` is a NUL-separated byte blob containing the
//! full argv; `/proc/<pid>/exe` is a symlink to the executable.

use std::fs;

use crate::process::cmdline::split_nul_blob;
use crate::process::error::{ProcessError, ProcessResult};
use crate::process::info::ProcessInfo;

pub(crate) fn resolve(pid: u32) -> ProcessResult<ProcessInfo> {
    let blob = fs::read(format!("/proc/{}/cmdline", pid))
        .map_err(|e| ProcessError::from_io(e, pid))?;
    let arguments = split_nul_blob(&blob);

    // readlink needs more rights than reading cmdline; degrade to None
    let executable = match fs::read_link(format!("/proc/{}/exe", pid)) {
        Ok(path) => Some(path.to_string_lossy().into_owned()),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(pid, error = %_e, "executable path unresolved");
            None
        }
    };

    Ok(ProcessInfo::new(executable, arguments))
}

#[cfg(test)]
mod tests {
    use super::resolve;

    #[test]
    fn resolve_current_process() {
        let info = resolve(std::process::id()).unwrap();
        assert!(!info.arguments.is_empty());
        // argv[0] of a test binary names the test executable
        assert!(info.arguments[0].contains("pidkit") || !info.arguments[0].is_empty());
        assert!(info.executable.is_some());
    }
}
