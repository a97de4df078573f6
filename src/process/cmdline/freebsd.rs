//! FreeBSD: `sysctl(KERN_PROC_ARGS)` returns the argv as one NUL-separated
//! buffer; the first string is taken as the executable.

use std::io;
use std::ptr;

use nix::libc;

use crate::process::cmdline::split_nul_blob;
use crate::process::error::{ProcessError, ProcessResult};
use crate::process::info::ProcessInfo;

pub(crate) fn resolve(pid: u32) -> ProcessResult<ProcessInfo> {
    let mut mib = [
        libc::CTL_KERN,
        libc::KERN_PROC,
        libc::KERN_PROC_ARGS,
        pid as libc::c_int,
    ];

    let map_sysctl_error = |err: io::Error| -> ProcessError {
        match err.raw_os_error() {
            Some(libc::ESRCH) => ProcessError::NotFound(pid),
            Some(libc::EPERM) | Some(libc::EACCES) => ProcessError::PermissionDenied(pid),
            _ => ProcessError::Io(err),
        }
    };

    let mut size: usize = 0;
    // SAFETY: null output buffer queries the required size only.
    let rc = unsafe {
        libc::sysctl(
            mib.as_mut_ptr(),
            mib.len() as libc::c_uint,
            ptr::null_mut(),
            &mut size,
            ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return Err(map_sysctl_error(io::Error::last_os_error()));
    }

    let mut buf = vec![0u8; size];
    // SAFETY: buf is allocated to the size reported by the first call; size
    // tracks its length and is updated to the bytes actually written.
    let rc = unsafe {
        libc::sysctl(
            mib.as_mut_ptr(),
            mib.len() as libc::c_uint,
            buf.as_mut_ptr().cast(),
            &mut size,
            ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return Err(map_sysctl_error(io::Error::last_os_error()));
    }
    buf.truncate(size);

    let mut strings = split_nul_blob(&buf);
    let executable = if strings.is_empty() {
        None
    } else {
        Some(strings.remove(0))
    };

    Ok(ProcessInfo::new(executable, strings))
}
