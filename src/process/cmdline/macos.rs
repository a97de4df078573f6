//! macOS: `sysctl(KERN_PROCARGS2)` returns one byte buffer laid out as
//! `argc: i32`, the NUL-terminated exec path, NUL padding, then `argc`
//! NUL-terminated argument strings. `KERN_ARGMAX` bounds the buffer size.

use crate::process::info::ProcessInfo;

#[cfg(target_os = "macos")]
pub(crate) fn resolve(pid: u32) -> crate::process::error::ProcessResult<ProcessInfo> {
    use crate::process::error::ProcessError;

    let raw = read_procargs2(pid)?;
    parse_procargs2(&raw).ok_or_else(|| {
        ProcessError::Malformed(format!("truncated KERN_PROCARGS2 buffer for PID {}", pid))
    })
}

#[cfg(target_os = "macos")]
fn read_procargs2(pid: u32) -> crate::process::error::ProcessResult<Vec<u8>> {
    use std::io;
    use std::mem;
    use std::ptr;

    use nix::libc;

    use crate::process::error::ProcessError;

    let mut argmax: libc::c_int = 0;
    let mut size = mem::size_of::<libc::c_int>();
    let mut mib = [libc::CTL_KERN, libc::KERN_ARGMAX];
    // SAFETY: mib is a valid 2-element OID and argmax/size describe a
    // matching output buffer.
    let rc = unsafe {
        libc::sysctl(
            mib.as_mut_ptr(),
            mib.len() as libc::c_uint,
            (&raw mut argmax).cast(),
            &mut size,
            ptr::null_mut(),
            0,
        )
    };
    if rc != 0 || argmax <= 0 {
        return Err(ProcessError::Io(io::Error::last_os_error()));
    }

    let mut buf = vec![0u8; argmax as usize];
    let mut len = buf.len();
    let mut mib = [libc::CTL_KERN, libc::KERN_PROCARGS2, pid as libc::c_int];
    // SAFETY: buf is allocated to the KERN_ARGMAX bound; len tracks its size.
    let rc = unsafe {
        libc::sysctl(
            mib.as_mut_ptr(),
            mib.len() as libc::c_uint,
            buf.as_mut_ptr().cast(),
            &mut len,
            ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        let err = io::Error::last_os_error();
        return Err(match err.raw_os_error() {
            // the kernel reports a vanished or foreign pid as EINVAL here
            Some(libc::EINVAL) | Some(libc::ESRCH) => ProcessError::NotFound(pid),
            Some(libc::EPERM) | Some(libc::EACCES) => ProcessError::PermissionDenied(pid),
            _ => ProcessError::Io(err),
        });
    }

    buf.truncate(len);
    Ok(buf)
}

/// Parses a `KERN_PROCARGS2` buffer. Returns `None` when the buffer is too
/// short to carry the argc header or the header is negative.
pub(crate) fn parse_procargs2(buf: &[u8]) -> Option<ProcessInfo> {
    let argc_bytes: [u8; 4] = buf.get(0..4)?.try_into().ok()?;
    let argc = i32::from_ne_bytes(argc_bytes);
    if argc < 0 {
        return None;
    }
    let argc = argc as usize;
    let mut pos = 4;

    let exec_start = pos;
    while pos < buf.len() && buf[pos] != 0 {
        pos += 1;
    }
    let executable = (pos > exec_start)
        .then(|| String::from_utf8_lossy(&buf[exec_start..pos]).into_owned());

    let mut arguments = Vec::with_capacity(argc);
    for _ in 0..argc {
        // zero or more NUL padding bytes precede every string
        while pos < buf.len() && buf[pos] == 0 {
            pos += 1;
        }
        if pos >= buf.len() {
            break;
        }
        let start = pos;
        while pos < buf.len() && buf[pos] != 0 {
            pos += 1;
        }
        arguments.push(String::from_utf8_lossy(&buf[start..pos]).into_owned());
    }

    Some(ProcessInfo::new(executable, arguments))
}

#[cfg(test)]
mod tests {
    use super::parse_procargs2;

    fn procargs2(argc: i32, exec: &[u8], padding: usize, args: &[&[u8]]) -> Vec<u8> {
        let mut buf = argc.to_ne_bytes().to_vec();
        buf.extend_from_slice(exec);
        buf.extend(std::iter::repeat_n(0u8, padding.max(1)));
        for arg in args {
            buf.extend_from_slice(arg);
            buf.push(0);
        }
        buf
    }

    #[test]
    fn parse_well_formed_buffer() {
        let buf = procargs2(2, b"/bin/sleep", 3, &[b"sleep", b"5"]);
        let info = parse_procargs2(&buf).unwrap();
        assert_eq!(info.executable.as_deref(), Some("/bin/sleep"));
        assert_eq!(info.arguments, vec!["sleep", "5"]);
    }

    #[test]
    fn parse_single_padding_nul() {
        let buf = procargs2(1, b"/usr/bin/true", 1, &[b"true"]);
        let info = parse_procargs2(&buf).unwrap();
        assert_eq!(info.arguments, vec!["true"]);
    }

    #[test]
    fn parse_stops_at_short_buffer() {
        // argc promises three strings, buffer only carries one
        let buf = procargs2(3, b"/bin/x", 2, &[b"x"]);
        let info = parse_procargs2(&buf).unwrap();
        assert_eq!(info.arguments, vec!["x"]);
    }

    #[test]
    fn parse_rejects_truncated_header() {
        assert!(parse_procargs2(&[0, 0]).is_none());
        assert!(parse_procargs2(&[]).is_none());
    }

    #[test]
    fn parse_rejects_negative_argc() {
        let buf = (-1i32).to_ne_bytes().to_vec();
        assert!(parse_procargs2(&buf).is_none());
    }

    #[test]
    fn parse_empty_exec_path_degrades_to_none() {
        let mut buf = 1i32.to_ne_bytes().to_vec();
        buf.push(0);
        buf.extend_from_slice(b"arg\0");
        let info = parse_procargs2(&buf).unwrap();
        assert_eq!(info.executable, None);
        assert_eq!(info.arguments, vec!["arg"]);
    }
}
