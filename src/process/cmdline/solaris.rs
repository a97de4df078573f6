//! Solaris/illumos: `/proc/<pid>/psinfo` carries `pr_argc` and the address
//! of the argv array inside the target; `/proc/<pid>/as` exposes the target's
//! address space for reading the pointers and the strings they reference.
//! All structure access is bounds-checked slice decoding at fixed offsets,
//! native-endian (the files are produced by the kernel we are running on).

use crate::process::info::ProcessInfo;

/// Offset of `pr_argc` in `psinfo_t` for a 32-bit process model;
/// `pr_argv` follows immediately.
const PR_ARGC_OFFSET_ILP32: usize = 0xBC;
/// Offset of `pr_argc` for the 64-bit process model.
const PR_ARGC_OFFSET_LP64: usize = 0xEC;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PsinfoArgv {
    pub(crate) argc: usize,
    /// Address of the argv pointer array inside the target process.
    pub(crate) argv_addr: u64,
}

/// Decodes `pr_argc` and `pr_argv` from a raw `psinfo_t` image. Returns
/// `None` on a truncated buffer or a negative argument count.
pub(crate) fn parse_psinfo_argv(psinfo: &[u8], lp64: bool) -> Option<PsinfoArgv> {
    let off = if lp64 {
        PR_ARGC_OFFSET_LP64
    } else {
        PR_ARGC_OFFSET_ILP32
    };

    let argc_bytes: [u8; 4] = psinfo.get(off..off + 4)?.try_into().ok()?;
    let argc = i32::from_ne_bytes(argc_bytes);
    if argc < 0 {
        return None;
    }

    let argv_addr = if lp64 {
        let bytes: [u8; 8] = psinfo.get(off + 4..off + 12)?.try_into().ok()?;
        u64::from_ne_bytes(bytes)
    } else {
        let bytes: [u8; 4] = psinfo.get(off + 4..off + 8)?.try_into().ok()?;
        u64::from(u32::from_ne_bytes(bytes))
    };

    Some(PsinfoArgv {
        argc: argc as usize,
        argv_addr,
    })
}

#[cfg(any(target_os = "solaris", target_os = "illumos"))]
pub(crate) fn resolve(pid: u32) -> crate::process::error::ProcessResult<ProcessInfo> {
    use std::fs::{self, File};
    use std::io::{Read, Seek, SeekFrom};

    use crate::process::error::{ProcessError, ProcessResult};

    const LP64: bool = cfg!(target_pointer_width = "64");
    const PTR_SIZE: u64 = if LP64 { 8 } else { 4 };

    let psinfo = fs::read(format!("/proc/{}/psinfo", pid))
        .map_err(|e| ProcessError::from_io(e, pid))?;
    let header = parse_psinfo_argv(&psinfo, LP64).ok_or_else(|| {
        ProcessError::Malformed(format!("truncated psinfo for PID {}", pid))
    })?;

    let mut address_space = File::open(format!("/proc/{}/as", pid))
        .map_err(|e| ProcessError::from_io(e, pid))?;

    fn read_pointer(file: &mut File, addr: u64, lp64: bool) -> std::io::Result<u64> {
        file.seek(SeekFrom::Start(addr))?;
        if lp64 {
            let mut bytes = [0u8; 8];
            file.read_exact(&mut bytes)?;
            Ok(u64::from_ne_bytes(bytes))
        } else {
            let mut bytes = [0u8; 4];
            file.read_exact(&mut bytes)?;
            Ok(u64::from(u32::from_ne_bytes(bytes)))
        }
    }

    fn read_cstring(file: &mut File, addr: u64) -> std::io::Result<String> {
        file.seek(SeekFrom::Start(addr))?;
        let mut collected = Vec::new();
        let mut chunk = [0u8; 256];
        loop {
            let n = file.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            if let Some(nul) = chunk[..n].iter().position(|b| *b == 0) {
                collected.extend_from_slice(&chunk[..nul]);
                break;
            }
            collected.extend_from_slice(&chunk[..n]);
        }
        Ok(String::from_utf8_lossy(&collected).into_owned())
    }

    let map_malformed = |e: std::io::Error| -> ProcessError {
        ProcessError::Malformed(format!(
            "short read in address space of PID {}: {}",
            pid, e
        ))
    };

    let mut strings = Vec::with_capacity(header.argc);
    for slot in 0..header.argc as u64 {
        let ptr = read_pointer(
            &mut address_space,
            header.argv_addr + slot * PTR_SIZE,
            LP64,
        )
        .map_err(map_malformed)?;
        if ptr == 0 {
            break;
        }
        strings.push(read_cstring(&mut address_space, ptr).map_err(map_malformed)?);
    }

    // first string is the executable, the rest are the arguments
    let executable = if strings.is_empty() {
        None
    } else {
        Some(strings.remove(0))
    };

    Ok(ProcessInfo::new(executable, strings))
}

#[cfg(test)]
mod tests {
    use super::{PR_ARGC_OFFSET_ILP32, PR_ARGC_OFFSET_LP64, PsinfoArgv, parse_psinfo_argv};

    fn psinfo_image(off: usize, argc: i32, argv: &[u8]) -> Vec<u8> {
        let mut buf = vec![0u8; 0x180];
        buf[off..off + 4].copy_from_slice(&argc.to_ne_bytes());
        buf[off + 4..off + 4 + argv.len()].copy_from_slice(argv);
        buf
    }

    #[test]
    fn parse_lp64_header() {
        let buf = psinfo_image(PR_ARGC_OFFSET_LP64, 3, &0xDEAD_BEEFu64.to_ne_bytes());
        assert_eq!(
            parse_psinfo_argv(&buf, true),
            Some(PsinfoArgv {
                argc: 3,
                argv_addr: 0xDEAD_BEEF,
            })
        );
    }

    #[test]
    fn parse_ilp32_header() {
        let buf = psinfo_image(PR_ARGC_OFFSET_ILP32, 2, &0x1000_0000u32.to_ne_bytes());
        assert_eq!(
            parse_psinfo_argv(&buf, false),
            Some(PsinfoArgv {
                argc: 2,
                argv_addr: 0x1000_0000,
            })
        );
    }

    #[test]
    fn parse_rejects_truncated_image() {
        let buf = vec![0u8; PR_ARGC_OFFSET_ILP32 + 2];
        assert!(parse_psinfo_argv(&buf, false).is_none());
        assert!(parse_psinfo_argv(&[], true).is_none());
    }

    #[test]
    fn parse_rejects_negative_argc() {
        let buf = psinfo_image(PR_ARGC_OFFSET_LP64, -1, &[0u8; 8]);
        assert!(parse_psinfo_argv(&buf, true).is_none());
    }
}
