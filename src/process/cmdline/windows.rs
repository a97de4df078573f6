//! Windows: the target's recorded command line lives in its
//! `RTL_USER_PROCESS_PARAMETERS`, reached through the PEB. The string is
//! tokenized with `CommandLineToArgvW` (honoring Windows quoting rules) and
//! the returned array is released with `LocalFree` on every path.

use std::ffi::c_void;
use std::mem;

use windows::Wdk::System::Threading::{NtQueryInformationProcess, ProcessBasicInformation};
use windows::Win32::Foundation::{HLOCAL, LocalFree};
use windows::Win32::System::Diagnostics::Debug::ReadProcessMemory;
use windows::Win32::System::Threading::{
    PEB, PROCESS_BASIC_INFORMATION, PROCESS_NAME_WIN32, PROCESS_QUERY_INFORMATION,
    PROCESS_VM_READ, QueryFullProcessImageNameW, RTL_USER_PROCESS_PARAMETERS,
};
use windows::Win32::UI::Shell::CommandLineToArgvW;
use windows::core::{PCWSTR, PWSTR};

use crate::process::error::{ProcessError, ProcessResult};
use crate::process::info::ProcessInfo;
use crate::process::win::HandleGuard;

pub(crate) fn resolve(pid: u32) -> ProcessResult<ProcessInfo> {
    let handle = HandleGuard::open(pid, PROCESS_QUERY_INFORMATION | PROCESS_VM_READ)?;

    let command_line = read_command_line(&handle, pid)?;
    let arguments = tokenize_command_line(&command_line);

    let executable = match query_image_path(&handle) {
        Some(path) => Some(path),
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(pid, "executable path unresolved");
            None
        }
    };

    Ok(ProcessInfo::new(executable, arguments))
}

/// Reads the UTF-16 command line out of the target's process parameters.
fn read_command_line(handle: &HandleGuard, pid: u32) -> ProcessResult<Vec<u16>> {
    let malformed = |what: &str| -> ProcessError {
        ProcessError::Malformed(format!("{} unreadable for PID {}", what, pid))
    };

    let mut basic_info = PROCESS_BASIC_INFORMATION::default();
    let mut return_length = 0u32;
    // SAFETY: basic_info is a properly sized output buffer for the
    // ProcessBasicInformation class.
    let status = unsafe {
        NtQueryInformationProcess(
            handle.raw(),
            ProcessBasicInformation,
            (&raw mut basic_info).cast::<c_void>(),
            mem::size_of::<PROCESS_BASIC_INFORMATION>() as u32,
            &mut return_length,
        )
    };
    if status.is_err() || basic_info.PebBaseAddress.is_null() {
        return Err(malformed("process basic information"));
    }

    // SAFETY: out-parameters are properly sized local buffers; the remote
    // addresses come from the kernel-reported PEB chain and every read is
    // checked.
    unsafe {
        let mut peb: PEB = mem::zeroed();
        ReadProcessMemory(
            handle.raw(),
            basic_info.PebBaseAddress.cast(),
            (&raw mut peb).cast(),
            mem::size_of::<PEB>(),
            None,
        )
        .map_err(|_| malformed("PEB"))?;
        if peb.ProcessParameters.is_null() {
            return Err(malformed("process parameters"));
        }

        let mut params: RTL_USER_PROCESS_PARAMETERS = mem::zeroed();
        ReadProcessMemory(
            handle.raw(),
            peb.ProcessParameters.cast(),
            (&raw mut params).cast(),
            mem::size_of::<RTL_USER_PROCESS_PARAMETERS>(),
            None,
        )
        .map_err(|_| malformed("process parameters"))?;

        let length_bytes = params.CommandLine.Length as usize;
        if length_bytes == 0 || params.CommandLine.Buffer.is_null() {
            return Ok(Vec::new());
        }

        let mut buffer = vec![0u16; length_bytes / 2];
        ReadProcessMemory(
            handle.raw(),
            params.CommandLine.Buffer.as_ptr().cast(),
            buffer.as_mut_ptr().cast(),
            length_bytes,
            None,
        )
        .map_err(|_| malformed("command line"))?;
        Ok(buffer)
    }
}

/// Splits a command-line string into argv with `CommandLineToArgvW`.
fn tokenize_command_line(command_line: &[u16]) -> Vec<String> {
    if command_line.is_empty() {
        return Vec::new();
    }

    let mut terminated = command_line.to_vec();
    terminated.push(0);

    let mut argc = 0i32;
    // SAFETY: terminated is NUL-terminated UTF-16 owned by this frame.
    let argv = unsafe { CommandLineToArgvW(PCWSTR(terminated.as_ptr()), &mut argc) };
    if argv.is_null() {
        return Vec::new();
    }

    let mut arguments = Vec::with_capacity(argc.max(0) as usize);
    // SAFETY: the array holds argc valid NUL-terminated wide strings; it is
    // freed exactly once below.
    unsafe {
        for i in 0..argc.max(0) as usize {
            let arg: PWSTR = *argv.add(i);
            if arg.is_null() {
                continue;
            }
            arguments.push(String::from_utf16_lossy(arg.as_wide()));
        }
        let _ = LocalFree(Some(HLOCAL(argv.cast())));
    }

    arguments
}

/// Best-effort executable path; degrades to `None` on failure.
fn query_image_path(handle: &HandleGuard) -> Option<String> {
    let mut buffer = [0u16; 1024];
    let mut length = buffer.len() as u32;
    // SAFETY: the guard holds a live handle with query rights and buffer/
    // length describe a matching output buffer.
    unsafe {
        QueryFullProcessImageNameW(
            handle.raw(),
            PROCESS_NAME_WIN32,
            PWSTR(buffer.as_mut_ptr()),
            &mut length,
        )
        .ok()?;
    }
    Some(String::from_utf16_lossy(&buffer[..length as usize]))
}
