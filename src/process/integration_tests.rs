//! Integration tests that act on real spawned processes.

use std::process::{Child, Command, Stdio};
use std::time::Duration;

use crate::process::error::ProcessError;
use crate::process::handle::ProcessHandle;

const EXIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Spawns a child that stays alive for several seconds unless killed.
fn spawn_sleeper() -> Child {
    let mut command = if cfg!(windows) {
        let mut c = Command::new("ping");
        c.args(["-n", "6", "localhost"]);
        c
    } else {
        let mut c = Command::new("sleep");
        c.arg("5");
        c
    };
    command
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn sleeper child")
}

#[test]
fn fresh_child_is_alive_and_forcible_kill_reaps_it() {
    let child = spawn_sleeper();
    let mut handle = ProcessHandle::from_child(child);

    assert!(handle.is_alive());
    handle.kill_forcibly().expect("forcible kill");

    // kill_forcibly waited on the owned child, so the PID is reaped and the
    // liveness check must go negative.
    assert!(handle.wait_for_exit(EXIT_TIMEOUT));
    assert!(!handle.is_alive());
}

#[test]
fn forcible_kill_of_exited_child_reports_not_found() {
    let child = if cfg!(windows) {
        Command::new("cmd").args(["/C", "exit"]).spawn().unwrap()
    } else {
        Command::new("true").spawn().unwrap()
    };
    let mut handle = ProcessHandle::from_child(child);

    // give the short-lived child time to exit
    std::thread::sleep(Duration::from_millis(200));

    match handle.kill_forcibly() {
        Ok(()) => {} // lost the race: the child was still running
        Err(ProcessError::NotFound(pid)) => assert_eq!(pid, handle.pid()),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn soft_terminate_stops_a_cooperating_child() {
    let mut child = spawn_sleeper();
    let handle = ProcessHandle::of(child.id()).unwrap();

    assert!(handle.is_alive());
    handle.kill().expect("send SIGTERM");

    // wait() reaps the child; a zombie still counts as alive until then
    let status = child.wait().unwrap();
    // terminated by signal, not a normal exit
    assert!(!status.success());
    assert!(handle.wait_for_exit(EXIT_TIMEOUT));
    assert!(!handle.is_alive());
}

#[test]
fn info_of_fresh_child_matches_spawn_arguments() {
    let child = spawn_sleeper();
    let mut handle = ProcessHandle::from_child(child);

    let info = handle.info().expect("resolve command line");
    let expected_tail: &[&str] = if cfg!(windows) {
        &["-n", "6", "localhost"]
    } else {
        &["5"]
    };
    assert!(
        info.arguments.len() >= expected_tail.len(),
        "arguments too short: {:?}",
        info.arguments
    );
    let tail = &info.arguments[info.arguments.len() - expected_tail.len()..];
    assert_eq!(tail, expected_tail);

    handle.kill_forcibly().unwrap();
}

#[test]
fn info_of_dead_pid_is_an_error_not_a_crash() {
    let handle = ProcessHandle::of(999_999_999).unwrap();
    match handle.info() {
        Err(ProcessError::NotFound(_)) | Err(ProcessError::PermissionDenied(_)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn terminating_a_dead_pid_is_an_error_not_a_crash() {
    #[cfg(unix)]
    {
        use crate::process::action::terminate::terminate_process;

        match terminate_process(999_999_999) {
            Err(ProcessError::NotFound(pid)) => assert_eq!(pid, 999_999_999),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[cfg(windows)]
    {
        use crate::process::action::kill::{DEFAULT_EXIT_CODE, terminate_process_windows};

        assert!(terminate_process_windows(999_999_999, DEFAULT_EXIT_CODE).is_err());
    }
}

#[cfg(target_os = "linux")]
#[test]
fn restart_respawns_the_same_command_line() {
    let child = spawn_sleeper();
    let mut handle = ProcessHandle::from_child(child);
    let old_pid = handle.pid();

    let mut replacement = handle.restart().expect("restart sleeper");
    assert_ne!(replacement.pid(), old_pid);
    assert!(replacement.is_alive());

    let info = replacement.info().unwrap();
    assert_eq!(info.arguments.last().map(String::as_str), Some("5"));

    replacement.kill_forcibly().unwrap();
}

#[cfg(unix)]
#[test]
fn kill_forcibly_by_pid_stops_an_unowned_process() {
    let mut child = spawn_sleeper();
    let mut handle = ProcessHandle::of(child.id()).unwrap();

    handle.kill_forcibly().expect("SIGKILL by pid");

    let status = child.wait().unwrap();
    assert!(!status.success());
    assert!(!handle.is_alive());
}
