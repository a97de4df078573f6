use std::thread;
use std::time::{Duration, Instant};

use crate::process::action::alive::is_process_alive;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Block until the process exits or the timeout elapses.
///
/// Polls [`is_process_alive`] on the caller's thread. Returns `true` when the
/// process is gone (including when it was already gone on entry), `false` on
/// timeout. This is the cooperative companion to
/// [`terminate_process`](crate::process::action::terminate::terminate_process):
/// send the signal, then wait a bounded time before escalating.
///
/// Subject to the same PID-reuse race as every other query here: a recycled
/// PID makes the original process look alive past its exit.
///
/// # Example
/// ```rust,no_run
/// use std::time::Duration;
/// use pidkit::process::action::wait::wait_for_exit;
///
/// let exited = wait_for_exit(1234, Duration::from_secs(5));
/// assert!(exited);
/// ```
pub fn wait_for_exit(pid: u32, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        if !is_process_alive(pid) {
            return true;
        }
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}
